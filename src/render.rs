use std::fmt;

use termtree::Tree;

use crate::node::TreeNode;

impl<T, Id: fmt::Display> TreeNode<T, Id> {
    /// Converts the tree into a printable `termtree` of ids.
    pub fn to_termtree(&self) -> Tree<String> {
        let leaves: Vec<_> = self.children.iter().map(|c| c.to_termtree()).collect();
        Tree::new(self.id.to_string()).with_leaves(leaves)
    }
}

impl<T, Id: fmt::Display> fmt::Display for TreeNode<T, Id> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_termtree())
    }
}
