use crate::node::{Located, NodeKey, TreeNode};
use crate::walk::walk;

/// Every node of the tree with its location, in pre-order.
pub fn flatten<T, Id: NodeKey>(tree: &TreeNode<T, Id>) -> Vec<Located<'_, T, Id>> {
    let mut flattened = Vec::new();
    walk(tree, |node, location| {
        flattened.push(Located {
            node,
            location: location.clone(),
        });
    });
    flattened
}
