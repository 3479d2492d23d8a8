use std::fmt;

use itertools::Itertools;

use crate::walk::PreOrderIter;

/// Requirements on node identifiers.
///
/// Ids are compared for equality and rendered into error messages and log
/// fields. Blanket-implemented, so `String`, integers and most newtype ids
/// qualify without extra code.
pub trait NodeKey: Clone + PartialEq + fmt::Display + fmt::Debug {}

impl<K> NodeKey for K where K: Clone + PartialEq + fmt::Display + fmt::Debug {}

/// Tree node owning its children.
///
/// A tree is just its root node. There are no parent links: positional
/// information is computed during traversal (see [`NodeLocation`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TreeNode<T = (), Id = String> {
    /// Identifier, expected to be unique when the tree is edited
    pub id: Id,
    /// Payload carried alongside the id
    pub data: T,
    /// Ordered child nodes
    pub children: Vec<TreeNode<T, Id>>,
}

impl TreeNode {
    /// Leaf node with a string id and no payload.
    pub fn new(id: impl Into<String>) -> Self {
        Self::from_parts(id.into(), (), Vec::new())
    }
}

impl<T> TreeNode<T, String> {
    /// Leaf node with a string id and the given payload.
    pub fn with_data(id: impl Into<String>, data: T) -> Self {
        Self::from_parts(id.into(), data, Vec::new())
    }
}

impl<T, Id> TreeNode<T, Id> {
    pub fn from_parts(id: Id, data: T, children: Vec<TreeNode<T, Id>>) -> Self {
        Self { id, data, children }
    }

    pub fn with_children(mut self, children: Vec<TreeNode<T, Id>>) -> Self {
        self.children = children;
        self
    }

    pub fn with_child(mut self, child: TreeNode<T, Id>) -> Self {
        self.children.push(child);
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of levels below and including this node.
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(|child| child.depth())
            .max()
            .unwrap_or(0)
    }
}

impl<T, Id: NodeKey> TreeNode<T, Id> {
    /// Pre-order iterator over this node and all its descendants.
    pub fn iter(&self) -> PreOrderIter<'_, T, Id> {
        PreOrderIter::new(self)
    }

    /// Number of nodes in the subtree, root included.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Always false: a tree has at least its root.
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Position of a node relative to the root it was reached from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeLocation<Id = String> {
    /// Ancestor ids, root first, immediate parent last. Empty for the root.
    pub parent_path: Vec<Id>,
    /// Position among the parent's children, 0 for the root
    pub index: usize,
}

impl<Id> NodeLocation<Id> {
    pub fn root() -> Self {
        Self {
            parent_path: Vec::new(),
            index: 0,
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent_path.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.parent_path.len()
    }

    pub fn parent_id(&self) -> Option<&Id> {
        self.parent_path.last()
    }
}

impl<Id> Default for NodeLocation<Id> {
    fn default() -> Self {
        Self::root()
    }
}

impl<Id: fmt::Display> fmt::Display for NodeLocation<Id> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.parent_path.iter().join("/"), self.index)
    }
}

/// A node borrowed from a tree together with where it was found.
#[derive(Debug, Clone, PartialEq)]
pub struct Located<'a, T = (), Id = String> {
    pub node: &'a TreeNode<T, Id>,
    pub location: NodeLocation<Id>,
}

impl<'a, T, Id> Located<'a, T, Id> {
    pub fn id(&self) -> &'a Id {
        &self.node.id
    }
}

/// Where `add_node` and `move_node` attach a subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination<Id = String> {
    pub parent_id: Id,
    /// Insert position; `None` or anything past the end appends
    pub index: Option<usize>,
}

impl<Id> Destination<Id> {
    /// Append as last child of `parent_id`.
    pub fn new(parent_id: impl Into<Id>) -> Self {
        Self {
            parent_id: parent_id.into(),
            index: None,
        }
    }

    pub fn at(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    /// Insert position within a parent that currently has `len` children.
    pub(crate) fn clamped_index(&self, len: usize) -> usize {
        self.index.map_or(len, |index| index.min(len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_and_len() {
        let tree = TreeNode::new("1")
            .with_child(TreeNode::new("1-1").with_child(TreeNode::new("1-1-1")))
            .with_child(TreeNode::new("1-2"));
        assert_eq!(tree.depth(), 3);
        assert_eq!(tree.len(), 4);
        assert!(!tree.is_leaf());
        assert!(tree.children[1].is_leaf());
    }

    #[test]
    fn test_location_display() {
        let location = NodeLocation {
            parent_path: vec!["1".to_string(), "1-3".to_string()],
            index: 2,
        };
        assert_eq!(location.to_string(), "1/1-3[2]");
        assert_eq!(location.parent_id().map(String::as_str), Some("1-3"));
        assert_eq!(NodeLocation::<String>::root().to_string(), "[0]");
    }

    #[test]
    fn test_destination_clamps_index() {
        let dest: Destination = Destination::new("1");
        assert_eq!(dest.clamped_index(3), 3);
        assert_eq!(dest.clone().at(1).clamped_index(3), 1);
        assert_eq!(dest.at(4).clamped_index(3), 3);
    }
}
