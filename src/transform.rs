use tracing::instrument;

use crate::node::{NodeKey, TreeNode};

/// Rebuilds the tree, replacing every node's id and payload.
///
/// `map_attributes` returns the new `(id, data)` for a node and is called in
/// pre-order. The result shares no storage with the input.
pub fn map<T, U, Id, Id2, A>(node: &TreeNode<T, Id>, mut map_attributes: A) -> TreeNode<U, Id2>
where
    A: FnMut(&TreeNode<T, Id>) -> (Id2, U),
{
    map_node(node, &mut map_attributes, &mut |_: &TreeNode<T, Id>| None)
}

/// Like [`map`], but `select_children` decides which children to descend into.
///
/// Returning `None` keeps the node's own children, `Some(children)` replaces
/// them for this node only. The replacement children are transformed with the
/// same two functions, which lets a single pass insert, drop or reorder
/// children anywhere in the tree.
pub fn map_with_children<T, U, Id, Id2, A, C>(
    node: &TreeNode<T, Id>,
    mut map_attributes: A,
    mut select_children: C,
) -> TreeNode<U, Id2>
where
    A: FnMut(&TreeNode<T, Id>) -> (Id2, U),
    C: FnMut(&TreeNode<T, Id>) -> Option<Vec<TreeNode<T, Id>>>,
{
    map_node(node, &mut map_attributes, &mut select_children)
}

fn map_node<T, U, Id, Id2, A, C>(
    node: &TreeNode<T, Id>,
    map_attributes: &mut A,
    select_children: &mut C,
) -> TreeNode<U, Id2>
where
    A: FnMut(&TreeNode<T, Id>) -> (Id2, U),
    C: FnMut(&TreeNode<T, Id>) -> Option<Vec<TreeNode<T, Id>>>,
{
    let (id, data) = map_attributes(node);
    let children = match select_children(node) {
        Some(selected) => selected
            .iter()
            .map(|child| map_node(child, map_attributes, select_children))
            .collect(),
        None => node
            .children
            .iter()
            .map(|child| map_node(child, map_attributes, select_children))
            .collect(),
    };
    TreeNode::from_parts(id, data, children)
}

/// Deep copy through the identity transform.
#[instrument(level = "trace", skip_all, fields(root = %tree.id))]
pub fn copy<T: Clone, Id: NodeKey>(tree: &TreeNode<T, Id>) -> TreeNode<T, Id> {
    map(tree, |node| (node.id.clone(), node.data.clone()))
}
