use tracing::instrument;

use crate::node::{Located, NodeKey, TreeNode};
use crate::walk::walk;

/// First node in pre-order for which `predicate` holds.
///
/// The walk stops at the match, so `predicate` is never called on later nodes.
pub fn find_node<'a, T, Id, P>(tree: &'a TreeNode<T, Id>, mut predicate: P) -> Option<Located<'a, T, Id>>
where
    Id: NodeKey,
    P: FnMut(&TreeNode<T, Id>) -> bool,
{
    let mut found = None;
    walk(tree, |node, location| {
        if predicate(node) {
            found = Some(Located {
                node,
                location: location.clone(),
            });
            return false;
        }
        true
    });
    found
}

#[instrument(level = "trace", skip_all, fields(id = %id))]
pub fn find_node_by_id<'a, T, Id: NodeKey>(tree: &'a TreeNode<T, Id>, id: &Id) -> Option<Located<'a, T, Id>> {
    find_node(tree, |node| node.id == *id)
}
