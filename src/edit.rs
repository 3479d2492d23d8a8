use tracing::{debug, instrument};

use crate::errors::{TreeError, TreeResult};
use crate::find::find_node_by_id;
use crate::node::{Destination, NodeKey, TreeNode};
use crate::transform::{copy, map_with_children};

/// Detaches the first non-root node (pre-order) with the given id.
///
/// Returns the rebuilt tree and the detached subtree. The root is never
/// removed: asking for its id, or for an unknown id, yields a copy of the
/// tree and `None`.
#[instrument(level = "debug", skip_all, fields(id = %id))]
pub fn remove_node<T: Clone, Id: NodeKey>(
    tree: &TreeNode<T, Id>,
    id: &Id,
) -> (TreeNode<T, Id>, Option<TreeNode<T, Id>>) {
    let mut removed = None;
    let pruned = prune(tree, id, &mut removed);
    if removed.is_none() {
        debug!("no removable node found");
    }
    (pruned, removed)
}

fn prune<T: Clone, Id: NodeKey>(
    node: &TreeNode<T, Id>,
    id: &Id,
    removed: &mut Option<TreeNode<T, Id>>,
) -> TreeNode<T, Id> {
    let mut children = Vec::with_capacity(node.children.len());
    for child in &node.children {
        if removed.is_some() {
            children.push(child.clone());
        } else if child.id == *id {
            *removed = Some(child.clone());
        } else {
            children.push(prune(child, id, removed));
        }
    }
    TreeNode::from_parts(node.id.clone(), node.data.clone(), children)
}

/// Inserts `node` under `destination.parent_id`.
///
/// Fails if `node` would be its own parent or its id already exists in the
/// tree. An unknown parent leaves the tree unchanged.
#[instrument(level = "debug", skip_all, fields(id = %node.id, parent = %destination.parent_id))]
pub fn add_node<T: Clone, Id: NodeKey>(
    tree: &TreeNode<T, Id>,
    node: TreeNode<T, Id>,
    destination: &Destination<Id>,
) -> TreeResult<TreeNode<T, Id>> {
    if node.id == destination.parent_id {
        return Err(TreeError::SelfParent(node.id.to_string()));
    }
    if find_node_by_id(tree, &node.id).is_some() {
        return Err(TreeError::DuplicateId(node.id.to_string()));
    }

    // only the first matching parent receives the node
    let mut pending = Some(node);
    let added = map_with_children(
        tree,
        |current| (current.id.clone(), current.data.clone()),
        |current| {
            if current.id != destination.parent_id {
                return None;
            }
            let node = pending.take()?;
            let mut children = current.children.clone();
            children.insert(destination.clamped_index(children.len()), node);
            Some(children)
        },
    );

    if pending.is_some() {
        debug!("destination parent not found, tree unchanged");
    }
    Ok(added)
}

/// Moves the subtree rooted at `id` under `destination.parent_id`.
///
/// Moving the root or an unknown id is a no-op. The destination must exist
/// and must not lie inside the moved subtree.
#[instrument(level = "debug", skip_all, fields(id = %id, parent = %destination.parent_id))]
pub fn move_node<T: Clone, Id: NodeKey>(
    tree: &TreeNode<T, Id>,
    id: &Id,
    destination: &Destination<Id>,
) -> TreeResult<TreeNode<T, Id>> {
    let (pruned, detached) = remove_node(tree, id);
    let Some(detached) = detached else {
        debug!("nothing to move");
        return Ok(copy(tree));
    };

    if find_node_by_id(tree, &destination.parent_id).is_none() {
        return Err(TreeError::DestinationNotFound(
            destination.parent_id.to_string(),
        ));
    }
    if find_node_by_id(&detached, &destination.parent_id).is_some() {
        return Err(TreeError::CyclicMove {
            id: id.to_string(),
            destination: destination.parent_id.to_string(),
        });
    }

    add_node(&pruned, detached, destination)
}
