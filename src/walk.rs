use std::ops::ControlFlow;

use crate::node::{NodeKey, NodeLocation, TreeNode};

/// Return type of a [`walk`] visitor.
///
/// `()` and `true` keep walking, `false` and `ControlFlow::Break` stop.
pub trait VisitResult {
    fn is_stop(&self) -> bool;
}

impl VisitResult for () {
    fn is_stop(&self) -> bool {
        false
    }
}

impl VisitResult for bool {
    fn is_stop(&self) -> bool {
        !*self
    }
}

impl VisitResult for ControlFlow<()> {
    fn is_stop(&self) -> bool {
        self.is_break()
    }
}

/// Depth-first, pre-order traversal.
///
/// `visit` sees every node before its children, together with its location.
/// Once `visit` signals stop, no further node is visited. Node borrows handed
/// to `visit` live as long as `root`, so visitors may collect them.
pub fn walk<'a, T, Id, F, R>(root: &'a TreeNode<T, Id>, mut visit: F)
where
    Id: NodeKey,
    F: FnMut(&'a TreeNode<T, Id>, &NodeLocation<Id>) -> R,
    R: VisitResult,
{
    let mut parent_path = Vec::new();
    let _ = walk_node(root, 0, &mut parent_path, &mut visit);
}

fn walk_node<'a, T, Id, F, R>(
    node: &'a TreeNode<T, Id>,
    index: usize,
    parent_path: &mut Vec<Id>,
    visit: &mut F,
) -> ControlFlow<()>
where
    Id: NodeKey,
    F: FnMut(&'a TreeNode<T, Id>, &NodeLocation<Id>) -> R,
    R: VisitResult,
{
    let location = NodeLocation {
        parent_path: parent_path.clone(),
        index,
    };
    if visit(node, &location).is_stop() {
        return ControlFlow::Break(());
    }

    parent_path.push(node.id.clone());
    let flow = node
        .children
        .iter()
        .enumerate()
        .try_for_each(|(i, child)| walk_node(child, i, parent_path, visit));
    parent_path.pop();
    flow
}

/// Pre-order iterator yielding each node with its location.
///
/// Visits nodes in the same order as [`walk`]; stop early by dropping it.
pub struct PreOrderIter<'a, T, Id> {
    stack: Vec<(&'a TreeNode<T, Id>, NodeLocation<Id>)>,
}

impl<'a, T, Id: NodeKey> PreOrderIter<'a, T, Id> {
    pub(crate) fn new(root: &'a TreeNode<T, Id>) -> Self {
        Self {
            stack: vec![(root, NodeLocation::root())],
        }
    }
}

impl<'a, T, Id: NodeKey> Iterator for PreOrderIter<'a, T, Id> {
    type Item = (&'a TreeNode<T, Id>, NodeLocation<Id>);

    fn next(&mut self) -> Option<Self::Item> {
        let (node, location) = self.stack.pop()?;
        let mut child_path = location.parent_path.clone();
        child_path.push(node.id.clone());
        // Push children in reverse order for left-to-right traversal
        for (index, child) in node.children.iter().enumerate().rev() {
            self.stack.push((
                child,
                NodeLocation {
                    parent_path: child_path.clone(),
                    index,
                },
            ));
        }
        Some((node, location))
    }
}
