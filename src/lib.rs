//! Pure, copy-on-write operations on rooted trees of id-bearing nodes.
//!
//! Every operation borrows its input tree and returns a newly built one, so
//! the input is never mutated. Traversal is depth-first pre-order; structural
//! edits (`remove_node`, `add_node`, `move_node`) are built on top of it.
//!
//! ```
//! use immutree::{move_node, Destination, TreeNode};
//!
//! let tree = TreeNode::new("1").with_children(vec![
//!     TreeNode::new("1-1"),
//!     TreeNode::new("1-2"),
//! ]);
//! let moved = move_node(&tree, &"1-2".to_string(), &Destination::new("1-1")).unwrap();
//! assert_eq!(moved.children.len(), 1);
//! assert_eq!(moved.children[0].children[0].id, "1-2");
//! assert_eq!(tree.children.len(), 2);
//! ```

pub mod edit;
pub mod errors;
pub mod find;
pub mod flatten;
pub mod node;
pub mod render;
pub mod transform;
pub mod util;
pub mod walk;

pub use edit::{add_node, move_node, remove_node};
pub use errors::{TreeError, TreeResult};
pub use find::{find_node, find_node_by_id};
pub use flatten::flatten;
pub use node::{Destination, Located, NodeKey, NodeLocation, TreeNode};
pub use transform::{copy, map, map_with_children};
pub use walk::{walk, PreOrderIter, VisitResult};
