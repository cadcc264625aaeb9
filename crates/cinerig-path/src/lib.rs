//! Cinerig Path - the spline path data model
//!
//! A spline path is a collection ("tree") holding one DOLLY node sequence
//! (camera position keyframes) and one LOOKAT node sequence (aim-target
//! keyframes). The two sequences carry no explicit cross-references: a
//! DOLLY node and its aim target are associated purely by sharing the same
//! rank when both sequences are sorted by name. Everything in this crate
//! exists to author nodes so that invariant holds, and to consume it.

pub mod order;
mod preview;
mod registry;
mod role;
mod template;
mod tree;
pub mod validate;

pub use preview::{resolve_preview, CameraPose};
pub use registry::{SplineEntry, SplineRegistry, DELETED_LABEL};
pub use role::NodeRole;
pub use template::{instantiate, TemplateRegistry, Templates};
pub use tree::{create_tree, sequence_of, SplineTree, TREE_NAME};
