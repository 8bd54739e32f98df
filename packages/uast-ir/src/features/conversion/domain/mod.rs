//! Conversion domain models

mod node_kind;
mod role;

pub use node_kind::{NodeKind, UnknownNodeKind};
pub use role::{infer_roles, Role};
