//! Conversion Feature
//!
//! CST -> UAST conversion.
//!
//! ## Structure
//! - `domain/` - NodeKind, Role, role inference
//! - `infrastructure/` - KindMapper, UastConverter

pub mod domain;
pub mod infrastructure;

// Re-exports
pub use domain::{infer_roles, NodeKind, Role, UnknownNodeKind};
pub use infrastructure::{default_mapping_rules, KindMapper, UastConverter};
