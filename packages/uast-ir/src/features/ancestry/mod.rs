//! Ancestry Feature
//!
//! Root-relative paths and common ancestors over a finished UAST.
//! Nodes are compared by address, never by value or ID.

mod path;

pub use path::{common_ancestor, path_to};
