//! UAST Feature
//!
//! The converted tree and its lookup indices.
//!
//! ## Structure
//! - `node` - UastNode
//! - `index` - kind/token indices (locator based)
//! - `tree` - Uast container

pub mod index;
mod node;
mod tree;

pub use index::{NodeIndex, NodeLocator};
pub use node::{Descendants, UastNode, TS_TYPE_PROPERTY};
pub use tree::Uast;
