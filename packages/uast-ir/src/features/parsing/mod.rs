//! Parsing Feature
//!
//! Produces the concrete syntax tree the converter consumes.
//!
//! ## Structure
//! - `domain/` - CstNode, CstPoint
//! - `infrastructure/` - JSON decoding, tree-sitter parser

pub mod domain;
pub mod infrastructure;

// Re-exports
pub use domain::{CstNode, CstPoint};
pub use infrastructure::{decode_cst, load_cst, parse_source, LanguageId, TreeSitterParser};
