//! Parsing infrastructure - external dependencies

mod decode;
pub mod tree_sitter;

pub use self::tree_sitter::{parse_source, LanguageId, TreeSitterParser};
pub use decode::{decode_cst, load_cst};
