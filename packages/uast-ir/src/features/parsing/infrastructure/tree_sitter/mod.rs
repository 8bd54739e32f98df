//! Tree-sitter backed CST construction

mod language;
mod parser;

pub use language::LanguageId;
pub use parser::{parse_source, TreeSitterParser};
