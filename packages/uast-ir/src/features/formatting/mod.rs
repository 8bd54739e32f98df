//! Formatting Feature
//!
//! Renders a UAST as JSON or as plain text for language-model prompts.
//!
//! ## Structure
//! - `format` - LlmFormat trait, dispatch, shared line rendering
//! - `json` - JsonFormat
//! - `text` - SimpleTextFormat (indented outline)
//! - `tree` - TreeTextFormat (box-drawing tree)

mod format;
mod json;
mod text;
mod tree;

pub use format::{clip_token, to_llm_format, LlmFormat};
pub(crate) use format::{write_header, write_node_line};
pub use json::JsonFormat;
pub use text::SimpleTextFormat;
pub use tree::TreeTextFormat;
