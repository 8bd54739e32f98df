//! LLM Feature
//!
//! Prompt-oriented rendering of a UAST: prioritized sections first, then
//! whatever else survives the exclusion list.

mod processor;

pub use processor::{LlmProcessor, DEFAULT_MAX_TOKENS_PER_NODE};
