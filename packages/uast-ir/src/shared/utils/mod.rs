//! Utility modules shared across features
//!
//! - `id_generator`: Unique node ID generation
//! - `json`: Deep-tree JSON decoding

pub mod id_generator;
pub mod json;
