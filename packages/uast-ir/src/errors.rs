//! Error types for uast-ir
//!
//! Provides unified error handling across the crate.

use thiserror::Error;

use crate::config::ConfigError;

/// Main error type for uast-ir operations
#[derive(Debug, Error)]
pub enum UastError {
    /// Missing or unusable argument (e.g. no CST root)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Tree-sitter could not produce a tree
    #[error("Parse error: {0}")]
    Parse(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding/decoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl UastError {
    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        UastError::InvalidInput(msg.into())
    }

    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        UastError::Parse(msg.into())
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, UastError::InvalidInput(_))
    }
}

/// Result type alias for uast operations
pub type Result<T> = std::result::Result<T, UastError>;
