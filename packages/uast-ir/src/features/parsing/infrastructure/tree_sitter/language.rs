//! Grammar selection

use std::fmt;
use std::str::FromStr;

use crate::errors::UastError;

/// Languages with a bundled tree-sitter grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LanguageId {
    Python,
    Rust,
    Go,
}

impl LanguageId {
    /// Get language name as string
    pub fn name(&self) -> &'static str {
        match self {
            LanguageId::Python => "python",
            LanguageId::Rust => "rust",
            LanguageId::Go => "go",
        }
    }

    /// Get language from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "py" | "pyi" => Some(LanguageId::Python),
            "rs" => Some(LanguageId::Rust),
            "go" => Some(LanguageId::Go),
            _ => None,
        }
    }

    pub(crate) fn ts_language(&self) -> tree_sitter::Language {
        match self {
            LanguageId::Python => tree_sitter_python::language(),
            LanguageId::Rust => tree_sitter_rust::language(),
            LanguageId::Go => tree_sitter_go::language(),
        }
    }
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LanguageId {
    type Err = UastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "python" | "py" => Ok(LanguageId::Python),
            "rust" | "rs" => Ok(LanguageId::Rust),
            "go" | "golang" => Ok(LanguageId::Go),
            other => Err(UastError::invalid_input(format!(
                "unsupported source language '{other}' (expected python, rust or go)"
            ))),
        }
    }
}
