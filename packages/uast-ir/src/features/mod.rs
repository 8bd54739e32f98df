//! Feature modules - Each feature follows Hexagonal Architecture
//!
//! Larger features split into:
//! - domain/     - Pure data and rules (no external dependencies)
//! - infrastructure/ - Implementations (tree-sitter, JSON, rayon)
//!
//! Small features are a flat set of files.

// CST input: JSON decoding and tree-sitter parsing
pub mod parsing;

// CST -> UAST conversion with bounded fan-out
pub mod conversion;

// UAST nodes, container and indices
pub mod uast;

// Root-relative paths and common ancestors
pub mod ancestry;

// JSON and text renderings
pub mod formatting;

// Prompt-oriented rendering
pub mod llm;
