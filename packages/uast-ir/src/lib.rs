/*
 * UAST IR - Universal Abstract Syntax Tree engine
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Common models (Position, Location) and the ID generator
 * - features/    : Vertical slices (parsing → conversion → uast → ancestry → formatting → llm)
 * - config/      : Converter configuration (YAML, range checks)
 * - errors       : Crate error type
 *
 * Concurrency:
 * - Wide CST nodes fan out onto a bounded Rayon pool
 * - Sibling order is preserved, IDs come from one atomic counter
 * - Indices and metadata sit behind independent RwLocks
 */

// Crate-level lint configuration
#![allow(clippy::module_inception)] // features::uast::tree etc.
#![allow(clippy::new_without_default)] // Default impl not always needed

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models and utilities
pub mod shared;

/// Feature modules
pub mod features;

/// Configuration system
pub mod config;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::{ConfigError, ConverterConfig};
pub use errors::{Result, UastError};
pub use features::ancestry::{common_ancestor, path_to};
pub use features::conversion::{KindMapper, NodeKind, Role, UastConverter};
pub use features::formatting::{
    to_llm_format, JsonFormat, LlmFormat, SimpleTextFormat, TreeTextFormat,
};
pub use features::llm::LlmProcessor;
pub use features::parsing::{decode_cst, load_cst, parse_source, CstNode, CstPoint, LanguageId};
pub use features::uast::{Uast, UastNode};
pub use shared::models::{Location, Position};
