//! Tree-sitter parser implementation
//!
//! This is where the tree-sitter dependency lives. The output is the same
//! `CstNode` model the JSON decoder produces, so both feed the converter.

use tracing::warn;
use tree_sitter::{Node as TSNode, Parser as TSParser};

use super::language::LanguageId;
use crate::errors::{Result, UastError};
use crate::features::parsing::domain::{CstNode, CstPoint};

/// Tree-sitter based parser
pub struct TreeSitterParser {
    language: LanguageId,
}

impl TreeSitterParser {
    pub fn new(language: LanguageId) -> Self {
        Self { language }
    }

    pub fn python() -> Self {
        Self::new(LanguageId::Python)
    }

    pub fn rust() -> Self {
        Self::new(LanguageId::Rust)
    }

    pub fn go() -> Self {
        Self::new(LanguageId::Go)
    }

    pub fn language(&self) -> LanguageId {
        self.language
    }

    /// Parse source text into a CST
    pub fn parse(&self, source: &str) -> Result<CstNode> {
        let mut parser = TSParser::new();
        parser
            .set_language(&self.language.ts_language())
            .map_err(|e| UastError::parse(format!("Failed to set language: {}", e)))?;

        let tree = parser
            .parse(source, None)
            .ok_or_else(|| UastError::parse("Failed to parse source code"))?;

        let root = tree.root_node();
        if root.has_error() {
            warn!(
                language = self.language.name(),
                "source contains syntax errors; ERROR nodes kept in CST"
            );
        }

        Ok(cst_from_node(&root, source))
    }
}

/// Parse `source` with the grammar for `language`
pub fn parse_source(language: LanguageId, source: &str) -> Result<CstNode> {
    TreeSitterParser::new(language).parse(source)
}

impl CstNode {
    /// Copy a tree-sitter node and its subtree
    pub fn from_tree_sitter(node: &TSNode<'_>, source: &str) -> CstNode {
        cst_from_node(node, source)
    }
}

/// Convert a tree-sitter node to CstNode
///
/// Every child is kept (named and anonymous); only leaves carry text.
fn cst_from_node(node: &TSNode<'_>, source: &str) -> CstNode {
    let start = node.start_position();
    let end = node.end_position();

    let text = if node.child_count() == 0 {
        source.get(node.byte_range()).map(str::to_string)
    } else {
        None
    };

    let children = (0..node.child_count())
        .filter_map(|i| node.child(i))
        .map(|c| Some(cst_from_node(&c, source)))
        .collect();

    CstNode {
        kind: node.kind().to_string(),
        start_byte: node.start_byte() as i64,
        end_byte: node.end_byte() as i64,
        start_point: CstPoint::new(start.row as i64, start.column as i64),
        end_point: CstPoint::new(end.row as i64, end.column as i64),
        text,
        children,
    }
}
