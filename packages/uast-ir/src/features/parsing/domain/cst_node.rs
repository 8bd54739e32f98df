//! Concrete syntax tree node
//!
//! Mirrors the JSON a tree-sitter export produces:
//!
//! ```json
//! {
//!   "type": "function_definition",
//!   "startByte": 0, "endByte": 42,
//!   "startPoint": [0, 0], "endPoint": [2, 10],
//!   "text": "hello",
//!   "children": [ ... , null, ... ]
//! }
//! ```
//!
//! Positions are 0-based. Nothing here is validated: negative or inverted
//! ranges are carried as-is.

use serde::{Deserialize, Serialize};

/// 0-based (row, column) pair, encoded as `[row, column]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "[i64; 2]", into = "[i64; 2]")]
pub struct CstPoint {
    pub row: i64,
    pub column: i64,
}

impl CstPoint {
    pub fn new(row: i64, column: i64) -> Self {
        Self { row, column }
    }
}

impl From<[i64; 2]> for CstPoint {
    fn from([row, column]: [i64; 2]) -> Self {
        Self { row, column }
    }
}

impl From<CstPoint> for [i64; 2] {
    fn from(point: CstPoint) -> Self {
        [point.row, point.column]
    }
}

/// A node of the concrete syntax tree
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CstNode {
    /// Grammar node type (e.g. `if_statement`)
    #[serde(rename = "type")]
    pub kind: String,

    pub start_byte: i64,
    pub end_byte: i64,
    pub start_point: CstPoint,
    pub end_point: CstPoint,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Ordered children; `None` entries stand for `null` in the source JSON
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Option<CstNode>>,
}

impl CstNode {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            ..Default::default()
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_points(mut self, start: CstPoint, end: CstPoint) -> Self {
        self.start_point = start;
        self.end_point = end;
        self
    }

    pub fn with_child(mut self, child: CstNode) -> Self {
        self.children.push(Some(child));
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = CstNode>) -> Self {
        self.children.extend(children.into_iter().map(Some));
        self
    }

    /// Append a `null` child slot
    pub fn with_null_child(mut self) -> Self {
        self.children.push(None);
        self
    }

    /// Non-null children, in order
    pub fn present_children(&self) -> impl Iterator<Item = &CstNode> {
        self.children.iter().flatten()
    }

    /// Number of non-null nodes in this subtree, including self
    pub fn node_count(&self) -> usize {
        1 + self
            .present_children()
            .map(CstNode::node_count)
            .sum::<usize>()
    }

    /// Text content, empty when absent
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }
}
