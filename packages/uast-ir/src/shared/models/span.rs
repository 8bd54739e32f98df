//! Source location types
//!
//! UAST positions are 1-based on both line and column.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Single 1-based position in source code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub line: i64,
    pub column: i64,
}

impl Position {
    pub fn new(line: i64, column: i64) -> Self {
        Self { line, column }
    }

    /// Build from a 0-based (row, column) pair
    pub fn from_zero_based(row: i64, column: i64) -> Self {
        Self::new(row.saturating_add(1), column.saturating_add(1))
    }
}

/// Start and end positions of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Location {
    pub start: Position,
    pub end: Position,
}

impl Location {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    pub fn contains_line(&self, line: i64) -> bool {
        self.start.line <= line && line <= self.end.line
    }

    pub fn line_count(&self) -> i64 {
        if self.end.line >= self.start.line {
            self.end.line - self.start.line + 1
        } else {
            0
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}-{}:{}",
            self.start.line, self.start.column, self.end.line, self.end.column
        )
    }
}
