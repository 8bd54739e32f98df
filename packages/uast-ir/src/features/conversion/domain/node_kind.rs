//! Normalized node kinds

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Language-neutral node kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NodeKind {
    File,
    Function,
    Class,
    Method,
    Variable,
    Literal,
    Expression,
    Statement,
    Identifier,
    Comment,
    Argument,
    Parameter,
    Return,
    Loop,
    Condition,
    Assignment,
    Operator,
    Call,
    Import,
    Package,
    Unknown,
}

impl NodeKind {
    pub const ALL: [NodeKind; 21] = [
        NodeKind::File,
        NodeKind::Function,
        NodeKind::Class,
        NodeKind::Method,
        NodeKind::Variable,
        NodeKind::Literal,
        NodeKind::Expression,
        NodeKind::Statement,
        NodeKind::Identifier,
        NodeKind::Comment,
        NodeKind::Argument,
        NodeKind::Parameter,
        NodeKind::Return,
        NodeKind::Loop,
        NodeKind::Condition,
        NodeKind::Assignment,
        NodeKind::Operator,
        NodeKind::Call,
        NodeKind::Import,
        NodeKind::Package,
        NodeKind::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::File => "File",
            NodeKind::Function => "Function",
            NodeKind::Class => "Class",
            NodeKind::Method => "Method",
            NodeKind::Variable => "Variable",
            NodeKind::Literal => "Literal",
            NodeKind::Expression => "Expression",
            NodeKind::Statement => "Statement",
            NodeKind::Identifier => "Identifier",
            NodeKind::Comment => "Comment",
            NodeKind::Argument => "Argument",
            NodeKind::Parameter => "Parameter",
            NodeKind::Return => "Return",
            NodeKind::Loop => "Loop",
            NodeKind::Condition => "Condition",
            NodeKind::Assignment => "Assignment",
            NodeKind::Operator => "Operator",
            NodeKind::Call => "Call",
            NodeKind::Import => "Import",
            NodeKind::Package => "Package",
            NodeKind::Unknown => "Unknown",
        }
    }

    pub fn is_definition(&self) -> bool {
        matches!(self, NodeKind::Function | NodeKind::Method | NodeKind::Class)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no `NodeKind`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownNodeKind(pub String);

impl fmt::Display for UnknownNodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown node kind '{}'", self.0)
    }
}

impl std::error::Error for UnknownNodeKind {}

impl FromStr for NodeKind {
    type Err = UnknownNodeKind;

    /// Case-insensitive match on the kind name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodeKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownNodeKind(s.to_string()))
    }
}
