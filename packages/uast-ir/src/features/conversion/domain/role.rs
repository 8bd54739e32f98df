//! Structural roles and role inference

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::node_kind::NodeKind;

/// Structural tag carried alongside a node's kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    Declaration,
    Definition,
    Call,
    Reference,
    Import,
    Export,
    Statement,
    Expression,
    Argument,
    Receiver,
    Condition,
    Body,
}

impl Role {
    pub const ALL: [Role; 12] = [
        Role::Declaration,
        Role::Definition,
        Role::Call,
        Role::Reference,
        Role::Import,
        Role::Export,
        Role::Statement,
        Role::Expression,
        Role::Argument,
        Role::Receiver,
        Role::Condition,
        Role::Body,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Declaration => "Declaration",
            Role::Definition => "Definition",
            Role::Call => "Call",
            Role::Reference => "Reference",
            Role::Import => "Import",
            Role::Export => "Export",
            Role::Statement => "Statement",
            Role::Expression => "Expression",
            Role::Argument => "Argument",
            Role::Receiver => "Receiver",
            Role::Condition => "Condition",
            Role::Body => "Body",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .iter()
            .copied()
            .find(|role| role.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown role '{}'", s))
    }
}

/// Infer roles from the normalized kind and the raw grammar type
///
/// Kind-derived roles come first, then the raw-type rule.
pub fn infer_roles(kind: NodeKind, raw_kind: &str) -> Vec<Role> {
    let mut roles = Vec::with_capacity(2);

    match kind {
        kind if kind.is_definition() => roles.extend([Role::Declaration, Role::Definition]),
        NodeKind::Call => roles.push(Role::Call),
        NodeKind::Identifier => roles.push(Role::Reference),
        NodeKind::Import => roles.push(Role::Import),
        NodeKind::Statement => roles.push(Role::Statement),
        NodeKind::Expression => roles.push(Role::Expression),
        NodeKind::Argument | NodeKind::Parameter => roles.push(Role::Argument),
        NodeKind::Condition => roles.push(Role::Condition),
        _ => {}
    }

    match raw_kind {
        "method_receiver" => roles.push(Role::Receiver),
        "function_body" | "method_body" => roles.push(Role::Body),
        _ => {}
    }

    roles
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definition_roles() {
        for kind in [NodeKind::Function, NodeKind::Method, NodeKind::Class] {
            assert_eq!(
                infer_roles(kind, "whatever"),
                vec![Role::Declaration, Role::Definition]
            );
        }
    }

    #[test]
    fn test_single_roles() {
        assert_eq!(infer_roles(NodeKind::Call, "call_expression"), vec![Role::Call]);
        assert_eq!(infer_roles(NodeKind::Identifier, "identifier"), vec![Role::Reference]);
        assert_eq!(infer_roles(NodeKind::Import, "import_statement"), vec![Role::Import]);
        assert_eq!(infer_roles(NodeKind::Statement, "statement"), vec![Role::Statement]);
        assert_eq!(infer_roles(NodeKind::Expression, "expression"), vec![Role::Expression]);
        assert_eq!(infer_roles(NodeKind::Argument, "argument"), vec![Role::Argument]);
        assert_eq!(infer_roles(NodeKind::Parameter, "parameter"), vec![Role::Argument]);
        assert_eq!(infer_roles(NodeKind::Condition, "if_statement"), vec![Role::Condition]);
    }

    #[test]
    fn test_kinds_without_roles() {
        for kind in [
            NodeKind::File,
            NodeKind::Literal,
            NodeKind::Loop,
            NodeKind::Return,
            NodeKind::Unknown,
        ] {
            assert!(infer_roles(kind, "x").is_empty(), "{kind} should carry no roles");
        }
    }

    #[test]
    fn test_raw_kind_rules() {
        assert_eq!(infer_roles(NodeKind::Unknown, "method_receiver"), vec![Role::Receiver]);
        assert_eq!(infer_roles(NodeKind::Unknown, "function_body"), vec![Role::Body]);
        assert_eq!(infer_roles(NodeKind::Unknown, "method_body"), vec![Role::Body]);
    }

    #[test]
    fn test_both_rules_fire() {
        assert_eq!(
            infer_roles(NodeKind::Parameter, "method_receiver"),
            vec![Role::Argument, Role::Receiver]
        );
        assert_eq!(
            infer_roles(NodeKind::Statement, "function_body"),
            vec![Role::Statement, Role::Body]
        );
    }

    #[test]
    fn test_role_from_str() {
        assert_eq!("body".parse::<Role>().unwrap(), Role::Body);
        assert!("owner".parse::<Role>().is_err());
    }
}
