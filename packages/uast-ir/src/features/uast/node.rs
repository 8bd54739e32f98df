//! UAST node

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::features::conversion::domain::{NodeKind, Role};
use crate::shared::models::Location;

/// Property key holding the original grammar type
pub const TS_TYPE_PROPERTY: &str = "ts_type";

/// A node of the universal AST
///
/// Children are owned by their parent. Empty collections and empty tokens
/// are left out of the serialized form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UastNode {
    pub id: String,

    #[serde(rename = "type")]
    pub kind: NodeKind,

    #[serde(default, skip_serializing_if = "is_blank")]
    pub token: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<Role>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<UastNode>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

fn is_blank(token: &Option<String>) -> bool {
    token.as_deref().map_or(true, str::is_empty)
}

impl UastNode {
    pub fn new(id: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            kind,
            token: None,
            roles: Vec::new(),
            children: Vec::new(),
            properties: BTreeMap::new(),
            location: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_roles(mut self, roles: Vec<Role>) -> Self {
        self.roles = roles;
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_child(mut self, child: UastNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: Vec<UastNode>) -> Self {
        self.children = children;
        self
    }

    /// Token text, empty when absent
    pub fn token(&self) -> &str {
        self.token.as_deref().unwrap_or("")
    }

    pub fn has_token(&self) -> bool {
        !self.token().is_empty()
    }

    /// Original grammar type, if recorded
    pub fn ts_type(&self) -> Option<&str> {
        self.properties.get(TS_TYPE_PROPERTY).map(String::as_str)
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// Follow child positions from this node
    pub fn descend(&self, path: &[usize]) -> Option<&UastNode> {
        path.iter()
            .try_fold(self, |node, &index| node.children.get(index))
    }

    /// Pre-order traversal of this subtree, self first
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// Number of nodes in this subtree, including self
    pub fn node_count(&self) -> usize {
        self.descendants().count()
    }
}

/// Pre-order iterator over a subtree
pub struct Descendants<'a> {
    stack: Vec<&'a UastNode>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a UastNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
