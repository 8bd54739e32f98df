//! Kind and token indices over a UAST
//!
//! Entries are locators (child positions from the root) rather than
//! references, so the index can live beside the tree it describes.

use ahash::AHashMap;

use super::node::UastNode;
use crate::features::conversion::domain::NodeKind;

/// Child positions leading from the root to a node
pub type NodeLocator = Box<[usize]>;

#[derive(Debug, Default)]
pub struct NodeIndex {
    by_type: AHashMap<NodeKind, Vec<NodeLocator>>,
    by_token: AHashMap<String, Vec<NodeLocator>>,
}

impl NodeIndex {
    /// Single pre-order pass over the tree
    pub fn build(root: &UastNode) -> Self {
        let mut index = Self::default();
        let mut path = Vec::new();
        index.visit(root, &mut path);
        index
    }

    fn visit(&mut self, node: &UastNode, path: &mut Vec<usize>) {
        let locator: NodeLocator = path.as_slice().into();

        if node.has_token() {
            self.by_token
                .entry(node.token().to_string())
                .or_default()
                .push(locator.clone());
        }
        self.by_type.entry(node.kind).or_default().push(locator);

        for (position, child) in node.children.iter().enumerate() {
            path.push(position);
            self.visit(child, path);
            path.pop();
        }
    }

    pub fn by_type(&self, kind: NodeKind) -> &[NodeLocator] {
        self.by_type.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn by_token(&self, token: &str) -> &[NodeLocator] {
        self.by_token.get(token).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Kinds present in the tree
    pub fn kinds(&self) -> impl Iterator<Item = NodeKind> + '_ {
        self.by_type.keys().copied()
    }

    /// Number of distinct non-empty tokens
    pub fn token_count(&self) -> usize {
        self.by_token.len()
    }

    /// Number of indexed nodes
    pub fn len(&self) -> usize {
        self.by_type.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_type.is_empty()
    }
}
