//! LLM processor

use std::collections::BTreeMap;
use std::fmt;

use ahash::AHashSet;
use tracing::debug;

use crate::errors::Result;
use crate::features::conversion::domain::NodeKind;
use crate::features::formatting::{
    clip_token, write_header, write_node_line, LlmFormat, SimpleTextFormat,
};
use crate::features::uast::{Uast, UastNode};

pub const DEFAULT_MAX_TOKENS_PER_NODE: usize = 100;

/// Turns a UAST into prompt text
///
/// With a format set, `process` simply delegates to it. Without one it
/// renders the prioritized kinds as their own sections, followed by the
/// rest of the tree minus excluded kinds.
pub struct LlmProcessor {
    max_tokens_per_node: usize,
    include_locations: bool,
    prioritize_types: Vec<NodeKind>,
    exclude_types: Vec<NodeKind>,
    format: Option<Box<dyn LlmFormat>>,
}

impl Default for LlmProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LlmProcessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmProcessor")
            .field("max_tokens_per_node", &self.max_tokens_per_node)
            .field("include_locations", &self.include_locations)
            .field("prioritize_types", &self.prioritize_types)
            .field("exclude_types", &self.exclude_types)
            .field("has_format", &self.format.is_some())
            .finish()
    }
}

impl LlmProcessor {
    pub fn new() -> Self {
        Self {
            max_tokens_per_node: DEFAULT_MAX_TOKENS_PER_NODE,
            include_locations: false,
            prioritize_types: vec![NodeKind::Function, NodeKind::Class, NodeKind::Method],
            exclude_types: vec![NodeKind::Unknown],
            format: Some(Box::new(SimpleTextFormat::default())),
        }
    }

    /// Zero disables token clipping
    pub fn set_max_tokens_per_node(&mut self, max: usize) {
        self.max_tokens_per_node = max;
    }

    pub fn set_include_locations(&mut self, include: bool) {
        self.include_locations = include;
    }

    pub fn set_prioritize_types(&mut self, kinds: Vec<NodeKind>) {
        self.prioritize_types = kinds;
    }

    pub fn set_exclude_types(&mut self, kinds: Vec<NodeKind>) {
        self.exclude_types = kinds;
    }

    pub fn set_format(&mut self, format: impl LlmFormat + 'static) {
        self.format = Some(Box::new(format));
    }

    /// Drop the format so `process` uses the prioritized rendering
    pub fn clear_format(&mut self) {
        self.format = None;
    }

    pub fn max_tokens_per_node(&self) -> usize {
        self.max_tokens_per_node
    }

    pub fn include_locations(&self) -> bool {
        self.include_locations
    }

    pub fn prioritize_types(&self) -> &[NodeKind] {
        &self.prioritize_types
    }

    pub fn exclude_types(&self) -> &[NodeKind] {
        &self.exclude_types
    }

    pub fn has_format(&self) -> bool {
        self.format.is_some()
    }

    pub fn process(&self, uast: &Uast) -> Result<String> {
        debug!(
            language = uast.language(),
            delegated = self.format.is_some(),
            "rendering UAST for LLM"
        );
        match &self.format {
            Some(format) => format.format(uast),
            None => Ok(self.render_prioritized(uast)),
        }
    }

    fn render_prioritized(&self, uast: &Uast) -> String {
        let mut out = String::new();
        write_header(&mut out, uast.language(), &uast.metadata());
        out.push('\n');

        let mut processed: AHashSet<*const UastNode> = AHashSet::new();
        for &kind in &self.prioritize_types {
            let nodes = uast.find_by_type(kind);
            if nodes.is_empty() {
                continue;
            }
            out.push_str(&format!("{}:\n", kind));
            for node in nodes {
                self.write_line(&mut out, node, 1);
                processed.extend(node.descendants().map(|n| n as *const UastNode));
            }
            out.push('\n');
        }

        out.push_str("Other Important Elements:\n");
        self.write_remaining(&mut out, uast.root(), &mut processed, 1);
        out
    }

    fn write_remaining(
        &self,
        out: &mut String,
        node: &UastNode,
        processed: &mut AHashSet<*const UastNode>,
        indent: usize,
    ) {
        if self.exclude_types.contains(&node.kind) {
            return;
        }
        if !processed.insert(node as *const UastNode) {
            return;
        }

        self.write_line(out, node, indent);
        for child in &node.children {
            self.write_remaining(out, child, processed, indent + 1);
        }
    }

    fn write_line(&self, out: &mut String, node: &UastNode, indent: usize) {
        let token = self.clip(node.token());
        write_node_line(out, node, indent, Some(&*token), self.include_locations);
    }

    fn clip<'t>(&self, token: &'t str) -> std::borrow::Cow<'t, str> {
        if self.max_tokens_per_node == 0 {
            return token.into();
        }
        clip_token(token, self.max_tokens_per_node, self.max_tokens_per_node)
    }

    /// Multi-line description of a single node
    pub fn generate_node_summary(&self, node: &UastNode) -> String {
        let mut out = format!("Type: {}\n", node.kind);

        if node.has_token() {
            out.push_str(&format!("Token: {}\n", self.clip(node.token())));
        }

        if !node.roles.is_empty() {
            let roles: Vec<&str> = node.roles.iter().map(|r| r.as_str()).collect();
            out.push_str(&format!("Roles: {}\n", roles.join(", ")));
        }

        if let Some(location) = &node.location {
            out.push_str(&format!("Location: {}\n", location));
        }

        if !node.properties.is_empty() {
            out.push_str("Properties:\n");
            for (key, value) in &node.properties {
                out.push_str(&format!("  {}: {}\n", key, value));
            }
        }

        if !node.children.is_empty() {
            let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
            for child in &node.children {
                *counts.entry(child.kind.as_str()).or_default() += 1;
            }
            let kinds: Vec<String> = counts
                .iter()
                .map(|(kind, count)| format!("{} ({})", kind, count))
                .collect();

            out.push_str(&format!("Children: {}\n", node.children.len()));
            out.push_str(&format!("Child Types: {}\n", kinds.join(", ")));
        }

        out
    }
}
