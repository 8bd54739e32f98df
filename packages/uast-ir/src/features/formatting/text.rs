//! Indented outline format

use super::format::{clip_token, write_header, write_node_line, LlmFormat};
use crate::errors::Result;
use crate::features::uast::{Uast, UastNode};

const MAX_DEPTH: usize = 100;
const TOKEN_LIMIT: usize = 100;
const TOKEN_KEEP: usize = 97;

/// One line per node, two spaces of indent per level
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleTextFormat {
    pub include_locations: bool,
}

impl SimpleTextFormat {
    pub fn with_locations() -> Self {
        Self {
            include_locations: true,
        }
    }

    fn write_node(&self, out: &mut String, node: &UastNode, depth: usize) {
        if depth > MAX_DEPTH {
            out.push_str(&"  ".repeat(depth));
            out.push_str("[Excessive nesting - tree truncated]\n");
            return;
        }

        let token = clip_token(node.token(), TOKEN_LIMIT, TOKEN_KEEP);
        write_node_line(out, node, depth, Some(&*token), self.include_locations);

        for child in &node.children {
            self.write_node(out, child, depth + 1);
        }
    }
}

impl LlmFormat for SimpleTextFormat {
    fn format(&self, uast: &Uast) -> Result<String> {
        let mut out = String::new();
        write_header(&mut out, uast.language(), &uast.metadata());
        out.push_str("\nStructure:\n");
        self.write_node(&mut out, uast.root(), 0);
        Ok(out)
    }
}
