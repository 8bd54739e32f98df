//! Box-drawing tree format

use super::format::{clip_token, LlmFormat};
use crate::errors::Result;
use crate::features::uast::{Uast, UastNode};

const MAX_PREFIX_LEN: usize = 200;

/// `├──`/`└──` tree with kind and token per node
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeTextFormat;

fn write_branch(out: &mut String, node: &UastNode, prefix: &str, is_last: bool) {
    out.push_str(prefix);
    out.push_str(if is_last { "└── " } else { "├── " });

    // measured in bytes
    if prefix.len() > MAX_PREFIX_LEN {
        out.push_str("[Excessive depth - tree truncated]\n");
        return;
    }

    out.push_str(node.kind.as_str());
    if node.has_token() {
        out.push_str(": ");
        out.push_str(&clip_token(node.token(), 100, 97));
    }
    out.push('\n');

    let child_prefix = format!("{}{}", prefix, if is_last { "    " } else { "│   " });
    let last = node.children.len().saturating_sub(1);
    for (i, child) in node.children.iter().enumerate() {
        write_branch(out, child, &child_prefix, i == last);
    }
}

impl LlmFormat for TreeTextFormat {
    fn format(&self, uast: &Uast) -> Result<String> {
        let mut out = format!("Language: {}\n\n", uast.language());
        write_branch(&mut out, uast.root(), "", true);
        Ok(out)
    }
}
