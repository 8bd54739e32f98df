//! Output format trait and shared rendering helpers

use std::borrow::Cow;
use std::collections::BTreeMap;

use crate::errors::Result;
use crate::features::uast::{Uast, UastNode};

/// Renders a whole UAST into a string
pub trait LlmFormat: Send + Sync {
    fn format(&self, uast: &Uast) -> Result<String>;
}

impl<F: LlmFormat + ?Sized> LlmFormat for Box<F> {
    fn format(&self, uast: &Uast) -> Result<String> {
        (**self).format(uast)
    }
}

/// Render `uast` with `format`
pub fn to_llm_format(uast: &Uast, format: &dyn LlmFormat) -> Result<String> {
    format.format(uast)
}

/// Cut `token` to `keep` chars plus `...` once it exceeds `limit` chars
///
/// Counts chars, not bytes, so multi-byte text is never split.
pub fn clip_token(token: &str, limit: usize, keep: usize) -> Cow<'_, str> {
    if token.chars().count() <= limit {
        return Cow::Borrowed(token);
    }
    let mut clipped: String = token.chars().take(keep).collect();
    clipped.push_str("...");
    Cow::Owned(clipped)
}

/// `Language:` line plus the optional metadata block
pub(crate) fn write_header(out: &mut String, language: &str, metadata: &BTreeMap<String, String>) {
    out.push_str(&format!("Language: {}\n", language));
    if !metadata.is_empty() {
        out.push_str("Metadata:\n");
        for (key, value) in metadata {
            out.push_str(&format!("  {}: {}\n", key, value));
        }
    }
}

/// One outline line: `Kind[: token] [roles] [(location)]`
pub(crate) fn write_node_line(
    out: &mut String,
    node: &UastNode,
    indent: usize,
    token: Option<&str>,
    include_location: bool,
) {
    out.push_str(&"  ".repeat(indent));
    out.push_str(node.kind.as_str());

    if let Some(token) = token.filter(|t| !t.is_empty()) {
        out.push_str(": ");
        out.push_str(token);
    }

    if !node.roles.is_empty() {
        let roles: Vec<&str> = node.roles.iter().map(|r| r.as_str()).collect();
        out.push_str(&format!(" [{}]", roles.join(", ")));
    }

    if include_location {
        if let Some(location) = &node.location {
            out.push_str(&format!(" ({})", location));
        }
    }

    out.push('\n');
}
