//! Raw grammar type -> NodeKind table

use ahash::AHashMap;

use crate::features::conversion::domain::NodeKind;

/// Per-converter mapping table
///
/// Seeded with the default rules; later registrations for the same raw
/// type replace earlier ones. Unmapped types resolve to `Unknown`.
#[derive(Debug, Clone)]
pub struct KindMapper {
    rules: AHashMap<String, NodeKind>,
}

impl Default for KindMapper {
    fn default() -> Self {
        Self::new()
    }
}

impl KindMapper {
    pub fn new() -> Self {
        let rules = default_mapping_rules()
            .iter()
            .map(|(raw, kind)| (raw.to_string(), *kind))
            .collect();
        Self { rules }
    }

    /// A mapper with no rules at all
    pub fn empty() -> Self {
        Self {
            rules: AHashMap::new(),
        }
    }

    pub fn map_kind(&self, raw_kind: &str) -> NodeKind {
        self.rules.get(raw_kind).copied().unwrap_or(NodeKind::Unknown)
    }

    /// Register or override a rule
    pub fn add_rule(&mut self, raw_kind: impl Into<String>, kind: NodeKind) {
        self.rules.insert(raw_kind.into(), kind);
    }

    pub fn extend<I, S>(&mut self, rules: I)
    where
        I: IntoIterator<Item = (S, NodeKind)>,
        S: Into<String>,
    {
        for (raw, kind) in rules {
            self.add_rule(raw, kind);
        }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Default mapping from tree-sitter node types to UAST kinds
pub fn default_mapping_rules() -> &'static [(&'static str, NodeKind)] {
    &[
        ("program", NodeKind::File),
        ("function", NodeKind::Function),
        ("function_definition", NodeKind::Function),
        ("method_definition", NodeKind::Method),
        ("class_definition", NodeKind::Class),
        ("class", NodeKind::Class),
        ("identifier", NodeKind::Identifier),
        ("variable", NodeKind::Variable),
        ("string_literal", NodeKind::Literal),
        ("number_literal", NodeKind::Literal),
        ("integer_literal", NodeKind::Literal),
        ("float_literal", NodeKind::Literal),
        ("boolean_literal", NodeKind::Literal),
        ("expression", NodeKind::Expression),
        ("binary_expression", NodeKind::Expression),
        ("call_expression", NodeKind::Call),
        ("statement", NodeKind::Statement),
        ("if_statement", NodeKind::Condition),
        ("for_statement", NodeKind::Loop),
        ("while_statement", NodeKind::Loop),
        ("return_statement", NodeKind::Return),
        ("import_statement", NodeKind::Import),
        ("package_declaration", NodeKind::Package),
        ("comment", NodeKind::Comment),
    ]
}
