//! Custom assertions for UAST verification

use std::collections::HashSet;

use uast_ir::{NodeKind, Uast, UastNode};

/// Assert every node in the tree carries a distinct non-empty ID
pub fn assert_unique_ids(uast: &Uast) {
    let mut seen = HashSet::new();
    for node in uast.root().descendants() {
        assert!(!node.id.is_empty(), "node without ID: {:?}", node.kind);
        assert!(seen.insert(node.id.clone()), "duplicate ID {}", node.id);
    }
    assert_eq!(seen.len(), uast.node_count());
}

/// Assert `find_by_type` agrees with a full traversal for every kind
pub fn assert_type_index_complete(uast: &Uast) {
    for kind in NodeKind::ALL {
        let expected: Vec<&str> = uast
            .root()
            .descendants()
            .filter(|n| n.kind == kind)
            .map(|n| n.id.as_str())
            .collect();
        let indexed: Vec<&str> = uast.find_by_type(kind).iter().map(|n| n.id.as_str()).collect();
        assert_eq!(indexed, expected, "type index mismatch for {kind}");
    }
}

/// Assert `find_by_token` agrees with a full traversal for every token
pub fn assert_token_index_complete(uast: &Uast) {
    for node in uast.root().descendants().filter(|n| n.has_token()) {
        let found = uast.find_by_token(node.token());
        assert!(
            found.iter().any(|n| std::ptr::eq(*n, node)),
            "token {:?} does not find node {}",
            node.token(),
            node.id
        );
        assert!(found.iter().all(|n| n.token() == node.token()));
    }
}

/// Kind/token/location of each child, for order comparisons
pub fn child_shape(node: &UastNode) -> Vec<(NodeKind, String, Option<uast_ir::Location>)> {
    node.children
        .iter()
        .map(|c| (c.kind, c.token().to_string(), c.location))
        .collect()
}

/// Pre-order kind/token/location, ignoring IDs
pub fn tree_shape(root: &UastNode) -> Vec<(NodeKind, String, Option<uast_ir::Location>)> {
    root.descendants()
        .map(|n| (n.kind, n.token().to_string(), n.location))
        .collect()
}
