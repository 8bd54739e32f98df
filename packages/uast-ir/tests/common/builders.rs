//! Test data builders
//!
//! Small constructors for CST trees, so tests read as tree shapes.

use uast_ir::{CstNode, CstPoint};

/// Leaf node with text on a single row
pub fn leaf(kind: &str, row: i64, text: &str) -> CstNode {
    CstNode::new(kind)
        .with_points(CstPoint::new(row, 0), CstPoint::new(row, text.chars().count() as i64))
        .with_text(text)
}

/// Interior node spanning `start_row..=end_row`
pub fn branch(kind: &str, start_row: i64, end_row: i64, children: Vec<CstNode>) -> CstNode {
    CstNode::new(kind)
        .with_points(CstPoint::new(start_row, 0), CstPoint::new(end_row, 0))
        .with_children(children)
}

/// `program` with `width` identifier leaves `v0..v{width-1}`
pub fn wide_program(width: usize) -> CstNode {
    CstNode::new("program")
        .with_points(CstPoint::new(0, 0), CstPoint::new(width as i64, 0))
        .with_children((0..width).map(|i| leaf("identifier", i as i64, &format!("v{i}"))))
}

/// `program` holding `groups` functions of `per_group` statements each
pub fn grouped_program(groups: usize, per_group: usize) -> CstNode {
    CstNode::new("program").with_children((0..groups).map(|g| {
        CstNode::new("function_definition")
            .with_text(format!("fn_{g}"))
            .with_children((0..per_group).map(|s| {
                CstNode::new("return_statement")
                    .with_points(CstPoint::new(s as i64, 4), CstPoint::new(s as i64, 12))
                    .with_child(leaf("identifier", s as i64, &format!("r{s}")))
            }))
    }))
}

/// Chain of `depth` nested blocks ending in an identifier
pub fn deep_chain(depth: usize) -> CstNode {
    (0..depth).fold(leaf("identifier", 0, "bottom"), |inner, _| {
        CstNode::new("block").with_child(inner)
    })
}
