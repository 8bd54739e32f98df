//! Source → tree-sitter CST → UAST
//!
//! Exercises the real grammars end to end.

mod common;

use common::*;
use uast_ir::{
    parse_source, ConverterConfig, LanguageId, LlmProcessor, NodeKind, Role, UastConverter,
};

#[test]
fn test_python_source() {
    let cst = parse_source(LanguageId::Python, PYTHON_SOURCE).unwrap();
    let uast = UastConverter::new().convert(&cst, "python").unwrap();

    assert_eq!(uast.root().ts_type(), Some("module"));
    assert_eq!(uast.find_by_type(NodeKind::Class).len(), 1);
    assert_eq!(uast.find_by_type(NodeKind::Function).len(), 2);
    assert_eq!(uast.find_by_type(NodeKind::Condition).len(), 1);
    assert_eq!(uast.find_by_type(NodeKind::Loop).len(), 1);
    assert_eq!(uast.find_by_type(NodeKind::Return).len(), 2);
    assert_eq!(uast.find_by_type(NodeKind::Import).len(), 1);

    let greeter = uast.find_by_token("Greeter");
    assert!(greeter.len() >= 2);
    assert!(greeter.iter().all(|n| n.kind == NodeKind::Identifier));
    assert!(greeter.iter().all(|n| n.has_role(Role::Reference)));

    let location = uast.root().location.unwrap();
    assert_eq!((location.start.line, location.start.column), (1, 1));

    assert_unique_ids(&uast);
    assert_type_index_complete(&uast);
    assert_token_index_complete(&uast);
}

#[test]
fn test_python_positions_are_one_based() {
    let cst = parse_source(LanguageId::Python, PYTHON_SOURCE).unwrap();
    let uast = UastConverter::new().convert(&cst, "python").unwrap();

    // `def greet` sits on line 4 (1-based), indented by four spaces
    let greet = uast
        .find_by_type(NodeKind::Function)
        .into_iter()
        .find(|f| f.children.iter().any(|c| c.token() == "greet"))
        .unwrap();
    let location = greet.location.unwrap();
    assert_eq!(location.start.line, 4);
    assert_eq!(location.start.column, 5);
}

#[test]
fn test_rust_source_with_custom_rules() {
    let cst = parse_source(LanguageId::Rust, RUST_SOURCE).unwrap();

    let plain = UastConverter::new().convert(&cst, "rust").unwrap();
    assert!(plain.find_by_type(NodeKind::Function).is_empty());

    let config = ConverterConfig::default()
        .mapping("function_item", NodeKind::Function)
        .mapping("struct_item", NodeKind::Class)
        .mapping("source_file", NodeKind::File);
    let converter = UastConverter::from_config(&config).unwrap();
    let uast = converter.convert(&cst, "rust").unwrap();

    assert_eq!(uast.root().kind, NodeKind::File);
    assert_eq!(uast.find_by_type(NodeKind::Function).len(), 1);
    assert_eq!(uast.find_by_type(NodeKind::Class).len(), 1);
    assert!(!uast.find_by_token("add").is_empty());

    let mut processor = LlmProcessor::new();
    processor.clear_format();
    let text = processor.process(&uast).unwrap();
    assert!(text.contains("Function:\n  Function [Declaration, Definition]\n"));
    assert!(text.contains("Class:\n  Class [Declaration, Definition]\n"));
}

#[test]
fn test_go_source() {
    let cst = parse_source(LanguageId::Go, GO_SOURCE).unwrap();
    let uast = UastConverter::new().convert(&cst, "go").unwrap();

    let calls = uast.find_by_type(NodeKind::Call);
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].roles, vec![Role::Call]);
    assert_eq!(calls[0].ts_type(), Some("call_expression"));
    assert!(!uast.find_by_token("main").is_empty());

    assert_unique_ids(&uast);
}

#[test]
fn test_parallel_conversion_of_parsed_source() {
    let source: String = (0..120)
        .map(|i| format!("def f{i}(a):\n    return a + {i}\n\n"))
        .collect();
    let cst = parse_source(LanguageId::Python, &source).unwrap();

    let mut seq = UastConverter::new();
    seq.set_parallelization_params(usize::MAX, 0);
    let mut par = UastConverter::new();
    par.set_parallelization_params(50, 4);

    let a = seq.convert(&cst, "python").unwrap();
    let b = par.convert(&cst, "python").unwrap();

    assert_eq!(b.find_by_type(NodeKind::Function).len(), 120);
    assert_eq!(tree_shape(a.root()), tree_shape(b.root()));
}

#[test]
fn test_syntax_errors_still_convert() {
    let cst = parse_source(LanguageId::Python, "def broken(:\n").unwrap();
    let uast = UastConverter::new().convert(&cst, "python").unwrap();
    assert!(uast.node_count() > 1);
    assert_unique_ids(&uast);
}
