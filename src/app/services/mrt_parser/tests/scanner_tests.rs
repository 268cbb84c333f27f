//! Tests for the descriptor-block scanner

use super::header_lines;
use crate::Error;
use crate::app::services::mrt_parser::scanner;

#[test]
fn test_scan_minimal_header() {
    let outcome = scanner::scan(&header_lines()).unwrap();

    assert_eq!(outcome.registry.len(), 2);
    assert_eq!(outcome.registry.names(), vec!["ID", "DE-"]);
    assert_eq!(outcome.registry.ranges(), vec![(0, 22), (34, 35)]);
    // The closing separator is the last line of the fixture
    assert_eq!(outcome.closed_at, Some(4));
}

#[test]
fn test_scan_skips_lines_before_marker() {
    let lines = vec![
        "Title: Some catalog",
        "================================================================================",
        "Byte-by-byte Description of file: table3.txt",
        "--------------------------------------------------------------------------------",
        "   Bytes Format Units    Label  Explanations",
        "--------------------------------------------------------------------------------",
        "   1-  4 I4     ---      Seq    Running sequence number",
        "--------------------------------------------------------------------------------",
    ];

    let outcome = scanner::scan(&lines).unwrap();
    assert_eq!(outcome.registry.len(), 1);
    assert_eq!(outcome.registry.get(0).unwrap().name, "Seq");
    assert_eq!(outcome.closed_at, Some(7));
}

#[test]
fn test_scan_without_closing_separator() {
    // Input exhausted while reading columns: valid as long as at least one
    // column was parsed
    let lines = vec![
        "   Bytes Format Units    Label  Explanations",
        "--------------------------------------------------------------------------------",
        "   1-  4 I4     ---      Seq    Running sequence number",
    ];

    let outcome = scanner::scan(&lines).unwrap();
    assert_eq!(outcome.registry.len(), 1);
    assert_eq!(outcome.closed_at, None);
}

#[test]
fn test_empty_block_is_error() {
    // Marker and separators present but no column lines between them
    let lines = vec![
        "   Bytes Format Units    Label  Explanations",
        "--------------------------------------------------------------------------------",
        "--------------------------------------------------------------------------------",
    ];

    let result = scanner::scan(&lines);
    assert!(matches!(result, Err(Error::EmptyHeader { .. })));
}

#[test]
fn test_missing_marker_is_error() {
    let lines = vec![
        "Just some text",
        "--------------------------------------------------------------------------------",
        "   1- 22 A22    ---      ID     Galaxy identifier",
    ];

    match scanner::scan(&lines) {
        Err(Error::EmptyHeader { message }) => {
            assert!(message.contains("Bytes"));
        }
        other => panic!("Expected EmptyHeader, got {:?}", other),
    }
}

#[test]
fn test_marker_without_separator_is_error() {
    let lines = vec!["   Bytes Format Units    Label  Explanations"];
    let result = scanner::scan(&lines);
    assert!(matches!(result, Err(Error::EmptyHeader { .. })));
}

#[test]
fn test_empty_input_is_error() {
    let lines: Vec<&str> = Vec::new();
    assert!(matches!(
        scanner::scan(&lines),
        Err(Error::EmptyHeader { .. })
    ));
}

#[test]
fn test_descriptor_error_propagates() {
    let lines = vec![
        "   Bytes Format Units    Label  Explanations",
        "--------------------------------------------------------------------------------",
        "   1- 22 A22",
    ];

    let result = scanner::scan(&lines);
    assert!(matches!(result, Err(Error::DescriptorSyntax { .. })));
}

#[test]
fn test_scan_is_deterministic() {
    let first = scanner::scan(&header_lines()).unwrap();
    let second = scanner::scan(&header_lines()).unwrap();
    assert_eq!(first.registry, second.registry);
    assert_eq!(first.closed_at, second.closed_at);
}

#[test]
fn test_order_index_follows_appearance() {
    let outcome = scanner::scan(&header_lines()).unwrap();
    for (position, column) in outcome.registry.iter().enumerate() {
        assert_eq!(column.order_index, position);
    }
}
