//! Tests for fixed-width row splitting

use crate::app::models::{ColumnRegistry, ColumnSpec};
use crate::app::services::mrt_parser::splitter::FixedWidthSplitter;
use crate::config::SplitterConfig;

fn registry(ranges: &[(usize, usize)]) -> ColumnRegistry {
    let columns = ranges
        .iter()
        .enumerate()
        .map(|(i, &(start, end))| ColumnSpec {
            name: format!("col{}", i),
            byte_start: start,
            byte_end: end,
            format: "A1".to_string(),
            unit: "1".to_string(),
            description: String::new(),
            order_index: i,
        })
        .collect();
    ColumnRegistry::new(columns).unwrap()
}

#[test]
fn test_exact_coverage_returns_original_slices() {
    // Three non-overlapping ranges exactly covering the line
    let splitter = FixedWidthSplitter::from_registry(
        &registry(&[(0, 3), (3, 6), (6, 9)]),
        &SplitterConfig {
            delimiter_pad: String::new(),
            bookend: false,
        },
    );

    let row = splitter.split("abcdefghi");
    assert_eq!(row.fields, vec!["abc", "def", "ghi"]);
    assert!(!row.is_short);
}

#[test]
fn test_internal_spaces_preserved() {
    // The defining property: a field's internal spaces survive because the
    // split is positional, not delimiter-based
    let splitter = FixedWidthSplitter::from_registry(
        &registry(&[(0, 22), (23, 25)]),
        &SplitterConfig::default(),
    );

    let row = splitter.split("SMH J010257.7-491619.2 01");
    assert_eq!(row.fields[0], "SMH J010257.7-491619.2");
    assert_eq!(row.fields[1], "01");
}

#[test]
fn test_pad_trimming_with_bookend() {
    // With bookend, edge columns are trimmed on both sides like interior ones
    let splitter = FixedWidthSplitter::from_registry(
        &registry(&[(0, 4), (4, 8), (8, 12)]),
        &SplitterConfig {
            delimiter_pad: " ".to_string(),
            bookend: true,
        },
    );

    let row = splitter.split(" ab  cd  ef ");
    assert_eq!(row.fields, vec!["ab", "cd", "ef"]);
}

#[test]
fn test_pad_trimming_without_bookend() {
    // Without bookend the outer edges of the first and last column are not
    // delimiter-bounded and keep their padding
    let splitter = FixedWidthSplitter::from_registry(
        &registry(&[(0, 4), (4, 8), (8, 12)]),
        &SplitterConfig {
            delimiter_pad: " ".to_string(),
            bookend: false,
        },
    );

    let row = splitter.split(" ab  cd  ef ");
    assert_eq!(row.fields, vec![" ab", "cd", "ef "]);
}

#[test]
fn test_short_line_yields_empty_tail_fields() {
    let splitter = FixedWidthSplitter::from_registry(
        &registry(&[(0, 3), (4, 10), (11, 20)]),
        &SplitterConfig::default(),
    );

    // Line ends inside the second column; the third is entirely missing
    let row = splitter.split("abc def");
    assert_eq!(row.fields, vec!["abc", "def", ""]);
    assert!(row.is_short);
}

#[test]
fn test_line_exactly_at_width_is_not_short() {
    let splitter =
        FixedWidthSplitter::from_registry(&registry(&[(0, 3), (3, 6)]), &SplitterConfig::default());

    assert!(!splitter.split("abcdef").is_short);
    assert!(splitter.split("abcde").is_short);
}

#[test]
fn test_split_is_pure() {
    let splitter = FixedWidthSplitter::from_registry(
        &registry(&[(0, 5), (6, 11)]),
        &SplitterConfig::default(),
    );

    let line = "aaaaa bbbbb";
    let first = splitter.split(line);
    let second = splitter.split(line);
    assert_eq!(first, second);
}

#[test]
fn test_from_ranges_overrides() {
    let splitter = FixedWidthSplitter::from_ranges(
        vec![(0, 2), (2, 4)],
        &SplitterConfig {
            delimiter_pad: String::new(),
            bookend: false,
        },
    )
    .unwrap();

    assert_eq!(splitter.column_count(), 2);
    assert_eq!(splitter.split("wxyz").fields, vec!["wx", "yz"]);
}

#[test]
fn test_from_ranges_rejects_invalid() {
    let config = SplitterConfig::default();
    assert!(FixedWidthSplitter::from_ranges(Vec::new(), &config).is_err());
    assert!(FixedWidthSplitter::from_ranges(vec![(5, 5)], &config).is_err());
    assert!(FixedWidthSplitter::from_ranges(vec![(6, 2)], &config).is_err());
}

#[test]
fn test_empty_pad_disables_trimming() {
    let splitter = FixedWidthSplitter::from_registry(
        &registry(&[(0, 4)]),
        &SplitterConfig {
            delimiter_pad: String::new(),
            bookend: true,
        },
    );

    assert_eq!(splitter.split(" a  ").fields, vec![" a  "]);
}

#[test]
fn test_single_column_bookend_trims_both_sides() {
    let splitter =
        FixedWidthSplitter::from_registry(&registry(&[(0, 6)]), &SplitterConfig::default());

    assert_eq!(splitter.split("  ab  ").fields, vec!["ab"]);
}
