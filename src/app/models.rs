//! Data models for MRT parsing
//!
//! This module contains the core data structures for representing byte-by-byte
//! column descriptors and table-level metadata, following the AAS
//! machine-readable table convention.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

// =============================================================================
// Column Specification
// =============================================================================

/// Specification of a single table column, parsed from one descriptor line
///
/// Byte offsets use a half-open convention: `byte_start` is the 0-based index
/// of the first byte of the column, `byte_end` the first byte past it. The
/// header itself declares 1-based inclusive positions; the conversion happens
/// at parse time so every consumer slices the same way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Column label (e.g. "RAh", "imag")
    pub name: String,

    /// 0-based inclusive start byte of the column within a data line
    pub byte_start: usize,

    /// 0-based exclusive end byte of the column within a data line
    pub byte_end: usize,

    /// Fortran-style format code (e.g. "A22", "F6.3"). Not interpreted here,
    /// retained for downstream consumers.
    pub format: String,

    /// Column unit; the `---` placeholder is normalized to `1` (dimensionless)
    pub unit: String,

    /// Free-text column explanation
    pub description: String,

    /// Position of the column in the header, starting at 0
    pub order_index: usize,
}

impl ColumnSpec {
    /// Column width in bytes
    pub fn width(&self) -> usize {
        self.byte_end - self.byte_start
    }

    /// Whether the column declared no physical unit
    pub fn is_dimensionless(&self) -> bool {
        self.unit == crate::constants::DIMENSIONLESS_UNIT
    }
}

// =============================================================================
// Column Registry
// =============================================================================

/// Ordered collection of column specifications for one table
///
/// Order equals order of appearance in the header. The registry is built once
/// per header scan, is immutable afterwards, and is guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnRegistry {
    columns: Vec<ColumnSpec>,
}

impl ColumnRegistry {
    /// Create a registry from parsed columns, enforcing the non-empty and
    /// contiguous-ordering invariants
    pub fn new(columns: Vec<ColumnSpec>) -> Result<Self> {
        if columns.is_empty() {
            return Err(Error::empty_header(
                "descriptor block contains no column definitions",
            ));
        }

        for (i, column) in columns.iter().enumerate() {
            if column.order_index != i {
                return Err(Error::configuration(format!(
                    "column '{}' has order_index {} but sits at position {}",
                    column.name, column.order_index, i
                )));
            }
        }

        Ok(Self { columns })
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// A registry is never empty; kept for API symmetry
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Iterate over columns in header order
    pub fn iter(&self) -> std::slice::Iter<'_, ColumnSpec> {
        self.columns.iter()
    }

    /// Column at the given position
    pub fn get(&self, index: usize) -> Option<&ColumnSpec> {
        self.columns.get(index)
    }

    /// Column labels in header order
    pub fn names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Half-open byte ranges in header order
    pub fn ranges(&self) -> Vec<(usize, usize)> {
        self.columns
            .iter()
            .map(|c| (c.byte_start, c.byte_end))
            .collect()
    }

    /// Declared line width: the end offset of the right-most column
    pub fn line_width(&self) -> usize {
        self.columns.iter().map(|c| c.byte_end).max().unwrap_or(0)
    }
}

impl<'a> IntoIterator for &'a ColumnRegistry {
    type Item = &'a ColumnSpec;
    type IntoIter = std::slice::Iter<'a, ColumnSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}

// =============================================================================
// Table Metadata
// =============================================================================

/// Table-level metadata captured from the header preamble and note block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableMeta {
    /// Paper title, joined across continuation lines
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Author list, joined across continuation lines
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authors: Option<String>,

    /// Table caption (the "Table:" preamble entry)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,

    /// Note lines between the descriptor block and the data region
    pub notes: Vec<String>,
}

impl TableMeta {
    /// Whether any metadata was captured at all
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.authors.is_none()
            && self.caption.is_none()
            && self.notes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(name: &str, start: usize, end: usize, order_index: usize) -> ColumnSpec {
        ColumnSpec {
            name: name.to_string(),
            byte_start: start,
            byte_end: end,
            format: "A1".to_string(),
            unit: "1".to_string(),
            description: String::new(),
            order_index,
        }
    }

    #[test]
    fn test_registry_rejects_empty() {
        let result = ColumnRegistry::new(Vec::new());
        assert!(matches!(result, Err(Error::EmptyHeader { .. })));
    }

    #[test]
    fn test_registry_rejects_gapped_order() {
        let result = ColumnRegistry::new(vec![spec("a", 0, 5, 0), spec("b", 5, 10, 2)]);
        assert!(result.is_err());
    }

    #[test]
    fn test_registry_accessors() {
        let registry =
            ColumnRegistry::new(vec![spec("ra", 0, 10, 0), spec("dec", 12, 22, 1)]).unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.names(), vec!["ra", "dec"]);
        assert_eq!(registry.ranges(), vec![(0, 10), (12, 22)]);
        assert_eq!(registry.line_width(), 22);
        assert_eq!(registry.get(1).unwrap().name, "dec");
        assert!(registry.get(2).is_none());
    }

    #[test]
    fn test_column_width_and_unit() {
        let column = spec("flag", 34, 35, 0);
        assert_eq!(column.width(), 1);
        assert!(column.is_dimensionless());
    }
}
