//! Parsing statistics and result structures for MRT processing
//!
//! This module provides types for tracking what a table read encountered and
//! organizing the parsed output for downstream processing.

use super::splitter::SplitRow;
use crate::app::models::{ColumnRegistry, TableMeta};

/// Parsed table with metadata, columns, rows and statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Table-level metadata (title, authors, caption, notes)
    pub meta: TableMeta,

    /// Column specifications from the header scan. `None` when explicit
    /// byte-range overrides bypassed header auto-detection.
    pub columns: Option<ColumnRegistry>,

    /// Split data rows in file order
    pub rows: Vec<SplitRow>,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

/// Simple parsing statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Number of data rows split
    pub data_rows: usize,

    /// Rows that ended before the declared width of the last column
    pub short_rows: usize,

    /// Comment lines stripped before parsing
    pub comment_lines: usize,

    /// Blank lines skipped in the data region
    pub blank_lines: usize,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether every data row covered the full declared width
    pub fn is_clean(&self) -> bool {
        self.short_rows == 0
    }
}
