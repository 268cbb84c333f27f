//! Fixed-width row splitting
//!
//! Columns in a machine-readable table are positioned by absolute byte
//! offset, and a column's value may itself contain spaces ("SMH
//! J010257.7-491619.2"). The splitter therefore never tokenizes on
//! whitespace: it slices each declared byte range out of the line verbatim
//! and only then trims pad characters at the edges that border a delimiter.
//!
//! The splitter is pure and stateless across calls, so independent rows of
//! the same table may be split concurrently with read-only sharing of the
//! splitter itself.

use crate::app::models::ColumnRegistry;
use crate::config::SplitterConfig;
use crate::{Error, Result};

/// One data row split into per-column field strings
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SplitRow {
    /// Field values in registry order
    pub fields: Vec<String>,

    /// The line ended before the declared end of the right-most column.
    /// The missing tail is reported as empty fields rather than an error,
    /// but callers can distinguish short rows from complete ones.
    pub is_short: bool,
}

/// Splits data lines into fields by byte offset
#[derive(Debug, Clone)]
pub struct FixedWidthSplitter {
    /// Half-open `[start, end)` byte ranges in column order
    ranges: Vec<(usize, usize)>,

    /// Declared line width, the maximum range end
    line_width: usize,

    delimiter_pad: String,
    bookend: bool,
}

impl FixedWidthSplitter {
    /// Build a splitter from an auto-detected column registry
    pub fn from_registry(registry: &ColumnRegistry, config: &SplitterConfig) -> Self {
        Self {
            ranges: registry.ranges(),
            line_width: registry.line_width(),
            delimiter_pad: config.delimiter_pad.clone(),
            bookend: config.bookend,
        }
    }

    /// Build a splitter from explicit override ranges
    pub fn from_ranges(ranges: Vec<(usize, usize)>, config: &SplitterConfig) -> Result<Self> {
        if ranges.is_empty() {
            return Err(Error::configuration(
                "cannot split rows with an empty set of column ranges",
            ));
        }
        for (i, &(start, end)) in ranges.iter().enumerate() {
            if start >= end {
                return Err(Error::configuration(format!(
                    "column {} has an empty byte range: [{}, {})",
                    i, start, end
                )));
            }
        }

        let line_width = ranges.iter().map(|&(_, end)| end).max().unwrap_or(0);
        Ok(Self {
            ranges,
            line_width,
            delimiter_pad: config.delimiter_pad.clone(),
            bookend: config.bookend,
        })
    }

    /// Number of columns this splitter produces per row
    pub fn column_count(&self) -> usize {
        self.ranges.len()
    }

    /// Split one data line into per-column fields
    ///
    /// Identical `(line, ranges, config)` inputs always yield identical
    /// output; the splitter holds no per-call state.
    pub fn split(&self, line: &str) -> SplitRow {
        let bytes = line.as_bytes();
        let last = self.ranges.len() - 1;

        let fields = self
            .ranges
            .iter()
            .enumerate()
            .map(|(i, &(start, end))| {
                let raw = if start >= bytes.len() {
                    String::new()
                } else {
                    let end = end.min(bytes.len());
                    String::from_utf8_lossy(&bytes[start..end]).into_owned()
                };

                // Interior column edges always border a delimiter; the outer
                // edges of the first and last column only do when the line is
                // bookended by virtual pad characters.
                let trim_leading = self.bookend || i > 0;
                let trim_trailing = self.bookend || i < last;
                self.trim_field(&raw, trim_leading, trim_trailing)
            })
            .collect();

        SplitRow {
            fields,
            is_short: bytes.len() < self.line_width,
        }
    }

    fn trim_field(&self, raw: &str, leading: bool, trailing: bool) -> String {
        if self.delimiter_pad.is_empty() {
            return raw.to_string();
        }

        let mut value = raw;
        if leading {
            value = value.trim_start_matches(self.delimiter_pad.as_str());
        }
        if trailing {
            value = value.trim_end_matches(self.delimiter_pad.as_str());
        }
        value.to_string()
    }
}
