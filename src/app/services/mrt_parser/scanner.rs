//! Descriptor-block scanning
//!
//! The byte-by-byte descriptor block sits inside the table header:
//!
//! ```text
//!    Bytes Format Units    Label  Explanations      <- marker line
//! --------------------------------------------      <- opening separator
//!    1- 22 A22    ---      ID     Galaxy identifier
//!   24- 25 I2     h        RAh    Hour of Right Ascension
//! --------------------------------------------      <- closing separator
//! ```
//!
//! The scanner drives a small state machine over the header lines, delegating
//! each line between the separators to the descriptor parser. Header size is
//! small and line order defines column order, so the scan is single-pass and
//! strictly sequential.

use tracing::{debug, trace};

use super::descriptor::parse_descriptor_line;
use crate::app::models::{ColumnRegistry, ColumnSpec};
use crate::constants::{is_bytes_marker_line, is_separator_line};
use crate::{Error, Result};

/// States of the descriptor-block scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScannerState {
    /// Looking for the line whose first token is `Bytes`
    SeekingBytesMarker,
    /// Marker seen; waiting for the separator that opens the block
    AwaitingSeparator,
    /// Inside the block; every line is a column descriptor
    ReadingColumns,
}

/// Result of a successful header scan
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    /// Columns in order of appearance
    pub registry: ColumnRegistry,

    /// 0-based index of the separator line that closed the block, when the
    /// input did not simply run out while reading columns
    pub closed_at: Option<usize>,
}

/// Scan header lines for the descriptor block
///
/// Fails with [`Error::EmptyHeader`] when no block is found or the block
/// declares zero columns; descriptor-line errors propagate unchanged.
pub fn scan<S: AsRef<str>>(lines: &[S]) -> Result<ScanOutcome> {
    let mut state = ScannerState::SeekingBytesMarker;
    let mut columns: Vec<ColumnSpec> = Vec::new();
    let mut closed_at = None;

    for (index, line) in lines.iter().enumerate() {
        let line = line.as_ref();

        match state {
            ScannerState::SeekingBytesMarker => {
                if is_bytes_marker_line(line) {
                    trace!("descriptor marker at line {}", index + 1);
                    state = ScannerState::AwaitingSeparator;
                }
            }
            ScannerState::AwaitingSeparator => {
                if is_separator_line(line) {
                    trace!("descriptor block opens at line {}", index + 1);
                    state = ScannerState::ReadingColumns;
                }
            }
            ScannerState::ReadingColumns => {
                if is_separator_line(line) {
                    closed_at = Some(index);
                    break;
                }
                let column = parse_descriptor_line(line, index + 1, columns.len())?;
                trace!(
                    "column {} '{}' bytes [{}, {})",
                    column.order_index, column.name, column.byte_start, column.byte_end
                );
                columns.push(column);
            }
        }
    }

    if columns.is_empty() {
        let message = match state {
            ScannerState::SeekingBytesMarker => "no 'Bytes' marker line found in header",
            ScannerState::AwaitingSeparator => "no separator line found after the 'Bytes' marker",
            ScannerState::ReadingColumns => "descriptor block contains no column definitions",
        };
        return Err(Error::empty_header(message));
    }

    debug!(
        "scanned {} columns, descriptor block {}",
        columns.len(),
        match closed_at {
            Some(index) => format!("closed at line {}", index + 1),
            None => "unterminated (input exhausted)".to_string(),
        }
    );

    Ok(ScanOutcome {
        registry: ColumnRegistry::new(columns)?,
        closed_at,
    })
}
