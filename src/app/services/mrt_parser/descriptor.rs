//! Descriptor-line parsing
//!
//! A descriptor line declares one column: its byte range first, then format
//! code, unit, label and free-text explanation as whitespace-separated
//! tokens. Example:
//!
//! ```text
//!    1- 22 A22    ---      ID     Galaxy identifier
//!       35 A1     ---      DE-    Sign of the Declination
//! ```
//!
//! Byte positions in the header are 1-based and inclusive; parsed
//! [`ColumnSpec`] ranges are 0-based and half-open. The byte range occupies
//! one or two tokens depending on notation: single-byte columns ("35") and
//! three-digit ranges ("76-114") are one token, padded ranges ("1- 22") are
//! two. The token count anchors where the remaining fields start.

use crate::app::models::ColumnSpec;
use crate::constants::{DIMENSIONLESS_UNIT, MAX_ROW_BYTES, UNIT_PLACEHOLDER};
use crate::{Error, Result};

/// Byte-range notation of a descriptor line
///
/// Bounds are kept as written in the header: 1-based and inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteField {
    /// Single-byte column that declares only its byte position, e.g. `"    35"`
    Single(usize),

    /// Ranged column declaring first and last byte, e.g. `"   1- 22"`
    Range(usize, usize),
}

impl ByteField {
    /// Parse the textual byte field of a descriptor line
    pub fn parse(raw: &str, line_number: usize, line: &str) -> Result<Self> {
        let parts: Vec<&str> = raw.trim().split('-').collect();

        let parse_bound = |text: &str| -> Result<usize> {
            let value: usize = text.trim().parse().map_err(|_| {
                Error::descriptor_syntax(
                    line_number,
                    line,
                    format!("invalid byte position '{}'", text.trim()),
                )
            })?;
            if value == 0 {
                return Err(Error::descriptor_syntax(
                    line_number,
                    line,
                    "byte positions are 1-based, found 0",
                ));
            }
            Ok(value)
        };

        match parts.as_slice() {
            [single] => Ok(ByteField::Single(parse_bound(single)?)),
            [first, last] => {
                let start = parse_bound(first)?;
                let end = parse_bound(last)?;
                if end < start {
                    return Err(Error::descriptor_syntax(
                        line_number,
                        line,
                        format!("byte range ends before it starts ({}-{})", start, end),
                    ));
                }
                Ok(ByteField::Range(start, end))
            }
            _ => Err(Error::descriptor_syntax(
                line_number,
                line,
                format!("malformed byte range '{}'", raw.trim()),
            )),
        }
    }

    /// Last declared byte position, 1-based
    pub fn last_byte(self) -> usize {
        match self {
            ByteField::Single(pos) => pos,
            ByteField::Range(_, end) => end,
        }
    }

    /// 0-based half-open `[start, end)` byte range of the column
    pub fn byte_range(self) -> (usize, usize) {
        match self {
            ByteField::Single(pos) => (pos - 1, pos),
            ByteField::Range(start, end) => (start - 1, end),
        }
    }
}

/// Parse one descriptor line into a [`ColumnSpec`]
///
/// `line_number` is 1-based and used for error context only.
pub fn parse_descriptor_line(
    line: &str,
    line_number: usize,
    order_index: usize,
) -> Result<ColumnSpec> {
    let words: Vec<&str> = line.split_whitespace().collect();
    if words.is_empty() {
        return Err(Error::descriptor_syntax(
            line_number,
            line,
            "blank line inside descriptor block",
        ));
    }

    // A padded range like "1- 22" splits around the dash into two tokens;
    // single-byte positions and space-free ranges are one token.
    let (field_text, skip) = if words[0].ends_with('-') && words.len() >= 2 {
        (format!("{}{}", words[0], words[1]), 2)
    } else {
        (words[0].to_string(), 1)
    };

    let field = ByteField::parse(&field_text, line_number, line)?;

    // A bound of more than 3 digits would not fit the fixed-width byte field;
    // rows longer than 999 bytes are a declared limitation of the format.
    if field.last_byte() > MAX_ROW_BYTES {
        return Err(Error::unsupported_column_width(line_number, line));
    }

    let (byte_start, byte_end) = field.byte_range();

    if words.len() < skip + 3 {
        return Err(Error::descriptor_syntax(
            line_number,
            line,
            "expected format, unit and label after the byte range",
        ));
    }

    let format = words[skip].to_string();
    let unit = if words[skip + 1] == UNIT_PLACEHOLDER {
        DIMENSIONLESS_UNIT.to_string()
    } else {
        words[skip + 1].to_string()
    };
    let name = words[skip + 2].to_string();
    let description = words[skip + 3..].join(" ");

    Ok(ColumnSpec {
        name,
        byte_start,
        byte_end,
        format,
        unit,
        description,
        order_index,
    })
}
