//! Parser for byte-by-byte machine-readable tables (MRT)
//!
//! AAS journals publish online-only data as fixed-width tables whose header
//! carries a "Byte-by-byte Description": one line per column declaring its
//! exact byte range, format code, unit, label and explanation. Data rows are
//! positioned by byte offset, not delimiters, so columns may contain internal
//! spaces.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`descriptor`] - Single descriptor-line parsing into a column spec
//! - [`scanner`] - State machine locating the descriptor block in the header
//! - [`splitter`] - Byte-offset row splitting with pad/bookend trimming
//! - [`reader`] - Orchestration, comment stripping and metadata capture
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust,no_run
//! use mrt_processor::app::services::mrt_parser::TableReader;
//!
//! # fn example() -> mrt_processor::Result<()> {
//! let reader = TableReader::for_format("mrt")?;
//! let result = reader.read_file(std::path::Path::new("apj475645t8_mrt.txt"))?;
//!
//! println!(
//!     "Parsed {} rows ({} short)",
//!     result.stats.data_rows, result.stats.short_rows
//! );
//! # Ok(())
//! # }
//! ```

pub mod descriptor;
pub mod reader;
pub mod scanner;
pub mod splitter;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use descriptor::ByteField;
pub use reader::TableReader;
pub use scanner::ScanOutcome;
pub use splitter::{FixedWidthSplitter, SplitRow};
pub use stats::{ParseResult, ParseStats};
