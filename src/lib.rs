//! MRT Processor Library
//!
//! A Rust library for parsing "byte-by-byte description" machine-readable
//! tables (MRT), the fixed-width format used by AAS journals such as ApJ for
//! online-only data tables.
//!
//! This library provides tools for:
//! - Scanning MRT headers for the byte-by-byte descriptor block
//! - Parsing per-column byte ranges, units, labels and descriptions
//! - Splitting fixed-width data rows by byte offset (columns may contain
//!   internal spaces, so whitespace is never used as a delimiter)
//! - Capturing table metadata (title, authors, caption, notes)
//! - Comprehensive error reporting with offending line context
//!
//! Type coercion of field values and unit semantics are deliberately left to
//! downstream consumers; this library hands over column specifications and
//! verbatim field strings.

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod format_registry;
        pub mod mrt_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{ColumnRegistry, ColumnSpec, TableMeta};
pub use app::services::mrt_parser::{FixedWidthSplitter, SplitRow, TableReader};
pub use config::{ReaderConfig, SplitterConfig};

/// Result type alias for the MRT processor
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for MRT parsing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// No descriptor block was found, or it declared zero columns
    #[error("Empty header: {message}")]
    EmptyHeader { message: String },

    /// A byte-range field would need more than 3 digits per bound
    #[error(
        "Unsupported column width at line {line_number}: rows longer than 999 bytes are not supported"
    )]
    UnsupportedColumnWidth { line_number: usize, line: String },

    /// A line inside the descriptor block is malformed
    #[error("Descriptor syntax error at line {line_number}: {message} (line: '{line}')")]
    DescriptorSyntax {
        line_number: usize,
        line: String,
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Requested table format is not registered
    #[error("Unknown table format '{name}'. Available formats: {available}")]
    UnknownFormat { name: String, available: String },

    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Directory traversal error
    #[error("Directory traversal error: {message}")]
    DirectoryTraversal {
        message: String,
        #[source]
        source: walkdir::Error,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an empty header error
    pub fn empty_header(message: impl Into<String>) -> Self {
        Self::EmptyHeader {
            message: message.into(),
        }
    }

    /// Create an unsupported column width error
    pub fn unsupported_column_width(line_number: usize, line: impl Into<String>) -> Self {
        Self::UnsupportedColumnWidth {
            line_number,
            line: line.into(),
        }
    }

    /// Create a descriptor syntax error
    pub fn descriptor_syntax(
        line_number: usize,
        line: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::DescriptorSyntax {
            line_number,
            line: line.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an unknown format error
    pub fn unknown_format(name: impl Into<String>, available: impl Into<String>) -> Self {
        Self::UnknownFormat {
            name: name.into(),
            available: available.into(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a directory traversal error
    pub fn directory_traversal(message: impl Into<String>, source: walkdir::Error) -> Self {
        Self::DirectoryTraversal {
            message: message.into(),
            source,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<walkdir::Error> for Error {
    fn from(error: walkdir::Error) -> Self {
        Self::DirectoryTraversal {
            message: "Directory traversal failed".to_string(),
            source: error,
        }
    }
}
