//! Command-line argument definitions for MRT processor
//!
//! This module defines the CLI interface using the clap derive API.

use crate::app::services::format_registry;
use crate::config::ReaderConfig;
use crate::constants::{DEFAULT_DELIMITER_PAD, DEFAULT_FORMAT};
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::str::FromStr;

/// CLI arguments for the MRT processor
///
/// Parses byte-by-byte machine-readable tables (AAS/ApJ MRT format) and
/// reports their column specifications and field values.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "mrt-processor",
    version,
    about = "Parse byte-by-byte machine-readable tables (AAS/ApJ MRT format)",
    long_about = "A tool that parses the fixed-width machine-readable tables published by \
                  AAS journals. The table header declares each column's exact byte range, \
                  format code, unit, label and description; data rows are split by byte \
                  offset, so columns may contain internal spaces. Field values are reported \
                  verbatim; type coercion is left to downstream tooling."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the MRT processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse a table and report rows and statistics (main command)
    Parse(ParseArgs),
    /// Show the column specifications declared by a table header
    Columns(ColumnsArgs),
    /// Check that one file or every table in a directory parses cleanly
    Validate(ValidateArgs),
}

/// Arguments for the parse command
#[derive(Debug, Clone, Parser)]
pub struct ParseArgs {
    /// Input MRT file
    #[arg(value_name = "FILE", help = "Path to the machine-readable table file")]
    pub input: PathBuf,

    /// Table format name
    ///
    /// Registered formats: apj, mrt (aliases for the same byte-by-byte layout).
    #[arg(
        short = 'f',
        long = "format",
        value_name = "NAME",
        default_value = DEFAULT_FORMAT,
        help = "Table format name"
    )]
    pub format: String,

    /// Pad trimmed from field edges
    #[arg(
        long = "delimiter-pad",
        value_name = "PAD",
        default_value = DEFAULT_DELIMITER_PAD,
        help = "Pad trimmed from delimiter-bounded field edges"
    )]
    pub delimiter_pad: String,

    /// Disable bookend trimming of edge columns
    ///
    /// By default data lines are treated as delimiter-bounded on both ends,
    /// so the first and last column are trimmed like interior ones.
    #[arg(long = "no-bookend", help = "Do not trim the outer edges of edge columns")]
    pub no_bookend: bool,

    /// Explicit 0-based column start offsets (comma-separated)
    ///
    /// When given together with --col-ends, header auto-detection is skipped
    /// and these ranges are used directly.
    #[arg(
        long = "col-starts",
        value_name = "LIST",
        help = "Comma-separated 0-based column start offsets (bypasses the header scan)"
    )]
    pub col_starts: Option<OffsetList>,

    /// Explicit 0-based exclusive column end offsets (comma-separated)
    #[arg(
        long = "col-ends",
        value_name = "LIST",
        help = "Comma-separated 0-based exclusive column end offsets"
    )]
    pub col_ends: Option<OffsetList>,

    /// Maximum number of rows to print
    #[arg(
        short = 'n',
        long = "max-rows",
        value_name = "COUNT",
        default_value_t = 10,
        help = "Maximum number of rows to print (0 = all)"
    )]
    pub max_rows: usize,

    /// Output format for results
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the columns command
#[derive(Debug, Clone, Parser)]
pub struct ColumnsArgs {
    /// Input MRT file
    #[arg(value_name = "FILE", help = "Path to the machine-readable table file")]
    pub input: PathBuf,

    /// Table format name
    #[arg(
        short = 'f',
        long = "format",
        value_name = "NAME",
        default_value = DEFAULT_FORMAT,
        help = "Table format name"
    )]
    pub format: String,

    /// Output format for results
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Arguments for the validate command
#[derive(Debug, Clone, Parser)]
pub struct ValidateArgs {
    /// File or directory to validate
    #[arg(value_name = "PATH", help = "Table file, or directory to scan recursively")]
    pub path: PathBuf,

    /// Table format name
    #[arg(
        short = 'f',
        long = "format",
        value_name = "NAME",
        default_value = DEFAULT_FORMAT,
        help = "Table format name"
    )]
    pub format: String,

    /// File extension to match when scanning a directory
    #[arg(
        short = 'e',
        long = "extension",
        value_name = "EXT",
        default_value = "txt",
        help = "File extension to match when scanning a directory"
    )]
    pub extension: String,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

/// Wrapper for parsing comma-separated byte offset lists
#[derive(Debug, Clone)]
pub struct OffsetList {
    pub offsets: Vec<usize>,
}

impl FromStr for OffsetList {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut offsets = Vec::new();
        for part in s.split(',') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            let offset: usize = part
                .parse()
                .map_err(|_| Error::configuration(format!("Invalid byte offset '{}'", part)))?;
            offsets.push(offset);
        }

        if offsets.is_empty() {
            return Err(Error::configuration(
                "Offset list cannot be empty".to_string(),
            ));
        }

        Ok(OffsetList { offsets })
    }
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Option<Commands> {
        self.command.clone()
    }
}

impl ParseArgs {
    /// Validate the parse command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.input.exists() {
            return Err(Error::configuration(format!(
                "Input file does not exist: {}",
                self.input.display()
            )));
        }

        format_registry::lookup(&self.format)?;

        match (&self.col_starts, &self.col_ends) {
            (Some(starts), Some(ends)) if starts.offsets.len() != ends.offsets.len() => {
                Err(Error::configuration(format!(
                    "--col-starts and --col-ends must have the same length ({} vs {})",
                    starts.offsets.len(),
                    ends.offsets.len()
                )))
            }
            (Some(_), None) | (None, Some(_)) => Err(Error::configuration(
                "--col-starts and --col-ends must be given together".to_string(),
            )),
            _ => Ok(()),
        }
    }

    /// Build the reader configuration from the CLI flags
    pub fn reader_config(&self) -> Result<ReaderConfig> {
        let format = format_registry::lookup(&self.format)?;
        let mut config = format.reader_config();

        config.splitter.delimiter_pad = self.delimiter_pad.clone();
        if self.no_bookend {
            config.splitter.bookend = false;
        }
        if let Some(starts) = &self.col_starts {
            config.col_starts = starts.offsets.clone();
        }
        if let Some(ends) = &self.col_ends {
            config.col_ends = ends.offsets.clone();
        }

        Ok(config)
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

impl ColumnsArgs {
    /// Validate the columns command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.input.exists() {
            return Err(Error::configuration(format!(
                "Input file does not exist: {}",
                self.input.display()
            )));
        }
        format_registry::lookup(&self.format)?;
        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

impl ValidateArgs {
    /// Validate the validate command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.path.exists() {
            return Err(Error::configuration(format!(
                "Path does not exist: {}",
                self.path.display()
            )));
        }
        format_registry::lookup(&self.format)?;
        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_list_parsing() {
        let result = OffsetList::from_str("0,23,26").unwrap();
        assert_eq!(result.offsets, vec![0, 23, 26]);

        // Spaces are tolerated
        let result = OffsetList::from_str(" 0 , 23 ").unwrap();
        assert_eq!(result.offsets, vec![0, 23]);

        // Non-numeric entries are rejected
        assert!(OffsetList::from_str("0,abc").is_err());

        // Empty lists are rejected
        assert!(OffsetList::from_str("").is_err());
        assert!(OffsetList::from_str(",,,").is_err());
    }

    #[test]
    fn test_log_level() {
        let mut args = ParseArgs {
            input: PathBuf::from("table.txt"),
            format: "mrt".to_string(),
            delimiter_pad: " ".to_string(),
            no_bookend: false,
            col_starts: None,
            col_ends: None,
            max_rows: 10,
            output_format: OutputFormat::Human,
            verbose: 0,
            quiet: false,
        };

        assert_eq!(args.get_log_level(), "warn");

        args.verbose = 1;
        assert_eq!(args.get_log_level(), "info");

        args.verbose = 3;
        assert_eq!(args.get_log_level(), "trace");

        args.quiet = true;
        assert_eq!(args.get_log_level(), "error");
    }

    #[test]
    fn test_reader_config_from_args() {
        let args = ParseArgs {
            input: PathBuf::from("table.txt"),
            format: "apj".to_string(),
            delimiter_pad: " ".to_string(),
            no_bookend: true,
            col_starts: Some(OffsetList {
                offsets: vec![0, 10],
            }),
            col_ends: Some(OffsetList {
                offsets: vec![9, 20],
            }),
            max_rows: 10,
            output_format: OutputFormat::Json,
            verbose: 0,
            quiet: false,
        };

        let config = args.reader_config().unwrap();
        assert!(!config.splitter.bookend);
        assert!(config.has_overrides());
        assert_eq!(config.override_ranges(), vec![(0, 9), (10, 20)]);
    }
}
