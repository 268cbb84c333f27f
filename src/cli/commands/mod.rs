//! Command implementations for MRT processor CLI
//!
//! This module contains the command execution logic for the CLI interface.
//! Each command is implemented in its own module:
//! - `parse`: full table read with row preview and statistics
//! - `columns`: column specifications declared by a table header
//! - `validate`: batch parse check over a file or directory

pub mod columns;
pub mod parse;
pub mod shared;
pub mod validate;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for MRT processor
///
/// Dispatches to the appropriate subcommand handler based on CLI args.
pub fn run(args: Args) -> Result<()> {
    match args.get_command() {
        Some(Commands::Parse(parse_args)) => parse::run_parse(parse_args),
        Some(Commands::Columns(columns_args)) => columns::run_columns(columns_args),
        Some(Commands::Validate(validate_args)) => validate::run_validate(validate_args),
        None => Ok(()),
    }
}
