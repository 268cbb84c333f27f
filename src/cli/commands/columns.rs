//! Columns command: show the column specifications a table header declares

use colored::Colorize;

use super::shared::{display_byte_range, setup_logging};
use crate::cli::args::{ColumnsArgs, OutputFormat};
use crate::app::services::mrt_parser::TableReader;
use crate::{Error, Result};

/// Run the columns command
pub fn run_columns(args: ColumnsArgs) -> Result<()> {
    setup_logging(args.get_log_level())?;
    args.validate()?;

    let reader = TableReader::for_format(&args.format)?;
    let result = reader.read_file(&args.input)?;

    let registry = result
        .columns
        .ok_or_else(|| Error::empty_header("no column registry produced"))?;

    match args.output_format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&registry).unwrap_or_default()
            );
        }
        OutputFormat::Human => {
            println!(
                "{}",
                format!("{:>3}  {:>8}  {:6}  {:8}  {:8}  Explanation", "#", "Bytes", "Format", "Units", "Label").bold()
            );
            for column in &registry {
                println!(
                    "{:>3}  {:>8}  {:6}  {:8}  {:8}  {}",
                    column.order_index,
                    display_byte_range(column),
                    column.format,
                    column.unit,
                    column.name.cyan(),
                    column.description
                );
            }
        }
    }

    Ok(())
}
