//! Parse command: read a table and report rows and statistics

use colored::Colorize;
use tracing::info;

use super::shared::setup_logging;
use crate::Result;
use crate::app::services::mrt_parser::{ParseResult, TableReader};
use crate::cli::args::{OutputFormat, ParseArgs};

/// Run the parse command
pub fn run_parse(args: ParseArgs) -> Result<()> {
    setup_logging(args.get_log_level())?;
    args.validate()?;

    let reader = TableReader::new(args.reader_config()?)?;
    let result = reader.read_file(&args.input)?;

    info!(
        "Parsed {} rows from {}",
        result.stats.data_rows,
        args.input.display()
    );

    match args.output_format {
        OutputFormat::Json => print_json(&result, args.max_rows)?,
        OutputFormat::Human => {
            if !args.quiet {
                print_human(&result, args.max_rows);
            }
        }
    }

    Ok(())
}

fn print_json(result: &ParseResult, max_rows: usize) -> Result<()> {
    let rows: Vec<&Vec<String>> = limited(result, max_rows).map(|row| &row.fields).collect();

    let payload = serde_json::json!({
        "meta": result.meta,
        "columns": result.columns,
        "stats": result.stats,
        "rows": rows,
    });
    println!("{}", serde_json::to_string_pretty(&payload).unwrap_or_default());
    Ok(())
}

fn print_human(result: &ParseResult, max_rows: usize) {
    if let Some(title) = &result.meta.title {
        println!("{} {}", "Title:".bold(), title);
    }
    if let Some(caption) = &result.meta.caption {
        println!("{} {}", "Table:".bold(), caption);
    }

    if let Some(registry) = &result.columns {
        println!(
            "{}",
            format!("{} columns: {}", registry.len(), registry.names().join(", ")).cyan()
        );
    }

    println!(
        "{} data rows, {} short, {} comment lines stripped",
        result.stats.data_rows.to_string().green(),
        if result.stats.short_rows > 0 {
            result.stats.short_rows.to_string().yellow()
        } else {
            "0".normal()
        },
        result.stats.comment_lines
    );

    for row in limited(result, max_rows) {
        println!("{}", row.fields.join(" | "));
    }
    if max_rows != 0 && result.rows.len() > max_rows {
        println!("... {} more rows", result.rows.len() - max_rows);
    }
}

fn limited(
    result: &ParseResult,
    max_rows: usize,
) -> impl Iterator<Item = &crate::app::services::mrt_parser::SplitRow> {
    let limit = if max_rows == 0 {
        result.rows.len()
    } else {
        max_rows
    };
    result.rows.iter().take(limit)
}
