//! Validate command: check that tables parse cleanly
//!
//! Accepts a single file or a directory, in which case every file with the
//! configured extension is checked recursively.

use std::path::{Path, PathBuf};

use colored::Colorize;
use tracing::{debug, warn};
use walkdir::WalkDir;

use super::shared::setup_logging;
use crate::Result;
use crate::app::services::mrt_parser::TableReader;
use crate::cli::args::ValidateArgs;

/// Run the validate command
pub fn run_validate(args: ValidateArgs) -> Result<()> {
    setup_logging(args.get_log_level())?;
    args.validate()?;

    let reader = TableReader::for_format(&args.format)?;
    let files = collect_files(&args.path, &args.extension)?;

    if files.is_empty() {
        println!(
            "{}",
            format!(
                "No .{} files found under {}",
                args.extension,
                args.path.display()
            )
            .yellow()
        );
        return Ok(());
    }

    let mut passed = 0usize;
    let mut failed = 0usize;

    for file in &files {
        match reader.read_file(file) {
            Ok(result) => {
                passed += 1;
                let columns = result.columns.as_ref().map_or(0, |r| r.len());
                println!(
                    "{} {} ({} columns, {} rows, {} short)",
                    "OK".green().bold(),
                    file.display(),
                    columns,
                    result.stats.data_rows,
                    result.stats.short_rows
                );
            }
            Err(error) => {
                failed += 1;
                warn!("validation failed for {}: {}", file.display(), error);
                println!("{} {} - {}", "FAIL".red().bold(), file.display(), error);
            }
        }
    }

    println!(
        "\n{} of {} files valid, {} failed",
        passed.to_string().green(),
        files.len(),
        if failed > 0 {
            failed.to_string().red()
        } else {
            "0".normal()
        }
    );

    Ok(())
}

/// Collect the files to validate: the path itself, or a recursive scan
fn collect_files(path: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(path) {
        let entry = entry?;
        if entry.file_type().is_file()
            && entry
                .path()
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
        {
            files.push(entry.path().to_path_buf());
        }
    }

    files.sort();
    debug!("collected {} candidate files", files.len());
    Ok(files)
}
