//! Core MRT reader implementation
//!
//! This module provides the reader orchestration: comment stripping, header
//! scanning, metadata capture and fixed-width row splitting. File access and
//! line supply are the only I/O performed here; the scanner and splitter
//! themselves operate on already-materialized lines.

use std::path::Path;

use rayon::prelude::*;
use regex::Regex;
use tracing::{debug, info};

use super::scanner;
use super::splitter::{FixedWidthSplitter, SplitRow};
use super::stats::{ParseResult, ParseStats};
use crate::app::models::TableMeta;
use crate::app::services::format_registry;
use crate::config::ReaderConfig;
use crate::constants::{
    AUTHORS_KEY, CAPTION_KEY, COMMENT_PATTERN, TITLE_KEY, is_separator_line, is_title_divider,
};
use crate::{Error, Result};

/// Preamble key currently being continued across indented lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PreambleKey {
    Title,
    Authors,
    Caption,
}

/// Reader for byte-by-byte machine-readable tables
///
/// The reader focuses on essential functionality:
/// - Descriptor-block scanning and column specification extraction
/// - Byte-offset row splitting that preserves internal spaces
/// - Table metadata capture (title, authors, caption, notes)
/// - Fatal, context-carrying errors for malformed headers
#[derive(Debug)]
pub struct TableReader {
    config: ReaderConfig,
    comment_re: Regex,
}

impl TableReader {
    /// Create a reader with the given configuration
    pub fn new(config: ReaderConfig) -> Result<Self> {
        config.validate()?;
        let comment_re = Regex::new(COMMENT_PATTERN)
            .map_err(|e| Error::configuration(format!("invalid comment pattern: {}", e)))?;
        Ok(Self { config, comment_re })
    }

    /// Create a reader configured for a registered format name
    pub fn for_format(name: &str) -> Result<Self> {
        let format = format_registry::lookup(name)?;
        Self::new(format.reader_config())
    }

    /// Read and parse an MRT file
    pub fn read_file(&self, path: &Path) -> Result<ParseResult> {
        info!("Parsing MRT file: {}", path.display());

        if !path.exists() {
            return Err(Error::file_not_found(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::io(format!("Failed to read file {}", path.display()), e))?;

        self.read_str(&content)
    }

    /// Parse table content held in a single string
    pub fn read_str(&self, content: &str) -> Result<ParseResult> {
        let lines: Vec<&str> = content.lines().collect();
        self.read_lines(&lines)
    }

    /// Parse an already-materialized sequence of table lines
    pub fn read_lines<S: AsRef<str>>(&self, lines: &[S]) -> Result<ParseResult> {
        let mut stats = ParseStats::new();

        // Strip comment lines and any stray carriage returns up front so the
        // scanner and splitter see clean line content.
        let mut working: Vec<&str> = Vec::with_capacity(lines.len());
        for line in lines {
            let line = line.as_ref().trim_end_matches('\r');
            if self.comment_re.is_match(line) {
                stats.comment_lines += 1;
                continue;
            }
            working.push(line);
        }

        let (columns, splitter, data_start, notes) = if self.config.has_overrides() {
            // Explicit byte ranges bypass the registry and skip the scanner.
            let splitter =
                FixedWidthSplitter::from_ranges(self.config.override_ranges(), &self.config.splitter)?;
            let data_start = last_separator_index(&working, 0).map_or(0, |i| i + 1);
            debug!(
                "using {} override column ranges, data starts at line {}",
                splitter.column_count(),
                data_start + 1
            );
            (None, splitter, data_start, Vec::new())
        } else {
            let outcome = scanner::scan(&working)?;
            let splitter =
                FixedWidthSplitter::from_registry(&outcome.registry, &self.config.splitter);

            // The header may continue past the descriptor block with note
            // lines and a final separator; data begins after the last one.
            let (data_start, notes) = match outcome.closed_at {
                Some(closed) => {
                    let last = last_separator_index(&working, closed).unwrap_or(closed);
                    let notes = if last > closed {
                        collect_notes(&working[closed + 1..last])
                    } else {
                        Vec::new()
                    };
                    (last + 1, notes)
                }
                None => (working.len(), Vec::new()),
            };

            debug!(
                "scanned {} columns ({}), data starts at line {}",
                outcome.registry.len(),
                outcome.registry.names().join(", "),
                data_start + 1
            );
            (Some(outcome.registry), splitter, data_start, notes)
        };

        let mut meta = parse_preamble(preamble_region(&working, data_start));
        meta.notes = notes;

        let mut data_lines: Vec<&str> = Vec::new();
        for line in &working[data_start..] {
            if line.trim().is_empty() {
                stats.blank_lines += 1;
            } else {
                data_lines.push(line);
            }
        }

        // The splitter is pure and shares only immutable state, so rows can
        // be split in parallel while preserving file order.
        let rows: Vec<SplitRow> = data_lines.par_iter().map(|line| splitter.split(line)).collect();

        stats.data_rows = rows.len();
        stats.short_rows = rows.iter().filter(|row| row.is_short).count();

        info!(
            "Parsed {} columns and {} data rows ({} short)",
            splitter.column_count(),
            stats.data_rows,
            stats.short_rows
        );

        Ok(ParseResult {
            meta,
            columns,
            rows,
            stats,
        })
    }
}

/// Index of the last separator line at or after `from`, if any
fn last_separator_index(lines: &[&str], from: usize) -> Option<usize> {
    lines
        .iter()
        .enumerate()
        .skip(from)
        .filter(|(_, line)| is_separator_line(line))
        .map(|(index, _)| index)
        .last()
}

/// The preamble ends at the first separator line (or at the data region,
/// whichever comes first)
fn preamble_region<'a>(lines: &'a [&'a str], data_start: usize) -> &'a [&'a str] {
    let end = lines
        .iter()
        .position(|line| is_separator_line(line))
        .unwrap_or(data_start)
        .min(data_start);
    &lines[..end]
}

/// Extract title, authors and caption from the header preamble
///
/// Keyed lines start a value; subsequent indented lines continue it, joined
/// with single spaces.
fn parse_preamble(lines: &[&str]) -> TableMeta {
    let mut meta = TableMeta::default();
    let mut current: Option<PreambleKey> = None;

    for line in lines {
        if is_title_divider(line) {
            current = None;
            continue;
        }

        let trimmed = line.trim_start();
        if let Some(rest) = trimmed.strip_prefix(TITLE_KEY) {
            meta.title = Some(rest.trim().to_string());
            current = Some(PreambleKey::Title);
        } else if let Some(rest) = trimmed.strip_prefix(AUTHORS_KEY) {
            meta.authors = Some(rest.trim().to_string());
            current = Some(PreambleKey::Authors);
        } else if let Some(rest) = trimmed.strip_prefix(CAPTION_KEY) {
            meta.caption = Some(rest.trim().to_string());
            current = Some(PreambleKey::Caption);
        } else if line.starts_with(char::is_whitespace) && !trimmed.is_empty() {
            let target = match current {
                Some(PreambleKey::Title) => meta.title.as_mut(),
                Some(PreambleKey::Authors) => meta.authors.as_mut(),
                Some(PreambleKey::Caption) => meta.caption.as_mut(),
                None => None,
            };
            if let Some(value) = target {
                value.push(' ');
                value.push_str(trimmed.trim_end());
            }
        } else {
            current = None;
        }
    }

    meta
}

/// Collect note lines between the descriptor block and the data region,
/// joining indented continuation lines to the preceding note
fn collect_notes(lines: &[&str]) -> Vec<String> {
    let mut notes: Vec<String> = Vec::new();

    for line in lines {
        if is_separator_line(line) || line.trim().is_empty() {
            continue;
        }
        match notes.last_mut() {
            Some(last) if line.starts_with(char::is_whitespace) => {
                last.push(' ');
                last.push_str(line.trim());
            }
            _ => notes.push(line.trim().to_string()),
        }
    }

    notes
}
