//! Registry of known byte-by-byte table formats
//!
//! Maps a format name to its reader configuration. The mapping is built once
//! at first use and is immutable afterwards; aliases reference the same
//! `FormatSpec` value rather than duplicating or mutating entries.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::config::ReaderConfig;
use crate::constants::formats;
use crate::{Error, Result};

/// Immutable description of a registered table format
#[derive(Debug)]
pub struct FormatSpec {
    /// Canonical format name
    pub name: &'static str,

    /// Human-readable description
    pub description: &'static str,

    /// Pad trimmed at delimiter-bounded field edges
    pub delimiter_pad: &'static str,

    /// Whether data lines are treated as delimiter-bounded on both ends
    pub bookend: bool,
}

impl FormatSpec {
    /// Build the reader configuration for this format
    pub fn reader_config(&self) -> ReaderConfig {
        let mut config = ReaderConfig::new();
        config.splitter.delimiter_pad = self.delimiter_pad.to_string();
        config.splitter.bookend = self.bookend;
        config
    }
}

/// The ApJ online table layout, also published as "machine-readable table"
static APJ_FORMAT: FormatSpec = FormatSpec {
    name: formats::APJ,
    description: "ApJ/AAS byte-by-byte machine-readable table",
    delimiter_pad: " ",
    bookend: true,
};

static REGISTRY: Lazy<HashMap<&'static str, &'static FormatSpec>> = Lazy::new(|| {
    let mut registry = HashMap::new();
    registry.insert(formats::APJ, &APJ_FORMAT);
    // "mrt" is the modern AAS name for the same layout; both names resolve
    // to one shared spec
    registry.insert(formats::MRT, &APJ_FORMAT);
    registry
});

/// Look up a format by name
pub fn lookup(name: &str) -> Result<&'static FormatSpec> {
    REGISTRY
        .get(name)
        .copied()
        .ok_or_else(|| Error::unknown_format(name, format_names().join(", ")))
}

/// Registered format names, sorted for stable display
pub fn format_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = REGISTRY.keys().copied().collect();
    names.sort_unstable();
    names
}
