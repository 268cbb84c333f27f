//! Application constants for MRT processor
//!
//! This module contains the format markers, field-layout constants and
//! default values used throughout the MRT processor.

// =============================================================================
// Header Markers
// =============================================================================

/// First whitespace-delimited token of the line that opens the descriptor
/// search ("   Bytes Format Units    Label  Explanations")
pub const BYTES_MARKER: &str = "Bytes";

/// Character making up the separator lines that bound the descriptor block
pub const SEPARATOR_CHAR: char = '-';

/// Number of leading separator characters required to recognize a separator line
pub const SEPARATOR_RUN: usize = 5;

/// Character making up the divider between the title block and the header body
pub const TITLE_DIVIDER_CHAR: char = '=';

// =============================================================================
// Descriptor Line Layout
// =============================================================================

/// Largest supported byte position. The byte-range field is 3 digits wide,
/// so rows longer than 999 bytes cannot be described by the format.
pub const MAX_ROW_BYTES: usize = 999;

/// Placeholder used in MRT headers for a dimensionless column unit
pub const UNIT_PLACEHOLDER: &str = "---";

/// Unit literal that the placeholder is normalized to
pub const DIMENSIONLESS_UNIT: &str = "1";

// =============================================================================
// Preamble Keys
// =============================================================================

/// Recognized preamble keys, each followed by optional indented continuation lines
pub const TITLE_KEY: &str = "Title:";
pub const AUTHORS_KEY: &str = "Authors:";
pub const CAPTION_KEY: &str = "Table:";

/// Comment lines in MRT files (rare, but tolerated) match this pattern
pub const COMMENT_PATTERN: &str = r"^\s*#\s*\S\D.*";

// =============================================================================
// Splitter Defaults
// =============================================================================

/// Default pad character trimmed at delimiter-bounded field edges
pub const DEFAULT_DELIMITER_PAD: &str = " ";

/// By default data lines are treated as delimiter-bounded on both ends
pub const DEFAULT_BOOKEND: bool = true;

// =============================================================================
// Format Names
// =============================================================================

/// Registered table format names
pub mod formats {
    /// Legacy ApJ online table format name
    pub const APJ: &str = "apj";

    /// Modern AAS machine-readable table name (same layout as ApJ)
    pub const MRT: &str = "mrt";
}

/// Default format used by the CLI when none is given
pub const DEFAULT_FORMAT: &str = formats::MRT;

// =============================================================================
// Helper Functions
// =============================================================================

/// Check whether a line's first characters form a descriptor-block separator
pub fn is_separator_line(line: &str) -> bool {
    let mut chars = line.chars();
    (0..SEPARATOR_RUN).all(|_| chars.next() == Some(SEPARATOR_CHAR))
}

/// Check whether a line is the title-block divider ("====...")
pub fn is_title_divider(line: &str) -> bool {
    let mut chars = line.chars();
    (0..SEPARATOR_RUN).all(|_| chars.next() == Some(TITLE_DIVIDER_CHAR))
}

/// Check whether a line opens the descriptor search (first token is `Bytes`)
pub fn is_bytes_marker_line(line: &str) -> bool {
    line.split_whitespace().next() == Some(BYTES_MARKER)
}
