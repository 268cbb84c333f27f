//! Configuration management and validation.
//!
//! Provides the configuration surface consumed by the fixed-width splitter
//! and the table reader: pad/bookend trimming behavior and the optional
//! explicit byte-range overrides that bypass header auto-detection.

use crate::constants::{DEFAULT_BOOKEND, DEFAULT_DELIMITER_PAD};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Trimming configuration for the fixed-width splitter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitterConfig {
    /// Pad trimmed from field values at delimiter-bounded edges.
    /// Used only for trimming, never for splitting.
    pub delimiter_pad: String,

    /// Treat data lines as delimiter-bounded on both ends, so edge columns
    /// are trimmed consistently with interior ones
    pub bookend: bool,
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            delimiter_pad: DEFAULT_DELIMITER_PAD.to_string(),
            bookend: DEFAULT_BOOKEND,
        }
    }
}

/// Full reader configuration, supplied once per table read
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReaderConfig {
    /// Splitter trimming behavior
    pub splitter: SplitterConfig,

    /// Explicit 0-based column start offsets. When non-empty (together with
    /// `col_ends`), header auto-detection is skipped entirely.
    pub col_starts: Vec<usize>,

    /// Explicit 0-based exclusive column end offsets, paired with `col_starts`
    pub col_ends: Vec<usize>,
}

impl ReaderConfig {
    /// Create a configuration with default trimming and no overrides
    pub fn new() -> Self {
        Self {
            splitter: SplitterConfig::default(),
            col_starts: Vec::new(),
            col_ends: Vec::new(),
        }
    }

    /// Whether explicit byte-range overrides are in effect
    pub fn has_overrides(&self) -> bool {
        !self.col_starts.is_empty() || !self.col_ends.is_empty()
    }

    /// Paired override ranges, half-open `[start, end)`
    pub fn override_ranges(&self) -> Vec<(usize, usize)> {
        self.col_starts
            .iter()
            .copied()
            .zip(self.col_ends.iter().copied())
            .collect()
    }

    /// Validate the configuration for consistency
    pub fn validate(&self) -> Result<()> {
        if self.col_starts.len() != self.col_ends.len() {
            return Err(Error::configuration(format!(
                "col_starts and col_ends must have the same length ({} vs {})",
                self.col_starts.len(),
                self.col_ends.len()
            )));
        }

        for (i, (&start, &end)) in self.col_starts.iter().zip(self.col_ends.iter()).enumerate() {
            if start >= end {
                return Err(Error::configuration(format!(
                    "override column {} has an empty byte range: [{}, {})",
                    i, start, end
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ReaderConfig::default();
        assert_eq!(config.splitter.delimiter_pad, " ");
        assert!(config.splitter.bookend);
        assert!(!config.has_overrides());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_override_validation() {
        let mut config = ReaderConfig::new();
        config.col_starts = vec![0, 10];
        config.col_ends = vec![10, 20];
        assert!(config.has_overrides());
        assert!(config.validate().is_ok());
        assert_eq!(config.override_ranges(), vec![(0, 10), (10, 20)]);

        // Mismatched lengths
        config.col_ends = vec![10];
        assert!(config.validate().is_err());

        // Empty range
        config.col_ends = vec![10, 10];
        assert!(config.validate().is_err());

        // Only one side provided still counts as overrides, and fails validation
        config.col_ends = Vec::new();
        assert!(config.has_overrides());
        assert!(config.validate().is_err());
    }
}
