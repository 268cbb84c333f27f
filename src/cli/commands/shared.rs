//! Shared components for CLI commands
//!
//! Common logging setup and formatting helpers used across the command
//! implementations.

use crate::Result;
use crate::app::models::ColumnSpec;
use tracing::debug;

/// Set up structured logging at the given level
pub fn setup_logging(log_level: &str) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("mrt_processor={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Format a column's byte range the way the header writes it: 1-based,
/// inclusive, single positions without a dash
pub fn display_byte_range(column: &ColumnSpec) -> String {
    if column.width() == 1 {
        format!("{}", column.byte_end)
    } else {
        format!("{}-{}", column.byte_start + 1, column.byte_end)
    }
}
