//! Harness error model.

use std::path::PathBuf;

use thiserror::Error;

/// Result type used across the simulator.
pub type SimulatorResult<T> = Result<T, SimulatorError>;

/// Simulator-level error.
///
/// The inventory rules themselves cannot fail; everything here comes from
/// reading fixtures or rendering reports.
#[derive(Debug, Error)]
pub enum SimulatorError {
    /// The fixture file could not be read.
    #[error("failed to read fixture {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The fixture file was not a valid JSON list of items.
    #[error("invalid fixture {}: {source}", path.display())]
    Fixture {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Inline fixture text was not a valid JSON list of items.
    #[error("invalid fixture: {0}")]
    Parse(#[source] serde_json::Error),

    /// The requested run is longer than the harness accepts.
    #[error("cannot simulate {days} days (limit is {max})")]
    DaysOutOfRange { days: u32, max: u32 },

    /// A report could not be serialized.
    #[error("failed to render report: {0}")]
    Render(#[from] serde_json::Error),
}
