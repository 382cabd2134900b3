//! Harness around the inventory rules: loads a starting stock, advances it
//! day by day and renders what happened.
//!
//! The inventory crate stays free of IO; everything that touches files,
//! flags or output formats lives here.

pub mod config;
pub mod error;
pub mod fixture;
pub mod report;

pub use config::{DEFAULT_DAYS, MAX_DAYS, SimulatorConfig};
pub use error::{SimulatorError, SimulatorResult};
pub use fixture::{default_stock, load_fixture, parse_fixture};
pub use report::{DaySnapshot, ReportFormat, render, simulate};

/// Load the configured stock, simulate it and render the report.
pub fn run(config: &SimulatorConfig) -> SimulatorResult<String> {
    if config.days > MAX_DAYS {
        return Err(SimulatorError::DaysOutOfRange {
            days: config.days,
            max: MAX_DAYS,
        });
    }

    let mut items = match &config.fixture {
        Some(path) => load_fixture(path)?,
        None => default_stock(),
    };

    tracing::info!(
        days = config.days,
        items = items.len(),
        format = ?config.format,
        "running simulation"
    );

    let snapshots = simulate(&mut items, config.days);
    render(&snapshots, config.format)
}
