//! Command-line / environment configuration.

use std::path::PathBuf;

use clap::Parser;
use gildedrose_observability::LogFormat;

use crate::report::ReportFormat;

/// Days simulated when nothing else is configured.
pub const DEFAULT_DAYS: u32 = 2;

/// Longest run accepted; every day keeps a full snapshot of the stock.
pub const MAX_DAYS: u32 = 10_000;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "gildedrose",
    author,
    version,
    about = "Run the Gilded Rose inventory forward day by day",
    long_about = None
)]
pub struct SimulatorConfig {
    /// Number of days to simulate.
    #[arg(
        short,
        long,
        env = "GILDED_ROSE_DAYS",
        default_value_t = DEFAULT_DAYS,
        value_parser = clap::value_parser!(u32).range(..=i64::from(MAX_DAYS))
    )]
    pub days: u32,

    /// JSON fixture with the starting stock (built-in stock when omitted).
    #[arg(short, long, env = "GILDED_ROSE_FIXTURE")]
    pub fixture: Option<PathBuf>,

    /// Report format written to stdout.
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Log line format written to stderr.
    #[arg(long, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS,
            fixture: None,
            format: ReportFormat::Text,
            log_format: LogFormat::Pretty,
        }
    }
}
