use anyhow::Context;
use clap::Parser;

use gildedrose_simulator::SimulatorConfig;

fn main() -> anyhow::Result<()> {
    let config = SimulatorConfig::parse();
    gildedrose_observability::init_with(config.log_format);

    if config.fixture.is_none() {
        tracing::warn!("GILDED_ROSE_FIXTURE not set; using built-in stock");
    }

    let report = gildedrose_simulator::run(&config).context("simulation failed")?;
    print!("{report}");

    tracing::info!(days = config.days, "simulation finished");
    Ok(())
}
