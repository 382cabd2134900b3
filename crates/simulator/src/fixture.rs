//! Starting stock: the built-in shop inventory or a JSON fixture.

use std::path::Path;

use gildedrose_inventory::{AGED_BRIE, BACKSTAGE_PASS, Item, SULFURAS};

use crate::error::{SimulatorError, SimulatorResult};

/// The shop's standard stock, one of every kind plus a few edge cases.
pub fn default_stock() -> Vec<Item> {
    vec![
        Item::new("+5 Dexterity Vest", 10, 20),
        Item::new(AGED_BRIE, 2, 0),
        Item::new("Elixir of the Mongoose", 5, 7),
        Item::new(SULFURAS, 0, 80),
        Item::new(SULFURAS, -1, 80),
        Item::new(BACKSTAGE_PASS, 15, 20),
        Item::new(BACKSTAGE_PASS, 10, 49),
        Item::new(BACKSTAGE_PASS, 5, 49),
        // Not a special category; ages like any other item.
        Item::new("Conjured Mana Cake", 3, 6),
    ]
}

/// Parse a JSON array of items (`[{"name": .., "sell_in": .., "quality": ..}]`).
pub fn parse_fixture(json: &str) -> SimulatorResult<Vec<Item>> {
    serde_json::from_str(json).map_err(SimulatorError::Parse)
}

/// Read and parse a fixture file.
pub fn load_fixture(path: &Path) -> SimulatorResult<Vec<Item>> {
    let raw = std::fs::read_to_string(path).map_err(|source| SimulatorError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let items: Vec<Item> = serde_json::from_str(&raw).map_err(|source| SimulatorError::Fixture {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), items = items.len(), "loaded fixture");
    Ok(items)
}
