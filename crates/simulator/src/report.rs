//! Day-by-day simulation and report rendering.

use serde::{Deserialize, Serialize};

use gildedrose_inventory::{GildedRose, Item};

use crate::error::SimulatorResult;

/// How a report is written out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    /// Plain text, one block per day.
    #[default]
    Text,
    /// Pretty-printed JSON array of snapshots.
    Json,
}

/// State of the whole stock at the end of a given day (day 0 is the start).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySnapshot {
    pub day: u32,
    pub items: Vec<Item>,
}

impl core::fmt::Display for DaySnapshot {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "-------- day {} --------", self.day)?;
        writeln!(f, "name, sellIn, quality")?;
        for item in &self.items {
            writeln!(f, "{}, {}, {}", item.name, item.sell_in, item.quality)?;
        }
        writeln!(f)
    }
}

/// Run the stock forward `days` days, capturing a snapshot before the first
/// day and after every day.
///
/// `items` is left in its final state.
pub fn simulate(items: &mut [Item], days: u32) -> Vec<DaySnapshot> {
    let mut snapshots = vec![DaySnapshot {
        day: 0,
        items: items.to_vec(),
    }];

    let mut app = GildedRose::new(items);
    for day in 1..=days {
        app.advance_one_day();
        snapshots.push(DaySnapshot {
            day,
            items: app.items().to_vec(),
        });
    }

    snapshots
}

/// Render snapshots in the requested format.
pub fn render(snapshots: &[DaySnapshot], format: ReportFormat) -> SimulatorResult<String> {
    match format {
        ReportFormat::Text => Ok(snapshots.iter().map(ToString::to_string).collect()),
        ReportFormat::Json => Ok(serde_json::to_string_pretty(snapshots)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gildedrose_inventory::{AGED_BRIE, SULFURAS};
    use proptest::prelude::*;

    #[test]
    fn simulate_includes_the_starting_day() {
        let mut items = vec![Item::new("foo", 1, 1)];

        let snapshots = simulate(&mut items, 0);

        assert_eq!(snapshots.len(), 1);
        assert_eq!(snapshots[0].day, 0);
        assert_eq!(snapshots[0].items, vec![Item::new("foo", 1, 1)]);
    }

    #[test]
    fn simulate_mutates_the_callers_items() {
        let mut items = vec![Item::new("foo", 0, 10), Item::new(SULFURAS, 0, 80)];

        let snapshots = simulate(&mut items, 2);

        assert_eq!(items, vec![Item::new("foo", -2, 6), Item::new(SULFURAS, 0, 80)]);
        assert_eq!(snapshots.last().map(|s| &s.items), Some(&items));
        assert_eq!(snapshots[1].items[0], Item::new("foo", -1, 8));
    }

    #[test]
    fn text_report_lists_every_item_per_day() {
        let mut items = vec![Item::new(AGED_BRIE, 1, 0)];
        let snapshots = simulate(&mut items, 2);

        let text = render(&snapshots, ReportFormat::Text).unwrap();

        let expected = "\
-------- day 0 --------
name, sellIn, quality
Aged Brie, 1, 0

-------- day 1 --------
name, sellIn, quality
Aged Brie, 0, 1

-------- day 2 --------
name, sellIn, quality
Aged Brie, -1, 3

";
        assert_eq!(text, expected);
    }

    #[test]
    fn json_report_contains_snapshots() {
        let mut items = vec![Item::new("foo", 3, 3)];
        let snapshots = simulate(&mut items, 1);

        let json = render(&snapshots, ReportFormat::Json).unwrap();
        let parsed: Vec<DaySnapshot> = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, snapshots);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[1]["day"], 1);
        assert_eq!(value[1]["items"][0]["sell_in"], 2);
        assert_eq!(value[1]["items"][0]["quality"], 2);
    }

    #[test]
    fn empty_stock_still_renders_headers() {
        let snapshots = simulate(&mut [], 1);
        let text = render(&snapshots, ReportFormat::Text).unwrap();
        assert_eq!(text.matches("name, sellIn, quality").count(), 2);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 64,
            ..ProptestConfig::default()
        })]

        /// Property: one snapshot per day plus the starting state, numbered in order.
        #[test]
        fn snapshots_are_numbered_consecutively(days in 0u32..40, len in 0usize..8) {
            let mut items: Vec<Item> = (0..len)
                .map(|i| Item::new(format!("item {i}"), i as i32, 10))
                .collect();

            let snapshots = simulate(&mut items, days);

            prop_assert_eq!(snapshots.len(), days as usize + 1);
            for (i, snapshot) in snapshots.iter().enumerate() {
                prop_assert_eq!(snapshot.day as usize, i);
                prop_assert_eq!(snapshot.items.len(), len);
            }
        }
    }
}
