use serde::{Deserialize, Serialize};

/// Name of the legendary item; never ages, never changes quality.
pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";

/// Name of the cheese that improves with age.
pub const AGED_BRIE: &str = "Aged Brie";

/// Name of the concert ticket with tiered appreciation.
pub const BACKSTAGE_PASS: &str = "Backstage passes to a TAFKAL80ETC concert";

/// Lower quality bound for every non-legendary item.
pub const MIN_QUALITY: i32 = 0;

/// Upper quality bound for every non-legendary item.
pub const MAX_QUALITY: i32 = 50;

/// One stock-keeping unit.
///
/// Items are built by whoever owns the inventory and handed to
/// [`GildedRose`](crate::GildedRose) by reference; the updater only mutates
/// `sell_in` and `quality` in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    /// Days left until the sell-by date; negative once expired.
    pub sell_in: i32,
    pub quality: i32,
}

impl Item {
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }

    pub fn category(&self) -> Category {
        Category::classify(&self.name)
    }

    /// True once the sell-by date has been reached (`sell_in <= 0`).
    pub fn is_expired(&self) -> bool {
        self.sell_in <= 0
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "name: {}, sellIn: {}, quality: {}",
            self.name, self.sell_in, self.quality
        )
    }
}

/// Aging behavior of an item, derived from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Fixed forever: neither `sell_in` nor `quality` change.
    Legendary,
    /// Gains quality with age, twice as fast once expired.
    Appreciating,
    /// Gains quality in tiers as the event approaches, worthless afterwards.
    BackstagePass,
    /// Loses quality with age, twice as fast once expired.
    Generic,
}

impl Category {
    /// Classify by exact name match. Anything unrecognized is generic.
    pub fn classify(name: &str) -> Self {
        match name {
            SULFURAS => Category::Legendary,
            AGED_BRIE => Category::Appreciating,
            BACKSTAGE_PASS => Category::BackstagePass,
            _ => Category::Generic,
        }
    }

    /// Legendary items are exempt from every aging rule.
    pub fn is_legendary(self) -> bool {
        matches!(self, Category::Legendary)
    }
}
