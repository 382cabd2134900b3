//! Nightly inventory update.
//!
//! Each advance runs in two passes per item: the category's normal delta,
//! computed from `sell_in` before it is decremented, and then a second
//! adjustment for items that were already expired when the day started.
//! Quality is clamped to `[MIN_QUALITY, MAX_QUALITY]` after every step for all
//! non-legendary items.

use crate::item::{Category, Item, MAX_QUALITY, MIN_QUALITY};

/// Days before the event at which backstage passes start gaining 2 per day.
const BACKSTAGE_DOUBLE_TIER: i32 = 10;

/// Days before the event at which backstage passes start gaining 3 per day.
const BACKSTAGE_TRIPLE_TIER: i32 = 5;

/// Inventory updater over a caller-owned, ordered collection of items.
///
/// The updater borrows the items; every mutation is visible to the owner as
/// soon as the borrow ends.
#[derive(Debug)]
pub struct GildedRose<'a> {
    items: &'a mut [Item],
}

impl<'a> GildedRose<'a> {
    pub fn new(items: &'a mut [Item]) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        self.items
    }

    /// Advance every item by one day.
    pub fn advance_one_day(&mut self) {
        tracing::debug!(items = self.items.len(), "advancing inventory one day");
        for item in self.items.iter_mut() {
            age_item(item);
        }
    }

    /// Advance every item by `days` days.
    pub fn advance_days(&mut self, days: u32) {
        for _ in 0..days {
            self.advance_one_day();
        }
    }
}

/// Age a single item by one day according to its category.
pub fn age_item(item: &mut Item) {
    let category = item.category();
    if category.is_legendary() {
        return;
    }

    let before = (item.sell_in, item.quality);
    let was_expired = item.is_expired();

    // Pass 1: normal aging, based on the days left at the start of the day.
    match category {
        Category::Legendary => {}
        Category::Appreciating => adjust_quality(item, 1),
        Category::BackstagePass => {
            if item.sell_in > BACKSTAGE_DOUBLE_TIER {
                adjust_quality(item, 1);
            } else if item.sell_in > BACKSTAGE_TRIPLE_TIER {
                adjust_quality(item, 2);
            } else if item.sell_in > 0 {
                adjust_quality(item, 3);
            }
        }
        Category::Generic => adjust_quality(item, -1),
    }

    item.sell_in = item.sell_in.saturating_sub(1);

    // Pass 2: expired at the start of the day.
    if was_expired {
        match category {
            Category::Legendary => {}
            Category::Appreciating => adjust_quality(item, 1),
            Category::BackstagePass => item.quality = MIN_QUALITY,
            Category::Generic => adjust_quality(item, -1),
        }
    }

    item.quality = clamp_quality(item.quality);

    tracing::trace!(
        name = %item.name,
        ?category,
        sell_in_before = before.0,
        quality_before = before.1,
        sell_in = item.sell_in,
        quality = item.quality,
        "item aged"
    );
}

fn adjust_quality(item: &mut Item, delta: i32) {
    item.quality = clamp_quality(item.quality.saturating_add(delta));
}

fn clamp_quality(quality: i32) -> i32 {
    quality.clamp(MIN_QUALITY, MAX_QUALITY)
}
