//! Inventory domain module.
//!
//! This crate contains the nightly aging rules for the shop's stock,
//! implemented purely as deterministic domain logic (no IO, no CLI, no storage).

pub mod item;
pub mod updater;

pub use item::{
    AGED_BRIE, BACKSTAGE_PASS, Category, Item, MAX_QUALITY, MIN_QUALITY, SULFURAS,
};
pub use updater::{GildedRose, age_item};
