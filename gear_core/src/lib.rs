//! gear_core - Equipment item value model
//!
//! This library provides:
//! - ItemKind: recognized item kinds with durability and category data
//! - GearCategory / GearClass: the tool/armor classification that selects
//!   decay and death-drop rules
//! - ItemSlot: a single equipment slot as an immutable value snapshot
//!
//! Durability is modeled as accumulated wear: 0 is pristine and
//! `max_durability` is destroyed. Transforms that damage equipment move
//! wear upward, never down.

pub mod item;
pub mod types;

pub use item::ItemSlot;
pub use types::{GearCategory, GearClass, ItemKind};
