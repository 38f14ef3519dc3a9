//! attrition_core - Death and respawn equipment attrition
//!
//! This library provides:
//! - Durability decay: flat per-respawn wear on tools and armor, with
//!   destruction and low-durability notices
//! - Death drops: partial loss of hotbar stacks and full loss of the rest
//!   of the main inventory
//!
//! Both transforms are pure functions over slot-array snapshots; the
//! `handle_*` drivers read and write through [`PlayerAccess`] and hand
//! refresh and world-placement requests back to the host.

pub mod decay;
pub mod drops;

pub use decay::{decay_equipment, handle_respawn, DecayOutcome, DecayPolicy, DecayRule, Notice};
pub use drops::{handle_death, split_death_drops, DropOutcome};

// Re-export commonly needed workspace types
pub use gear_core::{GearClass, ItemKind, ItemSlot};
pub use snapshot_core::access::{PlayerAccess, RefreshRequest, WorldPos};
