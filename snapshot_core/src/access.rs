//! The narrow seam between this core and the host engine's live objects

use crate::stats::PlayerStats;
use gear_core::ItemSlot;
use serde::{Deserialize, Serialize};

/// A request to re-render the subject's equipment display
///
/// Delayed requests are deferred-call payloads for the host scheduler;
/// nothing in this core waits or ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefreshRequest {
    Immediate,
    Delayed { ticks: u32 },
}

/// World coordinates for placing dropped items
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldPos {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Accessor over a player's live state
///
/// Reads return owned value snapshots and writes replace whole arrays, so
/// every transform stays a pure function over what it was handed. The host
/// side owns object lifecycles, scheduling, and message rendering.
pub trait PlayerAccess {
    /// Main inventory contents, hotbar first
    fn contents(&self) -> Vec<ItemSlot>;
    fn set_contents(&mut self, slots: Vec<ItemSlot>);

    /// Worn armor, boots to helmet order as the host defines it
    fn armor(&self) -> Vec<ItemSlot>;
    fn set_armor(&mut self, slots: Vec<ItemSlot>);

    fn ender_chest(&self) -> Vec<ItemSlot>;
    fn set_ender_chest(&mut self, slots: Vec<ItemSlot>);

    fn stats(&self) -> PlayerStats;
    fn set_stats(&mut self, stats: PlayerStats);

    /// Ask the host to re-render the inventory display
    fn request_refresh(&mut self, request: RefreshRequest);

    /// Ask the host to place an item in the world
    fn drop_at(&mut self, position: WorldPos, item: ItemSlot);
}
