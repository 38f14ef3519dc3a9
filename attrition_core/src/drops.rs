//! Death drops - partial hotbar loss, full loss elsewhere
//!
//! On death the main inventory is split: hotbar tools are kept, other
//! hotbar stacks lose most of their amount, and everything past the hotbar
//! falls. Armor and the ender chest are not involved.

use gear_core::{GearClass, ItemSlot};
use snapshot_core::access::{PlayerAccess, RefreshRequest, WorldPos};

/// Hotbar slots occupy indices `0..HOTBAR_SLOTS`
pub const HOTBAR_SLOTS: usize = 9;
/// Fraction of a non-tool hotbar stack lost on death
pub const HOTBAR_DROP_FRACTION: f64 = 0.75;

/// A main inventory split into kept and fallen items
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DropOutcome {
    /// Same length and index space as the input
    pub retained: Vec<ItemSlot>,
    /// World-placement payloads in slot order; indices carry no meaning here
    pub dropped: Vec<ItemSlot>,
}

/// Split a main inventory into what the player keeps and what falls
///
/// Hotbar tools stay put. Other hotbar stacks lose
/// `clamp(floor(amount * 0.75), 1, amount)`; when nothing remains the slot
/// is emptied. Slots past the hotbar are lost whole. Empty slots pass
/// through and never reach the drop list.
pub fn split_death_drops(contents: &[ItemSlot]) -> DropOutcome {
    let mut retained = Vec::with_capacity(contents.len());
    let mut dropped = Vec::new();

    for (index, slot) in contents.iter().enumerate() {
        if slot.is_empty() {
            retained.push(slot.clone());
            continue;
        }
        if index >= HOTBAR_SLOTS {
            dropped.push(slot.clone());
            retained.push(ItemSlot::empty());
            continue;
        }
        let is_tool = slot
            .kind
            .category()
            .is_some_and(|category| category.class() == GearClass::Tool);
        if is_tool {
            retained.push(slot.clone());
            continue;
        }

        // lost amount rounds down, but at least one item falls
        let drop_amount =
            ((f64::from(slot.amount) * HOTBAR_DROP_FRACTION) as u32).clamp(1, slot.amount);
        let keep_amount = slot.amount - drop_amount;
        if keep_amount > 0 {
            retained.push(slot.clone().with_amount(keep_amount));
        } else {
            retained.push(ItemSlot::empty());
        }
        dropped.push(slot.clone().with_amount(drop_amount));
    }

    DropOutcome { retained, dropped }
}

/// Apply the death split to a player
///
/// Places every fallen stack at the death position through the accessor,
/// writes the kept inventory back wholesale, and asks for an immediate
/// display refresh. Returns the outcome so the caller can report on it.
pub fn handle_death<A: PlayerAccess>(player: &mut A, position: WorldPos) -> DropOutcome {
    let outcome = split_death_drops(&player.contents());
    for item in &outcome.dropped {
        player.drop_at(position, item.clone());
    }
    player.set_contents(outcome.retained.clone());
    player.request_refresh(RefreshRequest::Immediate);
    outcome
}
