//! Durability decay on respawn after death
//!
//! Each applicable item takes a flat hit of `floor(rate * max)` wear, once
//! per respawn. An item whose wear reaches max is removed from its slot.
//! Main contents expect tool-class items and armor slots expect
//! armor-class items; anything else in the slot is left untouched.

use gear_core::{GearClass, ItemSlot};
use serde::{Deserialize, Serialize};
use snapshot_core::access::{PlayerAccess, RefreshRequest};

/// Flat per-respawn wear fraction for tool-class items
pub const TOOL_DECAY_RATE: f64 = 0.22;
/// Flat per-respawn wear fraction for armor-class items
pub const ARMOR_DECAY_RATE: f64 = 0.17;
/// Wear fraction above which a surviving item raises a warning
pub const WARNING_FRACTION: f64 = 0.75;
/// Host ticks to wait before the second display refresh
pub const REFRESH_DELAY_TICKS: u32 = 10;

/// Decay rate for one equipment class
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecayRule {
    pub class: GearClass,
    /// Fraction of max durability added as wear per respawn, in (0, 1)
    pub rate: f64,
}

/// Per-class decay rates, applied once per triggering event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecayPolicy {
    pub rules: Vec<DecayRule>,
}

impl Default for DecayPolicy {
    fn default() -> Self {
        DecayPolicy {
            rules: vec![
                DecayRule {
                    class: GearClass::Tool,
                    rate: TOOL_DECAY_RATE,
                },
                DecayRule {
                    class: GearClass::Armor,
                    rate: ARMOR_DECAY_RATE,
                },
            ],
        }
    }
}

impl DecayPolicy {
    /// The rate for a class, if the policy decays that class at all
    pub fn rate_for(&self, class: GearClass) -> Option<f64> {
        self.rules.iter().find(|rule| rule.class == class).map(|rule| rule.rate)
    }
}

/// Notification raised while decaying an equipment set
///
/// How these render is the host's concern; tool and armor variants carry
/// their class so the host can word them differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Notice {
    /// An item crossed the warning threshold but survived
    LowDurability(GearClass),
    /// An item reached max wear and was removed from its slot
    Destroyed(GearClass),
    /// At least one item took wear this event; raised once, last
    EquipmentDamaged,
}

/// Result of decaying a full equipment set
#[derive(Debug, Clone, PartialEq)]
pub struct DecayOutcome {
    pub contents: Vec<ItemSlot>,
    pub armor: Vec<ItemSlot>,
    /// Main-contents notices first, then armor, then the aggregate
    pub notices: Vec<Notice>,
}

/// Decay a full equipment set
///
/// Pure over its inputs. Main contents are processed before armor, each in
/// ascending slot order; that ordering only sequences notices, the final
/// arrays do not depend on it.
pub fn decay_equipment(
    contents: &[ItemSlot],
    armor: &[ItemSlot],
    policy: &DecayPolicy,
) -> DecayOutcome {
    let mut notices = Vec::new();
    let mut damaged = false;
    let contents = decay_array(contents, GearClass::Tool, policy, &mut notices, &mut damaged);
    let armor = decay_array(armor, GearClass::Armor, policy, &mut notices, &mut damaged);
    if damaged {
        notices.push(Notice::EquipmentDamaged);
    }
    DecayOutcome {
        contents,
        armor,
        notices,
    }
}

fn decay_array(
    slots: &[ItemSlot],
    expected: GearClass,
    policy: &DecayPolicy,
    notices: &mut Vec<Notice>,
    damaged: &mut bool,
) -> Vec<ItemSlot> {
    let mut out = Vec::with_capacity(slots.len());
    for slot in slots {
        if slot.is_empty() || !slot.kind.is_damageable() {
            out.push(slot.clone());
            continue;
        }
        if slot.kind.category().map(|c| c.class()) != Some(expected) {
            out.push(slot.clone());
            continue;
        }
        let Some(rate) = policy.rate_for(expected) else {
            out.push(slot.clone());
            continue;
        };

        let max = slot.kind.max_durability();
        // the wear step rounds down
        let step = (rate * f64::from(max)) as u16;
        let new_wear = slot.wear.saturating_add(step).min(max);
        *damaged = true;

        if new_wear >= max {
            notices.push(Notice::Destroyed(expected));
            out.push(ItemSlot::empty());
            continue;
        }
        if f64::from(new_wear) > WARNING_FRACTION * f64::from(max) {
            notices.push(Notice::LowDurability(expected));
        }
        let mut worn = slot.clone();
        worn.wear = new_wear;
        out.push(worn);
    }
    out
}

/// Decay a player's equipment after a respawn and push the result back
///
/// Both arrays are replaced wholesale, then the host is asked for an
/// immediate display refresh and a second one [`REFRESH_DELAY_TICKS`]
/// later. Returns the notices for the host to render.
pub fn handle_respawn<A: PlayerAccess>(player: &mut A, policy: &DecayPolicy) -> Vec<Notice> {
    let outcome = decay_equipment(&player.contents(), &player.armor(), policy);
    player.set_contents(outcome.contents);
    player.set_armor(outcome.armor);
    player.request_refresh(RefreshRequest::Immediate);
    player.request_refresh(RefreshRequest::Delayed {
        ticks: REFRESH_DELAY_TICKS,
    });
    outcome.notices
}
