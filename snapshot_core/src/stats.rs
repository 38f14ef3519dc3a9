//! Stats codec - auxiliary player attributes with best-effort restore
//!
//! Decoding is forward-compatible: unknown keys are ignored and
//! out-of-range values are clamped to the attribute's domain instead of
//! rejected. Only a structurally wrong section (stats that are not a
//! mapping, or a field of the wrong type) fails.

use crate::CodecError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const MAX_HEALTH: f64 = 20.0;
pub const MAX_FOOD: i32 = 20;

/// Auxiliary player attributes carried in the `stats` snapshot section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct PlayerStats {
    pub level: i32,
    /// Progress toward the next level, in [0, 1]
    pub experience: f32,
    pub health: f64,
    pub food: i32,
    pub saturation: f32,
    pub exhaustion: f32,
    pub potion_effects: Vec<PotionEffect>,
}

impl Default for PlayerStats {
    fn default() -> Self {
        PlayerStats {
            level: 0,
            experience: 0.0,
            health: MAX_HEALTH,
            food: MAX_FOOD,
            saturation: 5.0,
            exhaustion: 0.0,
            potion_effects: Vec::new(),
        }
    }
}

/// An active potion effect
///
/// The effect id is an opaque host name; this core never interprets it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct PotionEffect {
    pub kind: String,
    /// Remaining duration in host ticks
    pub duration: i32,
    pub amplifier: i32,
    pub ambient: bool,
}

impl PlayerStats {
    /// Clamp every attribute to its valid domain
    pub fn clamped(mut self) -> Self {
        self.level = self.level.max(0);
        self.experience = self.experience.clamp(0.0, 1.0);
        self.health = self.health.clamp(0.0, MAX_HEALTH);
        self.food = self.food.clamp(0, MAX_FOOD);
        self.saturation = self.saturation.max(0.0);
        self.exhaustion = self.exhaustion.max(0.0);
        for effect in &mut self.potion_effects {
            effect.duration = effect.duration.max(0);
            effect.amplifier = effect.amplifier.max(0);
        }
        self
    }
}

/// Encode stats as a document
pub fn encode_stats(stats: &PlayerStats) -> Value {
    serde_json::to_value(stats).unwrap_or(Value::Null)
}

/// Decode stats from a document, clamping each attribute to its domain
pub fn decode_stats(doc: &Value) -> Result<PlayerStats, CodecError> {
    if !doc.is_object() {
        return Err(CodecError::NotAMapping);
    }
    let stats: PlayerStats = serde_json::from_value(doc.clone()).map_err(CodecError::Stats)?;
    Ok(stats.clamped())
}
