//! snapshot_core - Player state snapshots as structured documents
//!
//! This library provides:
//! - Inventory codec: slot arrays to and from sparse index-keyed documents
//! - Stats codec: auxiliary player attributes with best-effort restore
//! - Snapshot composer: the toggleable top-level player document and its
//!   text forms
//! - SerializationConfig: TOML-backed per-key serialization toggles
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use snapshot_core::prelude::*;
//! use std::path::Path;
//!
//! let config = SerializationConfig::load(Path::new("serialization.toml"))?;
//! let text = serialize_player_text(&player, &config, true, 5);
//!
//! // later, restoring from stored text
//! match apply_snapshot_text(&text, &mut player) {
//!     Ok(report) if report.is_clean() => {}
//!     Ok(report) => eprintln!("skipped sections: {:?}", report.skipped),
//!     Err(_) => {} // malformed text: nothing was applied
//! }
//! ```

pub mod access;
pub mod composer;
pub mod config;
pub mod inventory;
pub mod prelude;
pub mod stats;

pub use access::{PlayerAccess, RefreshRequest, WorldPos};
pub use composer::{
    apply_snapshot, apply_snapshot_text, parse_snapshot, serialize_player, serialize_player_text,
    ApplyReport, Section, SerializeToggle,
};
pub use config::{ConfigError, SerializationConfig};
pub use stats::{PlayerStats, PotionEffect};

// Re-export commonly needed gear_core types
pub use gear_core::{GearCategory, GearClass, ItemKind, ItemSlot};

use thiserror::Error;

/// Snapshot text that is not well-formed structured data
#[derive(Debug, Error)]
#[error("snapshot text is not well-formed: {0}")]
pub struct FormatError(#[from] serde_json::Error);

/// Error decoding one section of a snapshot document
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("slot {index}: unknown item kind '{kind}'")]
    UnknownKind { index: usize, kind: String },
    #[error("slot {index}: negative amount {amount}")]
    NegativeAmount { index: usize, amount: i64 },
    #[error("slot {index}: entry is not an item mapping")]
    MalformedSlot { index: usize },
    #[error("section is not a mapping")]
    NotAMapping,
    #[error("stats section: {0}")]
    Stats(serde_json::Error),
}
