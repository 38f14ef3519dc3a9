//! Prelude module for convenient imports
//!
//! ```rust
//! use snapshot_core::prelude::*;
//! ```

// Accessor seam
pub use crate::access::{PlayerAccess, RefreshRequest, WorldPos};

// Composer
pub use crate::composer::{
    apply_snapshot, apply_snapshot_text, parse_snapshot, serialize_player, serialize_player_text,
    ApplyReport, Section, SerializeToggle,
};

// Codecs
pub use crate::stats::{PlayerStats, PotionEffect};

// Config
pub use crate::config::SerializationConfig;

// Errors
pub use crate::{CodecError, FormatError};

// Re-exports from gear_core
pub use gear_core::{GearCategory, GearClass, ItemKind, ItemSlot};
