use crate::types::ItemKind;
use serde_json::{Map, Value};

/// One equipment slot: a stack of a single kind plus its accumulated wear
///
/// A slot is a value snapshot. It is constructed from a live equipment slot
/// or decoded from a document, and consumed and replaced wholesale; nothing
/// mutates a slot through an external alias.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemSlot {
    pub kind: ItemKind,
    /// Accumulated wear: 0 is pristine, `kind.max_durability()` is destroyed.
    /// Always 0 for non-damageable kinds.
    pub wear: u16,
    pub amount: u32,
    /// Opaque host attributes, carried through serialization untouched
    pub extra: Map<String, Value>,
}

impl Default for ItemSlot {
    fn default() -> Self {
        ItemSlot::empty()
    }
}

impl ItemSlot {
    /// The empty slot
    pub fn empty() -> Self {
        ItemSlot {
            kind: ItemKind::Air,
            wear: 0,
            amount: 0,
            extra: Map::new(),
        }
    }

    /// Create a pristine stack of the given kind
    pub fn new(kind: ItemKind, amount: u32) -> Self {
        ItemSlot {
            kind,
            wear: 0,
            amount,
            extra: Map::new(),
        }
    }

    /// Set the accumulated wear; ignored for non-damageable kinds
    pub fn with_wear(mut self, wear: u16) -> Self {
        if self.kind.is_damageable() {
            self.wear = wear;
        }
        self
    }

    /// Copy of this slot with a different stack amount
    pub fn with_amount(mut self, amount: u32) -> Self {
        self.amount = amount;
        self
    }

    /// Attach an extra host attribute
    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Whether this slot holds nothing
    pub fn is_empty(&self) -> bool {
        self.kind == ItemKind::Air || self.amount == 0
    }
}
