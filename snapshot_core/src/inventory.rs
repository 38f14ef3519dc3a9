//! Inventory codec - slot arrays as sparse index-keyed documents
//!
//! An encoded inventory maps the string slot index to an item entry;
//! empty slots are omitted entirely. Decoding rebuilds an array of a given
//! length, defaulting every unmentioned index to the empty slot, so slot
//! positions survive the round trip.

use crate::CodecError;
use gear_core::{ItemKind, ItemSlot};
use serde_json::{Map, Value};

/// Main inventory size, hotbar included
pub const MAIN_SIZE: usize = 36;
/// Armor slots: boots, leggings, chestplate, helmet
pub const ARMOR_SIZE: usize = 4;
pub const ENDER_CHEST_SIZE: usize = 27;

const KEY_KIND: &str = "kind";
const KEY_AMOUNT: &str = "amount";
const KEY_DURABILITY: &str = "durability";
const KEY_EXTRA: &str = "extra";
const KEY_MAIN: &str = "main";
const KEY_ARMOR: &str = "armor";

/// Encode a slot array as a sparse index-keyed document
pub fn encode_slots(slots: &[ItemSlot]) -> Value {
    let mut doc = Map::new();
    for (index, slot) in slots.iter().enumerate() {
        if slot.is_empty() {
            continue;
        }
        doc.insert(index.to_string(), encode_slot(slot));
    }
    Value::Object(doc)
}

fn encode_slot(slot: &ItemSlot) -> Value {
    let mut entry = Map::new();
    entry.insert(KEY_KIND.to_string(), Value::String(slot.kind.name().to_string()));
    entry.insert(KEY_AMOUNT.to_string(), Value::from(slot.amount));
    if slot.kind.is_damageable() {
        entry.insert(KEY_DURABILITY.to_string(), Value::from(slot.wear));
    }
    if !slot.extra.is_empty() {
        entry.insert(KEY_EXTRA.to_string(), Value::Object(slot.extra.clone()));
    }
    Value::Object(entry)
}

/// Decode a slot array of `length_hint` slots
///
/// Unmentioned indices become empty slots. Keys that are not an index
/// inside the array are skipped. Fails on an unrecognized kind or a
/// negative amount; the caller is expected to discard the whole section
/// on failure rather than keep a partial decode.
pub fn decode_slots(doc: &Value, length_hint: usize) -> Result<Vec<ItemSlot>, CodecError> {
    let entries = doc.as_object().ok_or(CodecError::NotAMapping)?;

    let mut slots = vec![ItemSlot::empty(); length_hint];
    for (key, entry) in entries {
        let Ok(index) = key.parse::<usize>() else {
            continue;
        };
        if index >= length_hint {
            continue;
        }
        slots[index] = decode_slot(index, entry)?;
    }
    Ok(slots)
}

fn decode_slot(index: usize, entry: &Value) -> Result<ItemSlot, CodecError> {
    let fields = entry
        .as_object()
        .ok_or(CodecError::MalformedSlot { index })?;

    let kind_name = fields
        .get(KEY_KIND)
        .and_then(Value::as_str)
        .ok_or(CodecError::MalformedSlot { index })?;
    let kind = ItemKind::from_name(kind_name).ok_or_else(|| CodecError::UnknownKind {
        index,
        kind: kind_name.to_string(),
    })?;

    let amount = fields.get(KEY_AMOUNT).and_then(Value::as_i64).unwrap_or(1);
    if amount < 0 {
        return Err(CodecError::NegativeAmount { index, amount });
    }

    // Wear outside [0, max] is clamped rather than rejected; for a
    // non-damageable kind max is 0, which keeps the wear-is-meaningless
    // invariant structural.
    let wear = fields
        .get(KEY_DURABILITY)
        .and_then(Value::as_u64)
        .unwrap_or(0)
        .min(u64::from(kind.max_durability())) as u16;

    let extra = fields
        .get(KEY_EXTRA)
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default();

    Ok(ItemSlot {
        kind,
        wear,
        amount: amount as u32,
        extra,
    })
}

/// Encode a two-part player inventory under named keys
pub fn encode_player_inventory(main: &[ItemSlot], armor: &[ItemSlot]) -> Value {
    let mut doc = Map::new();
    doc.insert(KEY_MAIN.to_string(), encode_slots(main));
    doc.insert(KEY_ARMOR.to_string(), encode_slots(armor));
    Value::Object(doc)
}

/// Decode a two-part player inventory
///
/// A half that is absent from the document decodes to `None` so the caller
/// can leave that half of the subject untouched.
pub fn decode_player_inventory(
    doc: &Value,
    main_len: usize,
    armor_len: usize,
) -> Result<(Option<Vec<ItemSlot>>, Option<Vec<ItemSlot>>), CodecError> {
    let sections = doc.as_object().ok_or(CodecError::NotAMapping)?;

    let main = match sections.get(KEY_MAIN) {
        Some(half) => Some(decode_slots(half, main_len)?),
        None => None,
    };
    let armor = match sections.get(KEY_ARMOR) {
        Some(half) => Some(decode_slots(half, armor_len)?),
        None => None,
    };
    Ok((main, armor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn sample_slots() -> Vec<ItemSlot> {
        let mut slots = vec![ItemSlot::empty(); 9];
        slots[0] = ItemSlot::new(ItemKind::DiamondSword, 1).with_wear(343);
        slots[3] = ItemSlot::new(ItemKind::Arrow, 10);
        slots[8] = ItemSlot::new(ItemKind::Bow, 1)
            .with_wear(12)
            .with_extra("display_name", json!("Twang"));
        slots
    }

    #[test]
    fn test_sparse_encoding_omits_empty_slots() {
        let doc = encode_slots(&sample_slots());
        let entries = doc.as_object().unwrap();
        assert_eq!(entries.len(), 3);
        assert!(entries.contains_key("0"));
        assert!(entries.contains_key("3"));
        assert!(entries.contains_key("8"));
    }

    #[test]
    fn test_durability_only_when_damageable() {
        let doc = encode_slots(&sample_slots());
        let sword = &doc["0"];
        let arrows = &doc["3"];
        assert_eq!(sword["durability"], json!(343));
        assert!(arrows.get("durability").is_none());
    }

    #[test]
    fn test_round_trip() {
        let slots = sample_slots();
        let doc = encode_slots(&slots);
        let decoded = decode_slots(&doc, slots.len()).unwrap();
        assert_eq!(decoded, slots);
    }

    #[test]
    fn test_decode_defaults_unmentioned_to_empty() {
        let doc = json!({ "2": { "kind": "bread", "amount": 3 } });
        let slots = decode_slots(&doc, 5).unwrap();
        assert_eq!(slots.len(), 5);
        assert_eq!(slots[2], ItemSlot::new(ItemKind::Bread, 3));
        for index in [0, 1, 3, 4] {
            assert!(slots[index].is_empty());
        }
    }

    #[test]
    fn test_unknown_kind_fails() {
        let doc = json!({ "0": { "kind": "unobtainium_sword", "amount": 1 } });
        let err = decode_slots(&doc, 9).unwrap_err();
        assert!(matches!(err, CodecError::UnknownKind { index: 0, .. }));
    }

    #[test]
    fn test_negative_amount_fails() {
        let doc = json!({ "4": { "kind": "bread", "amount": -2 } });
        let err = decode_slots(&doc, 9).unwrap_err();
        assert!(matches!(err, CodecError::NegativeAmount { index: 4, amount: -2 }));
    }

    #[test]
    fn test_non_mapping_entry_fails() {
        let doc = json!({ "1": "bread" });
        let err = decode_slots(&doc, 9).unwrap_err();
        assert!(matches!(err, CodecError::MalformedSlot { index: 1 }));
    }

    #[test]
    fn test_foreign_keys_are_skipped() {
        let doc = json!({
            "0": { "kind": "bread", "amount": 1 },
            "note": "added by a newer version",
            "99": { "kind": "bread", "amount": 1 },
        });
        let slots = decode_slots(&doc, 9).unwrap();
        assert_eq!(slots[0], ItemSlot::new(ItemKind::Bread, 1));
        assert_eq!(slots.iter().filter(|s| !s.is_empty()).count(), 1);
    }

    #[test]
    fn test_missing_amount_defaults_to_one() {
        let doc = json!({ "0": { "kind": "stick" } });
        let slots = decode_slots(&doc, 1).unwrap();
        assert_eq!(slots[0].amount, 1);
    }

    #[test]
    fn test_excess_durability_clamped() {
        let doc = json!({ "0": { "kind": "wood_sword", "amount": 1, "durability": 9000 } });
        let slots = decode_slots(&doc, 1).unwrap();
        assert_eq!(slots[0].wear, ItemKind::WoodSword.max_durability());
    }

    #[test]
    fn test_non_object_section_fails() {
        let err = decode_slots(&json!([1, 2, 3]), 9).unwrap_err();
        assert!(matches!(err, CodecError::NotAMapping));
    }

    #[test]
    fn test_player_inventory_round_trip() {
        let main = sample_slots();
        let mut armor = vec![ItemSlot::empty(); ARMOR_SIZE];
        armor[2] = ItemSlot::new(ItemKind::IronChestplate, 1).with_wear(200);

        let doc = encode_player_inventory(&main, &armor);
        let (decoded_main, decoded_armor) =
            decode_player_inventory(&doc, main.len(), armor.len()).unwrap();
        assert_eq!(decoded_main, Some(main));
        assert_eq!(decoded_armor, Some(armor));
    }

    #[test]
    fn test_player_inventory_missing_half() {
        let doc = json!({ "armor": {} });
        let (main, armor) = decode_player_inventory(&doc, MAIN_SIZE, ARMOR_SIZE).unwrap();
        assert!(main.is_none());
        assert_eq!(armor, Some(vec![ItemSlot::empty(); ARMOR_SIZE]));
    }

    fn arb_slot() -> impl Strategy<Value = ItemSlot> {
        let kinds = vec![
            ItemKind::DiamondSword,
            ItemKind::IronChestplate,
            ItemKind::Bow,
            ItemKind::Arrow,
            ItemKind::Bread,
            ItemKind::Cobblestone,
        ];
        prop_oneof![
            Just(ItemSlot::empty()),
            (prop::sample::select(kinds), 1u32..=64, 0u32..=2000).prop_map(
                |(kind, amount, raw_wear)| {
                    let max = u32::from(kind.max_durability());
                    let wear = if max > 1 { (raw_wear % max) as u16 } else { 0 };
                    ItemSlot::new(kind, amount).with_wear(wear)
                }
            ),
        ]
    }

    proptest! {
        #[test]
        fn prop_slot_arrays_round_trip(slots in prop::collection::vec(arb_slot(), 0..40)) {
            let doc = encode_slots(&slots);
            let decoded = decode_slots(&doc, slots.len()).unwrap();
            prop_assert_eq!(decoded, slots);
        }
    }
}
