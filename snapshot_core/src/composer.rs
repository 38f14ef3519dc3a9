//! Snapshot composer - assembles and applies the top-level player document
//!
//! A snapshot has up to three sections, each gated by the injected
//! serialization toggle on encode and each applied independently on
//! decode: a section that fails to decode is skipped and reported while
//! the remaining sections still apply, and a section absent from the
//! document leaves that part of the subject untouched.

use crate::access::PlayerAccess;
use crate::{inventory, stats, CodecError, FormatError};
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};

pub const SECTION_ENDER_CHEST: &str = "ender-chest";
pub const SECTION_INVENTORY: &str = "inventory";
pub const SECTION_STATS: &str = "stats";

/// Toggle keys consulted through [`SerializeToggle`]
pub const TOGGLE_ENDER_CHEST: &str = "player-ender-chest";
pub const TOGGLE_INVENTORY: &str = "player.inventory";
pub const TOGGLE_STATS: &str = "player.stats";

/// Indent width used by callers that do not pick one
pub const DEFAULT_INDENT: usize = 5;

/// Per-section opt-out consulted at serialize time
///
/// Injected by the caller so the composer stays testable without a host
/// configuration store. A false (or missing) answer omits the section.
pub trait SerializeToggle {
    fn should_serialize(&self, key: &str) -> bool;
}

impl<F> SerializeToggle for F
where
    F: Fn(&str) -> bool,
{
    fn should_serialize(&self, key: &str) -> bool {
        self(key)
    }
}

/// One applied (or skipped) snapshot section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    EnderChest,
    Inventory,
    Stats,
}

/// Outcome of applying a snapshot document
#[derive(Debug, Default)]
pub struct ApplyReport {
    /// Sections written back to the subject, in application order
    pub applied: Vec<Section>,
    /// Sections present in the document that failed to decode
    pub skipped: Vec<(Section, CodecError)>,
}

impl ApplyReport {
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Serialize the toggled sections of a player into one document
pub fn serialize_player<A: PlayerAccess>(player: &A, toggle: &impl SerializeToggle) -> Value {
    let mut root = Map::new();
    if toggle.should_serialize(TOGGLE_ENDER_CHEST) {
        root.insert(
            SECTION_ENDER_CHEST.to_string(),
            inventory::encode_slots(&player.ender_chest()),
        );
    }
    if toggle.should_serialize(TOGGLE_INVENTORY) {
        root.insert(
            SECTION_INVENTORY.to_string(),
            inventory::encode_player_inventory(&player.contents(), &player.armor()),
        );
    }
    if toggle.should_serialize(TOGGLE_STATS) {
        root.insert(
            SECTION_STATS.to_string(),
            stats::encode_stats(&player.stats()),
        );
    }
    Value::Object(root)
}

/// Apply each section present in the document back onto the player
///
/// Section lengths come from the subject's current arrays. A document
/// that is not a mapping (including the empty document) applies nothing
/// and reports nothing.
pub fn apply_snapshot<A: PlayerAccess>(doc: &Value, player: &mut A) -> ApplyReport {
    let mut report = ApplyReport::default();
    let Some(root) = doc.as_object() else {
        return report;
    };

    if let Some(section) = root.get(SECTION_ENDER_CHEST) {
        let length = player.ender_chest().len();
        match inventory::decode_slots(section, length) {
            Ok(slots) => {
                player.set_ender_chest(slots);
                report.applied.push(Section::EnderChest);
            }
            Err(err) => report.skipped.push((Section::EnderChest, err)),
        }
    }

    if let Some(section) = root.get(SECTION_INVENTORY) {
        let main_len = player.contents().len();
        let armor_len = player.armor().len();
        match inventory::decode_player_inventory(section, main_len, armor_len) {
            Ok((main, armor)) => {
                if let Some(main) = main {
                    player.set_contents(main);
                }
                if let Some(armor) = armor {
                    player.set_armor(armor);
                }
                report.applied.push(Section::Inventory);
            }
            Err(err) => report.skipped.push((Section::Inventory, err)),
        }
    }

    if let Some(section) = root.get(SECTION_STATS) {
        match stats::decode_stats(section) {
            Ok(decoded) => {
                player.set_stats(decoded);
                report.applied.push(Section::Stats);
            }
            Err(err) => report.skipped.push((Section::Stats, err)),
        }
    }

    report
}

/// Serialize the toggled sections as text, compact or pretty
pub fn serialize_player_text<A: PlayerAccess>(
    player: &A,
    toggle: &impl SerializeToggle,
    pretty: bool,
    indent: usize,
) -> String {
    to_text(&serialize_player(player, toggle), pretty, indent)
}

/// Render a snapshot document as text
pub fn to_text(doc: &Value, pretty: bool, indent: usize) -> String {
    if !pretty {
        return doc.to_string();
    }
    let pad = " ".repeat(indent);
    let formatter = PrettyFormatter::with_indent(pad.as_bytes());
    let mut out = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    if doc.serialize(&mut serializer).is_err() {
        return doc.to_string();
    }
    String::from_utf8(out).unwrap_or_else(|_| doc.to_string())
}

/// Parse snapshot text into a document
pub fn parse_snapshot(text: &str) -> Result<Value, FormatError> {
    Ok(serde_json::from_str(text)?)
}

/// Parse snapshot text and apply it
///
/// Malformed text returns the error without touching the subject, so the
/// caller can treat it as a no-op restore.
pub fn apply_snapshot_text<A: PlayerAccess>(
    text: &str,
    player: &mut A,
) -> Result<ApplyReport, FormatError> {
    let doc = parse_snapshot(text)?;
    Ok(apply_snapshot(&doc, player))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::{RefreshRequest, WorldPos};
    use crate::inventory::{ARMOR_SIZE, ENDER_CHEST_SIZE, MAIN_SIZE};
    use crate::stats::PlayerStats;
    use gear_core::{ItemKind, ItemSlot};
    use serde_json::json;

    #[derive(Debug, Clone)]
    struct TestPlayer {
        contents: Vec<ItemSlot>,
        armor: Vec<ItemSlot>,
        ender: Vec<ItemSlot>,
        stats: PlayerStats,
        refreshes: Vec<RefreshRequest>,
    }

    impl TestPlayer {
        fn new() -> Self {
            TestPlayer {
                contents: vec![ItemSlot::empty(); MAIN_SIZE],
                armor: vec![ItemSlot::empty(); ARMOR_SIZE],
                ender: vec![ItemSlot::empty(); ENDER_CHEST_SIZE],
                stats: PlayerStats::default(),
                refreshes: Vec::new(),
            }
        }

        fn geared() -> Self {
            let mut player = Self::new();
            player.contents[0] = ItemSlot::new(ItemKind::DiamondSword, 1).with_wear(100);
            player.contents[10] = ItemSlot::new(ItemKind::Bread, 7);
            player.armor[3] = ItemSlot::new(ItemKind::IronHelmet, 1).with_wear(20);
            player.ender[5] = ItemSlot::new(ItemKind::Diamond, 12);
            player.stats.level = 14;
            player.stats.health = 9.5;
            player
        }
    }

    impl PlayerAccess for TestPlayer {
        fn contents(&self) -> Vec<ItemSlot> {
            self.contents.clone()
        }
        fn set_contents(&mut self, slots: Vec<ItemSlot>) {
            self.contents = slots;
        }
        fn armor(&self) -> Vec<ItemSlot> {
            self.armor.clone()
        }
        fn set_armor(&mut self, slots: Vec<ItemSlot>) {
            self.armor = slots;
        }
        fn ender_chest(&self) -> Vec<ItemSlot> {
            self.ender.clone()
        }
        fn set_ender_chest(&mut self, slots: Vec<ItemSlot>) {
            self.ender = slots;
        }
        fn stats(&self) -> PlayerStats {
            self.stats.clone()
        }
        fn set_stats(&mut self, stats: PlayerStats) {
            self.stats = stats;
        }
        fn request_refresh(&mut self, request: RefreshRequest) {
            self.refreshes.push(request);
        }
        fn drop_at(&mut self, _position: WorldPos, _item: ItemSlot) {}
    }

    fn all_on(_key: &str) -> bool {
        true
    }

    #[test]
    fn test_serialize_has_all_toggled_sections() {
        let player = TestPlayer::geared();
        let doc = serialize_player(&player, &all_on);
        let root = doc.as_object().unwrap();
        assert!(root.contains_key(SECTION_ENDER_CHEST));
        assert!(root.contains_key(SECTION_INVENTORY));
        assert!(root.contains_key(SECTION_STATS));
    }

    #[test]
    fn test_toggle_omits_sections() {
        let player = TestPlayer::geared();
        let toggle = |key: &str| key != TOGGLE_STATS;
        let doc = serialize_player(&player, &toggle);
        let root = doc.as_object().unwrap();
        assert!(root.contains_key(SECTION_INVENTORY));
        assert!(!root.contains_key(SECTION_STATS));
    }

    #[test]
    fn test_apply_round_trip() {
        let source = TestPlayer::geared();
        let doc = serialize_player(&source, &all_on);

        let mut target = TestPlayer::new();
        let report = apply_snapshot(&doc, &mut target);

        assert!(report.is_clean());
        assert_eq!(target.contents, source.contents);
        assert_eq!(target.armor, source.armor);
        assert_eq!(target.ender, source.ender);
        assert_eq!(target.stats, source.stats);
    }

    #[test]
    fn test_apply_empty_document_is_noop() {
        let mut player = TestPlayer::geared();
        let before = player.clone();

        let report = apply_snapshot(&json!({}), &mut player);

        assert!(report.is_clean());
        assert!(report.applied.is_empty());
        assert_eq!(player.contents, before.contents);
        assert_eq!(player.armor, before.armor);
        assert_eq!(player.ender, before.ender);
        assert_eq!(player.stats, before.stats);
    }

    #[test]
    fn test_absent_sections_left_untouched() {
        let source = TestPlayer::geared();
        let toggle = |key: &str| key == TOGGLE_STATS;
        let doc = serialize_player(&source, &toggle);

        let mut target = TestPlayer::new();
        target.contents[4] = ItemSlot::new(ItemKind::Torch, 16);
        let report = apply_snapshot(&doc, &mut target);

        assert_eq!(report.applied, vec![Section::Stats]);
        assert_eq!(target.stats, source.stats);
        assert_eq!(target.contents[4], ItemSlot::new(ItemKind::Torch, 16));
    }

    #[test]
    fn test_corrupt_section_does_not_block_others() {
        let doc = json!({
            "inventory": { "main": { "0": { "kind": "unobtainium_sword", "amount": 1 } } },
            "stats": { "level": 3 },
        });

        let mut player = TestPlayer::new();
        let report = apply_snapshot(&doc, &mut player);

        assert_eq!(report.applied, vec![Section::Stats]);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].0, Section::Inventory);
        assert_eq!(player.stats.level, 3);
        assert!(player.contents.iter().all(ItemSlot::is_empty));
    }

    #[test]
    fn test_malformed_text_is_noop() {
        let mut player = TestPlayer::geared();
        let before = player.clone();

        let result = apply_snapshot_text("{not json", &mut player);

        assert!(result.is_err());
        assert_eq!(player.contents, before.contents);
        assert_eq!(player.stats, before.stats);
    }

    #[test]
    fn test_text_round_trip_compact_and_pretty() {
        let source = TestPlayer::geared();
        for pretty in [false, true] {
            let text = serialize_player_text(&source, &all_on, pretty, DEFAULT_INDENT);
            let mut target = TestPlayer::new();
            let report = apply_snapshot_text(&text, &mut target).unwrap();
            assert!(report.is_clean());
            assert_eq!(target.contents, source.contents);
            assert_eq!(target.stats, source.stats);
        }
    }

    #[test]
    fn test_pretty_text_uses_indent_width() {
        let player = TestPlayer::geared();
        let text = serialize_player_text(&player, &all_on, true, 5);
        assert!(text.contains('\n'));
        assert!(text.lines().any(|line| {
            line.starts_with("     ") && !line.starts_with("      ")
        }));

        let compact = serialize_player_text(&player, &all_on, false, 5);
        assert!(!compact.contains('\n'));
    }

    #[test]
    fn test_non_mapping_document_applies_nothing() {
        let mut player = TestPlayer::geared();
        let before = player.clone();
        let report = apply_snapshot(&json!("nothing here"), &mut player);
        assert!(report.applied.is_empty());
        assert!(report.is_clean());
        assert_eq!(player.contents, before.contents);
    }
}
