use serde::{Deserialize, Serialize};
use std::fmt;

/// Recognized item kinds
///
/// The serde names double as the wire names used by the inventory codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// The empty slot
    Air,
    // Wood tools
    WoodSword,
    WoodSpade,
    WoodPickaxe,
    WoodAxe,
    WoodHoe,
    // Stone tools
    StoneSword,
    StoneSpade,
    StonePickaxe,
    StoneAxe,
    StoneHoe,
    // Iron tools
    IronSword,
    IronSpade,
    IronPickaxe,
    IronAxe,
    IronHoe,
    // Gold tools
    GoldSword,
    GoldSpade,
    GoldPickaxe,
    GoldAxe,
    GoldHoe,
    // Diamond tools
    DiamondSword,
    DiamondSpade,
    DiamondPickaxe,
    DiamondAxe,
    DiamondHoe,
    // Leather armor
    LeatherHelmet,
    LeatherChestplate,
    LeatherLeggings,
    LeatherBoots,
    // Chainmail armor
    ChainmailHelmet,
    ChainmailChestplate,
    ChainmailLeggings,
    ChainmailBoots,
    // Iron armor
    IronHelmet,
    IronChestplate,
    IronLeggings,
    IronBoots,
    // Gold armor
    GoldHelmet,
    GoldChestplate,
    GoldLeggings,
    GoldBoots,
    // Diamond armor
    DiamondHelmet,
    DiamondChestplate,
    DiamondLeggings,
    DiamondBoots,
    // Damageable utility items (no gear category)
    Bow,
    FishingRod,
    FlintAndSteel,
    Shears,
    // Stackables
    Arrow,
    Bread,
    Apple,
    Stick,
    Torch,
    Cobblestone,
    Dirt,
    Coal,
    Feather,
    Bone,
    EnderPearl,
    IronIngot,
    GoldIngot,
    Diamond,
    Egg,
    RottenFlesh,
}

impl ItemKind {
    /// Get all recognized kinds
    pub fn all() -> &'static [ItemKind] {
        use ItemKind::*;
        &[
            Air,
            WoodSword, WoodSpade, WoodPickaxe, WoodAxe, WoodHoe,
            StoneSword, StoneSpade, StonePickaxe, StoneAxe, StoneHoe,
            IronSword, IronSpade, IronPickaxe, IronAxe, IronHoe,
            GoldSword, GoldSpade, GoldPickaxe, GoldAxe, GoldHoe,
            DiamondSword, DiamondSpade, DiamondPickaxe, DiamondAxe, DiamondHoe,
            LeatherHelmet, LeatherChestplate, LeatherLeggings, LeatherBoots,
            ChainmailHelmet, ChainmailChestplate, ChainmailLeggings, ChainmailBoots,
            IronHelmet, IronChestplate, IronLeggings, IronBoots,
            GoldHelmet, GoldChestplate, GoldLeggings, GoldBoots,
            DiamondHelmet, DiamondChestplate, DiamondLeggings, DiamondBoots,
            Bow, FishingRod, FlintAndSteel, Shears,
            Arrow, Bread, Apple, Stick, Torch, Cobblestone, Dirt, Coal,
            Feather, Bone, EnderPearl, IronIngot, GoldIngot, Diamond, Egg,
            RottenFlesh,
        ]
    }

    /// The wire name of this kind, matching its serde name
    pub fn name(self) -> &'static str {
        use ItemKind::*;
        match self {
            Air => "air",
            WoodSword => "wood_sword",
            WoodSpade => "wood_spade",
            WoodPickaxe => "wood_pickaxe",
            WoodAxe => "wood_axe",
            WoodHoe => "wood_hoe",
            StoneSword => "stone_sword",
            StoneSpade => "stone_spade",
            StonePickaxe => "stone_pickaxe",
            StoneAxe => "stone_axe",
            StoneHoe => "stone_hoe",
            IronSword => "iron_sword",
            IronSpade => "iron_spade",
            IronPickaxe => "iron_pickaxe",
            IronAxe => "iron_axe",
            IronHoe => "iron_hoe",
            GoldSword => "gold_sword",
            GoldSpade => "gold_spade",
            GoldPickaxe => "gold_pickaxe",
            GoldAxe => "gold_axe",
            GoldHoe => "gold_hoe",
            DiamondSword => "diamond_sword",
            DiamondSpade => "diamond_spade",
            DiamondPickaxe => "diamond_pickaxe",
            DiamondAxe => "diamond_axe",
            DiamondHoe => "diamond_hoe",
            LeatherHelmet => "leather_helmet",
            LeatherChestplate => "leather_chestplate",
            LeatherLeggings => "leather_leggings",
            LeatherBoots => "leather_boots",
            ChainmailHelmet => "chainmail_helmet",
            ChainmailChestplate => "chainmail_chestplate",
            ChainmailLeggings => "chainmail_leggings",
            ChainmailBoots => "chainmail_boots",
            IronHelmet => "iron_helmet",
            IronChestplate => "iron_chestplate",
            IronLeggings => "iron_leggings",
            IronBoots => "iron_boots",
            GoldHelmet => "gold_helmet",
            GoldChestplate => "gold_chestplate",
            GoldLeggings => "gold_leggings",
            GoldBoots => "gold_boots",
            DiamondHelmet => "diamond_helmet",
            DiamondChestplate => "diamond_chestplate",
            DiamondLeggings => "diamond_leggings",
            DiamondBoots => "diamond_boots",
            Bow => "bow",
            FishingRod => "fishing_rod",
            FlintAndSteel => "flint_and_steel",
            Shears => "shears",
            Arrow => "arrow",
            Bread => "bread",
            Apple => "apple",
            Stick => "stick",
            Torch => "torch",
            Cobblestone => "cobblestone",
            Dirt => "dirt",
            Coal => "coal",
            Feather => "feather",
            Bone => "bone",
            EnderPearl => "ender_pearl",
            IronIngot => "iron_ingot",
            GoldIngot => "gold_ingot",
            Diamond => "diamond",
            Egg => "egg",
            RottenFlesh => "rotten_flesh",
        }
    }

    /// Look up a kind by its wire name
    pub fn from_name(name: &str) -> Option<ItemKind> {
        ItemKind::all().iter().copied().find(|kind| kind.name() == name)
    }

    /// Maximum durability of this kind; 0 for kinds that carry no durability
    pub fn max_durability(self) -> u16 {
        use ItemKind::*;
        match self {
            WoodSword | WoodSpade | WoodPickaxe | WoodAxe | WoodHoe => 59,
            StoneSword | StoneSpade | StonePickaxe | StoneAxe | StoneHoe => 131,
            IronSword | IronSpade | IronPickaxe | IronAxe | IronHoe => 250,
            GoldSword | GoldSpade | GoldPickaxe | GoldAxe | GoldHoe => 32,
            DiamondSword | DiamondSpade | DiamondPickaxe | DiamondAxe | DiamondHoe => 1561,
            LeatherHelmet => 55,
            LeatherChestplate => 80,
            LeatherLeggings => 75,
            LeatherBoots => 65,
            ChainmailHelmet | IronHelmet => 165,
            ChainmailChestplate | IronChestplate => 240,
            ChainmailLeggings | IronLeggings => 225,
            ChainmailBoots | IronBoots => 195,
            GoldHelmet => 77,
            GoldChestplate => 112,
            GoldLeggings => 105,
            GoldBoots => 91,
            DiamondHelmet => 363,
            DiamondChestplate => 528,
            DiamondLeggings => 495,
            DiamondBoots => 429,
            Bow => 384,
            FishingRod | FlintAndSteel => 64,
            Shears => 238,
            _ => 0,
        }
    }

    /// Whether this kind accumulates wear at all
    pub fn is_damageable(self) -> bool {
        self.max_durability() > 1
    }

    /// The equipment category this kind belongs to, if any
    ///
    /// Pickaxes belong to the axe family and classify as tools.
    pub fn category(self) -> Option<GearCategory> {
        use ItemKind::*;
        Some(match self {
            WoodSword | StoneSword | IronSword | GoldSword | DiamondSword => GearCategory::Sword,
            WoodAxe | StoneAxe | IronAxe | GoldAxe | DiamondAxe => GearCategory::Axe,
            WoodPickaxe | StonePickaxe | IronPickaxe | GoldPickaxe | DiamondPickaxe => {
                GearCategory::Pickaxe
            }
            WoodSpade | StoneSpade | IronSpade | GoldSpade | DiamondSpade => GearCategory::Spade,
            WoodHoe | StoneHoe | IronHoe | GoldHoe | DiamondHoe => GearCategory::Hoe,
            LeatherHelmet | ChainmailHelmet | IronHelmet | GoldHelmet | DiamondHelmet => {
                GearCategory::Helmet
            }
            LeatherChestplate | ChainmailChestplate | IronChestplate | GoldChestplate
            | DiamondChestplate => GearCategory::Chestplate,
            LeatherLeggings | ChainmailLeggings | IronLeggings | GoldLeggings
            | DiamondLeggings => GearCategory::Leggings,
            LeatherBoots | ChainmailBoots | IronBoots | GoldBoots | DiamondBoots => {
                GearCategory::Boots
            }
            _ => return None,
        })
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Equipment category of an item kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GearCategory {
    Sword,
    Axe,
    Pickaxe,
    Spade,
    Hoe,
    Helmet,
    Chestplate,
    Leggings,
    Boots,
}

impl GearCategory {
    /// The class this category belongs to, selecting which decay rate and
    /// death-drop rule applies
    pub fn class(self) -> GearClass {
        match self {
            GearCategory::Sword
            | GearCategory::Axe
            | GearCategory::Pickaxe
            | GearCategory::Spade
            | GearCategory::Hoe => GearClass::Tool,
            GearCategory::Helmet
            | GearCategory::Chestplate
            | GearCategory::Leggings
            | GearCategory::Boots => GearClass::Armor,
        }
    }
}

/// Coarse tool/armor classification of equipment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GearClass {
    Tool,
    Armor,
}
