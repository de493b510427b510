//! Item facts
//!
//! Class/subclass/slot taxonomy, quality tiers, and the raw stat list
//! as loaded from the host's item template.

use serde::{Deserialize, Serialize};

/// Number of property enchantment slots on an item. Random enchants
/// share these with host-assigned random properties.
pub const PROPERTY_SLOTS: usize = 5;

/// Top-level item class. Only weapons and armor are ever enchanted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemClass {
    Weapon,
    Armor,
    Other,
}

/// Weapon subclasses. Ordinals match the host's item template table and
/// feed the subclass bitmask filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum WeaponSubclass {
    Axe = 0,
    Axe2 = 1,
    Bow = 2,
    Gun = 3,
    Mace = 4,
    Mace2 = 5,
    Polearm = 6,
    Sword = 7,
    Sword2 = 8,
    Obsolete = 9,
    Staff = 10,
    Exotic = 11,
    Exotic2 = 12,
    Fist = 13,
    Misc = 14,
    Dagger = 15,
    Thrown = 16,
    Spear = 17,
    Crossbow = 18,
    Wand = 19,
    FishingPole = 20,
}

/// Armor subclasses, relics included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum ArmorSubclass {
    Misc = 0,
    Cloth = 1,
    Leather = 2,
    Mail = 3,
    Plate = 4,
    Buckler = 5,
    Shield = 6,
    Libram = 7,
    Idol = 8,
    Totem = 9,
    Sigil = 10,
}

/// Class + subclass pair, fixed for the lifetime of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    Weapon(WeaponSubclass),
    Armor(ArmorSubclass),
    Other,
}

impl ItemKind {
    pub fn class(&self) -> ItemClass {
        match self {
            ItemKind::Weapon(_) => ItemClass::Weapon,
            ItemKind::Armor(_) => ItemClass::Armor,
            ItemKind::Other => ItemClass::Other,
        }
    }

    /// Subclass ordinal within its class, for bitmask filters.
    pub fn subclass_ordinal(&self) -> u32 {
        match self {
            ItemKind::Weapon(w) => *w as u32,
            ItemKind::Armor(a) => *a as u32,
            ItemKind::Other => 0,
        }
    }

    pub fn subclass_bit(&self) -> u32 {
        1 << self.subclass_ordinal()
    }
}

/// Inventory slot an item equips into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InventoryType {
    NonEquip,
    Head,
    Neck,
    Shoulders,
    Shirt,
    Chest,
    Waist,
    Legs,
    Feet,
    Wrists,
    Hands,
    Finger,
    Trinket,
    OneHand,
    Shield,
    Ranged,
    Cloak,
    TwoHand,
    Bag,
    Tabard,
    Robe,
    MainHand,
    OffHand,
    Holdable,
    Ammo,
    Thrown,
    RangedRight,
    Quiver,
    Relic,
}

impl InventoryType {
    /// Slots anyone can wear regardless of class proficiency.
    pub fn is_universal(&self) -> bool {
        matches!(
            self,
            InventoryType::Neck
                | InventoryType::Finger
                | InventoryType::Trinket
                | InventoryType::Cloak
                | InventoryType::Tabard
                | InventoryType::Shirt
        )
    }
}

/// Item quality tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Quality {
    Poor,
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Quality {
    pub fn ordinal(&self) -> u32 {
        match self {
            Quality::Poor => 0,
            Quality::Common => 1,
            Quality::Uncommon => 2,
            Quality::Rare => 3,
            Quality::Epic => 4,
            Quality::Legendary => 5,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Quality::Poor => "Poor",
            Quality::Common => "Common",
            Quality::Uncommon => "Uncommon",
            Quality::Rare => "Rare",
            Quality::Epic => "Epic",
            Quality::Legendary => "Legendary",
        }
    }
}

/// Stat types an item template can carry. Only a subset is
/// combat-relevant for classification; the rest are deliberately
/// ignored by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatType {
    Mana,
    Health,
    Agility,
    Strength,
    Intellect,
    Spirit,
    Stamina,
    DefenseRating,
    DodgeRating,
    ParryRating,
    BlockRating,
    BlockValue,
    HitMeleeRating,
    HitRangedRating,
    HitSpellRating,
    CritMeleeRating,
    CritRangedRating,
    CritSpellRating,
    HitTakenMeleeRating,
    HitTakenRangedRating,
    HitTakenSpellRating,
    CritTakenMeleeRating,
    CritTakenRangedRating,
    CritTakenSpellRating,
    HasteMeleeRating,
    HasteRangedRating,
    HasteSpellRating,
    HitRating,
    CritRating,
    HitTakenRating,
    CritTakenRating,
    ResilienceRating,
    HasteRating,
    ExpertiseRating,
    AttackPower,
    RangedAttackPower,
    SpellHealingDone,
    SpellDamageDone,
    ManaRegeneration,
    ArmorPenetrationRating,
    SpellPower,
    HealthRegen,
    SpellPenetration,
}

/// Snapshot of one item instance plus its immutable template facts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemFacts {
    pub id: u32,
    pub name: String,
    pub kind: ItemKind,
    pub inventory_type: InventoryType,
    pub quality: Quality,
    pub item_level: u32,
    pub required_level: u32,
    pub stats: Vec<StatType>,
    /// Enchantment id per property slot, zero when empty.
    pub property_enchants: [u32; PROPERTY_SLOTS],
    /// Host random-property/suffix id; non-zero means this module (or
    /// the host's own random-property roll) already touched the item.
    pub random_property_id: u32,
}

impl ItemFacts {
    /// Unoccupied property slots, highest slot first. The host's own
    /// random properties fill the low slots first, so rolling from the
    /// top avoids colliding with them.
    pub fn free_property_slots(&self) -> Vec<usize> {
        (0..PROPERTY_SLOTS)
            .rev()
            .filter(|&s| self.property_enchants[s] == 0)
            .collect()
    }

    pub fn set_enchantment(&mut self, slot: usize, enchant_id: u32) {
        self.property_enchants[slot] = enchant_id;
    }

    pub fn has_random_property(&self) -> bool {
        self.random_property_id != 0
    }
}
