//! Bitmask encodings for enchant categories and attributes
//!
//! Categories and attributes are enumerated with stable ordinals; a mask
//! is the OR of `1 << ordinal` for every member of a set. A zero mask is
//! a wildcard that matches everything on the candidate side.

use serde::{Deserialize, Serialize};

/// Gameplay category an enchantment is aimed at.
///
/// Ordinals are part of the data format: candidate tables store masks
/// built from these bit positions, so the order must never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum EnchantCategory {
    Strength = 0,
    Agility = 1,
    Intellect = 2,
    TankDefense = 3,
    TankShieldBlock = 4,
    Melee = 5,
    Ranged = 6,
    Caster = 7,
    HolyDamage = 8,
    ShadowDamage = 9,
    FrostDamage = 10,
    NatureDamage = 11,
    FireDamage = 12,
    ArcaneDamage = 13,
    Healer = 14,
}

impl EnchantCategory {
    pub fn bit(self) -> u32 {
        1 << self as u32
    }

    /// Attributes a random suffix of this category is allowed to roll.
    ///
    /// An estimate of what would be useful on typical builds, not an
    /// exhaustive stat model.
    pub fn attributes(self) -> &'static [Attribute] {
        use Attribute::*;
        match self {
            EnchantCategory::Strength => &[Strength, AttackPower],
            EnchantCategory::Agility => &[Agility, AttackPower, Crit],
            EnchantCategory::Intellect => &[Intellect, SpellPower],
            EnchantCategory::TankDefense => &[Stamina, DefenseRating, Dodge, Parry],
            EnchantCategory::TankShieldBlock => &[Stamina, DefenseRating, Parry],
            EnchantCategory::Melee => &[AttackPower, Haste, Hit, Crit, Expertise],
            EnchantCategory::Ranged => &[Agility, AttackPower, Haste, Hit, Crit],
            EnchantCategory::Caster => &[Intellect, SpellPower, Haste, Hit, Crit],
            EnchantCategory::HolyDamage
            | EnchantCategory::ShadowDamage
            | EnchantCategory::FrostDamage
            | EnchantCategory::NatureDamage
            | EnchantCategory::FireDamage
            | EnchantCategory::ArcaneDamage => &[SpellPower, Haste, Crit],
            EnchantCategory::Healer => &[Intellect, Spirit, SpellPower],
        }
    }
}

/// Individual stat an enchantment or suffix can grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum Attribute {
    Strength = 0,
    Agility = 1,
    Intellect = 2,
    Spirit = 3,
    Stamina = 4,
    AttackPower = 5,
    SpellPower = 6,
    Haste = 7,
    Hit = 8,
    Crit = 9,
    Expertise = 10,
    DefenseRating = 11,
    Dodge = 12,
    Parry = 13,
}

impl Attribute {
    pub fn bit(self) -> u32 {
        1 << self as u32
    }
}

/// OR-combination of [`EnchantCategory`] bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryMask(pub u32);

impl CategoryMask {
    pub const WILDCARD: CategoryMask = CategoryMask(0);

    pub fn from_categories<I>(categories: I) -> Self
    where
        I: IntoIterator<Item = EnchantCategory>,
    {
        CategoryMask(categories.into_iter().fold(0, |m, c| m | c.bit()))
    }

    pub fn is_wildcard(self) -> bool {
        self.0 == 0
    }

    pub fn contains(self, category: EnchantCategory) -> bool {
        self.0 & category.bit() != 0
    }

    pub fn intersects(self, other: CategoryMask) -> bool {
        self.0 & other.0 != 0
    }

    pub fn union(self, other: CategoryMask) -> CategoryMask {
        CategoryMask(self.0 | other.0)
    }

    /// Attributes allowed across every category in the mask.
    pub fn attribute_mask(self) -> AttributeMask {
        let mut out = 0;
        for ord in 0..=EnchantCategory::Healer as u32 {
            if self.0 & (1 << ord) != 0 {
                // ordinal round-trip is safe: the mask only ever holds
                // bits produced from the enum
                let cat: EnchantCategory = CATEGORY_BY_ORDINAL[ord as usize];
                for attr in cat.attributes() {
                    out |= attr.bit();
                }
            }
        }
        AttributeMask(out)
    }
}

const CATEGORY_BY_ORDINAL: [EnchantCategory; 15] = [
    EnchantCategory::Strength,
    EnchantCategory::Agility,
    EnchantCategory::Intellect,
    EnchantCategory::TankDefense,
    EnchantCategory::TankShieldBlock,
    EnchantCategory::Melee,
    EnchantCategory::Ranged,
    EnchantCategory::Caster,
    EnchantCategory::HolyDamage,
    EnchantCategory::ShadowDamage,
    EnchantCategory::FrostDamage,
    EnchantCategory::NatureDamage,
    EnchantCategory::FireDamage,
    EnchantCategory::ArcaneDamage,
    EnchantCategory::Healer,
];

/// OR-combination of [`Attribute`] bits.
///
/// Matching against a candidate is stricter than for categories: the
/// item side must intersect the candidate's allowed set *and* not
/// exceed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeMask(pub u32);

impl AttributeMask {
    pub const WILDCARD: AttributeMask = AttributeMask(0);

    pub fn from_attributes<I>(attributes: I) -> Self
    where
        I: IntoIterator<Item = Attribute>,
    {
        AttributeMask(attributes.into_iter().fold(0, |m, a| m | a.bit()))
    }

    pub fn is_wildcard(self) -> bool {
        self.0 == 0
    }

    pub fn intersects(self, other: AttributeMask) -> bool {
        self.0 & other.0 != 0
    }

    pub fn is_subset_of(self, other: AttributeMask) -> bool {
        self.0 & !other.0 == 0
    }
}

/// Item subclass bit-vector used by candidate rows to restrict which
/// weapon/armor subclasses they may roll on. Zero means any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubclassMask(pub u32);

impl SubclassMask {
    pub const ANY: SubclassMask = SubclassMask(0);

    pub fn from_bits<I>(ordinals: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        SubclassMask(ordinals.into_iter().fold(0, |m, o| m | (1 << o)))
    }

    pub fn is_any(self) -> bool {
        self.0 == 0
    }

    pub fn matches_bit(self, bit: u32) -> bool {
        self.0 & bit != 0
    }
}
