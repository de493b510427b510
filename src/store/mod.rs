//! Enchantment and suffix candidate store
//!
//! The query-style port the resolver talks to. The real deployment
//! backs this with the host's relational world tables; here the
//! [`TableStore`] implementation serves in-memory rows loaded from RON
//! with built-in defaults, which keeps the resolver unit-testable.

pub mod defaults;
pub mod table;

use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::facts::ItemClass;
use crate::masks::{AttributeMask, CategoryMask, SubclassMask};

pub use table::{StoreData, TableStore};

pub type EnchantId = u32;
pub type SuffixId = u32;

/// One selectable enchantment row.
///
/// A `min_level`/`max_level` of 0/0 means unbounded; `item_class` of
/// `None`, a zero subclass mask, and a zero category mask are all
/// wildcards on their axis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnchantmentRow {
    pub id: EnchantId,
    pub tier: u8,
    pub min_level: u32,
    pub max_level: u32,
    pub item_class: Option<ItemClass>,
    pub subclass_mask: SubclassMask,
    pub category_mask: CategoryMask,
}

impl EnchantmentRow {
    fn level_in_range(&self, level: u32) -> bool {
        (self.min_level == 0 && self.max_level == 0)
            || (self.min_level <= level && level <= self.max_level)
    }

    fn class_matches(&self, class: ItemClass, subclass_bit: u32) -> bool {
        match self.item_class {
            None => true,
            Some(c) => {
                c == class && (self.subclass_mask.is_any() || self.subclass_mask.matches_bit(subclass_bit))
            }
        }
    }

    pub fn matches(&self, query: &EnchantQuery) -> bool {
        match *query {
            EnchantQuery::Masked {
                level,
                item_class,
                subclass_bit,
                categories,
            } => {
                self.level_in_range(level)
                    && self.class_matches(item_class, subclass_bit)
                    && (self.category_mask.is_wildcard()
                        || self.category_mask.intersects(categories))
            }
            EnchantQuery::Tiered {
                tier,
                item_class,
                subclass_bit,
            } => self.tier == tier && self.class_matches(item_class, subclass_bit),
        }
    }
}

/// Definition row for an enchantment: requirement surface plus the
/// localized display name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnchantmentDef {
    pub id: EnchantId,
    pub name: String,
    /// Skill line required to benefit, 0 for none.
    pub required_skill: u16,
    pub required_skill_value: u16,
    pub required_level: u32,
}

/// One random-suffix group: a named bundle of up to five enchantments
/// with per-effect allocation percentages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuffixRow {
    pub id: SuffixId,
    pub name: String,
    pub tier: u8,
    pub min_level: u32,
    pub max_level: u32,
    pub item_class: Option<ItemClass>,
    pub subclass_mask: SubclassMask,
    pub category_mask: CategoryMask,
    pub attribute_mask: AttributeMask,
    pub enchants: Vec<EnchantId>,
    pub allocation_pcts: Vec<u32>,
}

impl SuffixRow {
    pub fn matches(&self, query: &SuffixQuery) -> bool {
        let level_ok = (self.min_level == 0 && self.max_level == 0)
            || (self.min_level <= query.level && query.level <= self.max_level);
        let class_ok = match self.item_class {
            None => true,
            Some(c) => {
                c == query.item_class
                    && (self.subclass_mask.is_any()
                        || self.subclass_mask.matches_bit(query.subclass_bit))
            }
        };
        let category_ok =
            self.category_mask.is_wildcard() || self.category_mask.intersects(query.categories);
        // the attribute match is strict: the item's bits must intersect
        // the candidate's allowed set and must not exceed it. A
        // wildcard on either side lifts the constraint.
        let attribute_ok = self.attribute_mask.is_wildcard()
            || query.attributes.is_wildcard()
            || (query.attributes.intersects(self.attribute_mask)
                && query.attributes.is_subset_of(self.attribute_mask));
        self.tier == query.tier && level_ok && class_ok && category_ok && attribute_ok
    }
}

/// Filter for a single-enchantment pick.
#[derive(Debug, Clone, Copy)]
pub enum EnchantQuery {
    Masked {
        level: u32,
        item_class: ItemClass,
        subclass_bit: u32,
        categories: CategoryMask,
    },
    Tiered {
        tier: u8,
        item_class: ItemClass,
        subclass_bit: u32,
    },
}

/// Filter for a random-suffix pick.
#[derive(Debug, Clone, Copy)]
pub struct SuffixQuery {
    pub tier: u8,
    pub level: u32,
    pub item_class: ItemClass,
    pub subclass_bit: u32,
    pub categories: CategoryMask,
    pub attributes: AttributeMask,
}

/// Scaling value converting a suffix allocation percentage into final
/// stat points for an item of the given level.
pub fn suffix_factor(item_level: u32) -> u32 {
    (item_level * 2).max(1)
}

/// Stat points one allocation percentage yields at the given factor.
pub fn allocation_points(allocation_pct: u32, factor: u32) -> u32 {
    allocation_pct * factor / 10_000
}

/// Query port over the enchantment/suffix tables. Both pick operations
/// return one row chosen uniformly at random among all matches, the
/// way the relational layer's `ORDER BY RAND() LIMIT 1` behaves.
pub trait EnchantStore {
    fn pick_enchantment(&self, query: &EnchantQuery, rng: &mut dyn RngCore) -> Option<EnchantId>;
    fn pick_suffix(&self, query: &SuffixQuery, rng: &mut dyn RngCore) -> Option<SuffixId>;
    fn enchantment_def(&self, id: EnchantId) -> Option<&EnchantmentDef>;
    fn suffix(&self, id: SuffixId) -> Option<&SuffixRow>;
}
