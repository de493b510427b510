//! Built-in candidate tables
//!
//! Default enchantment and suffix rows used when no external RON table
//! is present. Five tiers per category group, with level bands that
//! overlap so neighboring brackets both have candidates.

use crate::facts::ItemClass;
use crate::masks::{Attribute, AttributeMask, CategoryMask, EnchantCategory, SubclassMask};

use super::table::StoreData;
use super::{EnchantmentDef, EnchantmentRow, SuffixRow};

const TIER_LEVEL_BANDS: [(u32, u32); 5] = [(1, 20), (15, 35), (30, 50), (45, 65), (60, 255)];

const ROMAN: [&str; 5] = ["I", "II", "III", "IV", "V"];

struct Group {
    name: &'static str,
    item_class: Option<ItemClass>,
    categories: &'static [EnchantCategory],
}

/// Category groups the default enchantment table covers. The last
/// entry is the wildcard fallback every filter can land on.
const GROUPS: [Group; 8] = [
    Group {
        name: "Giant's Might",
        item_class: None,
        categories: &[EnchantCategory::Strength, EnchantCategory::Melee],
    },
    Group {
        name: "Swift Strikes",
        item_class: None,
        categories: &[
            EnchantCategory::Agility,
            EnchantCategory::Melee,
            EnchantCategory::Ranged,
        ],
    },
    Group {
        name: "Arcane Insight",
        item_class: None,
        categories: &[EnchantCategory::Intellect, EnchantCategory::Caster],
    },
    Group {
        name: "Mending Light",
        item_class: None,
        categories: &[EnchantCategory::Healer, EnchantCategory::Intellect],
    },
    Group {
        name: "Bulwark",
        item_class: Some(ItemClass::Armor),
        categories: &[
            EnchantCategory::TankDefense,
            EnchantCategory::TankShieldBlock,
        ],
    },
    Group {
        name: "Elemental Fury",
        item_class: None,
        categories: &[
            EnchantCategory::FireDamage,
            EnchantCategory::FrostDamage,
            EnchantCategory::NatureDamage,
            EnchantCategory::ShadowDamage,
            EnchantCategory::ArcaneDamage,
            EnchantCategory::HolyDamage,
        ],
    },
    Group {
        name: "Keen Edge",
        item_class: Some(ItemClass::Weapon),
        categories: &[EnchantCategory::Melee, EnchantCategory::Strength],
    },
    Group {
        name: "Traveler's Fortune",
        item_class: None,
        categories: &[],
    },
];

fn enchant_id(group_index: u32, tier: u32) -> u32 {
    8000 + group_index * 10 + tier
}

/// The default tables.
pub fn default_store_data() -> StoreData {
    let mut enchantments = Vec::new();
    let mut definitions = Vec::new();

    for (gi, group) in GROUPS.iter().enumerate() {
        for tier in 1..=5u32 {
            let (min_level, max_level) = TIER_LEVEL_BANDS[(tier - 1) as usize];
            let id = enchant_id(gi as u32, tier);
            enchantments.push(EnchantmentRow {
                id,
                tier: tier as u8,
                min_level,
                max_level,
                item_class: group.item_class,
                subclass_mask: SubclassMask::ANY,
                category_mask: CategoryMask::from_categories(group.categories.iter().copied()),
            });
            definitions.push(EnchantmentDef {
                id,
                name: format!("{} {}", group.name, ROMAN[(tier - 1) as usize]),
                required_skill: 0,
                required_skill_value: 0,
                // top-tier enchants want a seasoned character
                required_level: if tier == 5 { 60 } else { 0 },
            });
        }
    }

    let suffixes = default_suffixes(&mut definitions);

    StoreData {
        enchantments,
        definitions,
        suffixes,
    }
}

struct SuffixTemplate {
    name: &'static str,
    categories: &'static [EnchantCategory],
    attributes: &'static [Attribute],
}

const SUFFIX_TEMPLATES: [SuffixTemplate; 6] = [
    SuffixTemplate {
        name: "of the Bear",
        categories: &[EnchantCategory::Strength, EnchantCategory::TankDefense],
        attributes: &[Attribute::Strength, Attribute::Stamina],
    },
    SuffixTemplate {
        name: "of the Monkey",
        categories: &[EnchantCategory::Agility, EnchantCategory::Ranged],
        attributes: &[Attribute::Agility, Attribute::Stamina],
    },
    SuffixTemplate {
        name: "of the Eagle",
        categories: &[EnchantCategory::Intellect, EnchantCategory::Caster],
        attributes: &[Attribute::Intellect, Attribute::Stamina],
    },
    SuffixTemplate {
        name: "of the Owl",
        categories: &[EnchantCategory::Healer, EnchantCategory::Intellect],
        attributes: &[Attribute::Intellect, Attribute::Spirit],
    },
    SuffixTemplate {
        name: "of the Champion",
        categories: &[EnchantCategory::Melee, EnchantCategory::Strength],
        attributes: &[Attribute::Strength, Attribute::AttackPower],
    },
    SuffixTemplate {
        name: "of the Invoker",
        categories: &[
            EnchantCategory::Caster,
            EnchantCategory::FireDamage,
            EnchantCategory::FrostDamage,
            EnchantCategory::ArcaneDamage,
        ],
        attributes: &[Attribute::Intellect, Attribute::SpellPower],
    },
];

fn default_suffixes(definitions: &mut Vec<EnchantmentDef>) -> Vec<SuffixRow> {
    let mut suffixes = Vec::new();
    for (si, tmpl) in SUFFIX_TEMPLATES.iter().enumerate() {
        // one stat enchant per attribute, shared across tiers of the
        // same suffix family
        let mut enchants = Vec::new();
        for (ai, attr) in tmpl.attributes.iter().enumerate() {
            let id = 9000 + (si as u32) * 10 + ai as u32;
            definitions.push(EnchantmentDef {
                id,
                name: format!("{:?} bonus {}", attr, tmpl.name),
                required_skill: 0,
                required_skill_value: 0,
                required_level: 0,
            });
            enchants.push(id);
        }
        for tier in 1..=5u32 {
            // suffix tiers are quality brackets, not level brackets;
            // leave the level range unbounded
            suffixes.push(SuffixRow {
                id: 500 + (si as u32) * 10 + tier,
                name: tmpl.name.to_string(),
                tier: tier as u8,
                min_level: 0,
                max_level: 0,
                item_class: None,
                subclass_mask: SubclassMask::ANY,
                category_mask: CategoryMask::from_categories(tmpl.categories.iter().copied()),
                attribute_mask: AttributeMask::from_attributes(tmpl.attributes.iter().copied()),
                enchants: enchants.clone(),
                // tier scales how much of the budget each effect gets
                allocation_pcts: vec![1500 + 700 * tier; enchants.len()],
            });
        }
    }
    suffixes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_tier_has_candidates() {
        let data = default_store_data();
        for tier in 1..=5u8 {
            assert!(data.enchantments.iter().any(|r| r.tier == tier));
            assert!(data.suffixes.iter().any(|s| s.tier == tier));
        }
    }

    #[test]
    fn test_wildcard_group_present() {
        let data = default_store_data();
        assert!(data
            .enchantments
            .iter()
            .any(|r| r.category_mask.is_wildcard() && r.item_class.is_none()));
    }

    #[test]
    fn test_ids_unique() {
        let data = default_store_data();
        let mut ids: Vec<u32> = data.definitions.iter().map(|d| d.id).collect();
        ids.sort_unstable();
        let before = ids.len();
        ids.dedup();
        assert_eq!(before, ids.len());
    }
}
