//! Candidate pool resolver
//!
//! Turns an item (and optionally the acting player) into a filter and
//! asks the store for one candidate. Retries a bounded number of times
//! against transient row inconsistencies, and broadens the category
//! filter for the back half of the budget when the strict filter keeps
//! coming up empty.

use rand::Rng;

use crate::classify::{infer_spec_category_mask, item_category_mask, player_category_mask};
use crate::config::{ModuleConfig, SelectionStrategy};
use crate::facts::{ItemFacts, PlayerFacts, Quality};
use crate::masks::CategoryMask;
use crate::store::{
    allocation_points, suffix_factor, EnchantId, EnchantQuery, EnchantStore, SuffixId, SuffixQuery,
};

/// Retry budget for mask-filtered selection.
const MASKED_RETRY_BUDGET: usize = 50;
/// Retry budget for the tier-based selection scheme.
const TIERED_RETRY_BUDGET: usize = 20;

pub struct Resolver<'a> {
    store: &'a dyn EnchantStore,
    config: &'a ModuleConfig,
}

impl<'a> Resolver<'a> {
    pub fn new(store: &'a dyn EnchantStore, config: &'a ModuleConfig) -> Self {
        Resolver { store, config }
    }

    /// Level the filter brackets against: player level when known,
    /// else the item's required level, else the configured cap; then
    /// offset down by how far the quality sits below legendary.
    pub fn level_offset(&self, item: &ItemFacts, player: Option<&PlayerFacts>) -> u32 {
        let base = match player {
            Some(p) => p.level,
            None if item.required_level > 0 => item.required_level,
            None => self.config.max_player_level,
        };
        let offset = base as i64 - Quality::Legendary.ordinal() as i64
            + item.quality.ordinal() as i64;
        offset.max(1) as u32
    }

    /// The category mask the filter uses, honoring player preference
    /// and specialization inference.
    pub fn selection_mask(
        &self,
        item: &ItemFacts,
        player: Option<&PlayerFacts>,
        rng: &mut impl Rng,
    ) -> CategoryMask {
        if self.config.roll_player_preference {
            if let Some(p) = player {
                if p.can_use(item) {
                    log::debug!("using {}'s class preference mask for {}", p.name, item.name);
                    return player_category_mask(p);
                }
            }
        }
        if self.config.infer_specialization {
            return infer_spec_category_mask(item, rng);
        }
        item_category_mask(item)
    }

    /// Pick one enchantment for the item, or `None` when the pool has
    /// nothing acceptable.
    pub fn resolve_enchantment(
        &self,
        item: &ItemFacts,
        player: Option<&PlayerFacts>,
        rng: &mut impl Rng,
    ) -> Option<EnchantId> {
        match self.config.selection {
            SelectionStrategy::Masked => self.resolve_masked(item, player, rng),
            SelectionStrategy::Tiered => self.resolve_tiered(item, rng),
        }
    }

    fn resolve_masked(
        &self,
        item: &ItemFacts,
        player: Option<&PlayerFacts>,
        rng: &mut impl Rng,
    ) -> Option<EnchantId> {
        let level = self.level_offset(item, player);
        let mask = self.selection_mask(item, player, rng);
        for attempt in 0..MASKED_RETRY_BUDGET {
            // after half the budget with no acceptable candidate, stop
            // insisting on the role filter
            let categories = if attempt < MASKED_RETRY_BUDGET / 2 {
                mask
            } else {
                CategoryMask(u32::MAX)
            };
            let query = EnchantQuery::Masked {
                level,
                item_class: item.kind.class(),
                subclass_bit: item.kind.subclass_bit(),
                categories,
            };
            let Some(id) = self.store.pick_enchantment(&query, rng) else {
                continue;
            };
            if self.acceptable_for(id, player) {
                return Some(id);
            }
        }
        log::warn!(
            "no enchantment candidate for item {} after {} attempts",
            item.id,
            MASKED_RETRY_BUDGET
        );
        None
    }

    fn resolve_tiered(&self, item: &ItemFacts, rng: &mut impl Rng) -> Option<EnchantId> {
        let tier = roll_quality_tier(item.quality, rng);
        let query = EnchantQuery::Tiered {
            tier,
            item_class: item.kind.class(),
            subclass_bit: item.kind.subclass_bit(),
        };
        for _ in 0..TIERED_RETRY_BUDGET {
            if let Some(id) = self.store.pick_enchantment(&query, rng) {
                if self.store.enchantment_def(id).is_some() {
                    return Some(id);
                }
            }
        }
        None
    }

    /// Skill and level requirements against the acting player; rows
    /// whose definition is missing altogether count as transient data
    /// inconsistencies and are rejected for retry.
    fn acceptable_for(&self, id: EnchantId, player: Option<&PlayerFacts>) -> bool {
        let Some(def) = self.store.enchantment_def(id) else {
            log::warn!("enchantment {} has no definition row", id);
            return false;
        };
        let Some(p) = player else {
            return true;
        };
        if def.required_skill != 0 && p.skill_value(def.required_skill) < def.required_skill_value {
            return false;
        }
        if p.level < def.required_level {
            return false;
        }
        true
    }

    /// Pick one random-suffix group at the given tier.
    pub fn resolve_suffix(
        &self,
        item: &ItemFacts,
        player: Option<&PlayerFacts>,
        tier: u8,
        rng: &mut impl Rng,
    ) -> Option<SuffixId> {
        let level = self.level_offset(item, player);
        let mask = self.selection_mask(item, player, rng);
        let attributes = mask.attribute_mask();
        for attempt in 0..MASKED_RETRY_BUDGET {
            let query = if attempt < MASKED_RETRY_BUDGET / 2 {
                SuffixQuery {
                    tier,
                    level,
                    item_class: item.kind.class(),
                    subclass_bit: item.kind.subclass_bit(),
                    categories: mask,
                    attributes,
                }
            } else {
                SuffixQuery {
                    tier,
                    level,
                    item_class: item.kind.class(),
                    subclass_bit: item.kind.subclass_bit(),
                    categories: CategoryMask(u32::MAX),
                    attributes: crate::masks::AttributeMask::WILDCARD,
                }
            };
            let Some(id) = self.store.pick_suffix(&query, rng) else {
                continue;
            };
            if self.suffix_is_valid(id, item) {
                return Some(id);
            }
        }
        log::warn!(
            "no suffix candidate for item {} at tier {} after {} attempts",
            item.id,
            tier,
            MASKED_RETRY_BUDGET
        );
        None
    }

    /// Secondary validity: every referenced enchantment must exist and
    /// every allocation must come out to at least one stat point.
    fn suffix_is_valid(&self, id: SuffixId, item: &ItemFacts) -> bool {
        let Some(suffix) = self.store.suffix(id) else {
            return false;
        };
        if suffix.enchants.len() != suffix.allocation_pcts.len() {
            return false;
        }
        let factor = suffix_factor(item.item_level);
        for (enchant, &pct) in suffix.enchants.iter().zip(&suffix.allocation_pcts) {
            if self.store.enchantment_def(*enchant).is_none() {
                log::warn!("suffix {} references missing enchantment {}", id, enchant);
                return false;
            }
            if allocation_points(pct, factor) == 0 {
                return false;
            }
        }
        true
    }
}

/// Quality-driven rarity roll mapped onto enchant tiers 1..=5.
///
/// Bands are carried over as-is: legendary pins the roll at 93, the
/// lower qualities each roll inside their own window.
fn roll_quality_tier(quality: Quality, rng: &mut impl Rng) -> u8 {
    let norm: f64 = rng.gen_range(0.0..1.0);
    let rarity_roll = match quality {
        Quality::Poor => norm * 25.0,
        Quality::Common => norm * 50.0,
        Quality::Uncommon => 45.0 + norm * 20.0,
        Quality::Rare => 65.0 + norm * 15.0,
        Quality::Epic => 80.0 + norm * 14.0,
        Quality::Legendary => 93.0,
    } as u32;
    match rarity_roll {
        0..=44 => 1,
        45..=64 => 2,
        65..=79 => 3,
        80..=92 => 4,
        _ => 5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::{
        ArmorSubclass, InventoryType, ItemKind, PlayerClass, Specialization, StatType,
        PROPERTY_SLOTS,
    };
    use crate::config::SelectionStrategy;
    use crate::facts::ItemClass;
    use crate::masks::{EnchantCategory, SubclassMask};
    use crate::store::defaults::default_store_data;
    use crate::store::{EnchantmentDef, EnchantmentRow, StoreData, TableStore};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn plate_chest() -> ItemFacts {
        ItemFacts {
            id: 2000,
            name: "Warplate Chestguard".into(),
            kind: ItemKind::Armor(ArmorSubclass::Plate),
            inventory_type: InventoryType::Chest,
            quality: Quality::Rare,
            item_level: 65,
            required_level: 60,
            stats: vec![StatType::Strength, StatType::Stamina],
            property_enchants: [0; PROPERTY_SLOTS],
            random_property_id: 0,
        }
    }

    #[test]
    fn test_level_offset_floor_is_one() {
        let store = TableStore::with_defaults();
        let config = ModuleConfig::default();
        let resolver = Resolver::new(&store, &config);
        let mut item = plate_chest();
        item.required_level = 1;
        item.quality = Quality::Poor;
        assert_eq!(resolver.level_offset(&item, None), 1);
    }

    #[test]
    fn test_level_offset_uses_player_level() {
        let store = TableStore::with_defaults();
        let config = ModuleConfig::default();
        let resolver = Resolver::new(&store, &config);
        let player = PlayerFacts::new("Brakk", PlayerClass::Warrior, Specialization::Arms, 40);
        // 40 - 5 + 3 (rare)
        assert_eq!(resolver.level_offset(&plate_chest(), Some(&player)), 38);
    }

    #[test]
    fn test_strength_plate_resolves_to_matching_row() {
        // end-to-end scenario: level-60 plate chest, {strength,
        // stamina}, rare, preference disabled. Whatever comes back in
        // the strict phase must satisfy the strict filter.
        let data = default_store_data();
        let store = TableStore::from_data(data.clone());
        let config = ModuleConfig::default();
        let resolver = Resolver::new(&store, &config);
        let item = plate_chest();
        let mut rng = StdRng::seed_from_u64(11);
        let mask = resolver.selection_mask(&item, None, &mut rng);
        assert!(mask.contains(EnchantCategory::Strength));
        assert!(mask.contains(EnchantCategory::Melee));
        assert!(!mask.contains(EnchantCategory::Ranged));
        let strict = EnchantQuery::Masked {
            level: resolver.level_offset(&item, None),
            item_class: ItemClass::Armor,
            subclass_bit: item.kind.subclass_bit(),
            categories: mask,
        };
        for _ in 0..20 {
            let id = resolver
                .resolve_enchantment(&item, None, &mut rng)
                .expect("default tables should always yield a candidate");
            assert!(store.enchantment_def(id).is_some());
            let row = data.enchantments.iter().find(|r| r.id == id).unwrap();
            assert!(
                row.matches(&strict),
                "enchant {} does not satisfy the strict filter",
                id
            );
        }
    }

    #[test]
    fn test_tiered_selection_matches_quality_band() {
        // one wildcard row per tier so the tier of the pick is fully
        // determined by the quality band
        let mut data = StoreData::default();
        for tier in 1..=5u8 {
            data.enchantments.push(EnchantmentRow {
                id: 100 + tier as u32,
                tier,
                min_level: 0,
                max_level: 0,
                item_class: None,
                subclass_mask: SubclassMask::ANY,
                category_mask: CategoryMask::WILDCARD,
            });
            data.definitions.push(EnchantmentDef {
                id: 100 + tier as u32,
                name: format!("Tier {} Fixture", tier),
                required_skill: 0,
                required_skill_value: 0,
                required_level: 0,
            });
        }
        let store = TableStore::from_data(data);
        let config = ModuleConfig {
            selection: SelectionStrategy::Tiered,
            ..Default::default()
        };
        let resolver = Resolver::new(&store, &config);
        let mut rng = StdRng::seed_from_u64(4);
        // rare always lands in the tier-3 band
        for _ in 0..32 {
            assert_eq!(
                resolver.resolve_enchantment(&plate_chest(), None, &mut rng),
                Some(103)
            );
        }
        let mut legendary = plate_chest();
        legendary.quality = Quality::Legendary;
        assert_eq!(
            resolver.resolve_enchantment(&legendary, None, &mut rng),
            Some(105)
        );
        let mut junk = plate_chest();
        junk.quality = Quality::Poor;
        assert_eq!(
            resolver.resolve_enchantment(&junk, None, &mut rng),
            Some(101)
        );
    }

    #[test]
    fn test_player_preference_substitutes_mask() {
        // end-to-end scenario: mage with preference enabled and an
        // equippable item gets the mage's caster mask regardless of
        // the item's own stats.
        let store = TableStore::with_defaults();
        let config = ModuleConfig {
            roll_player_preference: true,
            ..Default::default()
        };
        let resolver = Resolver::new(&store, &config);
        let mage = PlayerFacts::new("Vess", PlayerClass::Mage, Specialization::Fire, 60);
        let mut dagger = plate_chest();
        dagger.kind = ItemKind::Weapon(crate::facts::WeaponSubclass::Dagger);
        dagger.inventory_type = InventoryType::MainHand;
        dagger.stats = vec![StatType::Strength];
        let mut rng = StdRng::seed_from_u64(5);
        let mask = resolver.selection_mask(&dagger, Some(&mage), &mut rng);
        assert_eq!(mask, player_category_mask(&mage));
        assert!(mask.contains(EnchantCategory::Caster));
        assert!(!mask.contains(EnchantCategory::Strength));
    }

    #[test]
    fn test_preference_ignored_when_not_usable() {
        let store = TableStore::with_defaults();
        let config = ModuleConfig {
            roll_player_preference: true,
            ..Default::default()
        };
        let resolver = Resolver::new(&store, &config);
        let mage = PlayerFacts::new("Vess", PlayerClass::Mage, Specialization::Fire, 60);
        let item = plate_chest(); // mages have no use for plate
        let mut rng = StdRng::seed_from_u64(5);
        let mask = resolver.selection_mask(&item, Some(&mage), &mut rng);
        assert_eq!(mask, item_category_mask(&item));
    }

    #[test]
    fn test_quality_tier_bands() {
        let mut rng = StdRng::seed_from_u64(77);
        for _ in 0..64 {
            assert_eq!(roll_quality_tier(Quality::Legendary, &mut rng), 5);
            assert_eq!(roll_quality_tier(Quality::Poor, &mut rng), 1);
            let uncommon = roll_quality_tier(Quality::Uncommon, &mut rng);
            assert!((1..=2).contains(&uncommon));
            let rare = roll_quality_tier(Quality::Rare, &mut rng);
            assert!((3..=3).contains(&rare), "rare rolled tier {}", rare);
            let epic = roll_quality_tier(Quality::Epic, &mut rng);
            assert!((4..=5).contains(&epic));
        }
    }

    #[test]
    fn test_suffix_resolution_finds_valid_group() {
        let store = TableStore::with_defaults();
        let config = ModuleConfig::default();
        let resolver = Resolver::new(&store, &config);
        let item = plate_chest();
        let mut rng = StdRng::seed_from_u64(8);
        let id = resolver
            .resolve_suffix(&item, None, 3, &mut rng)
            .expect("tier 3 suffixes exist in the defaults");
        let suffix = store.suffix(id).unwrap();
        assert_eq!(suffix.tier, 3);
    }

    #[test]
    fn test_empty_store_gives_not_found() {
        let store = TableStore::from_data(Default::default());
        let config = ModuleConfig::default();
        let resolver = Resolver::new(&store, &config);
        let mut rng = StdRng::seed_from_u64(8);
        assert_eq!(resolver.resolve_enchantment(&plate_chest(), None, &mut rng), None);
        assert_eq!(resolver.resolve_suffix(&plate_chest(), None, 2, &mut rng), None);
    }
}
