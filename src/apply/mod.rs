//! Application orchestrator
//!
//! Sequences eligibility gating, classification, rolling, resolution,
//! and the final item mutation, and exposes the lifecycle hooks the
//! host invokes on loot, craft, quest reward, group roll, vendor
//! purchase, and login.

use rand::Rng;

use crate::config::{EnchantMode, ModuleConfig};
use crate::facts::{InventoryType, ItemClass, ItemFacts, PlayerFacts, Quality};
use crate::resolve::Resolver;
use crate::roll::roll_slots;
use crate::store::{EnchantStore, SuffixId};

/// Host event that may hand an item to the module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerEvent {
    Loot,
    Create,
    QuestReward,
    GroupRollReward,
    VendorPurchase,
}

/// Player-visible message sink owned by the host's chat system.
pub trait ChatSink {
    fn send(&mut self, text: &str);
}

/// Outcome of one orchestrator invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicationResult {
    /// Item failed the eligibility gate; nothing was attempted.
    Ineligible,
    /// Rolls ran but nothing was applied. Indistinguishable from "no
    /// eligible candidate" on purpose.
    Unchanged,
    /// This many slot enchantments were written.
    Enchanted { slots: usize },
    /// A random-suffix group was attached.
    Suffixed { suffix: SuffixId },
}

pub struct EnchantModule<'a> {
    config: &'a ModuleConfig,
    store: &'a dyn EnchantStore,
}

impl<'a> EnchantModule<'a> {
    pub fn new(config: &'a ModuleConfig, store: &'a dyn EnchantStore) -> Self {
        EnchantModule { config, store }
    }

    /// Login hook: announce the module when configured.
    pub fn on_login(&self, chat: &mut dyn ChatSink) {
        if self.config.announce_on_login {
            chat.send(&self.config.login_message);
        }
    }

    /// Item acquisition hook. Checks the per-trigger toggle and runs
    /// the enchantment pipeline.
    pub fn on_item_event(
        &self,
        trigger: TriggerEvent,
        item: &mut ItemFacts,
        player: &PlayerFacts,
        chat: &mut dyn ChatSink,
        rng: &mut impl Rng,
    ) -> ApplicationResult {
        if !self.config.trigger_enabled(trigger) {
            return ApplicationResult::Ineligible;
        }
        self.roll_possible_enchant(item, player, chat, rng)
    }

    /// The full pipeline: gate, roll, classify/resolve, mutate, report.
    pub fn roll_possible_enchant(
        &self,
        item: &mut ItemFacts,
        player: &PlayerFacts,
        chat: &mut dyn ChatSink,
        rng: &mut impl Rng,
    ) -> ApplicationResult {
        if !self.eligible(item) {
            return ApplicationResult::Ineligible;
        }
        match self.config.mode {
            EnchantMode::Slots => {
                let applied = self.apply_slot_enchants(item, player, rng);
                if applied > 0 {
                    chat.send(&format!(
                        "Newly acquired {} has received {} random enchantment{}!",
                        item.name,
                        applied,
                        if applied == 1 { "" } else { "s" }
                    ));
                    ApplicationResult::Enchanted { slots: applied }
                } else {
                    ApplicationResult::Unchanged
                }
            }
            EnchantMode::Suffix => match self.apply_suffix(item, player, rng) {
                Some(suffix) => {
                    let name = self
                        .store
                        .suffix(suffix)
                        .map(|s| s.name.clone())
                        .unwrap_or_default();
                    chat.send(&format!(
                        "Newly acquired {} is now {} {}!",
                        item.name, item.name, name
                    ));
                    ApplicationResult::Suffixed { suffix }
                }
                None => ApplicationResult::Unchanged,
            },
        }
    }

    /// Eligibility gate. The idempotency guard is the random-property
    /// id: an item that already carries one is never touched again.
    fn eligible(&self, item: &ItemFacts) -> bool {
        if item.has_random_property() {
            return false;
        }
        if !matches!(item.kind.class(), ItemClass::Weapon | ItemClass::Armor) {
            return false;
        }
        if !(Quality::Common..=Quality::Legendary).contains(&item.quality) {
            return false;
        }
        if matches!(
            item.inventory_type,
            InventoryType::NonEquip
                | InventoryType::Bag
                | InventoryType::Tabard
                | InventoryType::Ammo
                | InventoryType::Quiver
        ) {
            return false;
        }
        true
    }

    /// Slot mode: chain-roll the free property slots and resolve one
    /// enchantment per success. A failed resolution skips the slot but
    /// does not stop the ones already won.
    fn apply_slot_enchants(
        &self,
        item: &mut ItemFacts,
        player: &PlayerFacts,
        rng: &mut impl Rng,
    ) -> usize {
        let free_slots = item.free_property_slots();
        if free_slots.is_empty() {
            return 0;
        }
        let pcts = &self.config.slot_percentages[..free_slots.len().min(self.config.slot_percentages.len())];
        let won = roll_slots(pcts, rng);
        let resolver = Resolver::new(self.store, self.config);
        let mut applied = 0;
        for &slot in free_slots.iter().take(won) {
            if let Some(enchant) = resolver.resolve_enchantment(item, Some(player), rng) {
                item.set_enchantment(slot, enchant);
                applied += 1;
            }
        }
        if self.config.debug {
            log::debug!(
                "item {}: {} slot(s) won, {} enchantment(s) applied",
                item.name,
                won,
                applied
            );
        }
        applied
    }

    /// Suffix mode: the roll chain length is the tier; zero successes
    /// means no suffix at all.
    fn apply_suffix(
        &self,
        item: &mut ItemFacts,
        player: &PlayerFacts,
        rng: &mut impl Rng,
    ) -> Option<SuffixId> {
        let tier = roll_slots(&self.config.slot_percentages, rng) as u8;
        if tier == 0 {
            return None;
        }
        let resolver = Resolver::new(self.store, self.config);
        let suffix = resolver.resolve_suffix(item, Some(player), tier, rng)?;
        item.random_property_id = suffix;
        Some(suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::{
        ArmorSubclass, ItemKind, PlayerClass, Specialization, StatType, PROPERTY_SLOTS,
    };
    use crate::store::TableStore;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[derive(Default)]
    struct RecordingChat {
        messages: Vec<String>,
    }

    impl ChatSink for RecordingChat {
        fn send(&mut self, text: &str) {
            self.messages.push(text.to_string());
        }
    }

    /// Store wrapper that panics when queried, to prove the guard
    /// short-circuits before any lookup.
    struct PanickingStore;

    impl EnchantStore for PanickingStore {
        fn pick_enchantment(
            &self,
            _: &crate::store::EnchantQuery,
            _: &mut dyn rand::RngCore,
        ) -> Option<u32> {
            panic!("store was queried for an ineligible item");
        }
        fn pick_suffix(
            &self,
            _: &crate::store::SuffixQuery,
            _: &mut dyn rand::RngCore,
        ) -> Option<u32> {
            panic!("store was queried for an ineligible item");
        }
        fn enchantment_def(&self, _: u32) -> Option<&crate::store::EnchantmentDef> {
            panic!("store was queried for an ineligible item");
        }
        fn suffix(&self, _: u32) -> Option<&crate::store::SuffixRow> {
            panic!("store was queried for an ineligible item");
        }
    }

    fn chest() -> ItemFacts {
        ItemFacts {
            id: 3000,
            name: "Warplate Chestguard".into(),
            kind: ItemKind::Armor(ArmorSubclass::Plate),
            inventory_type: crate::facts::InventoryType::Chest,
            quality: Quality::Rare,
            item_level: 65,
            required_level: 60,
            stats: vec![StatType::Strength],
            property_enchants: [0; PROPERTY_SLOTS],
            random_property_id: 0,
        }
    }

    fn warrior() -> PlayerFacts {
        PlayerFacts::new("Brakk", PlayerClass::Warrior, Specialization::Arms, 60)
    }

    #[test]
    fn test_already_suffixed_item_is_untouched() {
        // end-to-end scenario: non-zero random-property id means no
        // query, no message, no mutation
        let config = ModuleConfig::default();
        let store = PanickingStore;
        let module = EnchantModule::new(&config, &store);
        let mut item = chest();
        item.random_property_id = 517;
        let snapshot = item.clone();
        let mut chat = RecordingChat::default();
        let mut rng = StdRng::seed_from_u64(1);
        let result = module.roll_possible_enchant(&mut item, &warrior(), &mut chat, &mut rng);
        assert_eq!(result, ApplicationResult::Ineligible);
        assert!(chat.messages.is_empty());
        assert_eq!(item.property_enchants, snapshot.property_enchants);
        assert_eq!(item.random_property_id, snapshot.random_property_id);
    }

    #[test]
    fn test_poor_quality_and_wrong_class_rejected() {
        let config = ModuleConfig::default();
        let store = PanickingStore;
        let module = EnchantModule::new(&config, &store);
        let mut chat = RecordingChat::default();
        let mut rng = StdRng::seed_from_u64(1);

        let mut junk = chest();
        junk.quality = Quality::Poor;
        assert_eq!(
            module.roll_possible_enchant(&mut junk, &warrior(), &mut chat, &mut rng),
            ApplicationResult::Ineligible
        );

        let mut trinket = chest();
        trinket.kind = ItemKind::Other;
        assert_eq!(
            module.roll_possible_enchant(&mut trinket, &warrior(), &mut chat, &mut rng),
            ApplicationResult::Ineligible
        );

        let mut bag = chest();
        bag.inventory_type = crate::facts::InventoryType::Bag;
        assert_eq!(
            module.roll_possible_enchant(&mut bag, &warrior(), &mut chat, &mut rng),
            ApplicationResult::Ineligible
        );
    }

    #[test]
    fn test_guaranteed_rolls_fill_slots_and_announce() {
        let config = ModuleConfig {
            slot_percentages: [100.0; 5],
            ..Default::default()
        };
        let store = TableStore::with_defaults();
        let module = EnchantModule::new(&config, &store);
        let mut item = chest();
        let mut chat = RecordingChat::default();
        let mut rng = StdRng::seed_from_u64(21);
        let result = module.roll_possible_enchant(&mut item, &warrior(), &mut chat, &mut rng);
        assert_eq!(result, ApplicationResult::Enchanted { slots: 5 });
        assert!(item.property_enchants.iter().all(|&e| e != 0));
        assert_eq!(chat.messages.len(), 1);
        assert!(chat.messages[0].contains("5 random enchantments"));
    }

    #[test]
    fn test_first_failure_caps_applied_count() {
        // slots 1-2 always succeed, slot 3 never does: exactly two
        // enchantments, slots 4 and 5 untouched
        let config = ModuleConfig {
            slot_percentages: [100.0, 100.0, 0.0, 100.0, 100.0],
            ..Default::default()
        };
        let store = TableStore::with_defaults();
        let module = EnchantModule::new(&config, &store);
        let mut item = chest();
        let mut chat = RecordingChat::default();
        let mut rng = StdRng::seed_from_u64(2);
        let result = module.roll_possible_enchant(&mut item, &warrior(), &mut chat, &mut rng);
        assert_eq!(result, ApplicationResult::Enchanted { slots: 2 });
        // free slots are taken highest-first
        assert!(item.property_enchants[4] != 0);
        assert!(item.property_enchants[3] != 0);
        assert!(item.property_enchants[2] == 0);
        assert!(item.property_enchants[1] == 0);
        assert!(item.property_enchants[0] == 0);
    }

    #[test]
    fn test_all_rolls_failed_is_silent() {
        let config = ModuleConfig {
            slot_percentages: [0.0; 5],
            ..Default::default()
        };
        let store = TableStore::with_defaults();
        let module = EnchantModule::new(&config, &store);
        let mut item = chest();
        let mut chat = RecordingChat::default();
        let mut rng = StdRng::seed_from_u64(2);
        let result = module.roll_possible_enchant(&mut item, &warrior(), &mut chat, &mut rng);
        assert_eq!(result, ApplicationResult::Unchanged);
        assert!(chat.messages.is_empty());
    }

    #[test]
    fn test_suffix_mode_sets_random_property() {
        let config = ModuleConfig {
            mode: EnchantMode::Suffix,
            slot_percentages: [100.0, 100.0, 100.0, 0.0, 0.0],
            ..Default::default()
        };
        let store = TableStore::with_defaults();
        let module = EnchantModule::new(&config, &store);
        let mut item = chest();
        let mut chat = RecordingChat::default();
        let mut rng = StdRng::seed_from_u64(13);
        let result = module.roll_possible_enchant(&mut item, &warrior(), &mut chat, &mut rng);
        match result {
            ApplicationResult::Suffixed { suffix } => {
                assert_eq!(item.random_property_id, suffix);
                assert_eq!(store.suffix(suffix).unwrap().tier, 3);
                assert_eq!(chat.messages.len(), 1);
            }
            other => panic!("expected a suffix, got {:?}", other),
        }
    }

    #[test]
    fn test_disabled_trigger_is_skipped() {
        let config = ModuleConfig {
            on_vendor_purchase: false,
            ..Default::default()
        };
        let store = PanickingStore;
        let module = EnchantModule::new(&config, &store);
        let mut item = chest();
        let mut chat = RecordingChat::default();
        let mut rng = StdRng::seed_from_u64(1);
        let result = module.on_item_event(
            TriggerEvent::VendorPurchase,
            &mut item,
            &warrior(),
            &mut chat,
            &mut rng,
        );
        assert_eq!(result, ApplicationResult::Ineligible);
    }

    #[test]
    fn test_login_announcement() {
        let config = ModuleConfig::default();
        let store = TableStore::with_defaults();
        let module = EnchantModule::new(&config, &store);
        let mut chat = RecordingChat::default();
        module.on_login(&mut chat);
        assert_eq!(chat.messages.len(), 1);

        let quiet = ModuleConfig {
            announce_on_login: false,
            ..Default::default()
        };
        let module = EnchantModule::new(&quiet, &store);
        let mut chat = RecordingChat::default();
        module.on_login(&mut chat);
        assert!(chat.messages.is_empty());
    }
}
