//! Runeforge - loot simulator
//!
//! Runs the enchantment pipeline against a batch of representative
//! items and players so operators can eyeball drop rates and category
//! targeting before wiring the module into a live world.

use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::Path;

use runeforge::apply::{ApplicationResult, ChatSink, EnchantModule, TriggerEvent};
use runeforge::config::ModuleConfig;
use runeforge::facts::{
    ArmorSubclass, InventoryType, ItemFacts, ItemKind, PlayerClass, PlayerFacts, Quality,
    Specialization, StatType, WeaponSubclass, PROPERTY_SLOTS, SKILL_PLATE_MAIL,
};
use runeforge::store::TableStore;

/// Chat sink that routes player messages into the log.
struct LogChat;

impl ChatSink for LogChat {
    fn send(&mut self, text: &str) {
        log::info!("[chat] {}", text);
    }
}

fn sample_items() -> Vec<ItemFacts> {
    let item = |id: u32, name: &str, kind, inv, quality, ilvl, req, stats: Vec<StatType>| ItemFacts {
        id,
        name: name.to_string(),
        kind,
        inventory_type: inv,
        quality,
        item_level: ilvl,
        required_level: req,
        stats,
        property_enchants: [0; PROPERTY_SLOTS],
        random_property_id: 0,
    };
    vec![
        item(
            1001,
            "Warplate Chestguard",
            ItemKind::Armor(ArmorSubclass::Plate),
            InventoryType::Chest,
            Quality::Rare,
            65,
            60,
            vec![StatType::Strength, StatType::Stamina],
        ),
        item(
            1002,
            "Threadbare Robe",
            ItemKind::Armor(ArmorSubclass::Cloth),
            InventoryType::Robe,
            Quality::Common,
            12,
            8,
            vec![],
        ),
        item(
            1003,
            "Sharpened Dirk",
            ItemKind::Weapon(WeaponSubclass::Dagger),
            InventoryType::MainHand,
            Quality::Uncommon,
            33,
            28,
            vec![StatType::Agility],
        ),
        item(
            1004,
            "Longshot Bow",
            ItemKind::Weapon(WeaponSubclass::Bow),
            InventoryType::Ranged,
            Quality::Rare,
            48,
            43,
            vec![StatType::Agility, StatType::RangedAttackPower],
        ),
        item(
            1005,
            "Aegis of the Vale",
            ItemKind::Armor(ArmorSubclass::Shield),
            InventoryType::Shield,
            Quality::Epic,
            70,
            60,
            vec![StatType::BlockValue, StatType::DefenseRating],
        ),
        item(
            1006,
            "Sparking Wand",
            ItemKind::Weapon(WeaponSubclass::Wand),
            InventoryType::RangedRight,
            Quality::Uncommon,
            25,
            20,
            vec![StatType::SpellPower],
        ),
    ]
}

fn sample_players() -> Vec<PlayerFacts> {
    let mut brakk = PlayerFacts::new("Brakk", PlayerClass::Warrior, Specialization::Fury, 62);
    brakk.skills.insert(SKILL_PLATE_MAIL, 1);
    vec![
        brakk,
        PlayerFacts::new("Vess", PlayerClass::Mage, Specialization::FrostMage, 58),
        PlayerFacts::new("Oakmane", PlayerClass::Druid, Specialization::RestorationDruid, 45),
        PlayerFacts::new("Quill", PlayerClass::Hunter, Specialization::Marksmanship, 37),
    ]
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let config_path = args.next().unwrap_or_else(|| "assets/runeforge.ron".to_string());
    let iterations: u32 = args.next().as_deref().unwrap_or("1000").parse()?;
    let seed: Option<u64> = args.next().map(|s| s.parse()).transpose()?;

    let config = ModuleConfig::load(Path::new(&config_path));
    let store = TableStore::load(Path::new("assets/data/enchantments.ron"));
    let module = EnchantModule::new(&config, &store);

    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };

    log::info!(
        "simulating {} loot events (mode {:?}, selection {:?})",
        iterations,
        config.mode,
        config.selection
    );

    let items = sample_items();
    let players = sample_players();
    let mut chat = LogChat;

    let mut untouched = 0u32;
    let mut enchanted = 0u32;
    let mut suffixed = 0u32;
    let mut total_slots = 0usize;

    for _ in 0..iterations {
        let mut item = items[rng.gen_range(0..items.len())].clone();
        let player = &players[rng.gen_range(0..players.len())];
        match module.on_item_event(TriggerEvent::Loot, &mut item, player, &mut chat, &mut rng) {
            ApplicationResult::Ineligible | ApplicationResult::Unchanged => untouched += 1,
            ApplicationResult::Enchanted { slots } => {
                enchanted += 1;
                total_slots += slots;
            }
            ApplicationResult::Suffixed { .. } => suffixed += 1,
        }
    }

    println!("events:      {}", iterations);
    println!("untouched:   {}", untouched);
    println!("enchanted:   {} ({} slots total)", enchanted, total_slots);
    println!("suffixed:    {}", suffixed);

    Ok(())
}
