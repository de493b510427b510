//! Module configuration
//!
//! One immutable value object constructed at startup or reload and
//! passed by reference into classification, resolution, and rolling.
//! Loaded from a RON file with hardcoded defaults as fallback.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Number of rollable enchantment slots, and therefore of per-slot
/// percentages.
pub const ROLL_SLOTS: usize = 5;

/// How a successful roll turns into item changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnchantMode {
    /// Fill free property slots with individual enchantments.
    Slots,
    /// Use the roll chain length as a tier and attach one random
    /// suffix group.
    Suffix,
}

/// Candidate selection strategy for slot mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionStrategy {
    /// Category-mask filtered selection.
    Masked,
    /// Quality-derived tier selection (the original scheme).
    Tiered,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleConfig {
    pub announce_on_login: bool,
    pub login_message: String,
    pub debug: bool,

    // per-trigger enablement
    pub on_loot: bool,
    pub on_create: bool,
    pub on_quest_reward: bool,
    pub on_group_roll_reward: bool,
    pub on_vendor_purchase: bool,

    pub mode: EnchantMode,
    pub selection: SelectionStrategy,
    /// Prefer the acting player's class/spec mask when they can use
    /// the item.
    pub roll_player_preference: bool,
    /// Derive the mask from one randomly chosen plausible
    /// specialization instead of the item's blended mask.
    pub infer_specialization: bool,

    /// Success percentage per slot, strictest first. A slot succeeds
    /// when roll + percentage reaches 100.
    pub slot_percentages: [f64; ROLL_SLOTS],
    /// Level assumed for items with no required level on record.
    pub max_player_level: u32,
}

impl Default for ModuleConfig {
    fn default() -> Self {
        ModuleConfig {
            announce_on_login: true,
            login_message: "This server attaches random enchantments to newly acquired items."
                .to_string(),
            debug: false,
            on_loot: true,
            on_create: true,
            on_quest_reward: true,
            on_group_roll_reward: true,
            on_vendor_purchase: true,
            mode: EnchantMode::Slots,
            selection: SelectionStrategy::Masked,
            roll_player_preference: false,
            infer_specialization: false,
            slot_percentages: [30.0, 35.0, 40.0, 45.0, 50.0],
            max_player_level: 80,
        }
    }
}

impl ModuleConfig {
    /// Load from a RON file, falling back to defaults when the file is
    /// missing or fails to parse.
    pub fn load(path: &Path) -> Self {
        if path.exists() {
            match fs::read_to_string(path) {
                Ok(content) => match ron::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => log::warn!("failed to parse {}: {}. Using defaults.", path.display(), e),
                },
                Err(e) => log::warn!("failed to read {}: {}. Using defaults.", path.display(), e),
            }
        }
        ModuleConfig::default()
    }

    pub fn trigger_enabled(&self, trigger: crate::apply::TriggerEvent) -> bool {
        use crate::apply::TriggerEvent::*;
        match trigger {
            Loot => self.on_loot,
            Create => self.on_create,
            QuestReward => self.on_quest_reward,
            GroupRollReward => self.on_group_roll_reward,
            VendorPurchase => self.on_vendor_purchase,
        }
    }
}
