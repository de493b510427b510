//! Read-only facts about items and players
//!
//! Snapshots of host-owned state that the enchantment pipeline reads.
//! The only mutation the module ever performs is writing chosen
//! enchantment ids back into an item's property slots.

pub mod item;
pub mod player;

pub use item::{
    ArmorSubclass, InventoryType, ItemClass, ItemFacts, ItemKind, Quality, StatType,
    WeaponSubclass, PROPERTY_SLOTS,
};
pub use player::{PlayerClass, PlayerFacts, Specialization, SKILL_MAIL, SKILL_PLATE_MAIL};
