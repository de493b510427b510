//! Runeforge - server-side random enchantment module
//!
//! Procedurally attaches random magical enchantments or suffix groups
//! to items handed out by the host server's loot, crafting, quest,
//! group roll, and vendor paths.

pub mod admin;
pub mod apply;
pub mod classify;
pub mod config;
pub mod facts;
pub mod masks;
pub mod resolve;
pub mod roll;
pub mod store;

// Re-export commonly used types
pub use apply::{ApplicationResult, ChatSink, EnchantModule, TriggerEvent};
pub use config::{EnchantMode, ModuleConfig, SelectionStrategy};
pub use facts::{ItemFacts, PlayerFacts};
pub use store::{EnchantStore, TableStore};
