//! Role classification
//!
//! Derives a capability profile from an item's stat list or a player's
//! class and spec, and converts profiles into category mask filters.

pub mod item;
pub mod player;
pub mod profile;
pub mod spec;

pub use item::{classify_item, item_category_mask};
pub use player::{classify_player, player_categories, player_category_mask};
pub use profile::RoleProfile;
pub use spec::{eligible_specs, infer_spec_category_mask};
