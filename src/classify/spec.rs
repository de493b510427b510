//! Specialization inference
//!
//! Instead of filtering on the item's blended category mask, work out
//! which class specializations the item was plausibly itemized for,
//! pick one at random, and use that spec's own mask. Ambiguous items
//! (a plain dagger, say) come out flavored for one concrete spec
//! rather than a generic average of every user.

use rand::Rng;

use crate::facts::{ItemFacts, ItemKind, PlayerClass, Specialization};
use crate::masks::CategoryMask;

use super::item::item_category_mask;
use super::player::player_categories;

/// Whether a class at full proficiency could be the intended user of
/// this item at all, before any spec-level filtering.
fn class_eligible(class: PlayerClass, item: &ItemFacts) -> bool {
    if item.inventory_type.is_universal() {
        return true;
    }
    match item.kind {
        ItemKind::Weapon(sub) => class.usable_weapons().contains(&sub),
        ItemKind::Armor(sub) => class.preferred_armor(true, true).contains(&sub),
        ItemKind::Other => false,
    }
}

/// Specializations plausibly intended for this item.
///
/// A spec qualifies when its class passes the proficiency predicate and
/// its own category mask intersects the item's mask. A class whose
/// specs all miss the mask broadens to every spec of that class rather
/// than narrowing to zero.
pub fn eligible_specs(item: &ItemFacts) -> Vec<Specialization> {
    let item_mask = item_category_mask(item);
    let mut pool: Vec<Specialization> = Vec::new();
    for class in PlayerClass::ALL {
        if !class_eligible(class, item) {
            continue;
        }
        let matched: Vec<Specialization> = class
            .specs()
            .iter()
            .copied()
            .filter(|spec| {
                CategoryMask::from_categories(player_categories(class, *spec))
                    .intersects(item_mask)
            })
            .collect();
        if matched.is_empty() {
            pool.extend_from_slice(class.specs());
        } else {
            pool.extend(matched);
        }
    }
    pool
}

/// Pick one plausible specialization uniformly and return its category
/// mask. Falls back to the item's own mask when no class is eligible.
pub fn infer_spec_category_mask(item: &ItemFacts, rng: &mut impl Rng) -> CategoryMask {
    let pool = eligible_specs(item);
    if pool.is_empty() {
        return item_category_mask(item);
    }
    let spec = pool[rng.gen_range(0..pool.len())];
    let mask = CategoryMask::from_categories(player_categories(spec.class(), spec));
    log::debug!(
        "item {} inferred spec {:?} from a pool of {}",
        item.name,
        spec,
        pool.len()
    );
    mask
}
