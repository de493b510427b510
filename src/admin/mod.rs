//! Administrative item grant
//!
//! GM-facing command to hand a player an item, optionally with an
//! explicit suffix override for testing. Unlike the probabilistic
//! core, these paths surface real errors to the operator.

use thiserror::Error;

use crate::facts::ItemFacts;
use crate::store::{EnchantStore, SuffixId};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AdminError {
    #[error("unknown item id {0}")]
    UnknownItem(u32),
    #[error("unknown suffix id {0}")]
    UnknownSuffix(SuffixId),
    #[error("count must be at least 1, got {0}")]
    InvalidCount(u32),
    #[error("not enough inventory space: need {needed}, have {free}")]
    NoInventorySpace { needed: u32, free: u32 },
}

/// Item template lookup owned by the host.
pub trait ItemCatalog {
    fn template(&self, item_id: u32) -> Option<&ItemFacts>;
}

/// A player's bag space as the host reports it.
#[derive(Debug, Clone)]
pub struct Inventory {
    pub capacity: u32,
    pub items: Vec<ItemFacts>,
}

impl Inventory {
    pub fn new(capacity: u32) -> Self {
        Inventory {
            capacity,
            items: Vec::new(),
        }
    }

    pub fn free_slots(&self) -> u32 {
        self.capacity.saturating_sub(self.items.len() as u32)
    }
}

/// Grant `count` copies of an item, optionally stamped with a specific
/// suffix. Validates everything up front so a failed grant leaves the
/// inventory untouched.
pub fn grant_item(
    catalog: &dyn ItemCatalog,
    store: &dyn EnchantStore,
    inventory: &mut Inventory,
    item_id: u32,
    count: u32,
    suffix_override: Option<SuffixId>,
) -> Result<(), AdminError> {
    if count == 0 {
        return Err(AdminError::InvalidCount(count));
    }
    let template = catalog
        .template(item_id)
        .ok_or(AdminError::UnknownItem(item_id))?;
    if let Some(suffix) = suffix_override {
        if store.suffix(suffix).is_none() {
            return Err(AdminError::UnknownSuffix(suffix));
        }
    }
    let free = inventory.free_slots();
    if free < count {
        return Err(AdminError::NoInventorySpace {
            needed: count,
            free,
        });
    }
    for _ in 0..count {
        let mut item = template.clone();
        if let Some(suffix) = suffix_override {
            item.random_property_id = suffix;
        }
        inventory.items.push(item);
    }
    log::info!(
        "granted {}x item {} (suffix override: {:?})",
        count,
        item_id,
        suffix_override
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::{ArmorSubclass, InventoryType, ItemKind, Quality, PROPERTY_SLOTS};
    use crate::store::TableStore;

    struct FixtureCatalog {
        item: ItemFacts,
    }

    impl ItemCatalog for FixtureCatalog {
        fn template(&self, item_id: u32) -> Option<&ItemFacts> {
            (item_id == self.item.id).then_some(&self.item)
        }
    }

    fn catalog() -> FixtureCatalog {
        FixtureCatalog {
            item: ItemFacts {
                id: 4000,
                name: "Fixture Helm".into(),
                kind: ItemKind::Armor(ArmorSubclass::Mail),
                inventory_type: InventoryType::Head,
                quality: Quality::Uncommon,
                item_level: 40,
                required_level: 35,
                stats: Vec::new(),
                property_enchants: [0; PROPERTY_SLOTS],
                random_property_id: 0,
            },
        }
    }

    #[test]
    fn test_grant_with_suffix_override() {
        let store = TableStore::with_defaults();
        let mut inv = Inventory::new(16);
        // suffix 503 is a default "of the Bear" tier
        grant_item(&catalog(), &store, &mut inv, 4000, 2, Some(503)).unwrap();
        assert_eq!(inv.items.len(), 2);
        assert!(inv.items.iter().all(|i| i.random_property_id == 503));
    }

    #[test]
    fn test_unknown_item_and_suffix() {
        let store = TableStore::with_defaults();
        let mut inv = Inventory::new(16);
        assert_eq!(
            grant_item(&catalog(), &store, &mut inv, 9999, 1, None),
            Err(AdminError::UnknownItem(9999))
        );
        assert_eq!(
            grant_item(&catalog(), &store, &mut inv, 4000, 1, Some(1)),
            Err(AdminError::UnknownSuffix(1))
        );
        assert!(inv.items.is_empty());
    }

    #[test]
    fn test_insufficient_space_leaves_inventory_alone() {
        let store = TableStore::with_defaults();
        let mut inv = Inventory::new(1);
        let err = grant_item(&catalog(), &store, &mut inv, 4000, 3, None);
        assert_eq!(
            err,
            Err(AdminError::NoInventorySpace { needed: 3, free: 1 })
        );
        assert!(inv.items.is_empty());
    }

    #[test]
    fn test_zero_count_rejected() {
        let store = TableStore::with_defaults();
        let mut inv = Inventory::new(4);
        assert_eq!(
            grant_item(&catalog(), &store, &mut inv, 4000, 0, None),
            Err(AdminError::InvalidCount(0))
        );
    }
}
