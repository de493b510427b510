//! In-memory table store
//!
//! Loads candidate rows from RON files with fallback to the built-in
//! default tables, mirroring how the rest of the server loads external
//! data.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::defaults::default_store_data;
use super::{
    EnchantId, EnchantQuery, EnchantStore, EnchantmentDef, EnchantmentRow, SuffixId, SuffixQuery,
    SuffixRow,
};

/// Errors from loading the candidate tables.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: ron::error::SpannedError,
    },
}

/// On-disk shape of the candidate tables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreData {
    pub enchantments: Vec<EnchantmentRow>,
    pub definitions: Vec<EnchantmentDef>,
    pub suffixes: Vec<SuffixRow>,
}

/// Fixture-backed [`EnchantStore`] implementation.
#[derive(Debug, Clone)]
pub struct TableStore {
    enchantments: Vec<EnchantmentRow>,
    definitions: HashMap<EnchantId, EnchantmentDef>,
    suffixes: Vec<SuffixRow>,
}

impl TableStore {
    pub fn from_data(data: StoreData) -> Self {
        let definitions = data.definitions.into_iter().map(|d| (d.id, d)).collect();
        TableStore {
            enchantments: data.enchantments,
            definitions,
            suffixes: data.suffixes,
        }
    }

    /// Load from a RON file, falling back to the default tables when
    /// the file is missing or unreadable.
    pub fn load(path: &Path) -> Self {
        if path.exists() {
            match Self::load_from_path(path) {
                Ok(store) => return store,
                Err(e) => log::warn!("failed to load enchant tables: {}. Using defaults.", e),
            }
        }
        Self::from_data(default_store_data())
    }

    pub fn load_from_path(path: &Path) -> Result<Self, StoreError> {
        let content = fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let data: StoreData = ron::from_str(&content).map_err(|source| StoreError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self::from_data(data))
    }

    pub fn with_defaults() -> Self {
        Self::from_data(default_store_data())
    }
}

fn pick_uniform<'a, T>(
    rows: impl Iterator<Item = &'a T>,
    rng: &mut dyn RngCore,
) -> Option<&'a T> {
    let matches: Vec<&T> = rows.collect();
    if matches.is_empty() {
        None
    } else {
        Some(matches[rng.gen_range(0..matches.len())])
    }
}

impl EnchantStore for TableStore {
    fn pick_enchantment(&self, query: &EnchantQuery, rng: &mut dyn RngCore) -> Option<EnchantId> {
        pick_uniform(self.enchantments.iter().filter(|r| r.matches(query)), rng).map(|r| r.id)
    }

    fn pick_suffix(&self, query: &SuffixQuery, rng: &mut dyn RngCore) -> Option<SuffixId> {
        pick_uniform(self.suffixes.iter().filter(|r| r.matches(query)), rng).map(|r| r.id)
    }

    fn enchantment_def(&self, id: EnchantId) -> Option<&EnchantmentDef> {
        self.definitions.get(&id)
    }

    fn suffix(&self, id: SuffixId) -> Option<&SuffixRow> {
        self.suffixes.iter().find(|s| s.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::ItemClass;
    use crate::masks::CategoryMask;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_default_tables_are_nonempty() {
        let store = TableStore::with_defaults();
        assert!(!store.enchantments.is_empty());
        assert!(!store.suffixes.is_empty());
        // every enchantment row has a definition
        for row in &store.enchantments {
            assert!(
                store.enchantment_def(row.id).is_some(),
                "enchant {} has no definition",
                row.id
            );
        }
        // every suffix effect resolves to a known definition
        for suffix in &store.suffixes {
            assert_eq!(suffix.enchants.len(), suffix.allocation_pcts.len());
            for e in &suffix.enchants {
                assert!(store.enchantment_def(*e).is_some());
            }
        }
    }

    #[test]
    fn test_pick_is_among_matches() {
        let store = TableStore::with_defaults();
        let mut rng = StdRng::seed_from_u64(3);
        let query = EnchantQuery::Masked {
            level: 60,
            item_class: ItemClass::Armor,
            subclass_bit: 1 << 4,
            categories: CategoryMask(u32::MAX),
        };
        for _ in 0..16 {
            if let Some(id) = store.pick_enchantment(&query, &mut rng) {
                let row = store.enchantments.iter().find(|r| r.id == id).unwrap();
                assert!(row.matches(&query));
            }
        }
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let store = TableStore::load(Path::new("assets/data/definitely_missing.ron"));
        assert!(!store.enchantments.is_empty());
    }
}
