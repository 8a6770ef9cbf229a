//! Property-based tests using proptest.
//!
//! These tests verify namespace invariants that must hold for *any*
//! registration set, not just the built-in one.

use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use super::support::registry_of;
use crate::core::hparams::{HParamSpec, Hyperparameters};
use crate::runtime::{BlockCatalog, BlockSelection};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Block names without underscores and lower-case local keys, so no two
/// blocks can produce overlapping qualified keys.
fn registrations() -> impl Strategy<Value = BTreeMap<String, BTreeSet<String>>> {
    prop::collection::btree_map(
        "[A-Z]{1,4}",
        prop::collection::btree_set("[a-z]{1,6}", 0..4),
        1..8,
    )
}

fn catalog_for(blocks: &BTreeMap<String, BTreeSet<String>>) -> BlockCatalog {
    let entries: Vec<(&str, Option<Hyperparameters>)> = blocks
        .iter()
        .map(|(name, keys)| {
            let hparams = keys.iter().fold(Hyperparameters::new(), |hp, key| {
                hp.with(key.clone(), HParamSpec::int_range(0, 10))
            });
            (name.as_str(), (!keys.is_empty()).then_some(hparams))
        })
        .collect();
    BlockCatalog::new(Arc::new(registry_of(&entries)))
}

// ---------------------------------------------------------------------------
// Namespace properties
// ---------------------------------------------------------------------------

proptest! {
    /// Every declared hyperparameter appears exactly once, qualified by its
    /// owner's name.
    #[test]
    fn full_space_covers_every_declaration(blocks in registrations()) {
        let space = catalog_for(&blocks).search_space(&BlockSelection::All).unwrap();

        let declared: usize = blocks.values().map(BTreeSet::len).sum();
        prop_assert_eq!(space.len(), declared);

        for (name, keys) in &blocks {
            for key in keys {
                let qualified = format!("{}_{}", name, key);
                prop_assert!(space.contains_key(&qualified));
            }
        }
        for key in space.keys() {
            let (owner, _) = key.split_once('_').unwrap();
            prop_assert!(blocks.contains_key(owner));
        }
    }

    /// A filtered space holds exactly the selected kinds' keys.
    #[test]
    fn filtered_space_is_exact_subset(
        blocks in registrations(),
        mask in prop::collection::vec(any::<bool>(), 8),
    ) {
        let catalog = catalog_for(&blocks);
        let selected: Vec<String> = blocks
            .keys()
            .zip(mask.iter())
            .filter(|(_, keep)| **keep)
            .map(|(name, _)| name.clone())
            .collect();

        let full = catalog.search_space(&BlockSelection::All).unwrap();
        let filtered = catalog
            .search_space(&BlockSelection::only(selected.iter().cloned()))
            .unwrap();

        let expected: usize = selected.iter().map(|name| blocks[name].len()).sum();
        prop_assert_eq!(filtered.len(), expected);
        for (key, spec) in filtered.iter() {
            prop_assert_eq!(full.get(key), Some(spec));
            let (owner, _) = key.split_once('_').unwrap();
            prop_assert!(selected.iter().any(|name| name == owner));
        }
    }

    /// Aggregation is deterministic, key order included.
    #[test]
    fn aggregation_is_deterministic(blocks in registrations()) {
        let catalog = catalog_for(&blocks);
        let first = catalog.search_space(&BlockSelection::All).unwrap();
        let second = catalog.search_space(&BlockSelection::All).unwrap();

        let first_keys: Vec<_> = first.keys().collect();
        let second_keys: Vec<_> = second.keys().collect();
        prop_assert_eq!(first_keys, second_keys);
    }
}
