//! Property-based tests for RecordMap.
//!
//! Every operation sequence is replayed against `BTreeMap` as a model, and
//! the Red-Black invariants are checked after each run.

use proptest::prelude::*;
use recordmap::{Record, RecordId, RecordMap};
use std::collections::BTreeMap;

// =============================================================================
// Strategies for Generating Test Data
// =============================================================================

#[derive(Debug, Clone)]
enum Operation {
    Insert(RecordId),
    Delete(RecordId),
}

fn arbitrary_operation() -> impl Strategy<Value = Operation> {
    // A narrow key range forces duplicates and hits on delete.
    prop_oneof![
        3 => (-64..64i32).prop_map(Operation::Insert),
        2 => (-64..64i32).prop_map(Operation::Delete),
    ]
}

fn build(ids: &[RecordId]) -> RecordMap {
    let mut map = RecordMap::new();
    for &id in ids {
        let _ = map.insert(id, format!("student {id}"), "dept", 2.5);
    }
    map
}

fn in_order_ids(map: &RecordMap) -> Vec<RecordId> {
    map.in_order().map(Record::id).collect()
}

// =============================================================================
// Invariant Laws
// =============================================================================

proptest! {
    /// Law: any sequence of inserts and deletes leaves a valid tree whose
    /// contents match the model.
    #[test]
    fn prop_operations_match_model(
        operations in prop::collection::vec(arbitrary_operation(), 0..200)
    ) {
        let mut map = RecordMap::new();
        let mut model: BTreeMap<RecordId, String> = BTreeMap::new();

        for operation in operations {
            match operation {
                Operation::Insert(id) => {
                    let name = format!("student {id}");
                    let inserted = map.insert(id, name.clone(), "dept", 2.5).is_ok();
                    let fresh = !model.contains_key(&id);
                    if fresh {
                        model.insert(id, name);
                    }
                    prop_assert_eq!(inserted, fresh);
                }
                Operation::Delete(id) => {
                    let removed = map.delete(id).ok().map(|record| record.id());
                    prop_assert_eq!(removed, model.remove(&id).map(|_| id));
                }
            }
            prop_assert!(map.validate().is_ok());
        }

        prop_assert_eq!(map.len(), model.len());
        prop_assert_eq!(in_order_ids(&map), model.keys().copied().collect::<Vec<_>>());
    }

    /// Law: height never exceeds 2 * log2(n + 1).
    #[test]
    fn prop_height_is_logarithmic(ids in prop::collection::vec(any::<i32>(), 0..500)) {
        let map = build(&ids);
        let bound = 2.0 * ((map.len() + 1) as f64).log2();
        prop_assert!(map.height() as f64 <= bound);
    }
}

// =============================================================================
// Query Laws
// =============================================================================

proptest! {
    /// Law: search finds exactly the inserted ids.
    #[test]
    fn prop_search_after_insert(
        ids in prop::collection::vec(-1000..1000i32, 0..100),
        probe in -1000..1000i32
    ) {
        let map = build(&ids);
        prop_assert_eq!(map.search(probe).is_some(), ids.contains(&probe));
        if let Some(record) = map.search(probe) {
            prop_assert_eq!(record.id(), probe);
        }
    }

    /// Law: range_query equals the in-order sequence filtered to the range.
    #[test]
    fn prop_range_query_is_filtered_in_order(
        ids in prop::collection::vec(-200..200i32, 0..150),
        min_id in -250..250i32,
        max_id in -250..250i32
    ) {
        let map = build(&ids);
        let ranged: Vec<RecordId> = map.range_query(min_id, max_id).map(Record::id).collect();
        let filtered: Vec<RecordId> = in_order_ids(&map)
            .into_iter()
            .filter(|id| (min_id..=max_id).contains(id))
            .collect();
        prop_assert_eq!(ranged, filtered);
    }

    /// Law: in_order is strictly increasing and has exactly len items.
    #[test]
    fn prop_in_order_strictly_increasing(ids in prop::collection::vec(any::<i32>(), 0..200)) {
        let map = build(&ids);
        let ordered = in_order_ids(&map);
        prop_assert_eq!(ordered.len(), map.len());
        prop_assert!(ordered.windows(2).all(|pair| pair[0] < pair[1]));
    }

    /// Law: pre_order and dump_structure list the same ids in the same order.
    #[test]
    fn prop_pre_order_matches_dump(ids in prop::collection::vec(-500..500i32, 0..100)) {
        let map = build(&ids);
        let pre: Vec<RecordId> = map.pre_order().map(Record::id).collect();
        let dumped: Vec<RecordId> = map.dump_structure().iter().map(|entry| entry.id).collect();
        prop_assert_eq!(pre, dumped);
    }
}

// =============================================================================
// Delete Laws
// =============================================================================

proptest! {
    /// Law: deleting an id twice fails the second time and changes nothing.
    #[test]
    fn prop_delete_is_idempotent(
        ids in prop::collection::vec(-100..100i32, 1..80),
        pick in any::<prop::sample::Index>()
    ) {
        let mut map = build(&ids);
        let target = ids[pick.index(ids.len())];
        prop_assert!(map.delete(target).is_ok());
        let after_first = map.dump_structure();
        prop_assert!(map.delete(target).is_err());
        prop_assert_eq!(map.dump_structure(), after_first);
    }

    /// Law: deleting every id in any order empties a valid tree.
    #[test]
    fn prop_delete_all_empties(ids in prop::collection::vec(any::<i32>(), 0..100)) {
        let mut map = build(&ids);
        let mut order = ids.clone();
        order.reverse();
        order.dedup();
        for id in order {
            let _ = map.delete(id);
            prop_assert!(map.validate().is_ok());
        }
        prop_assert!(map.is_empty());
    }
}
