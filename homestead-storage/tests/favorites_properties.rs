//! Property-based tests for the favorites store
//!
//! Random operation sequences are replayed against both the store and a
//! simple model; after every step the two must agree.

use homestead_test_utils::assertions::*;
use homestead_test_utils::generators::*;
use homestead_test_utils::*;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Add(PropertyId, String),
    Remove(PropertyId),
    UpdateNotes(PropertyId, String),
}

fn arb_op() -> impl Strategy<Value = Op> {
    // Narrow id range so adds collide and removes hit existing entries.
    let id = (1u64..8).prop_map(PropertyId::new);
    prop_oneof![
        3 => (id.clone(), arb_notes()).prop_map(|(p, n)| Op::Add(p, n)),
        2 => id.clone().prop_map(Op::Remove),
        1 => (id, arb_notes()).prop_map(|(p, n)| Op::UpdateNotes(p, n)),
    ]
}

/// Model: (property id, notes) in insertion order.
type Model = Vec<(PropertyId, String)>;

fn model_position(model: &Model, property_id: PropertyId) -> Option<usize> {
    model.iter().position(|(p, _)| *p == property_id)
}

fn apply(store: &mut InMemoryFavoritesStore, model: &mut Model, op: &Op) {
    match op {
        Op::Add(property_id, notes) => {
            let result = store.add(*property_id, notes);
            if model_position(model, *property_id).is_some() {
                assert_duplicate_favorite(&result, *property_id);
            } else {
                let record = result.expect("add of absent property succeeds");
                assert_eq!(record.property_id, *property_id);
                assert_eq!(&record.notes, notes);
                model.push((*property_id, notes.clone()));
            }
        }
        Op::Remove(property_id) => {
            let result = store.remove(*property_id);
            match model_position(model, *property_id) {
                Some(index) => {
                    let removed = result.expect("remove of present property succeeds");
                    assert_eq!(removed.property_id, *property_id);
                    model.remove(index);
                }
                None => assert_favorite_not_found(&result, *property_id),
            }
        }
        Op::UpdateNotes(property_id, notes) => {
            let result = store.update_notes(*property_id, notes);
            match model_position(model, *property_id) {
                Some(index) => {
                    let updated = result.expect("update of present property succeeds");
                    assert_eq!(&updated.notes, notes);
                    model[index].1 = notes.clone();
                }
                None => assert_favorite_not_found(&result, *property_id),
            }
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The store agrees with the model after every operation.
    #[test]
    fn prop_store_matches_model(ops in prop::collection::vec(arb_op(), 0..40)) {
        let mut store = InMemoryFavoritesStore::new();
        let mut model = Model::new();

        for op in &ops {
            apply(&mut store, &mut model, op);

            let listed: Vec<(PropertyId, String)> = store
                .list()
                .into_iter()
                .map(|f| (f.property_id, f.notes))
                .collect();
            prop_assert_eq!(&listed, &model);
            for (property_id, _) in &model {
                prop_assert!(store.is_favorite(*property_id));
            }
        }
    }

    /// At most one favorite per property, whatever the call sequence.
    #[test]
    fn prop_property_ids_unique(ops in prop::collection::vec(arb_op(), 0..40)) {
        let mut store = InMemoryFavoritesStore::new();
        let mut model = Model::new();
        for op in &ops {
            apply(&mut store, &mut model, op);
        }

        let mut ids = store.property_ids();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        prop_assert_eq!(ids.len(), total);
    }

    /// Favorite ids strictly increase in list order and every new id
    /// exceeds all ids present at the time it was assigned.
    #[test]
    fn prop_favorite_ids_increase(ops in prop::collection::vec(arb_op(), 0..40)) {
        let mut store = InMemoryFavoritesStore::new();
        let mut model = Model::new();

        for op in &ops {
            let max_before = store.list().iter().map(|f| f.id).max();
            let was_present = match op {
                Op::Add(property_id, _) => store.is_favorite(*property_id),
                _ => true,
            };
            apply(&mut store, &mut model, op);

            if let (Op::Add(property_id, _), false) = (op, was_present) {
                let added = store.get(*property_id).unwrap();
                if let Some(max_before) = max_before {
                    prop_assert!(added.id > max_before);
                }
            }

            let ids: Vec<FavoriteId> = store.list().iter().map(|f| f.id).collect();
            prop_assert!(ids.windows(2).all(|w| w[0] < w[1]));
        }
    }

    /// A successful add always yields a record that the store reports back.
    #[test]
    fn prop_add_then_get(property_id in arb_property_id(), notes in arb_notes()) {
        let mut store = InMemoryFavoritesStore::new();
        let added = store.add(property_id, &notes).unwrap();
        prop_assert_eq!(added.id, FavoriteId::FIRST);
        prop_assert_eq!(store.get(property_id), Some(added));
    }
}

#[test]
fn test_add_favorite_scenario() {
    init_test_logging();
    let mut store = InMemoryFavoritesStore::new();

    let first = store.add(PropertyId::new(5), "").unwrap();
    assert_eq!(first.id, FavoriteId::FIRST);
    assert!(store.is_favorite(PropertyId::new(5)));

    let again = store.add(PropertyId::new(5), "");
    assert_duplicate_favorite(&again, PropertyId::new(5));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_remove_unknown_leaves_store_untouched() {
    let mut store = InMemoryFavoritesStore::new();
    store.add(PropertyId::new(1), "keep").unwrap();

    let result = store.remove(PropertyId::new(2));
    assert_favorite_not_found(&result, PropertyId::new(2));
    assert_eq!(store.property_ids(), vec![PropertyId::new(1)]);
}

#[test]
fn test_not_found_rejections_are_logged() {
    let logs = capture_logs(|| {
        let mut store = InMemoryFavoritesStore::new();
        let _ = store.remove(PropertyId::new(9));
        let _ = store.update_notes(PropertyId::new(9), "x");
        store.add(PropertyId::new(9), "").unwrap();
        let _ = store.add(PropertyId::new(9), "");
    });
    assert!(logs.contains("rejected removal of missing favorite"), "logs: {}", logs);
    assert!(logs.contains("rejected notes update for missing favorite"), "logs: {}", logs);
    assert!(logs.contains("rejected duplicate favorite"), "logs: {}", logs);
    assert!(logs.contains("property_id=9"), "logs: {}", logs);
}
