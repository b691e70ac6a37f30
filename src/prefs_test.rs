use super::*;
use crate::storage::{MemoryStore, StorageError};

fn open_empty() -> PreferenceSet<MemoryStore> {
    PreferenceSet::open(MemoryStore::new(), WISHLIST_KEY)
}

fn open_with_raw(raw: &str) -> PreferenceSet<MemoryStore> {
    let mut store = MemoryStore::new();
    store.set(WISHLIST_KEY, raw).expect("seed store");
    PreferenceSet::open(store, WISHLIST_KEY)
}

fn stored(set: &PreferenceSet<MemoryStore>) -> Option<String> {
    set.store().get(WISHLIST_KEY)
}

// =============================================================
// Loading
// =============================================================

#[test]
fn open_with_no_stored_value_yields_empty_set() {
    let set = open_empty();
    assert_eq!(set.count(), 0);
    assert!(set.items().is_empty());
}

#[test]
fn open_with_malformed_value_yields_empty_set() {
    let set = open_with_raw("not-json");
    assert_eq!(set.count(), 0);
}

#[test]
fn open_with_non_array_json_yields_empty_set() {
    let set = open_with_raw("{\"a\": 1}");
    assert_eq!(set.count(), 0);
}

#[test]
fn open_with_mixed_type_array_yields_empty_set() {
    let set = open_with_raw("[\"a\", 7]");
    assert_eq!(set.count(), 0);
}

#[test]
fn open_preserves_stored_order() {
    let set = open_with_raw("[\"1001\",\"2002\",\"3003\"]");
    assert_eq!(set.items(), ["1001", "2002", "3003"]);
}

#[test]
fn tampered_duplicate_exposes_deduplicated_set_without_rewriting() {
    let set = open_with_raw("[\"a\",\"b\",\"a\"]");

    assert_eq!(set.count(), 2);
    assert_eq!(set.items(), ["a", "b"]);
    // Raw form is only healed by the next mutation.
    assert_eq!(stored(&set), Some("[\"a\",\"b\",\"a\"]".to_owned()));
}

#[test]
fn mutation_after_tampered_duplicate_persists_healed_form() {
    let mut set = open_with_raw("[\"a\",\"b\",\"a\"]");
    set.add("c");
    assert_eq!(stored(&set), Some("[\"a\",\"b\",\"c\"]".to_owned()));
}

/// Store view sharing one map, modeling two tabs over one profile.
#[derive(Clone, Default)]
struct SharedStore(std::rc::Rc<std::cell::RefCell<std::collections::HashMap<String, String>>>);

impl KeyValueStore for SharedStore {
    fn get(&self, key: &str) -> Option<String> {
        self.0.borrow().get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.0.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.0.borrow_mut().remove(key);
        Ok(())
    }
}

#[test]
fn reload_picks_up_external_write() {
    let shared = SharedStore::default();
    let mut set = PreferenceSet::open(shared.clone(), WISHLIST_KEY);
    set.add("1001");

    // A second instance sharing the store wins the last write.
    let mut other = PreferenceSet::open(shared, WISHLIST_KEY);
    other.add("2002");

    set.reload();
    assert_eq!(set.items(), ["1001", "2002"]);
}

// =============================================================
// Mutations
// =============================================================

#[test]
fn add_then_contains_reports_membership() {
    let mut set = open_empty();
    assert!(set.add("p1"));
    assert!(set.contains("p1"));
}

#[test]
fn add_is_idempotent() {
    let mut set = open_empty();
    assert!(set.add("p1"));
    assert!(!set.add("p1"));
    assert_eq!(set.count(), 1);
}

#[test]
fn remove_then_contains_reports_absence() {
    let mut set = open_empty();
    set.add("p1");
    assert!(set.remove("p1"));
    assert!(!set.contains("p1"));
}

#[test]
fn remove_of_absent_id_reports_no_change() {
    let mut set = open_empty();
    assert!(!set.remove("ghost"));
}

#[test]
fn add_persists_full_set_immediately() {
    let mut set = open_empty();
    set.add("1001");
    set.add("2002");
    assert_eq!(stored(&set), Some("[\"1001\",\"2002\"]".to_owned()));
}

#[test]
fn count_tracks_distinct_surviving_ids() {
    let mut set = open_empty();
    set.add("a");
    set.add("b");
    set.add("a");
    set.remove("b");
    set.add("c");
    assert_eq!(set.count(), 2);
}

// =============================================================
// Toggle
// =============================================================

#[test]
fn toggle_on_empty_set_adds_and_persists() {
    let mut set = open_empty();
    assert!(set.toggle("x"));
    assert_eq!(stored(&set), Some("[\"x\"]".to_owned()));
}

#[test]
fn toggle_of_present_id_removes_it() {
    let mut set = open_empty();
    set.add("x");
    assert!(!set.toggle("x"));
    assert!(!set.contains("x"));
}

#[test]
fn double_toggle_restores_membership_and_storage() {
    let mut set = open_with_raw("[\"1001\",\"2002\"]");
    let before = stored(&set);

    set.toggle("9999");
    set.toggle("9999");

    assert!(!set.contains("9999"));
    assert_eq!(set.items(), ["1001", "2002"]);
    assert_eq!(stored(&set), before);
}

// =============================================================
// Persist failure degrades to memory
// =============================================================

/// Store whose writes always fail, for exercising the degrade path.
#[derive(Default)]
struct BrokenStore {
    values: std::collections::HashMap<String, String>,
}

impl KeyValueStore for BrokenStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Write {
            path: "quota".to_owned(),
            source: std::io::Error::other("write refused"),
        })
    }

    fn remove(&mut self, _key: &str) -> Result<(), StorageError> {
        Ok(())
    }
}

#[test]
fn failed_persist_still_mutates_in_memory() {
    let mut set = PreferenceSet::open(BrokenStore::default(), WISHLIST_KEY);

    assert!(set.add("p1"));
    assert!(set.contains("p1"));
    assert_eq!(set.count(), 1);
    assert_eq!(set.store().get(WISHLIST_KEY), None);
}

#[test]
fn failed_persist_keeps_toggle_answers_consistent() {
    let mut set = PreferenceSet::open(BrokenStore::default(), WISHLIST_KEY);

    assert!(set.toggle("x"));
    assert!(!set.toggle("x"));
    assert_eq!(set.count(), 0);
}
