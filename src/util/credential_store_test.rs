use super::*;
use crate::net::types::Profile;

fn sample_record() -> StoredSession {
    StoredSession {
        token: "tok-abc".to_owned(),
        profile: Profile {
            id: "u-1".to_owned(),
            display_name: "Ana".to_owned(),
            email: "ana@taller.test".to_owned(),
        },
        roles: vec!["Recepcionista".to_owned()],
        expires_at: None,
    }
}

// =============================================================
// MemoryStore
// =============================================================

#[test]
fn save_then_load_round_trips() {
    let store = MemoryStore::default();
    store.save(&sample_record());
    assert_eq!(store.load(), Some(sample_record()));
}

#[test]
fn load_on_empty_slot_is_none() {
    let store = MemoryStore::default();
    assert_eq!(store.load(), None);
}

#[test]
fn save_overwrites_previous_record() {
    let store = MemoryStore::default();
    store.save(&sample_record());

    let mut replacement = sample_record();
    replacement.token = "tok-new".to_owned();
    store.save(&replacement);

    assert_eq!(store.load().unwrap().token, "tok-new");
}

#[test]
fn clear_empties_the_slot() {
    let store = MemoryStore::default();
    store.save(&sample_record());
    store.clear();
    assert!(store.is_empty());
    assert_eq!(store.load(), None);
}

#[test]
fn clear_on_empty_slot_is_a_no_op() {
    let store = MemoryStore::default();
    store.clear();
    assert!(store.is_empty());
}

#[test]
fn corrupt_payload_loads_as_none_and_is_discarded() {
    let store = MemoryStore::with_raw("{not json");
    assert_eq!(store.load(), None);
    assert!(store.is_empty());
}

#[test]
fn payload_with_wrong_shape_loads_as_none() {
    let store = MemoryStore::with_raw(r#"{"token": 7}"#);
    assert_eq!(store.load(), None);
}

// =============================================================
// LocalStorageStore (outside the browser)
// =============================================================

#[test]
fn local_storage_store_is_inert_without_a_window() {
    let store = LocalStorageStore;
    store.save(&sample_record());
    assert_eq!(store.load(), None);
    store.clear();
}
