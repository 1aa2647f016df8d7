use super::*;

#[test]
fn memory_store_starts_empty() {
    let store = MemoryStore::new();
    assert_eq!(store.get("theme"), Ok(None));
    assert!(store.writes().is_empty());
}

#[test]
fn memory_store_set_then_get() {
    let store = MemoryStore::new();
    store.set("theme", "dark").unwrap();
    assert_eq!(store.get("theme"), Ok(Some("dark".to_owned())));
}

#[test]
fn memory_store_overwrites_and_records_history() {
    let store = MemoryStore::new();
    store.set("theme", "dark").unwrap();
    store.set("theme", "light").unwrap();
    assert_eq!(store.get("theme"), Ok(Some("light".to_owned())));
    assert_eq!(
        store.writes(),
        vec![("theme".to_owned(), "dark".to_owned()), ("theme".to_owned(), "light".to_owned())]
    );
}

#[test]
fn seeded_entry_is_not_a_write() {
    let store = MemoryStore::with_entry("theme", "dark");
    assert_eq!(store.get("theme"), Ok(Some("dark".to_owned())));
    assert!(store.writes().is_empty());
}

#[test]
fn borrowed_store_delegates() {
    let store = MemoryStore::new();
    let by_ref = &store;
    by_ref.set("k", "v").unwrap();
    assert_eq!(store.get("k"), Ok(Some("v".to_owned())));
}

#[test]
fn storage_error_messages() {
    assert_eq!(StorageError::Unavailable.to_string(), "storage unavailable");
    assert_eq!(StorageError::Write("quota".into()).to_string(), "storage write failed: quota");
}
