use super::*;

fn named(name: &str) -> SessionRecord {
    SessionRecord { name: Some(name.to_owned()), ..SessionRecord::default() }
}

#[test]
fn memory_store_starts_empty() {
    let store = MemorySessionStore::new();
    assert_eq!(store.get(), None);
    assert_eq!(store.raw(), None);
    assert!(!store.has_session());
}

#[test]
fn memory_store_persists_exact_json() {
    let store = MemorySessionStore::new();
    store.set(&named("A")).unwrap();
    assert_eq!(store.raw().as_deref(), Some(r#"{"name":"A"}"#));
    assert_eq!(store.get(), Some(named("A")));
    assert!(store.has_session());
}

#[test]
fn memory_store_set_replaces_previous_record() {
    let store = MemorySessionStore::new();
    store.set(&named("A")).unwrap();
    store.set(&named("B")).unwrap();
    assert_eq!(store.get(), Some(named("B")));
}

#[test]
fn memory_store_clear_removes_record() {
    let store = MemorySessionStore::new();
    store.set(&named("A")).unwrap();
    store.clear();
    assert_eq!(store.get(), None);
    store.clear();
    assert_eq!(store.raw(), None);
}

#[test]
fn unreadable_raw_value_reads_as_no_session() {
    let store = MemorySessionStore::with_raw("{not json");
    assert_eq!(store.get(), None);
    assert!(!store.has_session());

    let wrong_shape = MemorySessionStore::with_raw(r#"{"id": "seven"}"#);
    assert_eq!(wrong_shape.get(), None);
}

#[test]
fn empty_object_is_a_session() {
    let store = MemorySessionStore::with_raw("{}");
    assert_eq!(store.get(), Some(SessionRecord::default()));
}

#[test]
fn handle_derefs_to_inner_store() {
    let handle = SessionHandle::new(MemorySessionStore::new());
    handle.set(&named("A")).unwrap();
    let cloned = handle.clone();
    assert_eq!(cloned.get(), Some(named("A")));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn local_store_is_inert_outside_browser() {
    let store = LocalSessionStore;
    assert_eq!(store.get(), None);
    assert!(matches!(store.set(&named("A")), Err(SessionError::Unavailable)));
    store.clear();
}
