use super::*;
use crate::util::session_store::MemorySessionStore;

#[test]
fn auth_state_default_is_loading_without_user() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(!state.is_logged_in());
}

#[test]
fn load_from_empty_store_is_logged_out() {
    let store = MemorySessionStore::new();
    let state = AuthState::load(&store);
    assert!(!state.loading);
    assert!(!state.is_logged_in());
}

#[test]
fn load_reads_stored_user() {
    let store = MemorySessionStore::with_raw(r#"{"name":"A","phone_number":"9876543210"}"#);
    let state = AuthState::load(&store);
    assert!(state.is_logged_in());
    assert_eq!(state.user.and_then(|u| u.name).as_deref(), Some("A"));
}

#[test]
fn load_leaves_unreadable_record_in_place() {
    let store = MemorySessionStore::with_raw("not-json");
    let state = AuthState::load(&store);
    assert!(!state.loading);
    assert!(!state.is_logged_in());
    assert_eq!(store.raw().as_deref(), Some("not-json"));
}

#[test]
fn load_keeps_valid_record_in_store() {
    let store = MemorySessionStore::with_raw(r#"{"name":"A"}"#);
    let _ = AuthState::load(&store);
    assert_eq!(store.raw().as_deref(), Some(r#"{"name":"A"}"#));
}
