use super::*;

fn session() -> Session {
    Session {
        token: "tok-123".to_owned(),
        user: User { id: "5".to_owned(), name: "Mpho".to_owned(), role: "tenant".to_owned(), email: None },
    }
}

fn store() -> (Rc<MemoryStore>, CredentialStore) {
    let backend = Rc::new(MemoryStore::new());
    let creds = CredentialStore::new(backend.clone());
    (backend, creds)
}

// =============================================================
// Save / load
// =============================================================

#[test]
fn save_then_load_returns_same_session() {
    let (backend, creds) = store();
    creds.save(&session());
    assert_eq!(backend.get(TOKEN_KEY).as_deref(), Some("tok-123"));
    assert_eq!(creds.load(), Ok(session()));
}

#[test]
fn clear_removes_both_entries() {
    let (backend, creds) = store();
    creds.save(&session());
    creds.clear();
    assert!(backend.is_empty());
}

#[test]
fn clear_on_empty_store_is_noop() {
    let (backend, creds) = store();
    creds.clear();
    assert_eq!(backend.len(), 0);
}

// =============================================================
// Partial records
// =============================================================

#[test]
fn token_without_user_is_skipped() {
    let (backend, creds) = store();
    backend.set(TOKEN_KEY, "tok");
    assert!(matches!(creds.load(), Err(ClientError::RehydrationSkip(_))));
}

#[test]
fn user_without_token_is_skipped() {
    let (backend, creds) = store();
    backend.set(USER_KEY, r#"{"id": 1, "name": "A", "role": "tenant"}"#);
    assert!(matches!(creds.load(), Err(ClientError::RehydrationSkip(_))));
}

#[test]
fn empty_token_is_skipped() {
    let (backend, creds) = store();
    backend.set(TOKEN_KEY, "");
    backend.set(USER_KEY, r#"{"id": 1}"#);
    assert!(matches!(creds.load(), Err(ClientError::RehydrationSkip(_))));
}

#[test]
fn corrupt_user_record_is_skipped() {
    let (backend, creds) = store();
    backend.set(TOKEN_KEY, "tok");
    backend.set(USER_KEY, "{not json");
    let err = creds.load().unwrap_err();
    assert!(err.to_string().contains("user record unreadable"));
}
