use super::*;

use std::cell::{Cell, RefCell};
use std::time::Duration;

use futures::executor::block_on;

use crate::config::{TOKEN_KEY, USER_KEY};
use crate::util::activity::ManualActivitySource;
use crate::util::storage::MemoryStore;
use crate::util::timer::ManualScheduler;

// =============================================================
// Fakes
// =============================================================

struct FakeTransport {
    login_result: Result<LoginResponse, ClientError>,
    register_result: Result<serde_json::Value, ClientError>,
    login_calls: Cell<usize>,
}

impl FakeTransport {
    fn accepting() -> Self {
        Self {
            login_result: Ok(LoginResponse { token: "tok-abc".to_owned(), user: user("tenant") }),
            register_result: Ok(serde_json::json!({ "message": "created" })),
            login_calls: Cell::new(0),
        }
    }

    fn rejecting() -> Self {
        Self {
            login_result: Err(ClientError::fetch("log in", "invalid credentials")),
            register_result: Err(ClientError::fetch("register", "email taken")),
            login_calls: Cell::new(0),
        }
    }
}

impl AuthTransport for FakeTransport {
    async fn login(&self, _credentials: &Credentials) -> Result<LoginResponse, ClientError> {
        self.login_calls.set(self.login_calls.get() + 1);
        self.login_result.clone()
    }

    async fn register(&self, _request: &RegisterRequest) -> Result<serde_json::Value, ClientError> {
        self.register_result.clone()
    }
}

#[derive(Default)]
struct RecordingNavigator {
    visits: RefCell<Vec<String>>,
    redirects: RefCell<Vec<String>>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.visits.borrow_mut().push(path.to_owned());
    }

    fn redirect_external(&self, url: &str) {
        self.redirects.borrow_mut().push(url.to_owned());
    }
}

struct Harness {
    manager: SessionManager<FakeTransport>,
    backend: Rc<MemoryStore>,
    clock: ManualScheduler,
    activity: ManualActivitySource,
    navigator: Rc<RecordingNavigator>,
    published: Rc<RefCell<Vec<AuthState>>>,
}

fn user(role: &str) -> User {
    User { id: "7".to_owned(), name: "Thandi".to_owned(), role: role.to_owned(), email: None }
}

fn credentials() -> Credentials {
    Credentials { email: "thandi@example.org".to_owned(), password: "secret1".to_owned() }
}

fn harness_with(transport: FakeTransport, config: ClientConfig) -> Harness {
    let backend = Rc::new(MemoryStore::new());
    let clock = ManualScheduler::new();
    let activity = ManualActivitySource::new();
    let navigator = Rc::new(RecordingNavigator::default());
    let published = Rc::new(RefCell::new(Vec::<AuthState>::new()));
    let sink = published.clone();
    let deps = SessionDeps {
        config,
        store: backend.clone(),
        scheduler: Rc::new(clock.clone()),
        activity: Rc::new(activity.clone()),
        navigator: navigator.clone(),
        on_change: Rc::new(move |state: AuthState| sink.borrow_mut().push(state)),
    };
    Harness { manager: SessionManager::new(transport, deps), backend, clock, activity, navigator, published }
}

fn harness(transport: FakeTransport) -> Harness {
    harness_with(transport, ClientConfig::default())
}

fn logged_in() -> Harness {
    let h = harness(FakeTransport::accepting());
    h.manager.rehydrate();
    block_on(h.manager.login(&credentials())).unwrap();
    h
}

fn last_published(h: &Harness) -> AuthState {
    h.published.borrow().last().cloned().unwrap()
}

const MINUTE: Duration = Duration::from_secs(60);

// =============================================================
// Rehydrate
// =============================================================

#[test]
fn new_manager_reports_session_check_in_progress() {
    let h = harness(FakeTransport::accepting());
    assert_eq!(h.manager.auth_state(), AuthState::checking());
    assert!(!h.manager.is_armed());
}

#[test]
fn rehydrate_complete_record_restores_session_and_arms() {
    let h = harness(FakeTransport::accepting());
    h.backend.set(TOKEN_KEY, "tok-stored");
    h.backend.set(USER_KEY, r#"{"id": 7, "name": "Thandi", "role": "tenant"}"#);

    h.manager.rehydrate();

    let state = last_published(&h);
    assert!(!state.loading);
    assert_eq!(state.user.map(|u| u.id), Some("7".to_owned()));
    assert_eq!(h.manager.session().map(|s| s.token), Some("tok-stored".to_owned()));
    assert!(h.manager.is_armed());
    assert!(h.manager.is_monitoring());
}

#[test]
fn rehydrate_with_token_only_is_logged_out() {
    let h = harness(FakeTransport::accepting());
    h.backend.set(TOKEN_KEY, "tok-stored");

    h.manager.rehydrate();

    assert_eq!(last_published(&h), AuthState::default());
    assert!(h.manager.session().is_none());
    assert!(!h.manager.is_armed());
    assert!(h.navigator.visits.borrow().is_empty());
}

#[test]
fn rehydrate_with_user_only_is_logged_out() {
    let h = harness(FakeTransport::accepting());
    h.backend.set(USER_KEY, r#"{"id": 7, "name": "Thandi", "role": "tenant"}"#);

    h.manager.rehydrate();

    assert_eq!(h.manager.auth_state(), AuthState::default());
    assert_eq!(h.clock.pending_count(), 0);
}

// =============================================================
// Login / register
// =============================================================

#[test]
fn login_persists_session_and_arms_timer() {
    let h = harness(FakeTransport::accepting());
    h.manager.rehydrate();

    let response = block_on(h.manager.login(&credentials())).unwrap();

    assert_eq!(response.token, "tok-abc");
    assert_eq!(h.backend.get(TOKEN_KEY).as_deref(), Some("tok-abc"));
    assert!(h.backend.get(USER_KEY).is_some_and(|u| !u.is_empty()));
    let session = h.manager.session().unwrap();
    assert_eq!(session.token, "tok-abc");
    assert_eq!(session.user, user("tenant"));
    assert!(h.manager.is_armed());
    assert_eq!(h.clock.pending_count(), 1);
    assert_eq!(h.activity.listener_count(), 1);
    assert_eq!(last_published(&h).user, Some(user("tenant")));
}

#[test]
fn login_failure_is_authentication_failure_without_session() {
    let h = harness(FakeTransport::rejecting());
    h.manager.rehydrate();

    let result = block_on(h.manager.login(&credentials()));

    assert_eq!(result, Err(ClientError::AuthenticationFailure));
    assert!(h.manager.session().is_none());
    assert!(h.backend.is_empty());
    assert!(!h.manager.is_armed());
    assert_eq!(h.activity.listener_count(), 0);
}

#[test]
fn login_without_token_is_rejected() {
    let mut transport = FakeTransport::accepting();
    transport.login_result = Ok(LoginResponse { token: String::new(), user: user("tenant") });
    let h = harness(transport);

    let result = block_on(h.manager.login(&credentials()));

    assert_eq!(result, Err(ClientError::AuthenticationFailure));
    assert!(h.backend.is_empty());
}

#[test]
fn register_returns_payload_without_signing_in() {
    let h = harness(FakeTransport::accepting());
    h.manager.rehydrate();
    let request = RegisterRequest {
        name: "Sipho".to_owned(),
        email: "sipho@example.org".to_owned(),
        password: "secret1".to_owned(),
        role: "tenant".to_owned(),
    };

    let payload = block_on(h.manager.register(&request)).unwrap();

    assert_eq!(payload["message"], "created");
    assert!(h.manager.session().is_none());
    assert!(h.backend.is_empty());
    assert!(!h.manager.is_armed());
}

#[test]
fn register_failure_is_registration_failure() {
    let h = harness(FakeTransport::rejecting());
    let request = RegisterRequest {
        name: "Sipho".to_owned(),
        email: "sipho@example.org".to_owned(),
        password: "secret1".to_owned(),
        role: "tenant".to_owned(),
    };
    assert_eq!(block_on(h.manager.register(&request)), Err(ClientError::RegistrationFailure));
}

// =============================================================
// Logout
// =============================================================

#[test]
fn logout_clears_store_session_timer_and_navigates_to_login() {
    let h = logged_in();

    h.manager.logout();

    assert!(h.backend.is_empty());
    assert!(h.manager.session().is_none());
    assert!(!h.manager.is_armed());
    assert!(!h.manager.is_monitoring());
    assert_eq!(h.clock.pending_count(), 0);
    assert_eq!(h.activity.listener_count(), 0);
    assert_eq!(last_published(&h), AuthState::default());
    assert_eq!(*h.navigator.visits.borrow(), vec!["/login".to_owned()]);
}

#[test]
fn logout_is_idempotent() {
    let h = harness(FakeTransport::accepting());
    h.manager.rehydrate();

    h.manager.logout();
    h.manager.logout();

    assert!(h.backend.is_empty());
    assert!(h.manager.session().is_none());
    assert!(!h.manager.is_armed());
    assert_eq!(h.navigator.visits.borrow().len(), 2);
    assert!(h.navigator.visits.borrow().iter().all(|p| p == "/login"));
}

#[test]
fn logout_during_session_check_resolves_loading() {
    let h = harness(FakeTransport::accepting());
    h.manager.logout();
    assert!(!h.manager.auth_state().loading);
}

// =============================================================
// Inactivity
// =============================================================

#[test]
fn idle_for_full_window_logs_out_exactly_once() {
    let h = logged_in();

    h.clock.advance(INACTIVITY_WINDOW - Duration::from_secs(1));
    assert!(h.manager.session().is_some());

    h.clock.advance(Duration::from_secs(1));
    assert!(h.manager.session().is_none());
    assert!(h.backend.is_empty());
    assert_eq!(*h.navigator.visits.borrow(), vec!["/login".to_owned()]);

    h.clock.advance(INACTIVITY_WINDOW * 3);
    assert_eq!(h.navigator.visits.borrow().len(), 1);
}

#[test]
fn activity_restarts_full_window() {
    let h = logged_in();

    for _ in 0..5 {
        h.clock.advance(INACTIVITY_WINDOW - MINUTE);
        h.activity.emit();
    }
    assert!(h.manager.session().is_some());
    assert!(h.navigator.visits.borrow().is_empty());

    h.clock.advance(INACTIVITY_WINDOW - MINUTE);
    assert!(h.manager.session().is_some());
    h.clock.advance(MINUTE);
    assert!(h.manager.session().is_none());
}

#[test]
fn rapid_activity_coalesces_into_one_countdown() {
    let h = logged_in();
    for _ in 0..20 {
        h.activity.emit();
    }
    assert_eq!(h.clock.pending_count(), 1);
}

#[test]
fn touch_without_session_does_not_arm() {
    let h = harness(FakeTransport::accepting());
    h.manager.rehydrate();
    h.manager.touch();
    assert!(!h.manager.is_armed());
    assert_eq!(h.clock.pending_count(), 0);
}

#[test]
fn login_again_keeps_single_listener() {
    let h = logged_in();
    block_on(h.manager.login(&credentials())).unwrap();
    assert_eq!(h.activity.listener_count(), 1);
    assert_eq!(h.clock.pending_count(), 1);
    assert_eq!(h.manager.transport.login_calls.get(), 2);
}

#[test]
fn dropping_manager_releases_timer_and_listeners() {
    let Harness { manager, clock, activity, .. } = logged_in();
    let clone = manager.clone();
    drop(manager);
    assert_eq!(clock.pending_count(), 1);
    drop(clone);
    assert_eq!(clock.pending_count(), 0);
    assert_eq!(activity.listener_count(), 0);
}

// =============================================================
// Social login
// =============================================================

#[test]
fn social_login_redirects_to_provider_endpoint() {
    let h = harness(FakeTransport::accepting());
    h.manager.social_login("google");
    assert_eq!(*h.navigator.redirects.borrow(), vec!["/api/auth/google".to_owned()]);
    assert!(h.navigator.visits.borrow().is_empty());
}

#[test]
fn social_login_uses_configured_api_base() {
    let config = ClientConfig::from_api_base(Some("https://api.example.org/"));
    let h = harness_with(FakeTransport::accepting(), config);
    h.manager.social_login("facebook");
    assert_eq!(*h.navigator.redirects.borrow(), vec!["https://api.example.org/api/auth/facebook".to_owned()]);
}

#[test]
fn router_navigator_forwards_paths() {
    let seen = Rc::new(RefCell::new(Vec::<String>::new()));
    let sink = seen.clone();
    let navigator = RouterNavigator::new(move |path| sink.borrow_mut().push(path.to_owned()));
    navigator.navigate("/dashboard");
    assert_eq!(*seen.borrow(), vec!["/dashboard".to_owned()]);
}
