//! Auth session manager: the single owner of "who is logged in".
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds one [`SessionManager`] inside the router and provides it as
//! context. Pages call `login` / `register` / `logout` / `social_login` on it;
//! everything else observes the [`AuthState`] it publishes.
//!
//! DESIGN
//! ======
//! The manager owns the in-memory [`Session`], the persisted mirror, the
//! inactivity [`SessionTimer`] and the [`ActivityMonitor`]. Timer and
//! activity callbacks hold only a `Weak` back-reference, so dropping the last
//! manager clone tears down the countdown and the window listeners.
//! Explicit logout and inactivity expiry run the same `logout` path.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::auth::{AuthState, Session};
use crate::config::{ClientConfig, INACTIVITY_WINDOW};
use crate::error::ClientError;
use crate::net::api::{HttpAuthTransport, social_login_endpoint};
use crate::net::types::{Credentials, LoginResponse, RegisterRequest, User};
use crate::util::activity::{ActivityMonitor, ActivitySource};
use crate::util::route_guard::LOGIN_PATH;
use crate::util::storage::{CredentialStore, KeyValueStore};
use crate::util::timer::{Scheduler, SessionTimer};

/// Authentication endpoints the manager talks to.
#[allow(async_fn_in_trait)]
pub trait AuthTransport {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ClientError>;
    async fn register(&self, request: &RegisterRequest) -> Result<serde_json::Value, ClientError>;
}

/// In-app navigation plus full-page redirects.
pub trait Navigator {
    fn navigate(&self, path: &str);
    fn redirect_external(&self, url: &str);
}

/// [`Navigator`] over the router's navigate function.
pub struct RouterNavigator {
    navigate: Box<dyn Fn(&str)>,
}

impl RouterNavigator {
    pub fn new(navigate: impl Fn(&str) + 'static) -> Self {
        Self { navigate: Box::new(navigate) }
    }
}

impl Navigator for RouterNavigator {
    fn navigate(&self, path: &str) {
        (self.navigate)(path);
    }

    fn redirect_external(&self, url: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if window.location().set_href(url).is_err() {
                    leptos::logging::warn!("redirect to {url} failed");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            log::debug!("external redirect to {url} skipped outside the browser");
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogoutReason {
    Explicit,
    Inactivity,
}

/// Collaborators the manager is built from.
pub struct SessionDeps {
    pub config: ClientConfig,
    pub store: Rc<dyn KeyValueStore>,
    pub scheduler: Rc<dyn Scheduler>,
    pub activity: Rc<dyn ActivitySource>,
    pub navigator: Rc<dyn Navigator>,
    pub on_change: Rc<dyn Fn(AuthState)>,
}

struct Inner {
    session: Option<Session>,
    checking: bool,
    timer: SessionTimer,
    monitor: ActivityMonitor,
}

struct Shared {
    config: ClientConfig,
    store: CredentialStore,
    navigator: Rc<dyn Navigator>,
    on_change: Rc<dyn Fn(AuthState)>,
    inner: RefCell<Inner>,
}

impl Shared {
    fn snapshot(&self) -> AuthState {
        let inner = self.inner.borrow();
        AuthState { user: inner.session.as_ref().map(|s| s.user.clone()), loading: inner.checking }
    }

    fn publish(&self) {
        let state = self.snapshot();
        (self.on_change)(state);
    }

    /// DISARMED -> ARMED: hold the session, start the countdown and listen for activity.
    fn establish(self: &Rc<Self>, session: Session) {
        {
            let mut inner = self.inner.borrow_mut();
            inner.session = Some(session);
            inner.checking = false;
        }
        self.arm();
        let weak = Rc::downgrade(self);
        self.inner.borrow_mut().monitor.start(Rc::new(move || {
            if let Some(shared) = weak.upgrade() {
                shared.touch();
            }
        }));
        self.publish();
    }

    fn arm(self: &Rc<Self>) {
        let weak: Weak<Self> = Rc::downgrade(self);
        self.inner.borrow_mut().timer.arm(Box::new(move || {
            if let Some(shared) = weak.upgrade() {
                shared.logout(LogoutReason::Inactivity);
            }
        }));
    }

    fn touch(self: &Rc<Self>) {
        if self.inner.borrow().session.is_some() {
            self.arm();
        }
    }

    fn logout(&self, reason: LogoutReason) {
        let had_session = {
            let mut inner = self.inner.borrow_mut();
            inner.timer.disarm();
            inner.monitor.stop();
            inner.checking = false;
            inner.session.take().is_some()
        };
        self.store.clear();
        match reason {
            LogoutReason::Inactivity => leptos::logging::log!("session expired after inactivity"),
            LogoutReason::Explicit if had_session => log::info!("logged out"),
            LogoutReason::Explicit => log::debug!("logout with no active session"),
        }
        self.publish();
        self.navigator.navigate(LOGIN_PATH);
    }
}

/// Cheap-to-clone handle on the shared session.
pub struct SessionManager<T> {
    shared: Rc<Shared>,
    transport: Rc<T>,
}

impl<T> Clone for SessionManager<T> {
    fn clone(&self) -> Self {
        Self { shared: Rc::clone(&self.shared), transport: Rc::clone(&self.transport) }
    }
}

/// Manager wired to the real HTTP endpoints.
pub type AppSession = SessionManager<HttpAuthTransport>;

impl<T: AuthTransport> SessionManager<T> {
    /// Build a manager in the "session check in progress" state. Call
    /// [`SessionManager::rehydrate`] once to resolve it.
    pub fn new(transport: T, deps: SessionDeps) -> Self {
        let inner = Inner {
            session: None,
            checking: true,
            timer: SessionTimer::new(deps.scheduler, INACTIVITY_WINDOW),
            monitor: ActivityMonitor::new(deps.activity),
        };
        let shared = Shared {
            config: deps.config,
            store: CredentialStore::new(deps.store),
            navigator: deps.navigator,
            on_change: deps.on_change,
            inner: RefCell::new(inner),
        };
        Self { shared: Rc::new(shared), transport: Rc::new(transport) }
    }

    /// Restore a persisted session at startup. Never fails: anything short
    /// of a complete record resolves to logged out.
    pub fn rehydrate(&self) {
        match self.shared.store.load() {
            Ok(session) => {
                log::info!("restored session for user {}", session.user.id);
                self.shared.establish(session);
            }
            Err(e) => {
                log::debug!("{e}");
                self.shared.inner.borrow_mut().checking = false;
                self.shared.publish();
            }
        }
    }

    /// Exchange credentials for a session.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::AuthenticationFailure`] on any transport or
    /// status failure, or when the server omits the token.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ClientError> {
        let response = self.transport.login(credentials).await.map_err(|e| {
            leptos::logging::warn!("login failed: {e}");
            ClientError::AuthenticationFailure
        })?;
        if response.token.is_empty() {
            leptos::logging::warn!("login response carried no token");
            return Err(ClientError::AuthenticationFailure);
        }
        let session = Session { token: response.token.clone(), user: response.user.clone() };
        self.shared.store.save(&session);
        self.shared.establish(session);
        log::info!("logged in as user {}", response.user.id);
        Ok(response)
    }

    /// Create an account. Does not sign the new user in.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::RegistrationFailure`] on any transport or status failure.
    pub async fn register(&self, request: &RegisterRequest) -> Result<serde_json::Value, ClientError> {
        self.transport.register(request).await.map_err(|e| {
            leptos::logging::warn!("registration failed: {e}");
            ClientError::RegistrationFailure
        })
    }

    /// End the session and go to the login view. Safe with no session.
    pub fn logout(&self) {
        self.shared.logout(LogoutReason::Explicit);
    }

    /// Leave the app for the provider's sign-in flow.
    pub fn social_login(&self, provider: &str) {
        let url = self.shared.config.url(&social_login_endpoint(provider));
        self.shared.navigator.redirect_external(&url);
    }

    /// Record user activity: restarts the countdown while armed.
    pub fn touch(&self) {
        self.shared.touch();
    }

    pub fn auth_state(&self) -> AuthState {
        self.shared.snapshot()
    }

    pub fn current_user(&self) -> Option<User> {
        self.shared.inner.borrow().session.as_ref().map(|s| s.user.clone())
    }

    pub fn is_armed(&self) -> bool {
        self.shared.inner.borrow().timer.is_armed()
    }

    pub fn is_monitoring(&self) -> bool {
        self.shared.inner.borrow().monitor.is_active()
    }

    #[cfg(test)]
    fn session(&self) -> Option<Session> {
        self.shared.inner.borrow().session.clone()
    }
}
