//! Builds the session manager and exposes it to the view tree.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted inside `<Router>` so logout can navigate. The manager publishes
//! every change into the `RwSignal<AuthState>` that `App` provides; pages
//! reach the manager itself through [`use_session`]. The stored value is
//! disposed with this component, which drops the timer and the activity
//! listeners.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::ClientConfig;
use crate::net::api::HttpAuthTransport;
use crate::state::auth::AuthState;
use crate::state::session::{AppSession, RouterNavigator, SessionDeps, SessionManager};
use crate::util::activity::default_activity_source;
use crate::util::storage::default_store;
use crate::util::timer::default_scheduler;

/// Context handle on the app's session manager.
pub type SessionHandle = StoredValue<AppSession, LocalStorage>;

/// Session manager provided by the nearest [`AuthProvider`].
pub fn use_session() -> SessionHandle {
    expect_context::<SessionHandle>()
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();

    let deps = SessionDeps {
        config: config.clone(),
        store: default_store(),
        scheduler: default_scheduler(),
        activity: default_activity_source(),
        navigator: Rc::new(RouterNavigator::new(move |path| navigate(path, NavigateOptions::default()))),
        on_change: Rc::new(move |state: AuthState| auth.set(state)),
    };
    let handle: SessionHandle = StoredValue::new_local(SessionManager::new(HttpAuthTransport::new(config), deps));
    provide_context(handle);

    // Effects only run in the browser, so server renders stay in the
    // "checking" state until hydration restores the session.
    Effect::new(move || handle.with_value(AppSession::rehydrate));

    children()
}
