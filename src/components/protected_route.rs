//! Route wrapper that gates children on the current session.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::state::auth::AuthState;
use crate::util::route_guard::{Access, GuardDecision, HOME_PATH, decide, requested_location};

/// Render `children` only for signed-in users (and only admins when
/// `admin_only`). While the startup session check runs a placeholder is
/// shown instead of redirecting.
#[component]
pub fn ProtectedRoute(#[prop(optional)] admin_only: bool, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let access = if admin_only { Access::Admin } else { Access::Member };

    move || {
        let requested = requested_location(&location.pathname.get(), &location.search.get());
        let decision = auth.with(|state| decide(state, access, &requested));
        let options = NavigateOptions { replace: decision.replaces_history(), ..NavigateOptions::default() };
        match decision {
            GuardDecision::Pending => view! { <div class="route-guard__pending">"Loading..."</div> }.into_any(),
            GuardDecision::RedirectToLogin(path) => view! { <Redirect path=path options=options/> }.into_any(),
            GuardDecision::RedirectHome => view! { <Redirect path=HOME_PATH options=options/> }.into_any(),
            GuardDecision::Render => children().into_any(),
        }
    }
}
