//! Route gating for protected and admin-only views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route applies the same decision, so it lives here as a
//! pure function of the published `AuthState`. The `ProtectedRoute`
//! component renders whatever this returns and never mutates the session.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use crate::state::auth::AuthState;

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";

/// Privilege a route requires beyond being public.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Access {
    /// Any signed-in user.
    #[default]
    Member,
    /// Signed-in user whose role is the admin sentinel.
    Admin,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Startup session check still running: show a placeholder.
    Pending,
    /// Not signed in: go to this login URL, which carries the requested location.
    RedirectToLogin(String),
    /// Signed in without the required role.
    RedirectHome,
    Render,
}

impl GuardDecision {
    /// Redirects replace the guarded entry so Back does not bounce off the guard again.
    pub fn replaces_history(&self) -> bool {
        matches!(self, Self::RedirectToLogin(_) | Self::RedirectHome)
    }
}

/// Decide what a guarded route shows for the current auth state.
pub fn decide(auth: &AuthState, access: Access, requested: &str) -> GuardDecision {
    if auth.loading {
        return GuardDecision::Pending;
    }
    if auth.user.is_none() {
        return GuardDecision::RedirectToLogin(login_redirect_path(requested));
    }
    if access == Access::Admin && !auth.is_admin() {
        return GuardDecision::RedirectHome;
    }
    GuardDecision::Render
}

/// Path plus query string of the current location, as the router reports it.
pub fn requested_location(pathname: &str, search: &str) -> String {
    let search = search.trim_start_matches('?');
    if search.is_empty() { pathname.to_owned() } else { format!("{pathname}?{search}") }
}

/// Login URL that remembers where the user was headed.
pub fn login_redirect_path(requested: &str) -> String {
    if requested.is_empty() || requested == HOME_PATH {
        return LOGIN_PATH.to_owned();
    }
    format!("{LOGIN_PATH}?from={}", urlencoding::encode(requested))
}

/// Where to go after signing in, given the `from` query value as the
/// router hands it over (already decoded).
///
/// Only same-origin relative paths are honoured; anything else (absolute
/// URLs, protocol-relative `//host`, the login page itself) returns home.
pub fn return_path(from: Option<&str>) -> String {
    let Some(target) = from else {
        return HOME_PATH.to_owned();
    };
    let safe = target.starts_with('/')
        && !target.starts_with("//")
        && !target.contains('\\')
        && !target.starts_with(LOGIN_PATH);
    if safe { target.to_owned() } else { HOME_PATH.to_owned() }
}
