//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `Session` is what the session manager owns; `AuthState` is the read-only
//! projection it publishes to route guards and user-aware components. The
//! bearer token never leaves the manager.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::config::ADMIN_ROLE;
use crate::net::types::User;

/// Authenticated credential and identity. Both halves always travel together.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Authentication state tracking the current user and loading status.
///
/// `loading` is true until the startup session check has finished.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    pub fn checking() -> Self {
        Self { user: None, loading: true }
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.role == ADMIN_ROLE)
    }
}
