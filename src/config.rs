//! Client configuration resolved at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! A WASM bundle has no process environment at runtime, so the only knob the
//! deployment controls is the API origin baked in when the bundle is built.
//! Session and search timings are fixed for the lifetime of the app.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

/// Idle period after which an authenticated session is force-logged-out.
pub const INACTIVITY_WINDOW: Duration = Duration::from_secs(30 * 60);

/// Quiet period the search input must hold before a query is issued.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Storage key holding the bearer token.
pub const TOKEN_KEY: &str = "auth_token";

/// Storage key holding the serialized user record.
pub const USER_KEY: &str = "user_data";

/// Role value that grants access to admin-only views.
pub const ADMIN_ROLE: &str = "admin";

/// Default API base: empty means same origin as the page.
pub const DEFAULT_API_BASE: &str = "";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix prepended to every `/api/...` path.
    pub api_base: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_base: DEFAULT_API_BASE.to_owned() }
    }
}

impl ClientConfig {
    /// Build config from `GHEI_API_BASE` captured at compile time.
    pub fn from_build_env() -> Self {
        Self::from_api_base(option_env!("GHEI_API_BASE"))
    }

    /// Build config from an optional raw base URL.
    pub fn from_api_base(raw: Option<&str>) -> Self {
        let api_base = raw
            .map(str::trim)
            .unwrap_or(DEFAULT_API_BASE)
            .trim_end_matches('/')
            .to_owned();
        Self { api_base }
    }

    /// Join the configured base with an absolute API path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.api_base)
    }
}
