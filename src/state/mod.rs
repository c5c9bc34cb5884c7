//! Client-side application state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` owns authentication and publishes `auth::AuthState`; `search`
//! backs the header search bar; the feature modules hold per-page fetch state
//! and the pure logic pages need between network calls.

pub mod auth;
pub mod courses;
pub mod fetch;
pub mod forum;
pub mod profile;
pub mod resources;
pub mod search;
pub mod session;

/// Content languages offered by the catalog, library and profile.
pub const LANGUAGE_OPTIONS: &[(&str, &str)] = &[("en", "English"), ("af", "Afrikaans"), ("zu", "Zulu"), ("xh", "Xhosa")];

/// Language filter choices, led by the "any" option.
pub const LANGUAGE_FILTERS: &[(&str, &str)] =
    &[("", "All Languages"), ("en", "English"), ("af", "Afrikaans"), ("zu", "Zulu"), ("xh", "Xhosa")];
