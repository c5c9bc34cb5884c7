//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read shared state from Leptos context providers set up in
//! `app`: the client config, the published `AuthState`, and the session
//! manager handle.

pub mod auth_provider;
pub mod banner;
pub mod filter_select;
pub mod header;
pub mod protected_route;
pub mod search_bar;
