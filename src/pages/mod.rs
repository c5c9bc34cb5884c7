//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (loading, submitting,
//! navigating) and keeps decisions in `state` / `util` so they stay testable
//! without a browser.

pub mod admin;
pub mod apply;
pub mod certificate;
pub mod contact;
pub mod course_content;
pub mod courses;
pub mod dashboard;
pub mod forum;
pub mod home;
pub mod login;
pub mod profile;
pub mod register;
pub mod resources;
pub mod topic;
pub mod topic_form;

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// Id of the signed-in user, read without subscribing.
pub(crate) fn current_user_id() -> Option<String> {
    expect_context::<RwSignal<AuthState>>().with_untracked(|a| a.user.as_ref().map(|u| u.id.clone()))
}
