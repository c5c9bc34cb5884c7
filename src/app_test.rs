use super::*;

use leptos_router::PossibleRouteMatch;

// =============================================================
// Guarded sections
// =============================================================

#[test]
fn section_matches_its_root() {
    let matched = section("admin").test("/admin");
    assert!(matched.is_some_and(|m| m.is_complete()));
}

#[test]
fn section_matches_nested_paths() {
    let matched = section("admin").test("/admin/users/7");
    assert!(matched.is_some_and(|m| m.is_complete()));

    let matched = section("dashboard").test("/dashboard/applications");
    assert!(matched.is_some_and(|m| m.is_complete()));
}

#[test]
fn section_rejects_other_roots() {
    assert!(section("admin").test("/dashboard").is_none());
    assert!(section("dashboard").test("/forum/new").is_none());
}
