use super::*;
use crate::net::types::User;

fn signed_in(role: &str) -> AuthState {
    AuthState {
        user: Some(User { id: "3".to_owned(), name: "Kagiso".to_owned(), role: role.to_owned(), email: None }),
        loading: false,
    }
}

// =============================================================
// decide
// =============================================================

#[test]
fn pending_while_session_check_runs() {
    let auth = AuthState::checking();
    assert_eq!(decide(&auth, Access::Member, "/forum"), GuardDecision::Pending);
    assert_eq!(decide(&auth, Access::Admin, "/admin"), GuardDecision::Pending);
}

#[test]
fn anonymous_redirects_to_login_with_source() {
    let auth = AuthState::default();
    assert_eq!(
        decide(&auth, Access::Member, "/courses/4"),
        GuardDecision::RedirectToLogin("/login?from=%2Fcourses%2F4".to_owned())
    );
}

#[test]
fn anonymous_on_admin_route_goes_to_login_not_home() {
    let auth = AuthState::default();
    assert!(matches!(decide(&auth, Access::Admin, "/admin"), GuardDecision::RedirectToLogin(_)));
}

#[test]
fn non_admin_on_admin_route_goes_home() {
    assert_eq!(decide(&signed_in("tenant"), Access::Admin, "/admin"), GuardDecision::RedirectHome);
}

#[test]
fn admin_on_admin_route_renders() {
    assert_eq!(decide(&signed_in("admin"), Access::Admin, "/admin"), GuardDecision::Render);
}

#[test]
fn redirects_replace_history_entry() {
    assert!(decide(&AuthState::default(), Access::Member, "/forum").replaces_history());
    assert!(decide(&signed_in("tenant"), Access::Admin, "/admin").replaces_history());
    assert!(!decide(&signed_in("admin"), Access::Admin, "/admin").replaces_history());
    assert!(!GuardDecision::Pending.replaces_history());
}

#[test]
fn member_route_renders_for_any_signed_in_user() {
    assert_eq!(decide(&signed_in("landlord"), Access::Member, "/profile"), GuardDecision::Render);
}

// =============================================================
// Redirect paths
// =============================================================

#[test]
fn login_redirect_path_keeps_query() {
    assert_eq!(login_redirect_path("/resources?type=guide"), "/login?from=%2Fresources%3Ftype%3Dguide");
}

#[test]
fn login_redirect_path_omits_home() {
    assert_eq!(login_redirect_path("/"), "/login");
    assert_eq!(login_redirect_path(""), "/login");
}

#[test]
fn return_path_takes_router_decoded_source() {
    assert_eq!(return_path(Some("/courses/4")), "/courses/4");
    assert_eq!(return_path(Some("/forum")), "/forum");
}

#[test]
fn return_path_keeps_percent_escapes_in_requested_location() {
    let login = login_redirect_path("/resources?q=50%25");
    assert_eq!(login, "/login?from=%2Fresources%3Fq%3D50%2525");

    // The router decodes the query once before handing `from` over.
    let from = login.trim_start_matches("/login?from=");
    let delivered = urlencoding::decode(from).map(|s| s.into_owned()).unwrap();
    assert_eq!(return_path(Some(&delivered)), "/resources?q=50%25");
}

#[test]
fn return_path_rejects_external_targets() {
    assert_eq!(return_path(Some("https://evil.example")), "/");
    assert_eq!(return_path(Some("//evil.example")), "/");
    assert_eq!(return_path(Some("%2F%2Fevil.example")), "/");
    assert_eq!(return_path(Some("//evil.example/%2F")), "/");
    assert_eq!(return_path(Some("/\\evil.example")), "/");
}

#[test]
fn return_path_avoids_login_loop_and_defaults_home() {
    assert_eq!(return_path(Some("/login")), "/");
    assert_eq!(return_path(None), "/");
}

#[test]
fn requested_location_joins_search_with_single_question_mark() {
    assert_eq!(requested_location("/resources", ""), "/resources");
    assert_eq!(requested_location("/resources", "type=pdf"), "/resources?type=pdf");
    assert_eq!(requested_location("/resources", "?type=pdf"), "/resources?type=pdf");
}
