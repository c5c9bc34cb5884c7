use super::*;

// =============================================================
// Paths
// =============================================================

#[test]
fn search_endpoint_encodes_query() {
    assert_eq!(search_endpoint("rent & deposits"), "/api/search?q=rent%20%26%20deposits");
}

#[test]
fn social_login_endpoint_formats_provider() {
    assert_eq!(social_login_endpoint("google"), "/api/auth/google");
    assert_eq!(social_login_endpoint("a/b"), "/api/auth/a%2Fb");
}

#[test]
fn user_profile_endpoint_formats_expected_path() {
    assert_eq!(user_profile_endpoint("u123"), "/api/users/u123/profile");
}

#[test]
fn course_paths() {
    assert_eq!(course_endpoint("4"), "/api/courses/4");
    assert_eq!(course_action_endpoint("4", "progress"), "/api/courses/4/progress");
    assert_eq!(certificate_endpoint("4", "9"), "/api/courses/4/certificate/9");
}

#[test]
fn forum_paths() {
    assert_eq!(topic_comments_endpoint("12"), "/api/forum/topics/12/comments");
    assert_eq!(topic_report_endpoint("12"), "/api/forum/topics/12/report");
    assert_eq!(comment_report_endpoint("30"), "/api/forum/comments/30/report");
}

#[test]
fn resource_paths() {
    assert_eq!(resource_preview_endpoint("2"), "/api/resources/2/preview");
    assert_eq!(resource_download_endpoint("2"), "/api/resources/2/download");
}

// =============================================================
// Query strings
// =============================================================

#[test]
fn query_string_skips_empty_values() {
    assert_eq!(query_string(&[("category", ""), ("language", "zu"), ("progress", "")]), "?language=zu");
}

#[test]
fn query_string_empty_when_no_values() {
    assert_eq!(query_string(&[("category", "")]), "");
    assert_eq!(courses_endpoint(&[]), "/api/courses");
}

#[test]
fn query_string_encodes_keys_and_values() {
    assert_eq!(
        topics_endpoint(&[("category", "legal aid"), ("sortBy", "latest")]),
        "/api/forum/topics?category=legal%20aid&sortBy=latest"
    );
}

#[test]
fn status_failed_message_formats_status() {
    assert_eq!(status_failed_message(503), "status 503");
}

// =============================================================
// Native build
// =============================================================

#[test]
fn calls_are_unavailable_outside_browser() {
    let config = ClientConfig::default();
    let result = futures::executor::block_on(search(&config, "housing"));
    assert_eq!(result, Err(ClientError::Unavailable));
}

#[test]
fn http_transport_login_is_unavailable_outside_browser() {
    let transport = HttpAuthTransport::new(ClientConfig::default());
    let creds = Credentials { email: "a@b.org".to_owned(), password: "pw".to_owned() };
    let result = futures::executor::block_on(transport.login(&creds));
    assert_eq!(result, Err(ClientError::Unavailable));
}
