use super::*;

// =============================================================
// Ids
// =============================================================

#[test]
fn user_accepts_integer_id() {
    let user: User = serde_json::from_str(r#"{"id": 42, "name": "Thandi", "role": "tenant"}"#).unwrap();
    assert_eq!(user.id, "42");
    assert_eq!(user.role, "tenant");
    assert_eq!(user.email, None);
}

#[test]
fn user_accepts_string_id() {
    let user: User = serde_json::from_str(r#"{"id": "u-1", "name": "Sipho"}"#).unwrap();
    assert_eq!(user.id, "u-1");
    assert_eq!(user.role, "");
}

#[test]
fn user_rejects_boolean_id() {
    assert!(serde_json::from_str::<User>(r#"{"id": true, "name": "x"}"#).is_err());
}

#[test]
fn user_round_trips_through_storage_json() {
    let user = User {
        id: "7".to_owned(),
        name: "Lerato".to_owned(),
        role: "admin".to_owned(),
        email: Some("lerato@example.org".to_owned()),
    };
    let raw = serde_json::to_string(&user).unwrap();
    assert_eq!(serde_json::from_str::<User>(&raw).unwrap(), user);
}

// =============================================================
// Search
// =============================================================

#[test]
fn search_results_missing_categories_default_empty() {
    let results: SearchResults =
        serde_json::from_str(r#"{"forum": [{"id": 3, "title": "Deposits"}]}"#).unwrap();
    assert!(results.resources.is_empty());
    assert!(results.courses.is_empty());
    assert_eq!(results.forum[0].id, "3");
    assert_eq!(results.forum[0].description, None);
}

// =============================================================
// Feature payloads
// =============================================================

#[test]
fn resource_reads_type_field_as_kind() {
    let res: Resource =
        serde_json::from_str(r#"{"id": 1, "title": "Lease guide", "type": "guide", "language": "en"}"#).unwrap();
    assert_eq!(res.kind, "guide");
    assert_eq!(res.category, "");
}

#[test]
fn profile_uses_camel_case_user_type_and_default_preferences() {
    let profile: UserProfile =
        serde_json::from_str(r#"{"name": "A", "email": "a@b.org", "userType": "landlord"}"#).unwrap();
    assert_eq!(profile.user_type, "landlord");
    assert_eq!(profile.preferences, Preferences::default());
    let out = serde_json::to_value(&profile).unwrap();
    assert_eq!(out["userType"], "landlord");
    assert_eq!(out["preferences"]["language"], "en");
}

#[test]
fn course_detail_carries_modules() {
    let course: Course = serde_json::from_str(
        r#"{"id": 5, "title": "Tenant rights", "modules": [{"id": 1, "title": "Intro"}, {"id": 2, "title": "Leases"}]}"#,
    )
    .unwrap();
    assert_eq!(course.modules.len(), 2);
    assert_eq!(course.modules[1].id, "2");
    assert_eq!(course.progress, None);
}

#[test]
fn report_request_serializes_camel_case() {
    let req = ReportRequest { reporter_id: "9".to_owned(), reason: "inappropriate content".to_owned() };
    let out = serde_json::to_value(&req).unwrap();
    assert_eq!(out["reporterId"], "9");
}
