use super::*;

fn module(id: &str) -> CourseModule {
    CourseModule { id: id.to_owned(), title: format!("Module {id}"), content: String::new(), completed: false }
}

fn course(ids: &[&str]) -> Course {
    Course {
        id: "4".to_owned(),
        title: "Tenant rights".to_owned(),
        description: String::new(),
        category: "legal".to_owned(),
        language: "en".to_owned(),
        progress: Some(40.0),
        modules: ids.iter().map(|id| module(id)).collect(),
        current_module: None,
    }
}

// =============================================================
// Filters
// =============================================================

#[test]
fn filters_produce_server_keys() {
    let filters = CourseFilters { category: "legal".to_owned(), progress: "inProgress".to_owned(), ..Default::default() };
    assert_eq!(filters.pairs(), [("category", "legal"), ("language", ""), ("progress", "inProgress")]);
    assert_eq!(
        crate::net::api::courses_endpoint(&filters.pairs()),
        "/api/courses?category=legal&progress=inProgress"
    );
}

// =============================================================
// Progression
// =============================================================

#[test]
fn opens_on_first_module_by_default() {
    let view = CourseView::new(course(&["a", "b"]));
    assert_eq!(view.active_module().map(|m| m.id.as_str()), Some("a"));
}

#[test]
fn resumes_current_module() {
    let mut c = course(&["a", "b", "c"]);
    c.current_module = Some(module("b"));
    let view = CourseView::new(c);
    assert!(view.is_active("b"));
}

#[test]
fn ignores_current_module_outside_course() {
    let mut c = course(&["a", "b"]);
    c.current_module = Some(module("zz"));
    assert!(CourseView::new(c).is_active("a"));
}

#[test]
fn completing_moves_to_next_module() {
    let mut view = CourseView::new(course(&["a", "b"]));
    assert_eq!(view.complete_active(), Some(Progression::Next("b".to_owned())));
    assert!(view.is_active("b"));
    assert!(view.course.modules[0].completed);
}

#[test]
fn completing_last_module_finishes_course() {
    let mut view = CourseView::new(course(&["a", "b"]));
    view.select("b");
    assert_eq!(view.complete_active(), Some(Progression::Complete));
    assert!(view.course.modules[1].completed);
}

#[test]
fn select_ignores_unknown_module() {
    let mut view = CourseView::new(course(&["a", "b"]));
    view.select("nope");
    assert!(view.is_active("a"));
}

#[test]
fn empty_course_cannot_be_completed() {
    let mut view = CourseView::new(course(&[]));
    assert!(view.active_module().is_none());
    assert_eq!(view.complete_active(), None);
    assert!(view.course.modules.is_empty());
}

#[test]
fn percent_is_clamped() {
    let mut c = course(&["a"]);
    c.progress = Some(140.0);
    assert!((CourseView::new(c).percent() - 100.0).abs() < f64::EPSILON);
    let mut c = course(&["a"]);
    c.progress = None;
    assert!(CourseView::new(c).percent().abs() < f64::EPSILON);
}

#[test]
fn certificate_path_formats_course() {
    assert_eq!(certificate_path("4"), "/courses/4/certificate");
}
