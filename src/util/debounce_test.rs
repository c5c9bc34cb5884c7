use super::*;
use crate::util::timer::ManualScheduler;
use std::cell::RefCell;

fn recorder() -> Rc<RefCell<Vec<String>>> {
    Rc::new(RefCell::new(Vec::new()))
}

fn type_query(debouncer: &mut Debouncer, issued: &Rc<RefCell<Vec<String>>>, query: &str) {
    let issued = issued.clone();
    let query = query.to_owned();
    debouncer.call(move || issued.borrow_mut().push(query));
}

#[test]
fn rapid_keystrokes_issue_single_request_for_last_value() {
    let scheduler = ManualScheduler::new();
    let mut debouncer = Debouncer::new(Rc::new(scheduler.clone()), Duration::from_millis(300));
    let issued = recorder();

    type_query(&mut debouncer, &issued, "h");
    scheduler.advance(Duration::from_millis(100));
    type_query(&mut debouncer, &issued, "ho");
    scheduler.advance(Duration::from_millis(299));
    type_query(&mut debouncer, &issued, "hou");
    scheduler.advance(Duration::from_millis(300));

    assert_eq!(*issued.borrow(), vec!["hou".to_owned()]);
}

#[test]
fn pause_then_keystroke_issues_second_request() {
    let scheduler = ManualScheduler::new();
    let mut debouncer = Debouncer::new(Rc::new(scheduler.clone()), Duration::from_millis(300));
    let issued = recorder();

    type_query(&mut debouncer, &issued, "h");
    type_query(&mut debouncer, &issued, "ho");
    type_query(&mut debouncer, &issued, "hou");
    scheduler.advance(Duration::from_millis(300));
    type_query(&mut debouncer, &issued, "hous");
    scheduler.advance(Duration::from_millis(300));

    assert_eq!(*issued.borrow(), vec!["hou".to_owned(), "hous".to_owned()]);
}

#[test]
fn continuous_input_never_flushes() {
    let scheduler = ManualScheduler::new();
    let mut debouncer = Debouncer::new(Rc::new(scheduler.clone()), Duration::from_millis(300));
    let issued = recorder();

    for i in 0..20 {
        type_query(&mut debouncer, &issued, &format!("q{i}"));
        scheduler.advance(Duration::from_millis(250));
    }
    assert!(issued.borrow().is_empty());
    assert_eq!(scheduler.pending_count(), 1);
}

#[test]
fn cancel_drops_waiting_action() {
    let scheduler = ManualScheduler::new();
    let mut debouncer = Debouncer::new(Rc::new(scheduler.clone()), Duration::from_millis(300));
    let issued = recorder();

    type_query(&mut debouncer, &issued, "rent");
    debouncer.cancel();
    scheduler.advance(Duration::from_secs(1));
    assert!(issued.borrow().is_empty());
}
