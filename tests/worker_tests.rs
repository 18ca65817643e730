use rstudents::core::screen::StudentScreen;
use rstudents::{StoreWorker, StudentForm, StudentStore};
use std::time::{Duration, Instant};

mod common;
use common::student;

fn worker() -> StoreWorker {
    let store = StudentStore::open_in_memory().expect("open store");
    StoreWorker::spawn(store).expect("spawn worker")
}

#[test]
fn test_worker_insert_then_list() {
    let w = worker();

    let id = w.insert(student("A", "001", 8.0, false, "")).wait().expect("insert");
    let listed = w.list_all().wait().expect("list");

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, Some(id));
    assert!(listed[0].same_content(&student("A", "001", 8.0, false, "")));
}

#[test]
fn test_worker_runs_requests_in_submission_order() {
    let w = worker();

    // Submit everything before waiting on anything.
    let inserts: Vec<_> = (0..20)
        .map(|i| w.insert(student(&format!("S{i}"), "", i as f64, false, "")))
        .collect();
    let listed = w.list_all();

    let ids: Vec<i64> = inserts
        .into_iter()
        .map(|p| p.wait().expect("insert"))
        .collect();
    let listed = listed.wait().expect("list");

    assert!(ids.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(listed.len(), 20);
    assert_eq!(
        listed.iter().map(|s| s.id.expect("id")).collect::<Vec<_>>(),
        ids
    );
}

#[test]
fn test_worker_update_and_delete_report_missing_rows() {
    let w = worker();

    let mut ghost = student("Ghost", "404", 1.0, false, "");
    ghost.id = Some(404);

    assert!(!w.update(ghost.clone()).wait().expect("update"));
    assert!(!w.delete(ghost).wait().expect("delete"));
    assert!(w.list_all().wait().expect("list").is_empty());
}

#[test]
fn test_pending_try_get_eventually_resolves() {
    let w = worker();
    let pending = w.insert(student("Poll", "1", 1.0, false, ""));

    let deadline = Instant::now() + Duration::from_secs(5);
    let result = loop {
        if let Some(res) = pending.try_get() {
            break res;
        }
        assert!(Instant::now() < deadline, "worker never answered");
        std::thread::sleep(Duration::from_millis(5));
    };

    assert!(result.expect("insert") > 0);
}

#[test]
fn test_shutdown_drains_queue_and_returns_store() {
    let w = worker();
    let pending = w.insert(student("Queued", "9", 9.0, true, ""));

    let store = w.shutdown().expect("shutdown");
    assert!(pending.wait().is_ok());
    assert_eq!(store.list_all().expect("list").len(), 1);
}

#[test]
fn test_dropping_worker_still_answers_queued_requests() {
    let w = worker();
    let first = w.insert(student("One", "1", 1.0, false, ""));
    let listed = w.list_all();
    drop(w);

    assert!(first.wait().expect("insert") > 0);
    assert_eq!(listed.wait().expect("list").len(), 1);
}

#[test]
fn test_screen_refreshes_after_each_mutation() {
    let store = StudentStore::open_in_memory().expect("open store");
    let mut screen = StudentScreen::with_store(store).expect("screen");
    assert!(screen.students().is_empty());

    let form = StudentForm {
        full_name: "A".into(),
        student_id: "001".into(),
        average_grade: "abc".into(),
        has_graduated: false,
        photo_path: "".into(),
    };
    let id = screen.add(&form).expect("add");
    assert_eq!(screen.students().len(), 1);
    assert_eq!(screen.students()[0].average_grade, Some(0.0));

    let original = screen.find(id).cloned().expect("find");
    let mut edit = StudentForm::from_record(&original);
    edit.average_grade = "9.0".into();
    assert!(screen.save_edit(&original, edit).expect("edit"));
    assert_eq!(screen.find(id).and_then(|s| s.average_grade), Some(9.0));

    let current = screen.find(id).cloned().expect("find");
    assert!(screen.remove(&current).expect("remove"));
    assert!(screen.students().is_empty());
    assert!(screen.find(id).is_none());

    let store = screen.close().expect("close");
    assert!(store.list_all().expect("list").is_empty());
}
