//! Corrupt and legacy records on disk.

use habits::storage::{DAILY_TASKS_KEY, TASK_POOL_KEY};

use crate::fixtures::{date, scenario_pool, TestData};

/// Given a corrupt pool file
/// When the tracker starts
/// Then the default catalog is seeded and overwrites the corrupt record
#[test]
fn test_corrupt_pool_is_reseeded() {
    let data = TestData::new();
    data.write_raw(TASK_POOL_KEY, "not json at all");

    let tracker = data.open(1, date(2026, 10, 18));

    assert_eq!(tracker.pool().len(), 28);
    assert_eq!(data.read_pool().len(), 28);
    let backup = std::fs::read_to_string(data.path.join("custom-task-pool.json.bak")).unwrap();
    assert_eq!(backup, "not json at all");
}

/// Given a corrupt selection file
/// When today's selection is requested
/// Then a new selection is drawn and stored
#[test]
fn test_corrupt_selection_is_regenerated() {
    let data = TestData::new();
    data.write_pool(&scenario_pool());
    data.write_raw(DAILY_TASKS_KEY, r#"{"date": "2026-10-18", "tasks": 7}"#);
    let mut tracker = data.open(1, date(2026, 10, 18));

    let selection = tracker.load_today().unwrap().cloned().unwrap();

    assert_eq!(selection.len(), 3);
    assert_eq!(data.read_selection(), Some(selection));
}

/// Given pool and selection files that are not valid UTF-8
/// When the tracker starts and loads today
/// Then the pool is reseeded and a new selection is drawn
#[test]
fn test_invalid_utf8_records_are_recovered() {
    let data = TestData::new();
    data.write_raw(TASK_POOL_KEY, [0xff, 0xfe, 0x00]);
    data.write_raw(DAILY_TASKS_KEY, [0xff, 0xfe, 0x00]);

    let mut tracker = data.open(1, date(2026, 10, 18));
    assert_eq!(tracker.pool().len(), 28);
    assert_eq!(data.read_pool().len(), 28);

    let selection = tracker.load_today().unwrap().cloned().unwrap();
    assert_eq!(selection.date(), "2026-10-18");
    assert!(!selection.is_empty());
    assert_eq!(data.read_selection(), Some(selection));
}

/// Records written by the original web widget load unchanged.
#[test]
fn test_legacy_records_load() {
    let data = TestData::new();
    data.write_raw(
        TASK_POOL_KEY,
        r#"[{"id":"k3j2h4l5m","name":"Walk","frequency":"daily"},
            {"id":"p9q8r7s6t","name":"Call mom","description":"Sunday","frequency":"weekly"}]"#,
    );
    data.write_raw(
        DAILY_TASKS_KEY,
        r#"{"date":"2026-10-18","tasks":[
            {"id":"a1b2c3d4e","name":"Walk","frequency":"daily","completed":true,"createdAt":"2026-10-18T06:12:45.120Z"},
            {"id":"f5g6h7i8j","name":"Call mom","description":"Sunday","frequency":"weekly","completed":false,"createdAt":"2026-10-18T06:12:45.120Z"}
        ],"allCompleted":false}"#,
    );

    let mut tracker = data.open(1, date(2026, 10, 18));
    assert_eq!(tracker.pool()[0].id.as_str(), "k3j2h4l5m");
    assert_eq!(tracker.pool()[1].description.as_deref(), Some("Sunday"));

    let selection = tracker.load_today().unwrap().cloned().unwrap();
    assert_eq!(selection.completed_count(), 1);
    assert_eq!(tracker.progress_percent(), 50);

    let id = tracker.resolve_task_id("f5g6").unwrap();
    tracker.toggle_completion(&id).unwrap();
    assert!(tracker.selection().unwrap().all_completed());
    assert!(data.read_selection().unwrap().all_completed());
}

/// A selection with an unparseable date is treated as stale.
#[test]
fn test_unparseable_date_is_stale() {
    let data = TestData::new();
    data.write_pool(&scenario_pool());
    data.write_raw(
        DAILY_TASKS_KEY,
        r#"{"date":"Sun Oct 18 2026","tasks":[],"allCompleted":false}"#,
    );
    let mut tracker = data.open(1, date(2026, 10, 18));

    let selection = tracker.load_today().unwrap().cloned().unwrap();

    assert_eq!(selection.date(), "2026-10-18");
    assert_eq!(selection.len(), 3);
}
