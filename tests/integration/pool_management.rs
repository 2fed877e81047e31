//! Pool editing and its effect on selections.

use habits::{Error, Frequency, FrequencyFilter, TaskForm, TemplateId};

use crate::fixtures::{date, scenario_pool, TestData};

/// First run seeds the default catalog to disk.
#[test]
fn test_first_run_seeds_catalog() {
    let data = TestData::new();
    let tracker = data.open(1, date(2026, 10, 18));

    assert_eq!(tracker.pool().len(), 28);
    assert_eq!(data.read_pool(), tracker.pool());
    assert_eq!(tracker.count_pool(FrequencyFilter::Only(Frequency::Daily)), 8);
    assert_eq!(tracker.count_pool(FrequencyFilter::Only(Frequency::Weekly)), 10);
    assert_eq!(tracker.count_pool(FrequencyFilter::Only(Frequency::Monthly)), 10);
}

/// Pool edits persist and are visible after a restart.
#[test]
fn test_add_edit_delete_persist() {
    let data = TestData::new();
    data.write_pool(&[]);
    let mut tracker = data.open(1, date(2026, 10, 18));

    let walk = tracker
        .add_task(&TaskForm::new(" Walk ", " around the block ", Frequency::Daily))
        .unwrap();
    let call = tracker
        .add_task(&TaskForm::new("Call mom", "", Frequency::Weekly))
        .unwrap();
    assert!(tracker
        .edit_task(&walk, &TaskForm::new("Run", "", Frequency::Daily))
        .unwrap());
    assert!(tracker.delete_task(&call).unwrap());
    assert!(!tracker.delete_task(&call).unwrap());

    let reopened = data.open(1, date(2026, 10, 18));
    let pool = reopened.pool();
    assert_eq!(pool.len(), 1);
    assert_eq!(pool[0].id, walk);
    assert_eq!(pool[0].name, "Run");
    assert_eq!(pool[0].description, None);
}

/// Blank names are rejected without touching the stored pool.
#[test]
fn test_blank_name_rejected() {
    let data = TestData::new();
    data.write_pool(&scenario_pool());
    let mut tracker = data.open(1, date(2026, 10, 18));

    let result = tracker.add_task(&TaskForm::new("   ", "x", Frequency::Daily));

    assert!(matches!(result, Err(Error::Validation(_))));
    assert_eq!(data.read_pool().len(), 3);
}

/// Editing a template after selection leaves today's snapshot alone.
#[test]
fn test_edit_does_not_touch_selected_snapshot() {
    let data = TestData::new();
    let pool = scenario_pool();
    let call_id = pool[2].id.clone();
    data.write_pool(&pool);
    let mut tracker = data.open(1, date(2026, 10, 18));
    tracker.load_today().unwrap();

    tracker
        .edit_task(&call_id, &TaskForm::new("Call dad", "", Frequency::Monthly))
        .unwrap();

    let stored = data.read_selection().unwrap();
    assert_eq!(stored.tasks()[2].name, "Call mom");
    assert_eq!(stored.tasks()[2].frequency, Frequency::Weekly);
    assert_ne!(stored.tasks()[2].id.as_str(), call_id.as_str());
    assert_eq!(tracker.pool()[2].id, call_id);
}

/// Emptying the pool keeps today's stored selection; a new day has none.
#[test]
fn test_empty_pool_reports_no_selection_next_day() {
    let data = TestData::new();
    let pool = scenario_pool();
    data.write_pool(&pool);
    let mut tracker = data.open(1, date(2026, 10, 18));
    tracker.load_today().unwrap();

    for template in &pool {
        tracker.delete_task(&template.id).unwrap();
    }
    assert!(tracker.pool().is_empty());
    assert_eq!(tracker.selection().map(|s| s.len()), Some(3));

    let mut tomorrow = data.open(1, date(2026, 10, 19));
    assert!(tomorrow.load_today().unwrap().is_none());
    assert_eq!(tomorrow.progress(), 0.0);
}

/// Unknown template ids are ignored.
#[test]
fn test_unknown_template_ids_are_noops() {
    let data = TestData::new();
    data.write_pool(&scenario_pool());
    let mut tracker = data.open(1, date(2026, 10, 18));
    let missing = TemplateId::from("does-not-exist");

    assert!(!tracker
        .edit_task(&missing, &TaskForm::new("x", "", Frequency::Daily))
        .unwrap());
    assert!(!tracker.delete_task(&missing).unwrap());
    assert_eq!(data.read_pool(), tracker.pool());
}

/// Filtering keeps pool order within a class.
#[test]
fn test_filter_pool() {
    let data = TestData::new();
    data.write_pool(&scenario_pool());
    let tracker = data.open(1, date(2026, 10, 18));

    let daily: Vec<&str> = tracker
        .filter_pool(FrequencyFilter::Only(Frequency::Daily))
        .into_iter()
        .map(|t| t.name.as_str())
        .collect();

    assert_eq!(daily, vec!["Walk", "Read"]);
    assert_eq!(tracker.filter_pool(FrequencyFilter::All).len(), 3);
}
