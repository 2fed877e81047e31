//! Test fixtures for integration tests.
//!
//! Provides helpers for:
//! - Temporary on-disk stores
//! - Trackers with pinned randomness and dates
//! - Predefined pools

use std::path::PathBuf;

use chrono::NaiveDate;
use tempfile::TempDir;

use habits::clock::FixedClock;
use habits::random::SeededRandom;
use habits::storage::{load_json, save_json, TASK_POOL_KEY};
use habits::{DailySelection, FileStore, Frequency, KeyValueStore, TaskTemplate, Tracker};

pub type TestTracker = Tracker<FileStore, SeededRandom, FixedClock>;

/// A data directory that lives as long as the test.
pub struct TestData {
    /// Keeps the directory alive.
    pub temp_dir: TempDir,
    /// Directory the store writes its records into.
    pub path: PathBuf,
}

impl TestData {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join("data");
        Self { temp_dir, path }
    }

    pub fn store(&self) -> FileStore {
        FileStore::new(&self.path)
    }

    /// Open a tracker as a fresh process would.
    pub fn open(&self, seed: u64, today: NaiveDate) -> TestTracker {
        Tracker::with_parts(self.store(), SeededRandom::new(seed), FixedClock::on(today))
            .expect("Failed to open tracker")
    }

    /// Replace the stored pool.
    pub fn write_pool(&self, templates: &[TaskTemplate]) {
        let mut store = self.store();
        save_json(&mut store, TASK_POOL_KEY, &templates.to_vec()).expect("Failed to write pool");
    }

    pub fn read_pool(&self) -> Vec<TaskTemplate> {
        load_json(&self.store(), TASK_POOL_KEY)
            .expect("Failed to read pool")
            .found()
            .expect("No pool stored")
    }

    pub fn read_selection(&self) -> Option<DailySelection> {
        load_json(&self.store(), habits::storage::DAILY_TASKS_KEY)
            .expect("Failed to read selection")
            .found()
    }

    pub fn write_raw(&self, key: &str, value: impl AsRef<[u8]>) {
        self.store()
            .set(key, value.as_ref())
            .expect("Failed to write record");
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("invalid date")
}

/// Walk, Read (daily) and Call mom (weekly).
pub fn scenario_pool() -> Vec<TaskTemplate> {
    vec![
        TaskTemplate::new("Walk", None, Frequency::Daily),
        TaskTemplate::new("Read", None, Frequency::Daily),
        TaskTemplate::new("Call mom", None, Frequency::Weekly),
    ]
}

/// A pool with the given number of templates per class.
pub fn sized_pool(daily: usize, weekly: usize, monthly: usize) -> Vec<TaskTemplate> {
    let mut pool = Vec::new();
    for i in 0..daily {
        pool.push(TaskTemplate::new(&format!("Daily {}", i), None, Frequency::Daily));
    }
    for i in 0..weekly {
        pool.push(TaskTemplate::new(
            &format!("Weekly {}", i),
            Some("once a week"),
            Frequency::Weekly,
        ));
    }
    for i in 0..monthly {
        pool.push(TaskTemplate::new(&format!("Monthly {}", i), None, Frequency::Monthly));
    }
    pool
}
