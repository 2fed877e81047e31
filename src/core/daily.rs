//! The day's selected tasks.
//!
//! A [`DailySelection`] holds snapshot copies of templates drawn for one
//! calendar date. The aggregate completion flag is derived from the tasks
//! and is only ever recomputed, never assigned.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::template::{Frequency, PoolEntry};

/// Identifier of one selected task instance.
///
/// Distinct from the [`TemplateId`](super::TemplateId) of the template it
/// was copied from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstanceId(pub String);

impl InstanceId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn short(&self) -> String {
        self.0.chars().take(8).collect()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for InstanceId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for InstanceId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A template snapshot chosen for a particular day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedTask {
    pub id: InstanceId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub frequency: Frequency,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl SelectedTask {
    /// Materialize a pool entry as a fresh, uncompleted instance.
    pub fn from_entry(entry: &PoolEntry, created_at: DateTime<Utc>) -> Self {
        Self {
            id: InstanceId::new(),
            name: entry.name.clone(),
            description: entry.description.clone(),
            frequency: entry.frequency,
            completed: false,
            created_at,
        }
    }
}

/// Tasks selected for one local calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "SelectionRecord")]
pub struct DailySelection {
    date: String,
    tasks: Vec<SelectedTask>,
    all_completed: bool,
}

/// Stored shape; the completion flag on disk is ignored and recomputed.
#[derive(Deserialize)]
struct SelectionRecord {
    date: String,
    #[serde(default)]
    tasks: Vec<SelectedTask>,
}

impl From<SelectionRecord> for DailySelection {
    fn from(record: SelectionRecord) -> Self {
        Self::new(record.date, record.tasks)
    }
}

impl DailySelection {
    pub fn new(date: String, tasks: Vec<SelectedTask>) -> Self {
        let mut selection = Self {
            date,
            tasks,
            all_completed: false,
        };
        selection.recompute();
        selection
    }

    /// The `YYYY-MM-DD` key this selection belongs to.
    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn tasks(&self) -> &[SelectedTask] {
        &self.tasks
    }

    /// True iff there is at least one task and every task is completed.
    pub fn all_completed(&self) -> bool {
        self.all_completed
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: &InstanceId) -> Option<&SelectedTask> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    pub fn remaining_count(&self) -> usize {
        self.len() - self.completed_count()
    }

    /// Percentage of completed tasks in `[0, 100]`; 0 for an empty selection.
    pub fn progress(&self) -> f64 {
        if self.tasks.is_empty() {
            return 0.0;
        }
        100.0 * self.completed_count() as f64 / self.tasks.len() as f64
    }

    /// Flip the completion flag of `id`. Returns false if the id is unknown.
    pub fn toggle(&mut self, id: &InstanceId) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| &t.id == id) else {
            return false;
        };
        task.completed = !task.completed;
        self.recompute();
        true
    }

    fn recompute(&mut self) {
        self.all_completed = !self.tasks.is_empty() && self.tasks.iter().all(|t| t.completed);
    }
}
