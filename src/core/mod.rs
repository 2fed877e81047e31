//! Core domain models for habits.
//!
//! This module contains the pool's task templates and the dated
//! selection built from them.

pub mod daily;
pub mod template;

pub use daily::{DailySelection, InstanceId, SelectedTask};
pub use template::{Frequency, FrequencyFilter, PoolEntry, TaskForm, TaskTemplate, TemplateId};
