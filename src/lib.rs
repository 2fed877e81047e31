pub mod catalog;
pub mod clock;
pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod log;
pub mod pool;
pub mod random;
pub mod selection;
pub mod storage;
pub mod tracker;

pub use crate::core::{
    DailySelection, Frequency, FrequencyFilter, InstanceId, PoolEntry, SelectedTask, TaskForm,
    TaskTemplate, TemplateId,
};
pub use engine::SelectionEngine;
pub use error::{Error, Result};
pub use pool::TaskPool;
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use tracker::Tracker;
