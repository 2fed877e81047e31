//! The daily selection engine.
//!
//! Keeps the active [`DailySelection`] and the record stored under
//! [`DAILY_TASKS_KEY`] in step. A stored selection is reused for as long as
//! its date key matches the local calendar date; otherwise a new one is
//! drawn from the pool on the next access.

use crate::clock::{date_key, is_same_day, Clock};
use crate::core::{DailySelection, InstanceId, PoolEntry};
use crate::random::RandomSource;
use crate::selection::{select_daily_tasks, ClassCounts};
use crate::storage::{load_json, save_json, KeyValueStore, Loaded, DAILY_TASKS_KEY};
use crate::{hlog, hlog_debug, hlog_warn, Result};

#[derive(Debug, Clone)]
pub struct SelectionEngine {
    selection: Option<DailySelection>,
    loading: bool,
}

impl Default for SelectionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionEngine {
    /// A fresh engine is loading until the first [`obtain_or_create`](Self::obtain_or_create).
    pub fn new() -> Self {
        Self {
            selection: None,
            loading: true,
        }
    }

    pub fn selection(&self) -> Option<&DailySelection> {
        self.selection.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Return today's selection, drawing and storing a new one if needed.
    ///
    /// A stored selection dated today is returned as is, even if the pool
    /// has changed since it was drawn. With an empty pool and no valid
    /// stored selection the result is `None`.
    pub fn obtain_or_create<S, R, C>(
        &mut self,
        store: &mut S,
        pool: &[PoolEntry],
        rng: &mut R,
        clock: &C,
    ) -> Result<Option<&DailySelection>>
    where
        S: KeyValueStore + ?Sized,
        R: RandomSource + ?Sized,
        C: Clock + ?Sized,
    {
        let today = clock.today();

        match load_json::<DailySelection, _>(&*store, DAILY_TASKS_KEY)? {
            Loaded::Found(stored) if is_same_day(stored.date(), today) => {
                hlog_debug!(
                    "Reusing selection for {} ({} tasks)",
                    stored.date(),
                    stored.len()
                );
                self.selection = Some(stored);
                self.loading = false;
                return Ok(self.selection.as_ref());
            }
            Loaded::Found(stored) => {
                hlog_debug!("Stored selection is for {}, drawing a new one", stored.date());
            }
            Loaded::Missing => {
                hlog_debug!("No stored selection");
            }
            Loaded::Malformed(e) => {
                hlog_warn!("Stored selection is unreadable ({}), drawing a new one", e);
            }
        }

        self.generate(store, pool, rng, clock)?;
        self.loading = false;
        Ok(self.selection.as_ref())
    }

    /// Discard the stored selection and draw a new one, even on the same day.
    pub fn refresh<S, R, C>(
        &mut self,
        store: &mut S,
        pool: &[PoolEntry],
        rng: &mut R,
        clock: &C,
    ) -> Result<Option<&DailySelection>>
    where
        S: KeyValueStore + ?Sized,
        R: RandomSource + ?Sized,
        C: Clock + ?Sized,
    {
        hlog_debug!("SelectionEngine::refresh pool_size={}", pool.len());
        store.remove(DAILY_TASKS_KEY)?;
        self.selection = None;
        self.generate(store, pool, rng, clock)?;
        self.loading = false;
        Ok(self.selection.as_ref())
    }

    fn generate<S, R, C>(
        &mut self,
        store: &mut S,
        pool: &[PoolEntry],
        rng: &mut R,
        clock: &C,
    ) -> Result<()>
    where
        S: KeyValueStore + ?Sized,
        R: RandomSource + ?Sized,
        C: Clock + ?Sized,
    {
        if pool.is_empty() {
            hlog_debug!("Pool is empty, no selection to draw");
            self.selection = None;
            return Ok(());
        }

        let tasks = select_daily_tasks(pool, rng, clock.now());
        let counts = ClassCounts::of(&tasks);
        let selection = DailySelection::new(date_key(clock.today()), tasks);
        save_json(store, DAILY_TASKS_KEY, &selection)?;

        hlog!(
            "New selection for {}: {} tasks (daily={}, weekly={}, monthly={})",
            selection.date(),
            counts.total(),
            counts.daily,
            counts.weekly,
            counts.monthly
        );
        self.selection = Some(selection);
        Ok(())
    }

    /// Flip the completion flag of one selected task and store the result.
    ///
    /// Returns `Ok(false)` without writing when there is no active selection
    /// or the id is not part of it.
    pub fn toggle_completion<S>(&mut self, store: &mut S, id: &InstanceId) -> Result<bool>
    where
        S: KeyValueStore + ?Sized,
    {
        let Some(current) = self.selection.take() else {
            hlog_debug!("toggle_completion: no active selection");
            return Ok(false);
        };

        // Build on the stored copy when it is for the same day, so a toggle
        // that already landed there is not reverted.
        let mut selection = match load_json::<DailySelection, _>(&*store, DAILY_TASKS_KEY)? {
            Loaded::Found(stored) if stored.date() == current.date() => stored,
            _ => current,
        };

        let toggled = selection.toggle(id);
        if toggled {
            save_json(store, DAILY_TASKS_KEY, &selection)?;
            hlog_debug!(
                "Toggled {} ({}/{} done)",
                id.short(),
                selection.completed_count(),
                selection.len()
            );
        } else {
            hlog_debug!("toggle_completion: unknown id {}", id);
        }
        self.selection = Some(selection);
        Ok(toggled)
    }

    /// Percentage of today's tasks completed; 0 when there are none.
    pub fn progress(&self) -> f64 {
        self.selection.as_ref().map_or(0.0, DailySelection::progress)
    }

    /// [`progress`](Self::progress) rounded to a whole percent.
    pub fn progress_percent(&self) -> u8 {
        self.progress().round().clamp(0.0, 100.0) as u8
    }
}
