//! Facade tying the pool, the selection engine and their store together.
//!
//! This is the surface a front end talks to: it owns the store, the
//! randomness source and the clock, and forwards each intent to the pool or
//! the engine.

use crate::clock::{Clock, SystemClock};
use crate::core::{
    DailySelection, FrequencyFilter, InstanceId, PoolEntry, TaskForm, TaskTemplate, TemplateId,
};
use crate::engine::SelectionEngine;
use crate::pool::TaskPool;
use crate::random::{RandomSource, ThreadRandom};
use crate::storage::KeyValueStore;
use crate::{hlog_debug, Error, Result};

pub struct Tracker<S, R = ThreadRandom, C = SystemClock> {
    store: S,
    pool: TaskPool,
    engine: SelectionEngine,
    rng: R,
    clock: C,
}

impl<S: KeyValueStore> Tracker<S> {
    /// Open a tracker on `store` with the thread RNG and the system clock.
    pub fn open(store: S) -> Result<Self> {
        Self::with_parts(store, ThreadRandom, SystemClock)
    }
}

impl<S, R, C> Tracker<S, R, C>
where
    S: KeyValueStore,
    R: RandomSource,
    C: Clock,
{
    /// Initialize the pool from `store`. The selection is not loaded until
    /// [`load_today`](Self::load_today) is called.
    pub fn with_parts(mut store: S, rng: R, clock: C) -> Result<Self> {
        let pool = TaskPool::initialize(&mut store)?;
        Ok(Self {
            store,
            pool,
            engine: SelectionEngine::new(),
            rng,
            clock,
        })
    }

    /// Load today's selection, drawing a new one when the stored one is stale.
    pub fn load_today(&mut self) -> Result<Option<&DailySelection>> {
        let view = self.pool.pool_view_for_selection();
        self.engine
            .obtain_or_create(&mut self.store, &view, &mut self.rng, &self.clock)
    }

    pub fn selection(&self) -> Option<&DailySelection> {
        self.engine.selection()
    }

    pub fn is_loading(&self) -> bool {
        self.engine.is_loading()
    }

    pub fn toggle_completion(&mut self, id: &InstanceId) -> Result<bool> {
        self.engine.toggle_completion(&mut self.store, id)
    }

    pub fn progress(&self) -> f64 {
        self.engine.progress()
    }

    pub fn progress_percent(&self) -> u8 {
        self.engine.progress_percent()
    }

    /// Throw away today's selection and draw again from the current pool.
    pub fn refresh(&mut self) -> Result<Option<&DailySelection>> {
        let view = self.pool.pool_view_for_selection();
        self.engine
            .refresh(&mut self.store, &view, &mut self.rng, &self.clock)
    }

    pub fn pool(&self) -> &[TaskTemplate] {
        self.pool.templates()
    }

    pub fn pool_view_for_selection(&self) -> Vec<PoolEntry> {
        self.pool.pool_view_for_selection()
    }

    pub fn filter_pool(&self, filter: FrequencyFilter) -> Vec<&TaskTemplate> {
        self.pool.filter(filter)
    }

    pub fn count_pool(&self, filter: FrequencyFilter) -> usize {
        self.pool.count(filter)
    }

    pub fn add_task(&mut self, form: &TaskForm) -> Result<TemplateId> {
        let id = self.pool.add(&mut self.store, form)?;
        self.pool_changed()?;
        Ok(id)
    }

    pub fn edit_task(&mut self, id: &TemplateId, form: &TaskForm) -> Result<bool> {
        let edited = self.pool.edit(&mut self.store, id, form)?;
        if edited {
            self.pool_changed()?;
        }
        Ok(edited)
    }

    pub fn delete_task(&mut self, id: &TemplateId) -> Result<bool> {
        let deleted = self.pool.delete(&mut self.store, id)?;
        if deleted {
            self.pool_changed()?;
        }
        Ok(deleted)
    }

    /// A changed pool re-runs today's lookup once the selection has been
    /// loaded: a stored selection for today stays, a missing one is drawn.
    fn pool_changed(&mut self) -> Result<()> {
        if self.engine.is_loading() {
            return Ok(());
        }
        hlog_debug!("Pool changed, re-checking today's selection");
        self.load_today()?;
        Ok(())
    }

    /// Resolve a full id or unique prefix to a task in today's selection.
    pub fn resolve_task_id(&self, prefix: &str) -> Result<InstanceId> {
        let ids = self
            .selection()
            .map(|s| s.tasks().iter().map(|t| t.id.as_str()).collect::<Vec<_>>())
            .unwrap_or_default();
        resolve_prefix(ids, prefix).map(InstanceId::from)
    }

    /// Resolve a full id or unique prefix to a template in the pool.
    pub fn resolve_template_id(&self, prefix: &str) -> Result<TemplateId> {
        let ids = self.pool.templates().iter().map(|t| t.id.as_str());
        resolve_prefix(ids, prefix).map(TemplateId::from)
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }
}

fn resolve_prefix<'a, I>(ids: I, prefix: &str) -> Result<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let prefix = prefix.trim();
    if prefix.is_empty() {
        return Err(Error::TaskNotFound(String::new()));
    }
    let mut matches = Vec::new();
    for id in ids {
        if id == prefix {
            return Ok(id);
        }
        if id.starts_with(prefix) {
            matches.push(id);
        }
    }
    match matches.as_slice() {
        [] => Err(Error::TaskNotFound(prefix.to_string())),
        [only] => Ok(*only),
        _ => Err(Error::AmbiguousId(prefix.to_string())),
    }
}
