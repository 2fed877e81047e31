//! The user-editable template pool.
//!
//! The pool is persisted as one JSON array under [`TASK_POOL_KEY`]. It is
//! seeded from the built-in catalog on first run, or when the stored record
//! cannot be decoded. Mutations re-read the stored pool first and write the
//! full pool back.

use crate::catalog::default_templates;
use crate::core::{FrequencyFilter, PoolEntry, TaskForm, TaskTemplate, TemplateId};
use crate::storage::{load_json, save_json, KeyValueStore, Loaded, TASK_POOL_KEY};
use crate::{hlog, hlog_debug, hlog_warn, Result};

#[derive(Debug, Clone, Default)]
pub struct TaskPool {
    templates: Vec<TaskTemplate>,
}

impl TaskPool {
    /// Load the stored pool, seeding the default catalog when there is none.
    pub fn initialize<S: KeyValueStore + ?Sized>(store: &mut S) -> Result<Self> {
        match load_json::<Vec<TaskTemplate>, _>(&*store, TASK_POOL_KEY)? {
            Loaded::Found(templates) => {
                hlog_debug!("TaskPool::initialize loaded {} templates", templates.len());
                Ok(Self { templates })
            }
            Loaded::Missing => {
                hlog!("No task pool found, seeding default catalog");
                Self::seed(store)
            }
            Loaded::Malformed(e) => {
                hlog_warn!("Stored task pool is unreadable ({}), reseeding", e);
                Self::seed(store)
            }
        }
    }

    fn seed<S: KeyValueStore + ?Sized>(store: &mut S) -> Result<Self> {
        let pool = Self {
            templates: default_templates(),
        };
        pool.persist(store)?;
        Ok(pool)
    }

    pub fn templates(&self) -> &[TaskTemplate] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn get(&self, id: &TemplateId) -> Option<&TaskTemplate> {
        self.templates.iter().find(|t| &t.id == id)
    }

    /// Append a new template built from `form`. Returns its id.
    pub fn add<S: KeyValueStore + ?Sized>(
        &mut self,
        store: &mut S,
        form: &TaskForm,
    ) -> Result<TemplateId> {
        let template = TaskTemplate::from_form(form)?;
        let id = template.id.clone();

        self.reload(&*store)?;
        self.templates.push(template);
        self.persist(store)?;

        hlog_debug!("TaskPool::add id={} pool_size={}", id.short(), self.len());
        Ok(id)
    }

    /// Overwrite the template `id` from `form`, keeping its id.
    ///
    /// Returns `Ok(false)` when no template has that id.
    pub fn edit<S: KeyValueStore + ?Sized>(
        &mut self,
        store: &mut S,
        id: &TemplateId,
        form: &TaskForm,
    ) -> Result<bool> {
        self.reload(&*store)?;
        let Some(template) = self.templates.iter_mut().find(|t| &t.id == id) else {
            hlog_debug!("TaskPool::edit unknown id={}, ignoring", id);
            return Ok(false);
        };
        template.apply_form(form)?;
        self.persist(store)?;
        hlog_debug!("TaskPool::edit id={}", id.short());
        Ok(true)
    }

    /// Remove the template `id`. Returns `Ok(false)` when it was not present.
    pub fn delete<S: KeyValueStore + ?Sized>(
        &mut self,
        store: &mut S,
        id: &TemplateId,
    ) -> Result<bool> {
        self.reload(&*store)?;
        let before = self.templates.len();
        self.templates.retain(|t| &t.id != id);
        let removed = self.templates.len() != before;
        self.persist(store)?;
        hlog_debug!("TaskPool::delete id={} removed={}", id, removed);
        Ok(removed)
    }

    /// Templates without their ids, as consumed by the daily selection.
    pub fn pool_view_for_selection(&self) -> Vec<PoolEntry> {
        self.templates.iter().map(TaskTemplate::entry).collect()
    }

    /// Templates matching `filter`, in pool order.
    pub fn filter(&self, filter: FrequencyFilter) -> Vec<&TaskTemplate> {
        self.templates
            .iter()
            .filter(|t| filter.matches(t.frequency))
            .collect()
    }

    pub fn count(&self, filter: FrequencyFilter) -> usize {
        self.templates
            .iter()
            .filter(|t| filter.matches(t.frequency))
            .count()
    }

    /// Pick up any pool written to the store since this one was loaded.
    fn reload<S: KeyValueStore + ?Sized>(&mut self, store: &S) -> Result<()> {
        match load_json::<Vec<TaskTemplate>, _>(store, TASK_POOL_KEY)? {
            Loaded::Found(templates) => self.templates = templates,
            Loaded::Missing => {}
            Loaded::Malformed(e) => {
                hlog_warn!("Stored task pool is unreadable ({}), keeping in-memory pool", e);
            }
        }
        Ok(())
    }

    fn persist<S: KeyValueStore + ?Sized>(&self, store: &mut S) -> Result<()> {
        save_json(store, TASK_POOL_KEY, &self.templates)
    }
}
