//! Task template data model for the user-editable pool.
//!
//! Templates are the reusable task definitions the daily selection draws
//! from. Each one carries a frequency class that controls how often it is
//! sampled.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result};

/// Unique identifier for a template in the pool.
///
/// New ids are UUID v4 strings. Stored ids are kept as opaque strings so
/// records written with shorter legacy ids stay readable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateId(pub String);

impl TemplateId {
    /// Create a new unique template identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Return the first 8 characters for display.
    pub fn short(&self) -> String {
        self.0.chars().take(8).collect()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TemplateId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TemplateId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// How often a task is meant to recur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
}

impl Frequency {
    pub const ALL: [Frequency; 3] = [Frequency::Daily, Frequency::Weekly, Frequency::Monthly];

    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
        }
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for Frequency {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" => Ok(Frequency::Daily),
            "weekly" => Ok(Frequency::Weekly),
            "monthly" => Ok(Frequency::Monthly),
            other => Err(Error::Validation(format!(
                "unknown frequency '{}' (expected daily, weekly or monthly)",
                other
            ))),
        }
    }
}

/// Pool filter used by listing views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrequencyFilter {
    #[default]
    All,
    Only(Frequency),
}

impl FrequencyFilter {
    pub fn matches(&self, frequency: Frequency) -> bool {
        match self {
            FrequencyFilter::All => true,
            FrequencyFilter::Only(f) => *f == frequency,
        }
    }
}

impl From<Option<Frequency>> for FrequencyFilter {
    fn from(frequency: Option<Frequency>) -> Self {
        frequency.map_or(FrequencyFilter::All, FrequencyFilter::Only)
    }
}

/// A reusable task definition in the pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskTemplate {
    pub id: TemplateId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub frequency: Frequency,
}

impl TaskTemplate {
    /// Create a template with a fresh id.
    pub fn new(name: &str, description: Option<&str>, frequency: Frequency) -> Self {
        Self {
            id: TemplateId::new(),
            name: name.to_string(),
            description: description.map(str::to_string),
            frequency,
        }
    }

    /// Build a template from submitted form data.
    pub fn from_form(form: &TaskForm) -> Result<Self> {
        let (name, description) = form.normalized()?;
        Ok(Self {
            id: TemplateId::new(),
            name,
            description,
            frequency: form.frequency,
        })
    }

    /// Overwrite the editable fields from form data, keeping the id.
    pub fn apply_form(&mut self, form: &TaskForm) -> Result<()> {
        let (name, description) = form.normalized()?;
        self.name = name;
        self.description = description;
        self.frequency = form.frequency;
        Ok(())
    }

    /// The id-less view consumed by the daily selection.
    pub fn entry(&self) -> PoolEntry {
        PoolEntry {
            name: self.name.clone(),
            description: self.description.clone(),
            frequency: self.frequency,
        }
    }
}

/// Template fields as seen by the selection engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolEntry {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub frequency: Frequency,
}

impl PoolEntry {
    pub fn new(name: &str, description: Option<&str>, frequency: Frequency) -> Self {
        Self {
            name: name.to_string(),
            description: description.map(str::to_string),
            frequency,
        }
    }
}

/// Raw form input for creating or editing a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskForm {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub frequency: Frequency,
}

impl TaskForm {
    pub fn new(name: &str, description: &str, frequency: Frequency) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            frequency,
        }
    }

    /// Trim the fields; an empty description becomes `None`.
    ///
    /// Fails if the name is empty after trimming.
    pub fn normalized(&self) -> Result<(String, Option<String>)> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(Error::Validation("task name cannot be empty".to_string()));
        }
        let description = match self.description.trim() {
            "" => None,
            d => Some(d.to_string()),
        };
        Ok((name.to_string(), description))
    }
}
