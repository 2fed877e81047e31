use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::{hlog_debug, Error, Result};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Where the pool and daily selection records live.
    pub data_dir: Option<String>,
}

impl Config {
    pub fn habits_dir() -> Result<PathBuf> {
        Ok(dirs::home_dir().ok_or(Error::NoHomeDir)?.join(".habits"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::habits_dir()?.join("habits.toml"))
    }

    pub fn effective_data_dir(&self) -> Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(expand_tilde(dir)),
            None => Ok(Self::habits_dir()?.join("data")),
        }
    }

    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        hlog_debug!("Config::load path={}", path.display());
        if !path.exists() {
            hlog_debug!("Config file not found, using defaults");
            return Ok(Self::default());
        }
        let config: Self = toml::from_str(&fs::read_to_string(&path)?)?;
        hlog_debug!("Config loaded: data_dir={:?}", config.data_dir);
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let habits_dir = Self::habits_dir()?;
        if !habits_dir.exists() {
            hlog_debug!("Creating habits directory: {}", habits_dir.display());
            fs::create_dir_all(&habits_dir)?;
        }
        let path = Self::config_path()?;
        fs::write(&path, toml::to_string_pretty(self)?)?;
        hlog_debug!("Config saved to {}", path.display());
        Ok(())
    }
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}
