//! Presentation preferences, persisted separately from the ledger record.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::query::RECENT_LIMIT;
use crate::storage::json_backend::{tmp_path, write_atomic};
use crate::utils::{config_file, ensure_dir};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Symbol prefixed to rendered amounts.
    #[serde(default = "default_symbol")]
    pub currency_symbol: String,
    /// How many entries the recent-activity view shows.
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: default_symbol(),
            recent_limit: default_recent_limit(),
        }
    }
}

fn default_symbol() -> String {
    "₹".into()
}

fn default_recent_limit() -> usize {
    RECENT_LIMIT
}

/// Loads and saves the preferences file; a missing file reads as defaults.
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    /// Manager over the default location, `~/.spendtrail_core/config.json`.
    pub fn new() -> Result<Self> {
        let path = config_file();
        if let Some(parent) = path.parent() {
            ensure_dir(parent)?;
        }
        Ok(Self { path })
    }

    /// Manager over an explicit file path.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn load(&self) -> Result<Config> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
