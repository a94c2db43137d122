use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::TableError;

fn default_auto_deal() -> bool {
    true
}

fn default_log_level() -> LevelFilter {
    LevelFilter::Info
}

/// What `deal` does when the id already has a game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedealPolicy {
    /// Replace the existing game with a fresh deal, even one still in progress.
    #[default]
    Overwrite,
    /// Hand back the existing game untouched.
    KeepExisting,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    #[serde(default)]
    pub redeal: RedealPolicy,
    /// Fixed RNG seed for reproducible tables. Entropy is used when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Deal a game the first time an unknown id is played.
    #[serde(default = "default_auto_deal")]
    pub auto_deal: bool,
    #[serde(default = "default_log_level")]
    pub log_level: LevelFilter,
}

impl Default for TableConfig {
    fn default() -> Self {
        TableConfig {
            redeal: RedealPolicy::default(),
            seed: None,
            auto_deal: default_auto_deal(),
            log_level: default_log_level(),
        }
    }
}

impl TableConfig {
    pub fn from_json(json: &str) -> Result<Self, TableError> {
        serde_json::from_str(json).map_err(|err| TableError::InvalidConfig(err.to_string()))
    }
}
