//! Store configuration
//!
//! Loaded from a JSON file. `VOLLEY_CONFIG_PATH` points at the file; when it is
//! unset or blank the defaults apply.

use serde::{Deserialize, Serialize};
use std::{env, fs};

pub const CONFIG_PATH_ENV: &str = "VOLLEY_CONFIG_PATH";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ClubConfig {
    /// Start with the demo club instead of an empty store
    pub seed_demo_data: bool,

    /// First identifier issued by an empty store
    pub first_id: u64,

    /// Insert newly scheduled matches at the front of the list
    pub newest_matches_first: bool,
}

impl Default for ClubConfig {
    fn default() -> Self {
        Self { seed_demo_data: true, first_id: 1, newest_matches_first: true }
    }
}

impl ClubConfig {
    /// Config for a store with no preloaded data
    pub fn empty() -> Self {
        Self { seed_demo_data: false, ..Self::default() }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.first_id == 0 {
            return Err("first_id must be at least 1".to_string());
        }
        Ok(())
    }

    /// Read and validate the config file named by `VOLLEY_CONFIG_PATH`.
    pub fn from_env() -> Result<Self, String> {
        let Ok(path) = env::var(CONFIG_PATH_ENV) else {
            return Ok(Self::default());
        };

        let path = path.trim();
        if path.is_empty() {
            return Ok(Self::default());
        }

        Self::from_path(path).map_err(|e| format!("{e} (from {CONFIG_PATH_ENV})"))
    }

    pub fn from_path(path: &str) -> Result<Self, String> {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read club config '{path}': {e}"))?;

        let config = Self::from_json(&content)
            .map_err(|e| format!("Failed to parse club config JSON '{path}': {e}"))?;

        config.validate().map_err(|e| format!("Invalid club config '{path}': {e}"))?;

        Ok(config)
    }
}
