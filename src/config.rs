//! # Configuration Module
//!
//! Runtime settings for the recipe finder, read from the environment
//! (optionally populated from a `.env` file).

use anyhow::{Context, Result};
use log::debug;
use std::env;
use std::path::PathBuf;

use crate::sorting::SortKey;

// Environment variable names
pub const RECIPES_PATH_VAR: &str = "RECIPES_PATH";
pub const DEFAULT_SORT_VAR: &str = "DEFAULT_SORT";
pub const MAX_RESULTS_VAR: &str = "MAX_RESULTS";

pub const DEFAULT_RECIPES_PATH: &str = "recipes.json";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Location of the JSON recipe catalog
    pub recipes_path: PathBuf,
    /// Ordering used when the caller does not pick one
    pub default_sort: SortKey,
    /// Maximum number of rows to display (`None` = all)
    pub max_results: Option<usize>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            recipes_path: PathBuf::from(DEFAULT_RECIPES_PATH),
            default_sort: SortKey::Match,
            max_results: None,
        }
    }
}

impl AppConfig {
    /// Load a `.env` file if present, then read settings from the environment
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup
    ///
    /// Unset or blank variables fall back to the defaults.
    ///
    /// # Errors
    ///
    /// Fails when `MAX_RESULTS` is set but is not a non-negative integer.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(path) = value(RECIPES_PATH_VAR) {
            config.recipes_path = PathBuf::from(path.trim());
        }

        if let Some(sort) = value(DEFAULT_SORT_VAR) {
            config.default_sort = SortKey::parse(&sort);
        }

        if let Some(max) = value(MAX_RESULTS_VAR) {
            let max = max
                .trim()
                .parse::<usize>()
                .with_context(|| format!("{MAX_RESULTS_VAR} must be a non-negative integer, got {max:?}"))?;
            config.max_results = Some(max);
        }

        debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }
}
