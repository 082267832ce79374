// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Application configuration.
//!
//! Values come from built-in defaults, then `SHOPLIST_*` environment
//! variables, then command line flags.

use crate::io::storage::{LoadPolicy, StoreFormat};
use anyhow::{anyhow, Result};
use std::path::PathBuf;

const APP_DIR: &str = "shoplist";
const DATA_FILE_NAME: &str = "items.txt";

pub const ENV_FILE: &str = "SHOPLIST_FILE";
pub const ENV_FORMAT: &str = "SHOPLIST_FORMAT";
pub const ENV_ON_ERROR: &str = "SHOPLIST_ON_ERROR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Location of the line-based data file.
    pub data_file: PathBuf,
    pub format: StoreFormat,
    pub load_policy: LoadPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            format: StoreFormat::default(),
            load_policy: LoadPolicy::default(),
        }
    }
}

impl AppConfig {
    /// Defaults overlaid with the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with values returned by `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(file) = lookup(ENV_FILE).filter(|v| !v.is_empty()) {
            config.data_file = PathBuf::from(file);
        }
        if let Some(format) = lookup(ENV_FORMAT) {
            config.format = format
                .parse()
                .map_err(|e| anyhow!("{}: {}", ENV_FORMAT, e))?;
        }
        if let Some(policy) = lookup(ENV_ON_ERROR) {
            config.load_policy = policy
                .parse()
                .map_err(|e| anyhow!("{}: {}", ENV_ON_ERROR, e))?;
        }
        Ok(config)
    }
}

/// `<data dir>/shoplist/items.txt`, or `items.txt` in the working
/// directory when the platform has no data directory.
pub fn default_data_file() -> PathBuf {
    match dirs::data_dir() {
        Some(dir) => dir.join(APP_DIR).join(DATA_FILE_NAME),
        None => PathBuf::from(DATA_FILE_NAME),
    }
}
