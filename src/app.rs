// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state.
//!
//! A session loads the list when it starts, applies user actions to it,
//! and writes it back when it ends. Adding and importing items persist
//! immediately; removals are written at session end.

use crate::config::AppConfig;
use crate::io::{
    serialization,
    storage::{self, SkippedLine, StoreError, StoreFormat},
};
use crate::models::{
    item::ShopItem,
    list::{ListData, ShopList},
};
use anyhow::{Context, Result};
use std::path::Path;

/// Title used for every share request.
pub const SHARE_TITLE: &str = "Shopping list item";

/// Text handed to a share target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRequest {
    pub title: String,
    pub text: String,
}

/// Somewhere a selected item can be shared to.
pub trait ShareSink {
    fn share(&mut self, request: &ShareRequest) -> Result<()>;
}

/// Main application state.
pub struct ShopApp {
    config: AppConfig,

    /// Items and selection
    list: ShopList,

    /// Set once the data file has been read successfully. Writing is
    /// refused until then so an unreadable file is never overwritten.
    loaded: bool,
}

impl ShopApp {
    /// Create a new application instance. Nothing is read until
    /// [`ShopApp::on_session_start`].
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            list: ShopList::new(),
            loaded: false,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn list(&self) -> &ShopList {
        &self.list
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Load the list from the data file, replacing the in-memory contents.
    ///
    /// Returns the lines skipped under [`storage::LoadPolicy::Skip`]. On
    /// error the in-memory list is left as it was and the session stays
    /// unloaded.
    pub fn on_session_start(&mut self) -> Result<Vec<SkippedLine>, StoreError> {
        let report = storage::load(&self.config.data_file, self.config.format, self.config.load_policy)?;
        self.list.replace_all(report.items);
        self.loaded = true;
        Ok(report.skipped)
    }

    /// Write the list back to the data file.
    pub fn on_session_end(&mut self) -> Result<(), StoreError> {
        self.save()
    }

    fn save(&self) -> Result<(), StoreError> {
        if !self.loaded {
            return Err(StoreError::NotLoaded);
        }
        storage::save(&self.config.data_file, self.list.items(), self.config.format)
    }

    /// Append an item and persist the list.
    ///
    /// An item that cannot be stored in the configured format is not added.
    pub fn add(&mut self, item: ShopItem) -> Result<(), StoreError> {
        if !self.loaded {
            return Err(StoreError::NotLoaded);
        }
        if self.config.format == StoreFormat::Legacy {
            item.validate_delimiters().map_err(|source| StoreError::Encode {
                index: self.list.len(),
                source,
            })?;
        }
        self.list.add(item);
        if let Err(e) = self.save() {
            self.list.pop();
            return Err(e);
        }
        log::info!("Added item, total: {}", self.list.len());
        Ok(())
    }

    /// Select the item at `index`, or clear the selection with `None`.
    pub fn select(&mut self, index: Option<usize>) -> bool {
        let ok = self.list.select(index);
        if ok {
            log::debug!("Selection: {:?}", index);
        }
        ok
    }

    /// Remove the selected item. No-op when nothing is selected.
    pub fn remove_selected(&mut self) -> Option<ShopItem> {
        let removed = self.list.remove_selected();
        if removed.is_some() {
            log::info!("Removed item, total: {}", self.list.len());
        }
        removed
    }

    /// Build the share request for the selected item.
    pub fn share_request(&self) -> Option<ShareRequest> {
        self.list.selected().map(|item| ShareRequest {
            title: SHARE_TITLE.to_string(),
            text: item.encode(),
        })
    }

    /// Share the selected item. Returns `false` when nothing is selected.
    pub fn share_selected(&self, sink: &mut dyn ShareSink) -> Result<bool> {
        match self.share_request() {
            Some(request) => {
                sink.share(&request)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Export the whole list as a YAML or JSON document.
    pub fn export(&self, path: &Path) -> Result<()> {
        let data = ListData::new(self.list.items().to_vec());
        serialization::export(&data, path)
            .with_context(|| format!("Failed to export list to {}", path.display()))?;
        log::info!("Exported {} items to {}", data.items.len(), path.display());
        Ok(())
    }

    /// Append the items of a YAML or JSON document and persist the list.
    pub fn import(&mut self, path: &Path) -> Result<usize> {
        let data = serialization::import(path)
            .with_context(|| format!("Failed to import list from {}", path.display()))?;
        let count = data.items.len();

        let previous = self.list.items().to_vec();
        for item in data.items {
            self.list.add(item);
        }
        if let Err(e) = self.save() {
            self.list.replace_all(previous);
            return Err(e).context("Imported items could not be stored");
        }

        log::info!("Imported {} items from {}", count, path.display());
        Ok(count)
    }
}
