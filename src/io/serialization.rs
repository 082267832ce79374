// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! List export and import.
//!
//! This module handles exporting and importing whole lists as YAML
//! and JSON documents, separate from the line-based data file.

use crate::models::list::ListData;
use anyhow::{bail, Result};
use std::path::Path;

/// Document format, chosen from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
}

impl DocumentFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => Ok(DocumentFormat::Yaml),
            Some("json") => Ok(DocumentFormat::Json),
            extension => bail!("Unsupported file extension: {:?}", extension),
        }
    }
}

/// Write the list document as YAML. Field names match the item struct.
pub fn export_yaml(data: &ListData, path: &Path) -> Result<()> {
    let yaml = serde_yaml::to_string(data)?;
    std::fs::write(path, yaml)?;
    Ok(())
}

/// Write the list document as pretty-printed JSON.
pub fn export_json(data: &ListData, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Read a list document written by [`export_yaml`] or by hand.
pub fn import_yaml(path: &Path) -> Result<ListData> {
    let yaml = std::fs::read_to_string(path)?;
    let data = serde_yaml::from_str(&yaml)?;
    Ok(data)
}

/// Read a list document written by [`export_json`].
pub fn import_json(path: &Path) -> Result<ListData> {
    let json = std::fs::read_to_string(path)?;
    let data = serde_json::from_str(&json)?;
    Ok(data)
}

/// Export in the format implied by the extension of `path`.
pub fn export(data: &ListData, path: &Path) -> Result<()> {
    match DocumentFormat::from_path(path)? {
        DocumentFormat::Yaml => export_yaml(data, path),
        DocumentFormat::Json => export_json(data, path),
    }
}

/// Import in the format implied by the extension of `path`.
pub fn import(path: &Path) -> Result<ListData> {
    match DocumentFormat::from_path(path)? {
        DocumentFormat::Yaml => import_yaml(path),
        DocumentFormat::Json => import_json(path),
    }
}
