// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Flat-file persistence of the shopping list.
//!
//! The list is stored one record per line, either in the legacy
//! `;`-separated encoding or as JSON lines. Files are always read and
//! written whole.

use crate::models::item::{FormatError, ShopItem};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

#[cfg(windows)]
const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
const LINE_ENDING: &str = "\n";

/// On-disk record encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreFormat {
    /// `owned;image;quantity;description;name`, readable by older files.
    #[default]
    Legacy,
    /// One JSON object per line.
    JsonLines,
}

/// What to do when a line of the data file cannot be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPolicy {
    /// Fail the whole load on the first bad line.
    #[default]
    Abort,
    /// Log and skip bad lines, reporting them in [`LoadReport::skipped`].
    Skip,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: {source}")]
    Format {
        line: usize,
        #[source]
        source: FormatError,
    },
    #[error("line {line}: {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("cannot store item {index}: {source}")]
    Encode {
        index: usize,
        #[source]
        source: FormatError,
    },
    #[error("list was not loaded, refusing to overwrite the data file")]
    NotLoaded,
}

/// A line that was skipped during a lenient load.
#[derive(Debug)]
pub struct SkippedLine {
    pub line: usize,
    pub error: StoreError,
}

/// Result of loading the data file.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub items: Vec<ShopItem>,
    pub skipped: Vec<SkippedLine>,
}

/// Load all items from `path`.
///
/// A missing file yields an empty report.
pub fn load(path: &Path, format: StoreFormat, policy: LoadPolicy) -> Result<LoadReport, StoreError> {
    if !path.exists() {
        log::info!("No data file at {}, starting empty", path.display());
        return Ok(LoadReport::default());
    }

    let contents = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut report = LoadReport::default();
    for (idx, text) in contents.lines().enumerate() {
        if text.is_empty() {
            continue;
        }
        let line = idx + 1;
        match decode_line(text, line, format) {
            Ok(item) => report.items.push(item),
            Err(error) => match policy {
                LoadPolicy::Abort => return Err(error),
                LoadPolicy::Skip => {
                    log::warn!("Skipping {}:{}: {}", path.display(), line, error);
                    report.skipped.push(SkippedLine { line, error });
                }
            },
        }
    }

    log::info!(
        "Loaded {} items from {} ({} skipped)",
        report.items.len(),
        path.display(),
        report.skipped.len()
    );
    Ok(report)
}

/// Overwrite `path` with the given items.
pub fn save(path: &Path, items: &[ShopItem], format: StoreFormat) -> Result<(), StoreError> {
    let mut out = String::new();
    for (index, item) in items.iter().enumerate() {
        out.push_str(&encode_line(item, index, format)?);
        out.push_str(LINE_ENDING);
    }

    let io_err = |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    std::fs::write(path, out).map_err(io_err)?;

    log::info!("Saved {} items to {}", items.len(), path.display());
    Ok(())
}

fn decode_line(text: &str, line: usize, format: StoreFormat) -> Result<ShopItem, StoreError> {
    log::debug!("Decoding line {}: {}", line, text);
    match format {
        StoreFormat::Legacy => {
            ShopItem::decode(text).map_err(|source| StoreError::Format { line, source })
        }
        StoreFormat::JsonLines => {
            serde_json::from_str(text).map_err(|source| StoreError::Json { line, source })
        }
    }
}

fn encode_line(item: &ShopItem, index: usize, format: StoreFormat) -> Result<String, StoreError> {
    match format {
        StoreFormat::Legacy => {
            item.validate_delimiters()
                .map_err(|source| StoreError::Encode { index, source })?;
            Ok(item.encode())
        }
        StoreFormat::JsonLines => serde_json::to_string(item).map_err(|source| StoreError::Json {
            line: index + 1,
            source,
        }),
    }
}

impl fmt::Display for StoreFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StoreFormat::Legacy => "legacy",
            StoreFormat::JsonLines => "json-lines",
        })
    }
}

impl FromStr for StoreFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "legacy" => Ok(StoreFormat::Legacy),
            "json-lines" | "jsonl" => Ok(StoreFormat::JsonLines),
            other => Err(format!("unknown store format '{}' (expected legacy or json-lines)", other)),
        }
    }
}

impl fmt::Display for LoadPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LoadPolicy::Abort => "abort",
            LoadPolicy::Skip => "skip",
        })
    }
}

impl FromStr for LoadPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "abort" => Ok(LoadPolicy::Abort),
            "skip" => Ok(LoadPolicy::Skip),
            other => Err(format!("unknown load policy '{}' (expected abort or skip)", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> Vec<ShopItem> {
        vec![
            ShopItem::new(true, "img.png", 3, "milk", "Dairy"),
            ShopItem::new(false, "", 12, "free range", "Eggs"),
            ShopItem::new(false, "/sdcard/DCIM/bread.jpg", 1, "", "Bread"),
        ]
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let report = load(&dir.path().join("nope.txt"), StoreFormat::Legacy, LoadPolicy::Abort).unwrap();
        assert!(report.items.is_empty());
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn test_save_load_preserves_order() {
        let dir = TempDir::new().unwrap();
        for format in [StoreFormat::Legacy, StoreFormat::JsonLines] {
            let path = dir.path().join(format!("items-{}.txt", format));
            save(&path, &sample(), format).unwrap();
            let report = load(&path, format, LoadPolicy::Abort).unwrap();
            assert_eq!(report.items, sample());
        }
    }

    #[test]
    fn test_legacy_file_layout() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("items.txt");
        save(&path, &sample()[..2], StoreFormat::Legacy).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            text,
            format!("True;img.png;3;milk;Dairy{0}False;;12;free range;Eggs{0}", LINE_ENDING)
        );
    }

    #[test]
    fn test_save_empty_list_truncates() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("items.txt");
        save(&path, &sample(), StoreFormat::Legacy).unwrap();
        save(&path, &[], StoreFormat::Legacy).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join("items.txt");
        save(&path, &sample(), StoreFormat::Legacy).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_load_skips_blank_lines_and_crlf() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("items.txt");
        std::fs::write(&path, "True;a;1;b;c\r\n\r\nFalse;;2;;d\r\n").unwrap();
        let report = load(&path, StoreFormat::Legacy, LoadPolicy::Abort).unwrap();
        assert_eq!(
            report.items,
            vec![ShopItem::new(true, "a", 1, "b", "c"), ShopItem::new(false, "", 2, "", "d")]
        );
    }

    #[test]
    fn test_abort_policy_reports_line() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("items.txt");
        std::fs::write(&path, "True;a;1;b;c\nTrue;a;lots;b;c\n").unwrap();
        let err = load(&path, StoreFormat::Legacy, LoadPolicy::Abort).unwrap_err();
        match err {
            StoreError::Format { line, source } => {
                assert_eq!(line, 2);
                assert_eq!(source, FormatError::InvalidQuantity("lots".to_string()));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_skip_policy_keeps_good_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("items.txt");
        std::fs::write(&path, "maybe;a;1;b;c\nTrue;a;1;b;c\ntrue;x\n").unwrap();
        let report = load(&path, StoreFormat::Legacy, LoadPolicy::Skip).unwrap();
        assert_eq!(report.items, vec![ShopItem::new(true, "a", 1, "b", "c")]);
        let lines: Vec<usize> = report.skipped.iter().map(|s| s.line).collect();
        assert_eq!(lines, [1, 3]);
    }

    #[test]
    fn test_legacy_save_rejects_delimiter() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("items.txt");
        std::fs::write(&path, "True;a;1;b;c\n").unwrap();

        let mut items = sample();
        items.push(ShopItem::new(false, "", 1, "salt;pepper", "Spices"));
        let err = save(&path, &items, StoreFormat::Legacy).unwrap_err();
        assert!(matches!(err, StoreError::Encode { index: 3, .. }));
        // Nothing was written.
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "True;a;1;b;c\n");
    }

    #[test]
    fn test_legacy_save_rejects_line_breaks() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("items.txt");

        let mut items = sample();
        items.insert(1, ShopItem::new(false, "", 1, "two\nlines", "Milk"));
        let err = save(&path, &items, StoreFormat::Legacy).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Encode {
                index: 1,
                source: FormatError::EmbeddedLineBreak { field: "description" }
            }
        ));
        assert!(!path.exists());
    }

    #[test]
    fn test_json_lines_keeps_line_breaks() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("items.jsonl");
        let items = vec![
            ShopItem::new(false, "", 1, "two\nlines\r\n", "Milk"),
            ShopItem::new(true, "", 2, "", "Tea"),
        ];
        save(&path, &items, StoreFormat::JsonLines).unwrap();
        let report = load(&path, StoreFormat::JsonLines, LoadPolicy::Abort).unwrap();
        assert_eq!(report.items, items);
    }

    #[test]
    fn test_json_lines_keeps_delimiters() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("items.jsonl");
        let items = vec![ShopItem::new(false, "a;b", 1, "salt;pepper\ttabs", "Spi\"ces")];
        save(&path, &items, StoreFormat::JsonLines).unwrap();
        let report = load(&path, StoreFormat::JsonLines, LoadPolicy::Abort).unwrap();
        assert_eq!(report.items, items);
    }

    #[test]
    fn test_parse_format_and_policy() {
        assert_eq!("legacy".parse::<StoreFormat>(), Ok(StoreFormat::Legacy));
        assert_eq!("JSONL".parse::<StoreFormat>(), Ok(StoreFormat::JsonLines));
        assert!("csv".parse::<StoreFormat>().is_err());
        assert_eq!("skip".parse::<LoadPolicy>(), Ok(LoadPolicy::Skip));
        assert_eq!(LoadPolicy::Abort.to_string().parse::<LoadPolicy>(), Ok(LoadPolicy::Abort));
    }
}
