// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Shopping list item and its line encoding.
//!
//! An item is stored as a single line of five `;`-separated fields:
//! `owned;image_reference;quantity;description;name`. The encoding does
//! no escaping, so a field containing the delimiter or a line break
//! cannot be written safely; see [`ShopItem::validate_delimiters`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Field separator of the line encoding.
pub const DELIMITER: char = ';';

const FIELD_COUNT: usize = 5;

/// Errors produced while decoding or validating an item line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("expected 5 fields, found {found}")]
    FieldCount { found: usize },
    #[error("invalid boolean literal '{0}'")]
    InvalidBool(String),
    #[error("invalid quantity '{0}'")]
    InvalidQuantity(String),
    #[error("field '{field}' contains the ';' delimiter")]
    EmbeddedDelimiter { field: &'static str },
    #[error("field '{field}' contains a line break")]
    EmbeddedLineBreak { field: &'static str },
}

/// One entry of the shopping list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopItem {
    /// Whether the item is already owned.
    pub owned: bool,
    /// Local path or URI of an associated image, may be empty.
    pub image_reference: String,
    pub quantity: i32,
    pub description: String,
    pub name: String,
}

impl ShopItem {
    /// Create a new item from its five fields.
    pub fn new(
        owned: bool,
        image_reference: impl Into<String>,
        quantity: i32,
        description: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            owned,
            image_reference: image_reference.into(),
            quantity,
            description: description.into(),
            name: name.into(),
        }
    }

    /// Encode the item as a single line, without a line terminator.
    pub fn encode(&self) -> String {
        format!(
            "{};{};{};{};{}",
            if self.owned { "True" } else { "False" },
            self.image_reference,
            self.quantity,
            self.description,
            self.name
        )
    }

    /// Decode an item from a single line produced by [`ShopItem::encode`].
    pub fn decode(line: &str) -> Result<Self, FormatError> {
        let parts: Vec<&str> = line.split(DELIMITER).collect();
        if parts.len() != FIELD_COUNT {
            return Err(FormatError::FieldCount { found: parts.len() });
        }

        Ok(Self {
            owned: parse_bool(parts[0])?,
            image_reference: parts[1].to_string(),
            quantity: parts[2]
                .trim()
                .parse()
                .map_err(|_| FormatError::InvalidQuantity(parts[2].to_string()))?,
            description: parts[3].to_string(),
            name: parts[4].to_string(),
        })
    }

    /// Check that no string field contains the field delimiter or a
    /// record separator (`\n`, `\r`).
    pub fn validate_delimiters(&self) -> Result<(), FormatError> {
        let fields = [
            ("image_reference", &self.image_reference),
            ("description", &self.description),
            ("name", &self.name),
        ];
        for (field, value) in fields {
            if value.contains(DELIMITER) {
                return Err(FormatError::EmbeddedDelimiter { field });
            }
            if value.contains(['\n', '\r']) {
                return Err(FormatError::EmbeddedLineBreak { field });
            }
        }
        Ok(())
    }
}

fn parse_bool(text: &str) -> Result<bool, FormatError> {
    let trimmed = text.trim();
    if trimmed.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if trimmed.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(FormatError::InvalidBool(text.to_string()))
    }
}

impl fmt::Display for ShopItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl FromStr for ShopItem {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}
