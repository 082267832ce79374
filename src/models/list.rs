// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! In-memory shopping list state.
//!
//! This module holds the ordered item collection together with the
//! current selection, and the document shape used for import/export.

use super::item::ShopItem;
use serde::{Deserialize, Serialize};

/// Complete list data for serialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListData {
    pub items: Vec<ShopItem>,
}

impl ListData {
    pub fn new(items: Vec<ShopItem>) -> Self {
        Self { items }
    }
}

/// Ordered list of items with an optional selection.
///
/// Insertion order is display order. The selection is an index into the
/// list and is never persisted.
#[derive(Debug, Clone, Default)]
pub struct ShopList {
    items: Vec<ShopItem>,
    selected: Option<usize>,
}

impl ShopList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<ShopItem>) -> Self {
        Self {
            items,
            selected: None,
        }
    }

    pub fn items(&self) -> &[ShopItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append an item to the end of the list.
    pub fn add(&mut self, item: ShopItem) {
        self.items.push(item);
    }

    /// Replace the whole contents, clearing the selection.
    pub fn replace_all(&mut self, items: Vec<ShopItem>) {
        self.items = items;
        self.selected = None;
    }

    /// Index of the selected item, if any.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected(&self) -> Option<&ShopItem> {
        self.selected.and_then(|idx| self.items.get(idx))
    }

    /// Set or clear the selection.
    ///
    /// Returns `false` and leaves the selection untouched when `index` is
    /// out of range.
    pub fn select(&mut self, index: Option<usize>) -> bool {
        match index {
            Some(idx) if idx >= self.items.len() => false,
            _ => {
                self.selected = index;
                true
            }
        }
    }

    /// Remove the first item equal to `item`.
    ///
    /// For callers that hold an item rather than an index, such as a UI
    /// bound to item values; the command line removes by selection instead.
    pub fn remove(&mut self, item: &ShopItem) -> Option<ShopItem> {
        let idx = self.items.iter().position(|candidate| candidate == item)?;
        Some(self.remove_at(idx))
    }

    /// Remove the last item, clearing the selection if it pointed there.
    pub fn pop(&mut self) -> Option<ShopItem> {
        let idx = self.items.len().checked_sub(1)?;
        Some(self.remove_at(idx))
    }

    /// Remove the selected item and clear the selection.
    pub fn remove_selected(&mut self) -> Option<ShopItem> {
        let idx = self.selected?;
        Some(self.remove_at(idx))
    }

    fn remove_at(&mut self, idx: usize) -> ShopItem {
        let removed = self.items.remove(idx);
        self.selected = match self.selected {
            Some(sel) if sel == idx => None,
            Some(sel) if sel > idx => Some(sel - 1),
            other => other,
        };
        removed
    }
}
