// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Item list view.
//!
//! Renders the list one row per item, in display order, with the index
//! used by the `remove`, `show` and `share` commands.

use crate::models::list::ShopList;
use std::io::Write;

/// Write the list as numbered rows.
pub fn show(out: &mut impl Write, list: &ShopList) -> std::io::Result<()> {
    if list.is_empty() {
        return writeln!(out, "(no items)");
    }

    let width = list.len().saturating_sub(1).to_string().len();
    for (idx, item) in list.items().iter().enumerate() {
        let marker = if list.selected_index() == Some(idx) { '>' } else { ' ' };
        let owned = if item.owned { "[x]" } else { "[ ]" };
        write!(out, "{marker}{idx:>width$} {owned} {:>4} x {}", item.quantity, item.name)?;
        if !item.description.is_empty() {
            write!(out, " - {}", item.description)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::item::ShopItem;

    fn render(list: &ShopList) -> String {
        let mut buf = Vec::new();
        show(&mut buf, list).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(render(&ShopList::new()), "(no items)\n");
    }

    #[test]
    fn test_rows_in_order() {
        let mut list = ShopList::with_items(vec![
            ShopItem::new(true, "img.png", 3, "milk", "Dairy"),
            ShopItem::new(false, "", 12, "", "Eggs"),
        ]);
        list.select(Some(1));
        assert_eq!(
            render(&list),
            " 0 [x]    3 x Dairy - milk\n>1 [ ]   12 x Eggs\n"
        );
    }
}
