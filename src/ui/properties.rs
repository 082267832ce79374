// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Item properties view.
//!
//! Shows every field of a single item, plus what could be read from its
//! image reference.

use crate::io::media::ImageInfo;
use crate::models::item::ShopItem;
use std::io::Write;

/// Write the fields of `item`. `image` is the probe result for the
/// item's image reference, if it could be read.
pub fn show(out: &mut impl Write, item: &ShopItem, image: Option<&ImageInfo>) -> std::io::Result<()> {
    writeln!(out, "Name:        {}", item.name)?;
    writeln!(out, "Description: {}", item.description)?;
    writeln!(out, "Quantity:    {}", item.quantity)?;
    writeln!(out, "Owned:       {}", if item.owned { "yes" } else { "no" })?;

    if item.image_reference.is_empty() {
        writeln!(out, "Image:       (none)")?;
    } else {
        match image {
            Some(info) => writeln!(
                out,
                "Image:       {} ({}, {}x{})",
                item.image_reference,
                info.format_name(),
                info.width,
                info.height
            )?,
            None => writeln!(out, "Image:       {} (unreadable)", item.image_reference)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::ImageFormat;

    fn render(item: &ShopItem, image: Option<&ImageInfo>) -> String {
        let mut buf = Vec::new();
        show(&mut buf, item, image).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_item_with_image() {
        let item = ShopItem::new(true, "img.png", 3, "milk", "Dairy");
        let info = ImageInfo {
            format: Some(ImageFormat::Png),
            width: 640,
            height: 480,
        };
        let text = render(&item, Some(&info));
        assert!(text.contains("Name:        Dairy\n"));
        assert!(text.contains("Owned:       yes\n"));
        assert!(text.ends_with("Image:       img.png (png, 640x480)\n"));
    }

    #[test]
    fn test_item_without_image() {
        let item = ShopItem::new(false, "", 1, "", "Bread");
        assert!(render(&item, None).ends_with("Image:       (none)\n"));

        let item = ShopItem::new(false, "content://media/7", 1, "", "Bread");
        assert!(render(&item, None).ends_with("Image:       content://media/7 (unreadable)\n"));
    }
}
