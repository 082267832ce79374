// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Command line interface.
//!
//! Each invocation is one session: the list is loaded, a single command
//! is applied, and the list is written back.

use crate::app::{ShareRequest, ShareSink, ShopApp};
use crate::config::AppConfig;
use crate::io::{
    media,
    storage::{LoadPolicy, StoreFormat},
};
use crate::models::item::ShopItem;
use crate::ui::{list_view, properties};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[clap(name = "shoplist", author, version, about = "Personal shopping and inventory list")]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,

    #[clap(long, short, help = "Data file (default: platform data dir, or $SHOPLIST_FILE)")]
    pub file: Option<PathBuf>,

    #[clap(long, help = "Data file encoding: legacy or json-lines")]
    pub format: Option<StoreFormat>,

    #[clap(long, help = "On unreadable lines: abort the load or skip the line")]
    pub on_error: Option<LoadPolicy>,

    #[clap(long, short, default_value = "warn")]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print all items with their index
    List,
    /// Add an item and save the list
    Add {
        #[clap(long, short)]
        name: String,
        #[clap(long, short, default_value = "")]
        description: String,
        #[clap(long, short, default_value_t = 1)]
        quantity: i32,
        #[clap(long, help = "Mark the item as already owned")]
        owned: bool,
        #[clap(long, help = "Path of an image of the item")]
        image: Option<String>,
    },
    /// Remove the item at INDEX
    Remove { index: usize },
    /// Show every field of the item at INDEX
    Show { index: usize },
    /// Share the item at INDEX
    Share { index: usize },
    /// Write the list to a YAML or JSON document
    Export { path: PathBuf },
    /// Append the items of a YAML or JSON document
    Import { path: PathBuf },
}

impl Cli {
    /// Environment configuration with command line flags applied on top.
    pub fn config(&self) -> Result<AppConfig> {
        let mut config = AppConfig::from_env()?;
        if let Some(file) = &self.file {
            config.data_file = file.clone();
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        if let Some(policy) = self.on_error {
            config.load_policy = policy;
        }
        Ok(config)
    }
}

/// Prints share requests to a writer.
pub struct WriterShare<W: Write> {
    out: W,
}

impl<W: Write> WriterShare<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> ShareSink for WriterShare<W> {
    fn share(&mut self, request: &ShareRequest) -> Result<()> {
        writeln!(self.out, "{}", request.title)?;
        writeln!(self.out, "{}", request.text)?;
        Ok(())
    }
}

/// Run one session for `command`, writing user-facing output to `out`.
pub fn run(config: AppConfig, command: Commands, out: &mut impl Write) -> Result<()> {
    let mut app = ShopApp::new(config);
    let data_file = app.config().data_file.clone();

    let skipped = app
        .on_session_start()
        .with_context(|| format!("Failed to load {}", data_file.display()))?;
    if !skipped.is_empty() {
        writeln!(out, "warning: skipped {} unreadable line(s) in {}", skipped.len(), data_file.display())?;
    }

    match command {
        Commands::List => list_view::show(out, app.list())?,
        Commands::Add {
            name,
            description,
            quantity,
            owned,
            image,
        } => {
            let image_reference = image.unwrap_or_default();
            if !image_reference.is_empty() {
                check_image(Path::new(&image_reference));
            }
            let item = ShopItem::new(owned, image_reference, quantity, description, name);
            app.add(item).context("Failed to add item")?;
            writeln!(out, "Added item {}", app.list().len() - 1)?;
        }
        Commands::Remove { index } => {
            select(&mut app, index)?;
            if let Some(item) = app.remove_selected() {
                writeln!(out, "Removed {}", item.name)?;
            }
        }
        Commands::Show { index } => {
            select(&mut app, index)?;
            if let Some(item) = app.list().selected() {
                let image = if item.image_reference.is_empty() {
                    None
                } else {
                    media::probe(Path::new(&item.image_reference)).ok()
                };
                properties::show(out, item, image.as_ref())?;
            }
        }
        Commands::Share { index } => {
            select(&mut app, index)?;
            app.share_selected(&mut WriterShare::new(&mut *out))?;
        }
        Commands::Export { path } => {
            app.export(&path)?;
            writeln!(out, "Exported {} items to {}", app.list().len(), path.display())?;
        }
        Commands::Import { path } => {
            let count = app.import(&path)?;
            writeln!(out, "Imported {} items", count)?;
        }
    }

    app.on_session_end()
        .with_context(|| format!("Failed to save {}", data_file.display()))?;
    Ok(())
}

fn select(app: &mut ShopApp, index: usize) -> Result<()> {
    if !app.select(Some(index)) {
        bail!("No item at index {} (list has {} items)", index, app.list().len());
    }
    Ok(())
}

/// The reference is stored as given; an unreadable image only warrants a
/// warning.
fn check_image(path: &Path) {
    if !media::is_image_path(path) {
        log::warn!("{} does not look like an image file", path.display());
    }
    if let Err(e) = media::probe(path) {
        log::warn!("Image reference may be unusable: {:#}", e);
    }
}
