// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Command line entry point for shoplist.

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;
use shoplist::cli::{self, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG still takes precedence per module
    let level = cli.log_level.parse().unwrap_or(LevelFilter::Warn);
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let config = cli.config()?;
    log::debug!("Using {:?}", config);

    let mut stdout = std::io::stdout().lock();
    cli::run(config, cli.command, &mut stdout)
}
