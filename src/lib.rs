// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! shoplist - personal shopping and inventory list
//!
//! Items are kept in memory as an ordered list with an optional
//! selection, and stored between sessions in a local flat file.

pub mod app;
pub mod cli;
pub mod config;
pub mod io;
pub mod models;
pub mod ui;
