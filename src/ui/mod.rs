// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Text views for the shoplist command line.

pub mod list_view;
pub mod properties;
