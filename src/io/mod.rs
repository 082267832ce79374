// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations for the data file, documents and item images.

pub mod media;
pub mod serialization;
pub mod storage;
