// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

pub mod config;
pub mod cysteine;
pub mod errors;
pub mod motif;
pub mod report;
pub mod runner;
pub mod seq;

use crate::errors::CysmotifError;

pub fn run() -> Result<(), CysmotifError> {
    runner::run()
}
