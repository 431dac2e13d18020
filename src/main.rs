// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use cysmotif::errors::CysmotifError;

fn main() -> Result<(), CysmotifError> {
    cysmotif::run()
}
