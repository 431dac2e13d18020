// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::path::{Path, PathBuf};

use cysmotif::runner::{run_cysteines, run_motif};

pub const PROTEINS: &str = "tests/data/proteins.fasta";

#[allow(dead_code)]
pub fn motif_report(path: &str, min_count: usize, json: bool) -> String {
    let mut out: Vec<u8> = Vec::new();
    run_motif(path, min_count, json, &mut out).expect("motif pipeline");
    String::from_utf8(out).expect("utf8")
}

#[allow(dead_code)]
pub fn cysteine_filter(input: &str, output: &Path, target: usize, line_width: usize) -> String {
    let mut out: Vec<u8> = Vec::new();
    let output = output.to_str().expect("utf8 path");
    run_cysteines(input, output, target, line_width, &mut out).expect("cysteine pipeline");
    String::from_utf8(out).expect("utf8")
}

#[allow(dead_code)]
pub fn write_fasta_text(dir: &Path, name: &str, text: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, text).expect("writing test input");
    path
}
