// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::cysteine::DEFAULT_CYSTEINE_TARGET;
use crate::errors::CysmotifError;
use crate::motif::DEFAULT_MIN_COUNT;
use crate::seq::fasta::DEFAULT_LINE_WIDTH;

pub const CONFIG_FILE_NAME: &str = ".cysmotifconfig";

pub const DEFAULT_OUTPUT: &str = "eight_cysteine_proteins.fasta";

// Settings from the (optional) JSON config file. Every field may be omitted; command-line options
// take precedence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CysmotifConfig {
    pub min_motif_count: usize,
    pub cysteine_target: usize,
    pub line_width: usize,
    pub output: Option<String>,
}

impl Default for CysmotifConfig {
    fn default() -> Self {
        CysmotifConfig {
            min_motif_count: DEFAULT_MIN_COUNT,
            cysteine_target: DEFAULT_CYSTEINE_TARGET,
            line_width: DEFAULT_LINE_WIDTH,
            output: None,
        }
    }
}

impl CysmotifConfig {
    pub fn from_json(text: &str) -> Result<Self, CysmotifError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, CysmotifError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn output_path(&self) -> &str {
        self.output.as_deref().unwrap_or(DEFAULT_OUTPUT)
    }
}

/// Looks for the config file in $HOME, then in the current directory.
pub fn find_config() -> Option<PathBuf> {
    if let Ok(home) = std::env::var("HOME") {
        let path = PathBuf::from(home).join(CONFIG_FILE_NAME);
        if path.exists() {
            return Some(path);
        }
    }
    if let Ok(cwd) = std::env::current_dir() {
        let path = cwd.join(CONFIG_FILE_NAME);
        if path.exists() {
            return Some(path);
        }
    }
    None
}
