// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{fmt, io, path::PathBuf};

#[derive(Debug)]
pub enum CysmotifError {
    Io(io::Error),
    SourceNotFound(PathBuf),
    Config(String),
    Pattern(String),
}

// These allow conversion to CysmotifError, required for main() to return Result<()> and for '?'
// to work.

impl From<io::Error> for CysmotifError {
    fn from(e: io::Error) -> Self {
        CysmotifError::Io(e)
    }
}

impl From<serde_json::Error> for CysmotifError {
    fn from(e: serde_json::Error) -> Self {
        CysmotifError::Config(e.to_string())
    }
}

impl From<regex::Error> for CysmotifError {
    fn from(e: regex::Error) -> Self {
        CysmotifError::Pattern(e.to_string())
    }
}

impl fmt::Display for CysmotifError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CysmotifError::Io(e) => write!(f, "I/O error: {}", e),
            CysmotifError::SourceNotFound(path) => {
                write!(f, "File not found: {}", path.display())
            }
            CysmotifError::Config(msg) => write!(f, "Config error: {}", msg),
            CysmotifError::Pattern(msg) => write!(f, "Pattern error: {}", msg),
        }
    }
}

impl std::error::Error for CysmotifError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CysmotifError::Io(e) => Some(e),
            _ => None,
        }
    }
}
