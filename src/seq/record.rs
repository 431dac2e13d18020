// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

// A protein record, as read from a FastA header and its sequence lines. The identifier is the
// first token of the header; whatever follows it on the header line is kept as the description so
// that the record can be written back out unchanged.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SequenceRecord {
    pub identifier: String,
    pub description: String,
    pub residues: String,
}

impl SequenceRecord {
    pub fn new(identifier: &str, residues: &str) -> Self {
        SequenceRecord {
            identifier: identifier.to_string(),
            description: String::new(),
            residues: residues.to_string(),
        }
    }

    pub fn with_description(identifier: &str, description: &str, residues: &str) -> Self {
        SequenceRecord {
            identifier: identifier.to_string(),
            description: description.to_string(),
            residues: residues.to_string(),
        }
    }

    /// The header line as it would appear after the '>'.
    pub fn header(&self) -> String {
        if self.description.is_empty() {
            self.identifier.clone()
        } else {
            format!("{} {}", self.identifier, self.description)
        }
    }
}
