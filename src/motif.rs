// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

//! Gapped cysteine-spacing motifs.
//!
//! A motif is described as a list of [`Segment`]s: literal residues and variable-length gaps. It
//! is compiled once into a regex with greedy bounded repeats; since the `regex` crate reports
//! leftmost-first matches, the spans it finds are the ones a backtracking matcher that prefers the
//! longest gap would find. Occurrences are counted without overlap, left to right.

use std::ops::Range;
use std::sync::OnceLock;

use log::{debug, info};
use regex::{Regex, RegexBuilder};
use serde::Serialize;

use crate::errors::CysmotifError;
use crate::seq::collection::RecordCollection;

/// Records are reported when they contain at least this many occurrences.
pub const DEFAULT_MIN_COUNT: usize = 2;

// Six bounded repeats of up to 70 arbitrary characters exceed the default compiled-size limit.
const REGEX_SIZE_LIMIT: usize = 64 * (1 << 20);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// Exactly this residue.
    Residue(char),
    /// Between `min` and `max` residues (inclusive) of any kind, cysteines included.
    Gap { min: usize, max: usize },
}

pub const CYS: Segment = Segment::Residue('C');

pub const SPACER: Segment = Segment::Gap { min: 2, max: 70 };

/// Spacer of the CXC segment. Unlike the other spacers its lower bound is 0, so "CC" also
/// satisfies CXC.
pub const CXC_SPACER: Segment = Segment::Gap { min: 0, max: 70 };

/// C-Xn-C-Xn-CC-Xn-CXC-Xn-C-Xn-C
pub const EIGHT_CYSTEINE_MOTIF: &[Segment] = &[
    CYS, SPACER, CYS, SPACER, CYS, CYS, SPACER, CYS, CXC_SPACER, CYS, SPACER, CYS, SPACER, CYS,
];

#[derive(Debug, Clone)]
pub struct Motif {
    name: String,
    segments: Vec<Segment>,
    regex: Regex,
}

impl Motif {
    pub fn compile(name: &str, segments: &[Segment]) -> Result<Self, CysmotifError> {
        if !segments.iter().any(|s| matches!(s, Segment::Residue(_))) {
            // Would match the empty string (or nothing at all).
            return Err(CysmotifError::Pattern(format!(
                "motif '{}' has no literal residue",
                name
            )));
        }
        let mut pattern = String::new();
        for segment in segments {
            match *segment {
                Segment::Residue(c) => pattern.push_str(&regex::escape(c.encode_utf8(&mut [0; 4]))),
                Segment::Gap { min, max } => {
                    if min > max {
                        return Err(CysmotifError::Pattern(format!(
                            "motif '{}': gap lower bound {} exceeds upper bound {}",
                            name, min, max
                        )));
                    }
                    pattern.push_str(&format!(".{{{},{}}}", min, max));
                }
            }
        }
        debug!("Compiling motif '{}': {}", name, pattern);
        let regex = RegexBuilder::new(&pattern)
            .dot_matches_new_line(true)
            .size_limit(REGEX_SIZE_LIMIT)
            .build()?;
        Ok(Motif {
            name: name.to_string(),
            segments: segments.to_vec(),
            regex,
        })
    }

    pub fn eight_cysteine() -> Result<Self, CysmotifError> {
        Motif::compile("8CM", EIGHT_CYSTEINE_MOTIF)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The compiled pattern, e.g. `C.{2,70}C...`.
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Shortest and longest stretch of residues a single occurrence can cover.
    pub fn span_bounds(&self) -> (usize, usize) {
        self.segments()
            .iter()
            .fold((0, 0), |(lo, hi), segment| match *segment {
                Segment::Residue(_) => (lo + 1, hi + 1),
                Segment::Gap { min, max } => (lo + min, hi + max),
            })
    }

    /// Number of non-overlapping occurrences in `residues`.
    pub fn count(&self, residues: &str) -> usize {
        self.regex.find_iter(residues).count()
    }

    /// Byte ranges of the occurrences counted by [`Motif::count`].
    pub fn find_spans(&self, residues: &str) -> Vec<Range<usize>> {
        self.regex.find_iter(residues).map(|m| m.range()).collect()
    }
}

fn builtin_motif() -> &'static Motif {
    static MOTIF: OnceLock<Motif> = OnceLock::new();
    MOTIF.get_or_init(|| Motif::eight_cysteine().expect("built-in 8CM motif must compile"))
}

/// Counts non-overlapping 8CM motifs in `residues`.
pub fn count_motif_occurrences(residues: &str) -> usize {
    builtin_motif().count(residues)
}

// Receives per-record findings as a scan progresses.
pub trait ScanObserver {
    fn record_scanned(&mut self, _identifier: &str, _count: usize) {}
    fn record_qualified(&mut self, _identifier: &str, _count: usize) {}
}

impl ScanObserver for () {}

/// Sends findings to the log.
pub struct LogObserver;

impl ScanObserver for LogObserver {
    fn record_scanned(&mut self, identifier: &str, count: usize) {
        debug!("{}: {} motif(s)", identifier, count);
    }

    fn record_qualified(&mut self, identifier: &str, count: usize) {
        info!("Found {} motifs in protein: {}", count, identifier);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MotifHit {
    pub identifier: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MotifMatchResult {
    hits: Vec<MotifHit>,
}

impl MotifMatchResult {
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MotifHit> {
        self.hits.iter()
    }

    pub fn get(&self, identifier: &str) -> Option<usize> {
        self.hits
            .iter()
            .find(|hit| hit.identifier == identifier)
            .map(|hit| hit.count)
    }
}

/// Counts `motif` in every record and keeps those with at least `min_count` occurrences, in
/// collection order.
pub fn scan_records<O>(
    records: &RecordCollection,
    motif: &Motif,
    min_count: usize,
    observer: &mut O,
) -> MotifMatchResult
where
    O: ScanObserver + ?Sized,
{
    let mut hits = Vec::new();
    for rec in records {
        let count = motif.count(&rec.residues);
        observer.record_scanned(&rec.identifier, count);
        if count >= min_count {
            observer.record_qualified(&rec.identifier, count);
            hits.push(MotifHit {
                identifier: rec.identifier.clone(),
                count,
            });
        }
    }
    MotifMatchResult { hits }
}
