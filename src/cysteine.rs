// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use crate::seq::collection::RecordCollection;
use crate::seq::record::SequenceRecord;

pub const CYSTEINE: char = 'C';

pub const DEFAULT_CYSTEINE_TARGET: usize = 8;

// Case-sensitive: 'c' is not counted.
pub fn count_cysteines(residues: &str) -> usize {
    residues.chars().filter(|&c| c == CYSTEINE).count()
}

pub fn has_exact_cysteine_count(residues: &str, target: usize) -> bool {
    count_cysteines(residues) == target
}

pub fn has_exactly_eight_cysteines(residues: &str) -> bool {
    has_exact_cysteine_count(residues, DEFAULT_CYSTEINE_TARGET)
}

/// Records whose cysteine count equals the target, copied as-is so they can be written back out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CysteineCountResult {
    pub target: usize,
    pub records: Vec<SequenceRecord>,
}

impl CysteineCountResult {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

pub fn filter_exact_cysteines(records: &RecordCollection, target: usize) -> CysteineCountResult {
    CysteineCountResult {
        target,
        records: records
            .iter()
            .filter(|rec| has_exact_cysteine_count(&rec.residues, target))
            .cloned()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seq::fasta::parse_fasta_str;

    #[test]
    fn test_exactly_eight() {
        assert!(has_exactly_eight_cysteines("ACACACACACACACAC"));
        assert!(has_exactly_eight_cysteines("CCCCCCCC"));
    }

    #[test]
    fn test_seven_and_nine() {
        assert!(!has_exactly_eight_cysteines("ACACACACACACAC"));
        assert!(!has_exactly_eight_cysteines("ACACACACACACACACAC"));
    }

    #[test]
    fn test_lowercase_not_counted() {
        assert_eq!(count_cysteines("CcCcCcCcCcCcCcCc"), 8);
        assert!(!has_exactly_eight_cysteines("cccccccc"));
        assert_eq!(count_cysteines(""), 0);
    }

    #[test]
    fn test_filter_keeps_order_and_content() {
        let records = parse_fasta_str(
            ">a first\nCCCC\nCCCC\n>b\nCCC\n>c third one\nMCKCLCVCACDCECFC\n>d\nCCCCCCCCC\n",
        );
        let result = filter_exact_cysteines(&records, DEFAULT_CYSTEINE_TARGET);
        assert_eq!(result.len(), 2);
        assert_eq!(result.records[0].identifier, "a");
        assert_eq!(result.records[0].residues, "CCCCCCCC");
        assert_eq!(result.records[1].header(), "c third one");
    }

    #[test]
    fn test_other_target() {
        let records = parse_fasta_str(">a\nCCC\n>b\nCC\n");
        let result = filter_exact_cysteines(&records, 3);
        assert_eq!(result.target, 3);
        assert_eq!(
            result.records.iter().map(|r| r.identifier.as_str()).collect::<Vec<_>>(),
            vec!["a"]
        );
    }
}
