// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

// Rendering of pipeline results. Nothing here decides what qualifies; it only formats what the
// motif and cysteine modules computed.

use std::io::{self, Write};

use serde::Serialize;

use crate::cysteine::CysteineCountResult;
use crate::motif::{Motif, MotifMatchResult};

#[derive(Debug, Serialize)]
pub struct MotifReport<'a> {
    pub source: &'a str,
    pub motif: &'a str,
    pub pattern: &'a str,
    pub min_count: usize,
    pub records_parsed: usize,
    pub hits: &'a MotifMatchResult,
}

impl<'a> MotifReport<'a> {
    pub fn new(
        source: &'a str,
        motif: &'a Motif,
        min_count: usize,
        records_parsed: usize,
        hits: &'a MotifMatchResult,
    ) -> Self {
        MotifReport {
            source,
            motif: motif.name(),
            pattern: motif.pattern(),
            min_count,
            records_parsed,
            hits,
        }
    }

    pub fn write_text<W: Write>(&self, w: &mut W) -> io::Result<()> {
        if self.records_parsed == 0 {
            writeln!(w, "No proteins found in '{}'.", self.source)?;
            return Ok(());
        }
        writeln!(
            w,
            "Parsed {} proteins from '{}'.",
            self.records_parsed, self.source
        )?;
        writeln!(
            w,
            "Searching for proteins with {} or more {} motifs using pattern: {}",
            self.min_count, self.motif, self.pattern
        )?;
        if self.hits.is_empty() {
            writeln!(
                w,
                "No proteins with {} or more {} motifs were found.",
                self.min_count, self.motif
            )?;
            return Ok(());
        }
        writeln!(
            w,
            "Found {} proteins with {} or more {} motifs:",
            self.hits.len(),
            self.min_count,
            self.motif
        )?;
        for hit in self.hits.iter() {
            writeln!(
                w,
                "Protein ID: {}, Number of {} Motifs: {}",
                hit.identifier, self.motif, hit.count
            )?;
        }
        Ok(())
    }

    pub fn write_json<W: Write>(&self, w: &mut W) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *w, self)?;
        writeln!(w)
    }
}

pub fn cysteine_summary(result: &CysteineCountResult, output: &str) -> String {
    if result.is_empty() {
        format!(
            "No proteins with exactly {} cysteines were found in the input file; '{}' was not written.",
            result.target, output
        )
    } else {
        format!(
            "Successfully extracted {} proteins with {} cysteines.\nFiltered sequences saved to '{}'.",
            result.len(),
            result.target,
            output
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cysteine::filter_exact_cysteines;
    use crate::motif::{scan_records, DEFAULT_MIN_COUNT};
    use crate::seq::collection::RecordCollection;
    use crate::seq::fasta::parse_fasta_str;

    fn render(report: &MotifReport) -> String {
        let mut out: Vec<u8> = Vec::new();
        report.write_text(&mut out).expect("write");
        String::from_utf8(out).expect("utf8")
    }

    fn two_motif_fasta() -> String {
        let unit = "CAACAACCAACCAACAAC";
        format!(
            ">P1\n{unit}{sep}{unit}\n>P2\n{unit}\n>P3\n{unit}{sep}{unit}{sep}{unit}\n",
            unit = unit,
            sep = "K".repeat(80)
        )
    }

    #[test]
    fn test_text_report_with_hits() {
        let records = parse_fasta_str(&two_motif_fasta());
        let motif = Motif::eight_cysteine().expect("compile");
        let hits = scan_records(&records, &motif, DEFAULT_MIN_COUNT, &mut ());
        let report = MotifReport::new("in.fasta", &motif, DEFAULT_MIN_COUNT, records.len(), &hits);
        insta::assert_snapshot!(render(&report).trim_end(), @r"
        Parsed 3 proteins from 'in.fasta'.
        Searching for proteins with 2 or more 8CM motifs using pattern: C.{2,70}C.{2,70}CC.{2,70}C.{0,70}C.{2,70}C.{2,70}C
        Found 2 proteins with 2 or more 8CM motifs:
        Protein ID: P1, Number of 8CM Motifs: 2
        Protein ID: P3, Number of 8CM Motifs: 3
        ");
    }

    #[test]
    fn test_text_report_no_hits_differs_from_no_records() {
        let motif = Motif::eight_cysteine().expect("compile");
        let hits = MotifMatchResult::default();

        let records = parse_fasta_str(">P1\nMKV\n");
        let no_hits = render(&MotifReport::new("a.fa", &motif, 2, records.len(), &hits));
        assert!(no_hits.ends_with("No proteins with 2 or more 8CM motifs were found.\n"));

        let empty = RecordCollection::new();
        let no_records = render(&MotifReport::new("a.fa", &motif, 2, empty.len(), &hits));
        assert_eq!(no_records, "No proteins found in 'a.fa'.\n");
    }

    #[test]
    fn test_json_report() {
        let records = parse_fasta_str(&two_motif_fasta());
        let motif = Motif::eight_cysteine().expect("compile");
        let hits = scan_records(&records, &motif, DEFAULT_MIN_COUNT, &mut ());
        let report = MotifReport::new("in.fasta", &motif, DEFAULT_MIN_COUNT, records.len(), &hits);
        let mut out: Vec<u8> = Vec::new();
        report.write_json(&mut out).expect("write");
        let value: serde_json::Value = serde_json::from_slice(&out).expect("valid json");
        assert_eq!(
            value,
            serde_json::json!({
                "source": "in.fasta",
                "motif": "8CM",
                "pattern": "C.{2,70}C.{2,70}CC.{2,70}C.{0,70}C.{2,70}C.{2,70}C",
                "min_count": 2,
                "records_parsed": 3,
                "hits": [
                    { "identifier": "P1", "count": 2 },
                    { "identifier": "P3", "count": 3 }
                ]
            })
        );
    }

    #[test]
    fn test_cysteine_summary() {
        let records = parse_fasta_str(">a\nCCCCCCCC\n>b\nCC\n");
        let found = filter_exact_cysteines(&records, 8);
        insta::assert_snapshot!(cysteine_summary(&found, "out.fa"), @r"
        Successfully extracted 1 proteins with 8 cysteines.
        Filtered sequences saved to 'out.fa'.
        ");
        let none = filter_exact_cysteines(&records, 5);
        assert_eq!(
            cysteine_summary(&none, "out.fa"),
            "No proteins with exactly 5 cysteines were found in the input file; 'out.fa' was not written."
        );
    }
}
