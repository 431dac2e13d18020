// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::io::{stdin, stdout, Write};
use std::path::Path;

use log::{info, warn};

use clap::{Parser, Subcommand};

use crate::config::{find_config, CysmotifConfig};
use crate::cysteine::filter_exact_cysteines;
use crate::errors::CysmotifError;
use crate::motif::{scan_records, LogObserver, Motif};
use crate::report::{cysteine_summary, MotifReport};
use crate::seq::collection::RecordCollection;
use crate::seq::fasta::{read_fasta_file, write_fasta_file};

#[derive(Debug, Parser)]
#[command(version, about, long_about = None) ]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Report proteins containing repeated 8CM motifs
    Motif {
        /// Protein FastA file (asked for if omitted)
        input: Option<String>,

        /// Report proteins with at least this many motifs [default: 2]
        #[arg(short, long = "min-count")]
        min_count: Option<usize>,

        /// JSON output
        #[arg(short, long)]
        json: bool,
    },

    /// Extract proteins with an exact number of cysteines into a FastA file
    Cysteines {
        /// Protein FastA file (asked for if omitted)
        input: Option<String>,

        /// Output FastA file [default: eight_cysteine_proteins.fasta]
        #[arg(short, long)]
        output: Option<String>,

        /// Required number of cysteines [default: 8]
        #[arg(short = 'n', long = "count")]
        count: Option<usize>,

        /// Sequence line width in the output (0: no wrapping) [default: 60]
        #[arg(short = 'w', long = "line-width")]
        line_width: Option<usize>,
    },
}

// A config file that cannot be read falls back to the defaults; the error message is handed back
// for the caller to show.
fn load_config(path: Option<&Path>) -> (CysmotifConfig, Option<String>) {
    let Some(path) = path else {
        return (CysmotifConfig::default(), None);
    };
    match CysmotifConfig::from_file(path) {
        Ok(cfg) => {
            info!("Using config {}", path.display());
            (cfg, None)
        }
        Err(e) => (
            CysmotifConfig::default(),
            Some(format!(
                "Error reading {}: {} (using defaults)",
                path.display(),
                e
            )),
        ),
    }
}

fn prompt_for_input() -> Result<String, CysmotifError> {
    print!("Please enter the path to your FASTA file: ");
    stdout().flush()?;
    let mut line = String::new();
    stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

// Ok(None) means the input is missing or unreadable; the diagnostic has already been written.
fn load_records<W: Write>(
    input: &str,
    out: &mut W,
) -> Result<Option<RecordCollection>, CysmotifError> {
    match read_fasta_file(input) {
        Ok(records) => {
            info!("Parsed {} records from {}", records.len(), input);
            Ok(Some(records))
        }
        Err(CysmotifError::SourceNotFound(path)) => {
            warn!("Input not found: {}", path.display());
            writeln!(
                out,
                "Error: The specified file '{}' does not exist.",
                path.display()
            )?;
            Ok(None)
        }
        Err(e) => {
            warn!("Could not read {}: {}", input, e);
            writeln!(out, "Error: could not read '{}': {}", input, e)?;
            Ok(None)
        }
    }
}

/// Motif pipeline: reads `input` and writes a report of proteins with at least `min_count` 8CM
/// motifs to `out`.
pub fn run_motif<W: Write>(
    input: &str,
    min_count: usize,
    json: bool,
    out: &mut W,
) -> Result<(), CysmotifError> {
    let Some(records) = load_records(input, out)? else {
        return Ok(());
    };
    let motif = Motif::eight_cysteine()?;
    let hits = scan_records(&records, &motif, min_count, &mut LogObserver);
    let report = MotifReport::new(input, &motif, min_count, records.len(), &hits);
    if json {
        report.write_json(out)?;
    } else {
        report.write_text(out)?;
    }
    Ok(())
}

/// Cysteine pipeline: writes the proteins of `input` that have exactly `target` cysteines to
/// `output`. Nothing is written if none qualify.
pub fn run_cysteines<W: Write>(
    input: &str,
    output: &str,
    target: usize,
    line_width: usize,
    out: &mut W,
) -> Result<(), CysmotifError> {
    let Some(records) = load_records(input, out)? else {
        return Ok(());
    };
    let result = filter_exact_cysteines(&records, target);
    if !result.is_empty() {
        write_fasta_file(output, &result.records, line_width)?;
        info!("Wrote {} records to {}", result.len(), output);
    }
    writeln!(out, "{}", cysteine_summary(&result, output))?;
    Ok(())
}

pub fn run() -> Result<(), CysmotifError> {
    env_logger::init();
    info!("Starting log");

    let cli = Cli::parse();
    let (config, config_err) = load_config(find_config().as_deref());
    if let Some(msg) = config_err {
        eprintln!("{}", msg);
    }

    match cli.command {
        Command::Motif {
            input,
            min_count,
            json,
        } => {
            let input = match input {
                Some(path) => path,
                None => prompt_for_input()?,
            };
            run_motif(
                &input,
                min_count.unwrap_or(config.min_motif_count),
                json,
                &mut stdout().lock(),
            )
        }
        Command::Cysteines {
            input,
            output,
            count,
            line_width,
        } => {
            let input = match input {
                Some(path) => path,
                None => prompt_for_input()?,
            };
            let output = output.unwrap_or_else(|| config.output_path().to_string());
            run_cysteines(
                &input,
                &output,
                count.unwrap_or(config.cysteine_target),
                line_width.unwrap_or(config.line_width),
                &mut stdout().lock(),
            )
        }
    }
}
