// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use itertools::Itertools;
use log::{debug, warn};

use crate::errors::CysmotifError;
use crate::seq::collection::RecordCollection;
use crate::seq::record::SequenceRecord;

/// Conventional FastA line width, used when writing records.
pub const DEFAULT_LINE_WIDTH: usize = 60;

// Accumulates the record currently being read. Only records with a non-empty identifier and at
// least one sequence line make it into the collection.
struct PendingRecord {
    identifier: String,
    description: String,
    residues: String,
    nb_lines: usize,
}

impl PendingRecord {
    fn from_header(hdr: &str) -> Self {
        // Identifier runs up to the first whitespace character, so "> foo" has an empty one.
        let identifier = hdr.split(char::is_whitespace).next().unwrap_or("");
        let description = hdr[identifier.len()..].trim();
        PendingRecord {
            identifier: identifier.to_string(),
            description: description.to_string(),
            residues: String::new(),
            nb_lines: 0,
        }
    }
}

struct RecordBuilder {
    result: RecordCollection,
    current: Option<PendingRecord>,
    nb_orphan_lines: usize,
}

impl RecordBuilder {
    fn new() -> Self {
        RecordBuilder {
            result: RecordCollection::new(),
            current: None,
            nb_orphan_lines: 0,
        }
    }

    fn push_line(&mut self, line: &str) {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return;
        }
        if let Some(hdr) = trimmed.strip_prefix('>') {
            self.flush();
            self.current = Some(PendingRecord::from_header(hdr));
        } else {
            match self.current.as_mut() {
                Some(rec) => {
                    rec.residues.push_str(trimmed);
                    rec.nb_lines += 1;
                }
                None => self.nb_orphan_lines += 1,
            }
        }
    }

    fn flush(&mut self) {
        let Some(rec) = self.current.take() else {
            return;
        };
        if rec.identifier.is_empty() || rec.nb_lines == 0 {
            debug!(
                "Dropping record '{}' ({} sequence lines)",
                rec.identifier, rec.nb_lines
            );
            return;
        }
        let record = SequenceRecord {
            identifier: rec.identifier,
            description: rec.description,
            residues: rec.residues,
        };
        if let Some(old) = self.result.insert(record) {
            debug!("Duplicate identifier '{}': keeping later record", old.identifier);
        }
    }

    fn finish(mut self) -> RecordCollection {
        self.flush();
        if self.nb_orphan_lines > 0 {
            debug!(
                "Discarded {} sequence line(s) found before any header",
                self.nb_orphan_lines
            );
        }
        self.result
    }
}

pub fn parse_fasta<R: BufRead>(reader: R) -> Result<RecordCollection, io::Error> {
    let mut builder = RecordBuilder::new();
    for line in reader.lines() {
        builder.push_line(&line?);
    }
    Ok(builder.finish())
}

pub fn parse_fasta_str(text: &str) -> RecordCollection {
    let mut builder = RecordBuilder::new();
    for line in text.lines() {
        builder.push_line(line);
    }
    builder.finish()
}

/// Reads a FastA file. A path that does not exist is reported as
/// [`CysmotifError::SourceNotFound`], so that callers can tell "no input" apart from "input with
/// no records".
pub fn read_fasta_file<P: AsRef<Path>>(path: P) -> Result<RecordCollection, CysmotifError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => CysmotifError::SourceNotFound(path.to_path_buf()),
        _ => CysmotifError::Io(e),
    })?;
    Ok(parse_fasta(BufReader::new(file))?)
}

/// Like [`read_fasta_file`], but any failure degrades to an empty collection (and a warning).
pub fn read_fasta_file_or_empty<P: AsRef<Path>>(path: P) -> RecordCollection {
    match read_fasta_file(&path) {
        Ok(records) => records,
        Err(e) => {
            warn!("Could not read {}: {}", path.as_ref().display(), e);
            RecordCollection::new()
        }
    }
}

/// Writes records in FastA format, wrapping sequences at `line_width` characters (0: no wrapping).
pub fn write_fasta<'a, W, I>(writer: &mut W, records: I, line_width: usize) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a SequenceRecord>,
{
    for rec in records {
        writeln!(writer, ">{}", rec.header())?;
        if line_width == 0 {
            writeln!(writer, "{}", rec.residues)?;
            continue;
        }
        let chunks = rec.residues.chars().chunks(line_width);
        for chunk in &chunks {
            writeln!(writer, "{}", chunk.collect::<String>())?;
        }
    }
    Ok(())
}

pub fn write_fasta_file<'a, P, I>(
    path: P,
    records: I,
    line_width: usize,
) -> Result<(), CysmotifError>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = &'a SequenceRecord>,
{
    let mut writer = BufWriter::new(File::create(path)?);
    write_fasta(&mut writer, records, line_width)?;
    writer.flush()?;
    Ok(())
}
