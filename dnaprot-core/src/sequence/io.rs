use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use bio::io::fasta;
use tracing::debug;

use crate::constants::RECORD_TERMINATOR;
use crate::types::*;

/// Read the raw sequence stored in a flat-file annotation record.
///
/// Accumulation is armed by the first line that starts with a space; that
/// line itself is a header and is skipped. Every following line is read from
/// its first space onward; text before that space, and any line without a
/// space, contributes nothing. Within the read part, text from an embedded
/// `//` up to the next space is dropped, and the remaining whitespace-delimited
/// tokens are joined without separators. A line that is exactly `//`
/// (ignoring surrounding whitespace) ends the record, and the next space-led
/// line arms the next one.
///
/// The result is not filtered: position numbers and lowercase bases are kept
/// for [`filter_dna_sequence`](crate::sequence::filter_dna_sequence) to clean.
///
/// # Errors
///
/// Returns [`DnaProtError::IoError`] if the file cannot be opened or read.
pub fn read_dna_sequence(path: impl AsRef<Path>) -> Result<String, DnaProtError> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);

    let mut sequence = String::new();
    let mut reading = false;

    for line in reader.lines() {
        let line = line?;
        if !reading {
            reading = line.starts_with(' ');
            continue;
        }
        if line.trim() == RECORD_TERMINATOR {
            reading = false;
            continue;
        }
        let mut start = line.find(' ');
        while let Some(from) = start {
            let stop = line[from..]
                .find(RECORD_TERMINATOR)
                .map_or(line.len(), |end| from + end);
            for token in line[from..stop].split_whitespace() {
                sequence.push_str(token);
            }
            start = line[stop..].find(' ').map(|next| stop + next);
        }
    }

    debug!(
        path = %path.display(),
        length = sequence.len(),
        "read flat-file sequence"
    );
    Ok(sequence)
}

/// Read a section file: sections separated (and terminated) by `//` lines.
///
/// Lines are trimmed and concatenated into the current section; each `//`
/// line closes it, so empty sections survive. Text after the final `//` is
/// discarded.
///
/// # Errors
///
/// Returns [`DnaProtError::IoError`] if the file cannot be opened or read.
pub fn read_sections(path: impl AsRef<Path>) -> Result<Vec<String>, DnaProtError> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);

    let mut sections = Vec::new();
    let mut current = String::new();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line == RECORD_TERMINATOR {
            sections.push(std::mem::take(&mut current));
        } else {
            current.push_str(line);
        }
    }

    debug!(path = %path.display(), sections = sections.len(), "read section file");
    Ok(sections)
}

/// Read every record of a FASTA file using rust-bio.
///
/// # Errors
///
/// Returns [`DnaProtError::IoError`] for a missing file and
/// [`DnaProtError::ParseError`] for malformed records.
pub fn read_fasta_sequences(path: impl AsRef<Path>) -> Result<Vec<FastaRecord>, DnaProtError> {
    let path = path.as_ref();
    let reader = fasta::Reader::new(File::open(path)?);
    let mut sequences = Vec::new();

    for result in reader.records() {
        let record = result.map_err(|e| DnaProtError::ParseError(e.to_string()))?;
        let id = record.id().to_string();
        let description = record.desc().map(String::from);
        let seq = record.seq().to_vec();
        sequences.push((id, description, seq));
    }

    debug!(path = %path.display(), records = sequences.len(), "read FASTA file");
    Ok(sequences)
}
