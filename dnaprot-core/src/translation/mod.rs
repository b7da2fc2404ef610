//! Start-codon scanning and codon-table translation.
//!
//! Translation always starts at an `AUG`. DNA input is transcribed first,
//! so both `ATG...` and `AUG...` are accepted.
//!
//! ## Examples
//!
//! ```rust
//! use dnaprot_core::translation::{CodonTable, find_start_codons};
//!
//! let table = CodonTable::standard();
//! assert_eq!(find_start_codons("AUGUUUAUG"), Some(vec![0, 6]));
//! assert_eq!(
//!     table.translate("UUUGAUGUCUCUAGUCGAUCGAUUGCUUU").as_deref(),
//!     Some("MSLVDRLL")
//! );
//! assert_eq!(table.translate("CCCGGG"), None);
//! ```

pub mod codon_table;

pub use codon_table::CodonTable;

use crate::constants::{CODON_LENGTH, START_CODON};
use crate::sequence::transcribe_dna_to_rna;
use crate::types::{STOP_SYMBOL, UNKNOWN_RESIDUE};

/// Every position where an `AUG` window starts, overlapping windows included.
///
/// Returns `None` when the sequence holds no start codon; a returned vector
/// is never empty.
#[must_use]
pub fn find_start_codons(rna: &str) -> Option<Vec<usize>> {
    let positions: Vec<usize> = rna
        .as_bytes()
        .windows(CODON_LENGTH)
        .enumerate()
        .filter(|(_, window)| *window == START_CODON.as_bytes())
        .map(|(position, _)| position)
        .collect();

    if positions.is_empty() {
        None
    } else {
        Some(positions)
    }
}

impl CodonTable {
    /// Translate from the first start codon to the first in-frame stop.
    ///
    /// The stop symbol is not emitted, codons missing from the table become
    /// `X`, and one or two trailing bases are ignored. Returns `None` when
    /// there is no start codon.
    #[must_use]
    pub fn translate(&self, sequence: &str) -> Option<String> {
        let rna = transcribe_dna_to_rna(sequence);
        let start = *find_start_codons(&rna)?.first()?;
        Some(self.translate_from(&rna.as_bytes()[start..]))
    }

    /// Translate once per start codon, each from its own position.
    ///
    /// Start codons nested inside an earlier reading frame are reported as
    /// frames of their own. Returns an empty vector when there is no start codon.
    #[must_use]
    pub fn translate_all_frames(&self, sequence: &str) -> Vec<String> {
        let rna = transcribe_dna_to_rna(sequence);
        find_start_codons(&rna)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|start| self.translate(&rna[start..]))
            .collect()
    }

    fn translate_from(&self, rna: &[u8]) -> String {
        let mut protein = String::with_capacity(rna.len() / CODON_LENGTH);
        for codon in rna.chunks_exact(CODON_LENGTH) {
            match self.lookup(codon) {
                Some(STOP_SYMBOL) => break,
                Some(residue) => protein.push(residue),
                None => protein.push(UNKNOWN_RESIDUE),
            }
        }
        protein
    }
}

/// Three-letter code of a one-letter residue; `*` is `Stop`, anything
/// unrecognized is `Unknown`.
#[must_use]
pub const fn three_letter_code(residue: char) -> &'static str {
    match residue {
        'A' => "Ala",
        'C' => "Cys",
        'D' => "Asp",
        'E' => "Glu",
        'F' => "Phe",
        'G' => "Gly",
        'H' => "His",
        'I' => "Ile",
        'K' => "Lys",
        'L' => "Leu",
        'M' => "Met",
        'N' => "Asn",
        'P' => "Pro",
        'Q' => "Gln",
        'R' => "Arg",
        'S' => "Ser",
        'T' => "Thr",
        'V' => "Val",
        'W' => "Trp",
        'Y' => "Tyr",
        '*' => "Stop",
        _ => "Unknown",
    }
}

/// Rewrite a one-letter protein as dash-joined three-letter codes.
///
/// # Examples
///
/// ```rust
/// use dnaprot_core::translation::to_three_letter;
///
/// assert_eq!(to_three_letter("MSL"), "Met-Ser-Leu");
/// assert_eq!(to_three_letter("MX*"), "Met-Unknown-Stop");
/// ```
#[must_use]
pub fn to_three_letter(protein: &str) -> String {
    protein
        .chars()
        .map(three_letter_code)
        .collect::<Vec<_>>()
        .join("-")
}

/// [`to_three_letter`] applied to every protein of a list.
#[must_use]
pub fn to_three_letter_list<S: AsRef<str>>(proteins: &[S]) -> Vec<String> {
    proteins
        .iter()
        .map(|protein| to_three_letter(protein.as_ref()))
        .collect()
}
