//! Nucleotide sequence normalization and manipulation.
//!
//! Sequences are handled as plain strings. Loaders in [`io`] turn files into
//! raw nucleotide strings, the functions here clean and convert them, and
//! [`processing`] cuts them on Shine-Dalgarno motifs.
//!
//! ## Modules
//!
//! - [`io`]: flat-file, section-file and FASTA reading
//! - [`processing`]: Shine-Dalgarno motif search and segmentation
//!
//! ## Examples
//!
//! ```rust
//! use dnaprot_core::sequence::{filter_dna_sequence, transcribe_dna_to_rna};
//!
//! let dna = filter_dna_sequence("atg-cNa");
//! assert_eq!(dna, "ATGCA");
//! assert_eq!(transcribe_dna_to_rna(&dna), "AUGCA");
//! ```

use crate::constants::DNA_BASES;
use crate::types::DnaProtError;

pub mod io;
pub mod processing;

pub use io::*;
pub use processing::*;

/// Watson-Crick complement of an uppercase DNA base.
///
/// Returns `None` for anything other than `A`, `T`, `C` or `G`.
///
/// # Examples
///
/// ```rust
/// use dnaprot_core::sequence::complement_base;
///
/// assert_eq!(complement_base('A'), Some('T'));
/// assert_eq!(complement_base('G'), Some('C'));
/// assert_eq!(complement_base('N'), None);
/// ```
#[must_use]
pub const fn complement_base(base: char) -> Option<char> {
    match base {
        'A' => Some('T'),
        'T' => Some('A'),
        'C' => Some('G'),
        'G' => Some('C'),
        _ => None,
    }
}

/// Uppercase every character; non-alphabetic characters pass through.
#[must_use]
pub fn translate_to_uppercase(sequence: &str) -> String {
    sequence.to_uppercase()
}

/// Uppercase, then keep only `A`, `T`, `C` and `G`.
///
/// Ambiguity codes, gaps, digits and whitespace are dropped silently.
#[must_use]
pub fn filter_dna_sequence(sequence: &str) -> String {
    translate_to_uppercase(sequence)
        .chars()
        .filter(|c| c.is_ascii() && DNA_BASES.contains(&(*c as u8)))
        .collect()
}

/// Transcribe DNA to RNA (T → U). Length and order are preserved.
#[must_use]
pub fn transcribe_dna_to_rna(sequence: &str) -> String {
    sequence.replace('T', "U")
}

/// Complement every base of an uppercase DNA sequence (no reversal).
///
/// # Errors
///
/// Returns [`DnaProtError::InvalidNucleotide`] on the first character that
/// is not `A`, `T`, `C` or `G`.
pub fn complementary_sequence(dna: &str) -> Result<String, DnaProtError> {
    dna.chars()
        .map(|base| complement_base(base).ok_or(DnaProtError::InvalidNucleotide(base)))
        .collect()
}

/// Reverse a sequence.
#[must_use]
pub fn flip_sequence(sequence: &str) -> String {
    sequence.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_to_uppercase() {
        let cases = [
            ("atgc", "ATGC"),
            ("ATGC-", "ATGC-"),
            ("aTgC3", "ATGC3"),
            ("", ""),
        ];
        for (input, expected) in cases {
            assert_eq!(translate_to_uppercase(input), expected, "input {input:?}");
        }
    }

    #[test]
    fn test_translate_to_uppercase_idempotent() {
        for input in ["atgc", "aTgC3-", "", "nnNN//"] {
            let once = translate_to_uppercase(input);
            assert_eq!(translate_to_uppercase(&once), once);
        }
    }

    #[test]
    fn test_filter_dna_sequence() {
        let cases = [
            ("ATGC", "ATGC"),
            ("ATGCK", "ATGC"),
            ("atgc", "ATGC"),
            ("atgcn", "ATGC"),
            ("", ""),
        ];
        for (input, expected) in cases {
            assert_eq!(filter_dna_sequence(input), expected, "input {input:?}");
        }
    }

    #[test]
    fn test_filter_drops_whitespace_and_digits() {
        assert_eq!(filter_dna_sequence("  1 acgt tgca\n 61"), "ACGTTGCA");
    }

    #[test]
    fn test_filter_drops_rna_and_non_ascii() {
        assert_eq!(filter_dna_sequence("AUGé"), "AG");
    }

    #[test]
    fn test_transcribe_dna_to_rna() {
        assert_eq!(transcribe_dna_to_rna("ATCG"), "AUCG");
        assert_eq!(transcribe_dna_to_rna("ATTGC"), "AUUGC");
        assert_eq!(transcribe_dna_to_rna("GCTA"), "GCUA");
        assert_eq!(transcribe_dna_to_rna(""), "");
    }

    #[test]
    fn test_transcribe_is_idempotent_on_rna() {
        assert_eq!(transcribe_dna_to_rna("AUCG"), "AUCG");
    }

    #[test]
    fn test_complementary_sequence() {
        assert_eq!(complementary_sequence("ATCG").unwrap(), "TAGC");
        assert_eq!(complementary_sequence("GCTA").unwrap(), "CGAT");
        assert_eq!(complementary_sequence("TTAAGC").unwrap(), "AATTCG");
        assert_eq!(complementary_sequence("").unwrap(), "");
    }

    #[test]
    fn test_complementary_sequence_invalid_base() {
        match complementary_sequence("ACNT") {
            Err(DnaProtError::InvalidNucleotide(c)) => assert_eq!(c, 'N'),
            other => panic!("Expected InvalidNucleotide, got {other:?}"),
        }
    }

    #[test]
    fn test_flip_sequence() {
        assert_eq!(flip_sequence("AUGUUUUAG"), "GAUUUUGUA");
        assert_eq!(flip_sequence("UUUGUUUGA"), "AGUUUGUUU");
        assert_eq!(flip_sequence("AUAGUUUA"), "AUUUGAUA");
        assert_eq!(flip_sequence(""), "");
    }
}
