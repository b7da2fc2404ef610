use std::fmt;

use thiserror::Error;

/// One-letter residue symbol emitted for codons missing from the codon table.
pub const UNKNOWN_RESIDUE: char = 'X';

/// Symbol a codon table uses to mark a stop codon.
pub const STOP_SYMBOL: char = '*';

/// Predicted secondary structure class for a protein.
///
/// The declaration order is the tie-break order used when two classes
/// share the highest propensity score.
///
/// # Examples
///
/// ```rust
/// use dnaprot_core::types::SecondaryStructure;
///
/// assert_eq!(SecondaryStructure::AlphaHelix.to_string(), "alpha-helix");
/// assert_eq!(SecondaryStructure::ALL[0], SecondaryStructure::BetaSheet);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SecondaryStructure {
    /// Extended beta strands paired into a sheet
    BetaSheet,
    /// Right-handed alpha helix
    AlphaHelix,
    /// Four-residue reversal of the chain direction
    BetaTurn,
}

impl SecondaryStructure {
    /// All classes in tie-break order.
    pub const ALL: [Self; 3] = [Self::BetaSheet, Self::AlphaHelix, Self::BetaTurn];
}

impl fmt::Display for SecondaryStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BetaSheet => write!(f, "beta-sheet"),
            Self::AlphaHelix => write!(f, "alpha-helix"),
            Self::BetaTurn => write!(f, "beta-turn"),
        }
    }
}

/// A FASTA record as `(id, description, sequence)`.
pub type FastaRecord = (String, Option<String>, Vec<u8>);

/// Error types that can occur while loading, translating or scoring sequences
#[derive(Error, Debug)]
pub enum DnaProtError {
    /// File I/O operation failed
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    /// Error parsing input data (codon tables, FASTA records)
    #[error("Parse error: {0}")]
    ParseError(String),
    /// Residue outside the scoring table
    #[error("Invalid amino acid: {0}")]
    InvalidAminoAcid(char),
    /// Base that has no Watson-Crick complement
    #[error("Invalid nucleotide: {0}")]
    InvalidNucleotide(char),
    /// Configuration rejected before running
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
