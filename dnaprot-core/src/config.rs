use std::path::PathBuf;

use crate::constants::DEFAULT_SHINE_DALGARNO;
use crate::types::DnaProtError;

/// Input file layout accepted by the analyzer.
///
/// # Formats
///
/// - **FlatFile**: annotation records whose sequence lines start with a space
///   and end with a `//` line
/// - **Fasta**: standard FASTA; all records are concatenated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFormat {
    /// Flat-file annotation record (sequence lines indented, `//` terminated).
    #[default]
    FlatFile,

    /// FASTA file read through `bio::io::fasta`.
    Fasta,
}

/// Notation used when reporting translated proteins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResidueNotation {
    /// One-letter codes (`MSL`)
    #[default]
    OneLetter,
    /// Dash-joined three-letter codes (`Met-Ser-Leu`)
    ThreeLetter,
}

/// Configuration settings for a [`DnaProtAnalyzer`](crate::engine::DnaProtAnalyzer).
///
/// # Examples
///
/// ## Default configuration
///
/// ```rust
/// use dnaprot_core::config::DnaProtConfig;
///
/// let config = DnaProtConfig::default();
/// assert_eq!(config.shine_dalgarno, "AGGAGG");
/// assert!(config.codon_table.is_none());
/// ```
///
/// ## Custom codon table and both strands
///
/// ```rust
/// use dnaprot_core::config::{DnaProtConfig, ResidueNotation};
///
/// let config = DnaProtConfig {
///     codon_table: Some("genetic_code.txt".into()),
///     both_strands: true,
///     notation: ResidueNotation::ThreeLetter,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct DnaProtConfig {
    /// Motif used to cut sequences into sections.
    ///
    /// **Default**: `"AGGAGG"`
    pub shine_dalgarno: String,

    /// Codon table file (format: `CODON SYMBOL` per line).
    ///
    /// `None` selects the built-in standard genetic code.
    ///
    /// **Default**: `None`
    pub codon_table: Option<PathBuf>,

    /// Layout of input sequence files.
    ///
    /// **Default**: [`InputFormat::FlatFile`]
    pub input_format: InputFormat,

    /// Notation for frame reports.
    ///
    /// **Default**: [`ResidueNotation::OneLetter`]
    pub notation: ResidueNotation,

    /// Also translate the reverse complement.
    ///
    /// **Default**: `false`
    pub both_strands: bool,

    /// Skip the analyzer's informational summaries; warnings are still logged.
    ///
    /// **Default**: `false`
    pub quiet: bool,
}

impl Default for DnaProtConfig {
    fn default() -> Self {
        Self {
            shine_dalgarno: DEFAULT_SHINE_DALGARNO.to_string(),
            codon_table: None,
            input_format: InputFormat::default(),
            notation: ResidueNotation::default(),
            both_strands: false,
            quiet: false,
        }
    }
}

impl DnaProtConfig {
    /// Checks settings that would make the pipelines meaningless.
    ///
    /// # Errors
    ///
    /// Returns [`DnaProtError::InvalidConfig`] for an empty Shine-Dalgarno motif.
    pub fn validate(&self) -> Result<(), DnaProtError> {
        if self.shine_dalgarno.is_empty() {
            return Err(DnaProtError::InvalidConfig(
                "Shine-Dalgarno motif must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
