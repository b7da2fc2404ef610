use bio::bio_types::strand::Strand;

use crate::scoring::{
    ConfigurationLikelihoods, calculate_configuration_likelihoods, calculate_hydrophobicity,
    calculate_molecular_weight, calculate_polarity_score, calculate_retention_coefficient,
};
use crate::types::DnaProtError;

/// Information about a loaded sequence.
///
/// # Examples
///
/// ```rust
/// # use dnaprot_core::results::SequenceInfo;
/// let info = SequenceInfo {
///     header: Some("record.txt".to_string()),
///     raw_length: 1_250,
///     filtered_length: 1_000,
/// };
///
/// println!("{} bases kept of {}", info.filtered_length, info.raw_length);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequenceInfo {
    /// Where the sequence came from (file path), if known.
    pub header: Option<String>,

    /// Characters read before filtering.
    pub raw_length: usize,

    /// Bases left after keeping only `A`, `T`, `C` and `G`.
    pub filtered_length: usize,
}

/// Sections produced by cutting a sequence on a Shine-Dalgarno motif.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentationResults {
    /// Sections in sequence order; empty when the motif never occurs.
    pub sections: Vec<String>,

    /// Motif the sequence was cut on.
    pub motif: String,

    /// Position of the first motif in the filtered sequence.
    pub first_motif_position: Option<usize>,

    /// Information about the analyzed sequence.
    pub sequence_info: SequenceInfo,
}

/// Translation of one strand of a sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct StrandTranslation {
    /// `Forward` reads 5'→3'; `Reverse` reads the reverse complement.
    pub strand: Strand,

    /// The strand as RNA.
    pub rna: String,

    /// Start codon positions within `rna`, `None` if there are none.
    pub start_codons: Option<Vec<usize>>,

    /// One protein per start codon, in start order.
    pub proteins: Vec<String>,
}

impl StrandTranslation {
    /// Protein read from the first start codon.
    #[must_use]
    pub fn first_protein(&self) -> Option<&str> {
        self.proteins.first().map(String::as_str)
    }
}

/// Translations of a sequence, forward strand first.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationResults {
    /// One entry per translated strand.
    pub strands: Vec<StrandTranslation>,

    /// Information about the analyzed sequence.
    pub sequence_info: SequenceInfo,
}

impl TranslationResults {
    /// Translation of the given strand, if it was computed.
    #[must_use]
    pub fn strand(&self, strand: Strand) -> Option<&StrandTranslation> {
        self.strands.iter().find(|translation| translation.strand == strand)
    }

    /// Total number of proteins over all strands.
    #[must_use]
    pub fn protein_count(&self) -> usize {
        self.strands.iter().map(|translation| translation.proteins.len()).sum()
    }
}

/// Every residue score of a single protein.
#[derive(Debug, Clone, PartialEq)]
pub struct ProteinProfile {
    /// The scored protein.
    pub protein: String,
    /// Total Kyte-Doolittle hydropathy.
    pub hydrophobicity: f64,
    /// Sum of free residue masses in daltons.
    pub molecular_weight: f64,
    /// Secondary-structure propensities.
    pub configuration: ConfigurationLikelihoods,
    /// Total HPLC retention coefficient.
    pub retention_coefficient: f64,
    /// Total side-chain polarity.
    pub polarity: f64,
}

impl ProteinProfile {
    /// Score a protein on every scale.
    ///
    /// # Errors
    ///
    /// Returns [`DnaProtError::InvalidAminoAcid`] on the first unknown residue.
    pub fn from_protein(protein: &str) -> Result<Self, DnaProtError> {
        Ok(Self {
            protein: protein.to_string(),
            hydrophobicity: calculate_hydrophobicity(protein)?,
            molecular_weight: calculate_molecular_weight(protein)?,
            configuration: calculate_configuration_likelihoods(protein)?,
            retention_coefficient: calculate_retention_coefficient(protein)?,
            polarity: calculate_polarity_score(protein)?,
        })
    }
}
