use std::path::Path;

use bio::bio_types::strand::Strand;
use tracing::{debug, info, warn};

use crate::config::{DnaProtConfig, InputFormat};
use crate::results::{
    ProteinProfile, SegmentationResults, SequenceInfo, StrandTranslation, TranslationResults,
};
use crate::sequence::{
    complementary_sequence, cut_sequence, filter_dna_sequence, find_shine_dalgarno,
    flip_sequence, read_dna_sequence, read_fasta_sequences, transcribe_dna_to_rna,
    translate_to_uppercase,
};
use crate::translation::{CodonTable, find_start_codons};
use crate::types::DnaProtError;

/// Configuration-driven entry point to the sequence pipelines.
///
/// The analyzer resolves its codon table once, at construction, and then
/// runs any number of segmentation, translation and scoring requests
/// against it. It holds no other state.
///
/// # Examples
///
/// ## Translate a sequence string
///
/// ```rust
/// use dnaprot_core::{DnaProtAnalyzer, config::DnaProtConfig};
///
/// let analyzer = DnaProtAnalyzer::new(DnaProtConfig::default())?;
/// let results = analyzer.translate("CCATGAAATGCCCTAG")?;
///
/// assert_eq!(results.strands[0].proteins, vec!["MKCP", "MP"]);
/// # Ok::<(), dnaprot_core::types::DnaProtError>(())
/// ```
///
/// ## Segment a flat file on a custom motif
///
/// ```rust,no_run
/// use dnaprot_core::{DnaProtAnalyzer, config::DnaProtConfig};
///
/// let config = DnaProtConfig {
///     shine_dalgarno: "GGAGG".to_string(),
///     ..Default::default()
/// };
///
/// let analyzer = DnaProtAnalyzer::new(config)?;
/// let results = analyzer.segment_file("record.txt")?;
/// println!("{} sections", results.sections.len());
/// # Ok::<(), dnaprot_core::types::DnaProtError>(())
/// ```
#[derive(Debug, Clone)]
pub struct DnaProtAnalyzer {
    /// Configuration options for the pipelines
    pub config: DnaProtConfig,
    codon_table: CodonTable,
}

impl DnaProtAnalyzer {
    /// Creates an analyzer, loading the configured codon table.
    ///
    /// # Errors
    ///
    /// Returns [`DnaProtError::InvalidConfig`] for invalid settings, and
    /// [`DnaProtError::IoError`] or [`DnaProtError::ParseError`] when the
    /// codon table file cannot be loaded.
    pub fn new(config: DnaProtConfig) -> Result<Self, DnaProtError> {
        config.validate()?;

        let codon_table = match &config.codon_table {
            Some(path) => CodonTable::from_file(path)?,
            None => CodonTable::standard(),
        };

        Ok(Self {
            config,
            codon_table,
        })
    }

    /// The codon table used for translation.
    pub const fn codon_table(&self) -> &CodonTable {
        &self.codon_table
    }

    /// Reads the raw sequence of a file in the configured input format.
    ///
    /// FASTA records are concatenated in file order.
    ///
    /// # Errors
    ///
    /// Returns [`DnaProtError::IoError`] when the file cannot be read and
    /// [`DnaProtError::ParseError`] for malformed FASTA.
    pub fn load_sequence(&self, path: impl AsRef<Path>) -> Result<String, DnaProtError> {
        let path = path.as_ref();
        match self.config.input_format {
            InputFormat::FlatFile => read_dna_sequence(path),
            InputFormat::Fasta => {
                let records = read_fasta_sequences(path)?;
                debug!(records = records.len(), "concatenating FASTA records");
                Ok(records
                    .iter()
                    .map(|(_, _, sequence)| String::from_utf8_lossy(sequence))
                    .collect())
            }
        }
    }

    /// Cuts a sequence into the sections between occurrences of the
    /// configured motif.
    ///
    /// The sequence is filtered to `A`, `T`, `C` and `G` first. Text before
    /// the first motif is dropped and no sections are produced when the
    /// motif is absent.
    pub fn segment_sequence(&self, sequence: &str) -> SegmentationResults {
        self.segment(sequence, None)
    }

    /// Loads a file and cuts its sequence into sections.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Self::load_sequence`].
    pub fn segment_file(&self, path: impl AsRef<Path>) -> Result<SegmentationResults, DnaProtError> {
        let path = path.as_ref();
        let sequence = self.load_sequence(path)?;
        Ok(self.segment(&sequence, Some(path.display().to_string())))
    }

    fn segment(&self, sequence: &str, header: Option<String>) -> SegmentationResults {
        let filtered = filter_dna_sequence(sequence);
        let motif = translate_to_uppercase(&self.config.shine_dalgarno);

        let first_motif_position = find_shine_dalgarno(&filtered, &motif);
        let sections = cut_sequence(&filtered, &motif);

        match first_motif_position {
            Some(position) if !self.config.quiet => info!(
                motif = %motif,
                position,
                sections = sections.len(),
                "segmented sequence"
            ),
            Some(_) => {}
            None => warn!(motif = %motif, "Shine-Dalgarno motif not found"),
        }

        SegmentationResults {
            sections,
            motif,
            first_motif_position,
            sequence_info: SequenceInfo {
                header,
                raw_length: sequence.chars().count(),
                filtered_length: filtered.len(),
            },
        }
    }

    /// Translates a sequence once per start codon.
    ///
    /// The sequence is filtered to `A`, `T`, `C` and `G` and transcribed.
    /// The forward strand is always translated; the reverse complement is
    /// added when [`DnaProtConfig::both_strands`] is set.
    ///
    /// # Errors
    ///
    /// Returns [`DnaProtError::InvalidNucleotide`] if the reverse complement
    /// cannot be built.
    pub fn translate(&self, sequence: &str) -> Result<TranslationResults, DnaProtError> {
        self.translate_with_header(sequence, None)
    }

    /// Loads a file and translates its sequence.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Self::load_sequence`] and [`Self::translate`].
    pub fn translate_file(
        &self,
        path: impl AsRef<Path>,
    ) -> Result<TranslationResults, DnaProtError> {
        let path = path.as_ref();
        let sequence = self.load_sequence(path)?;
        self.translate_with_header(&sequence, Some(path.display().to_string()))
    }

    fn translate_with_header(
        &self,
        sequence: &str,
        header: Option<String>,
    ) -> Result<TranslationResults, DnaProtError> {
        let filtered = filter_dna_sequence(sequence);

        let mut strands = vec![self.translate_strand(&filtered, Strand::Forward)];
        if self.config.both_strands {
            let reverse = flip_sequence(&complementary_sequence(&filtered)?);
            strands.push(self.translate_strand(&reverse, Strand::Reverse));
        }

        let results = TranslationResults {
            strands,
            sequence_info: SequenceInfo {
                header,
                raw_length: sequence.chars().count(),
                filtered_length: filtered.len(),
            },
        };
        if !self.config.quiet {
            info!(
                strands = results.strands.len(),
                proteins = results.protein_count(),
                "translated sequence"
            );
        }
        Ok(results)
    }

    fn translate_strand(&self, dna: &str, strand: Strand) -> StrandTranslation {
        let rna = transcribe_dna_to_rna(dna);
        let start_codons = find_start_codons(&rna);
        let proteins = self.codon_table.translate_all_frames(&rna);

        if start_codons.is_none() {
            warn!(?strand, "no start codon found");
        } else {
            debug!(?strand, frames = proteins.len(), "translated strand");
        }

        StrandTranslation {
            strand,
            rna,
            start_codons,
            proteins,
        }
    }

    /// Scores a protein on every residue scale.
    ///
    /// # Errors
    ///
    /// Returns [`DnaProtError::InvalidAminoAcid`] on the first unknown residue.
    pub fn profile_protein(&self, protein: &str) -> Result<ProteinProfile, DnaProtError> {
        ProteinProfile::from_protein(protein)
    }
}
