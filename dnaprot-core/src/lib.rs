//! # DNAPROT - nucleotide to protein utilities
//!
//! A small library for turning raw nucleotide records into proteins and
//! scoring the proteins it produces.
//!
//! ## Overview
//!
//! Sequences are read from flat-file annotation records or FASTA, cleaned to
//! the four DNA bases, and then either cut into sections on a Shine-Dalgarno
//! motif or transcribed and translated from every start codon. Proteins can
//! be scored on hydropathy, mass, secondary-structure propensity, HPLC
//! retention and polarity.
//!
//! ## Features
//!
//! - **Segmentation**: cut a sequence into the sections between ribosome binding motifs
//! - **Translation**: one protein per `AUG`, on one or both strands
//! - **Custom codon tables**: load `CODON SYMBOL` files in place of the standard code
//! - **Residue scoring**: five tabulated per-residue scales
//! - **Reports**: section files and frame reports in one- or three-letter notation
//!
//! ## Quick Start
//!
//! ```rust
//! use dnaprot_core::{DnaProtAnalyzer, config::DnaProtConfig};
//!
//! let analyzer = DnaProtAnalyzer::new(DnaProtConfig::default())?;
//!
//! let segments = analyzer.segment_sequence("CCAGGAGGTTTAGGAGGA");
//! assert_eq!(segments.sections, vec!["TTT", "A"]);
//!
//! let translation = analyzer.translate("GGATGTCTCTAGTCGATCGATTGCTTT")?;
//! assert_eq!(translation.strands[0].first_protein(), Some("MSLVDRLL"));
//!
//! let profile = analyzer.profile_protein("MSLVDRLL")?;
//! println!("Hydrophobicity: {:.2}", profile.hydrophobicity);
//! # Ok::<(), dnaprot_core::types::DnaProtError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`config`]: Configuration options for the analyzer
//! - [`engine`]: The [`DnaProtAnalyzer`] pipelines
//! - [`types`]: Error type and shared enums
//! - [`results`]: Segmentation, translation and scoring results
//! - [`sequence`]: Sequence loading, cleaning and segmentation
//! - [`translation`]: Start codons, codon tables and residue notation
//! - [`scoring`]: Per-residue protein scores
//! - [`output`]: Section files and frame reports
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T, DnaProtError>`](types::DnaProtError),
//! covering:
//!
//! - I/O errors while reading records or codon tables
//! - Malformed codon tables or FASTA records
//! - Residues or nucleotides outside the supported alphabets
//! - Invalid configuration

pub mod config;
pub mod constants;
pub mod engine;
pub mod output;
pub mod results;
pub mod scoring;
pub mod sequence;
pub mod translation;
pub mod types;

pub use engine::DnaProtAnalyzer;
pub use types::DnaProtError;
