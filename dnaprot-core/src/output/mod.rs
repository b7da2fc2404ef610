//! Output formatting for segmentation and translation results.
//!
//! ## Supported Formats
//!
//! - **Sections**: one section per line, separated and terminated by `//`
//!   lines. Readable again with [`crate::sequence::read_sections`].
//! - **Frames**: one numbered line per translated protein, tagged with the
//!   strand orientation and the residue notation.
//!
//! ## Examples
//!
//! ```rust
//! use dnaprot_core::{DnaProtAnalyzer, config::{DnaProtConfig, ResidueNotation}};
//! use dnaprot_core::output::write_translation;
//!
//! let analyzer = DnaProtAnalyzer::new(DnaProtConfig::default())?;
//! let results = analyzer.translate("ATGTTTTAA")?;
//!
//! let mut buffer = Vec::new();
//! write_translation(&mut buffer, &results, ResidueNotation::OneLetter)?;
//! assert_eq!(String::from_utf8(buffer)?, "Frame 1 ,C5'-C3', 1 letters : MF\n");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::{
    DnaProtError,
    config::ResidueNotation,
    results::{SegmentationResults, TranslationResults},
};
use bio::bio_types::strand::Strand;
use std::io::Write;

mod formats {
    pub mod frames;
    pub mod sections;
}

use formats::{frames::write_frames_format, sections::write_sections_format};

/// Writes sections as a `//`-delimited section file.
///
/// An empty list produces a single `//` line.
///
/// # Errors
///
/// Returns [`DnaProtError::IoError`] if writing fails.
pub fn write_sections<W: Write, S: AsRef<str>>(
    writer: &mut W,
    sections: &[S],
) -> Result<(), DnaProtError> {
    write_sections_format(writer, sections)
}

/// Writes a frame report for the proteins of one strand.
///
/// # Errors
///
/// Returns [`DnaProtError::IoError`] if writing fails.
pub fn write_frames<W: Write, S: AsRef<str>>(
    writer: &mut W,
    proteins: &[S],
    strand: Strand,
    notation: ResidueNotation,
) -> Result<(), DnaProtError> {
    write_frames_format(writer, proteins, strand, notation)
}

/// Writes the sections of a segmentation run.
///
/// # Errors
///
/// Returns [`DnaProtError::IoError`] if writing fails.
pub fn write_segmentation<W: Write>(
    writer: &mut W,
    results: &SegmentationResults,
) -> Result<(), DnaProtError> {
    write_sections_format(writer, &results.sections)
}

/// Writes the frame report of every translated strand, forward first.
///
/// # Errors
///
/// Returns [`DnaProtError::IoError`] if writing fails.
pub fn write_translation<W: Write>(
    writer: &mut W,
    results: &TranslationResults,
    notation: ResidueNotation,
) -> Result<(), DnaProtError> {
    for translation in &results.strands {
        write_frames_format(writer, &translation.proteins, translation.strand, notation)?;
    }
    Ok(())
}
