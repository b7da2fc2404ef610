use std::io::Write;

use bio::bio_types::strand::Strand;

use crate::{config::ResidueNotation, translation::to_three_letter, types::DnaProtError};

const fn orientation(strand: Strand) -> &'static str {
    match strand {
        Strand::Reverse => "C3'-C5'",
        Strand::Forward | Strand::Unknown => "C5'-C3'",
    }
}

const fn notation_label(notation: ResidueNotation) -> &'static str {
    match notation {
        ResidueNotation::OneLetter => "1 letters",
        ResidueNotation::ThreeLetter => "3 letters",
    }
}

/// Write one numbered line per protein of a strand
pub fn write_frames_format<W: Write, S: AsRef<str>>(
    writer: &mut W,
    proteins: &[S],
    strand: Strand,
    notation: ResidueNotation,
) -> Result<(), DnaProtError> {
    for (i, protein) in proteins.iter().enumerate() {
        let protein = protein.as_ref();
        let rendered = match notation {
            ResidueNotation::OneLetter => protein.to_string(),
            ResidueNotation::ThreeLetter => to_three_letter(protein),
        };
        writeln!(
            writer,
            "Frame {} ,{}, {} : {}",
            i + 1,
            orientation(strand),
            notation_label(notation),
            rendered
        )?;
    }
    Ok(())
}
