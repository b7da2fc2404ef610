use std::io::Write;

use crate::{constants::RECORD_TERMINATOR, types::DnaProtError};

/// Write sections one per line, separated and terminated by `//` lines.
pub fn write_sections_format<W: Write, S: AsRef<str>>(
    writer: &mut W,
    sections: &[S],
) -> Result<(), DnaProtError> {
    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            writeln!(writer, "{RECORD_TERMINATOR}")?;
        }
        writeln!(writer, "{}", section.as_ref())?;
    }
    writeln!(writer, "{RECORD_TERMINATOR}")?;
    Ok(())
}
