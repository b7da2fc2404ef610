use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::constants::CODON_LENGTH;
use crate::types::DnaProtError;

/// Standard genetic code (NCBI table 1) over RNA codons.
#[rustfmt::skip]
const STANDARD_CODE: [(&str, char); 64] = [
    ("UUU", 'F'), ("UUC", 'F'), ("UUA", 'L'), ("UUG", 'L'),
    ("UCU", 'S'), ("UCC", 'S'), ("UCA", 'S'), ("UCG", 'S'),
    ("UAU", 'Y'), ("UAC", 'Y'), ("UAA", '*'), ("UAG", '*'),
    ("UGU", 'C'), ("UGC", 'C'), ("UGA", '*'), ("UGG", 'W'),
    ("CUU", 'L'), ("CUC", 'L'), ("CUA", 'L'), ("CUG", 'L'),
    ("CCU", 'P'), ("CCC", 'P'), ("CCA", 'P'), ("CCG", 'P'),
    ("CAU", 'H'), ("CAC", 'H'), ("CAA", 'Q'), ("CAG", 'Q'),
    ("CGU", 'R'), ("CGC", 'R'), ("CGA", 'R'), ("CGG", 'R'),
    ("AUU", 'I'), ("AUC", 'I'), ("AUA", 'I'), ("AUG", 'M'),
    ("ACU", 'T'), ("ACC", 'T'), ("ACA", 'T'), ("ACG", 'T'),
    ("AAU", 'N'), ("AAC", 'N'), ("AAA", 'K'), ("AAG", 'K'),
    ("AGU", 'S'), ("AGC", 'S'), ("AGA", 'R'), ("AGG", 'R'),
    ("GUU", 'V'), ("GUC", 'V'), ("GUA", 'V'), ("GUG", 'V'),
    ("GCU", 'A'), ("GCC", 'A'), ("GCA", 'A'), ("GCG", 'A'),
    ("GAU", 'D'), ("GAC", 'D'), ("GAA", 'E'), ("GAG", 'E'),
    ("GGU", 'G'), ("GGC", 'G'), ("GGA", 'G'), ("GGG", 'G'),
];

/// Immutable mapping from RNA codon to one-letter residue (or `*` for stop).
///
/// # Examples
///
/// ```rust
/// use dnaprot_core::translation::CodonTable;
///
/// let table = CodonTable::parse("AUG M\nUUU F\nUAA *\n".as_bytes())?;
/// assert_eq!(table.len(), 3);
/// assert_eq!(table.get("AUG"), Some('M'));
/// assert_eq!(table.get("GGG"), None);
/// # Ok::<(), dnaprot_core::types::DnaProtError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodonTable {
    entries: HashMap<[u8; CODON_LENGTH], char>,
}

impl Default for CodonTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl CodonTable {
    /// The standard genetic code.
    #[must_use]
    pub fn standard() -> Self {
        let entries = STANDARD_CODE
            .iter()
            .filter_map(|(codon, residue)| Some((codon_key(codon.as_bytes())?, *residue)))
            .collect();
        Self { entries }
    }

    /// Load a codon table file.
    ///
    /// # Errors
    ///
    /// Returns [`DnaProtError::IoError`] if the file cannot be read and
    /// [`DnaProtError::ParseError`] for malformed lines.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DnaProtError> {
        let path = path.as_ref();
        let table = Self::parse(BufReader::new(File::open(path)?))?;
        debug!(path = %path.display(), codons = table.len(), "loaded codon table");
        Ok(table)
    }

    /// Parse `CODON SYMBOL` lines. Blank lines are skipped; codons are
    /// uppercased and `T` is read as `U`. Later lines override earlier ones.
    ///
    /// # Errors
    ///
    /// Returns [`DnaProtError::ParseError`] naming the 1-based line number when
    /// a line does not hold exactly a three-base codon and a single symbol.
    pub fn parse<R: BufRead>(reader: R) -> Result<Self, DnaProtError> {
        let mut entries = HashMap::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line_number = index + 1;
            let tokens: Vec<&str> = line.split_whitespace().collect();
            let (codon, symbol) = match tokens.as_slice() {
                [] => continue,
                [codon, symbol] => (*codon, *symbol),
                _ => {
                    return Err(DnaProtError::ParseError(format!(
                        "codon table line {line_number}: expected `CODON SYMBOL`, found {:?}",
                        line.trim()
                    )));
                }
            };

            let normalized = codon.to_ascii_uppercase().replace('T', "U");
            let key = codon_key(normalized.as_bytes()).ok_or_else(|| {
                DnaProtError::ParseError(format!(
                    "codon table line {line_number}: codon {codon:?} is not three bases"
                ))
            })?;

            let mut chars = symbol.chars();
            let residue = match (chars.next(), chars.next()) {
                (Some(residue), None) => residue,
                _ => {
                    return Err(DnaProtError::ParseError(format!(
                        "codon table line {line_number}: symbol {symbol:?} is not one character"
                    )));
                }
            };

            entries.insert(key, residue);
        }

        Ok(Self { entries })
    }

    /// Look up a codon given as text.
    #[must_use]
    pub fn get(&self, codon: &str) -> Option<char> {
        self.lookup(codon.as_bytes())
    }

    /// Look up a codon given as bytes.
    #[must_use]
    pub fn lookup(&self, codon: &[u8]) -> Option<char> {
        self.entries.get(&codon_key(codon)?).copied()
    }

    /// Number of codons in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table holds no codons.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn codon_key(codon: &[u8]) -> Option<[u8; CODON_LENGTH]> {
    codon.try_into().ok()
}
