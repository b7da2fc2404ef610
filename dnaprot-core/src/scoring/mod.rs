//! Per-residue protein scores.
//!
//! Each scorer sums a tabulated constant over every residue of a protein.
//! Only the 20 standard one-letter codes, in uppercase, are accepted; the
//! first residue outside a table aborts the sum with
//! [`DnaProtError::InvalidAminoAcid`].
//!
//! ## Examples
//!
//! ```rust
//! use dnaprot_core::scoring::{calculate_molecular_weight, calculate_configuration_likelihoods};
//! use dnaprot_core::types::SecondaryStructure;
//!
//! assert_eq!(calculate_molecular_weight("ACDE")?, 490.0);
//!
//! let likelihoods = calculate_configuration_likelihoods("GGG")?;
//! assert_eq!(likelihoods.most_likely, SecondaryStructure::BetaTurn);
//! # Ok::<(), dnaprot_core::types::DnaProtError>(())
//! ```

pub mod scales;

use crate::constants::{STANDARD_RESIDUE_COUNT, STANDARD_RESIDUES};
use crate::types::{DnaProtError, SecondaryStructure};

/// A named table of one constant per standard residue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResidueScale {
    name: &'static str,
    values: [f64; STANDARD_RESIDUE_COUNT],
}

impl ResidueScale {
    /// Build a scale from values in `STANDARD_RESIDUES` order.
    #[must_use]
    pub const fn new(name: &'static str, values: [f64; STANDARD_RESIDUE_COUNT]) -> Self {
        Self { name, values }
    }

    /// Human-readable name of the scale.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Constant for one residue, `None` if the residue is not in the table.
    #[must_use]
    pub fn value(&self, residue: char) -> Option<f64> {
        residue_index(residue).map(|index| self.values[index])
    }

    /// Sum of the constants over every residue, left to right.
    ///
    /// # Errors
    ///
    /// Returns [`DnaProtError::InvalidAminoAcid`] for the first residue
    /// missing from the table.
    pub fn total(&self, protein: &str) -> Result<f64, DnaProtError> {
        protein.chars().try_fold(0.0, |total, residue| {
            self.value(residue)
                .map(|value| total + value)
                .ok_or(DnaProtError::InvalidAminoAcid(residue))
        })
    }
}

fn residue_index(residue: char) -> Option<usize> {
    if !residue.is_ascii() {
        return None;
    }
    STANDARD_RESIDUES
        .iter()
        .position(|&standard| standard == residue as u8)
}

/// Summed secondary-structure propensities of a protein.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfigurationLikelihoods {
    /// Summed beta-sheet propensity
    pub beta_sheet: f64,
    /// Summed alpha-helix propensity
    pub alpha_helix: f64,
    /// Summed beta-turn propensity
    pub beta_turn: f64,
    /// Structure with the highest sum (first one wins a tie)
    pub most_likely: SecondaryStructure,
    /// Sum belonging to `most_likely`
    pub highest_score: f64,
}

impl ConfigurationLikelihoods {
    /// Sum for one structure class.
    #[must_use]
    pub const fn score(&self, structure: SecondaryStructure) -> f64 {
        match structure {
            SecondaryStructure::BetaSheet => self.beta_sheet,
            SecondaryStructure::AlphaHelix => self.alpha_helix,
            SecondaryStructure::BetaTurn => self.beta_turn,
        }
    }
}

/// Total Kyte-Doolittle hydropathy.
///
/// # Errors
///
/// Returns [`DnaProtError::InvalidAminoAcid`] on the first unknown residue.
pub fn calculate_hydrophobicity(protein: &str) -> Result<f64, DnaProtError> {
    scales::HYDROPHOBICITY.total(protein)
}

/// Sum of free residue masses in daltons.
///
/// # Errors
///
/// Returns [`DnaProtError::InvalidAminoAcid`] on the first unknown residue.
pub fn calculate_molecular_weight(protein: &str) -> Result<f64, DnaProtError> {
    scales::MOLECULAR_WEIGHT.total(protein)
}

/// Beta-sheet, alpha-helix and beta-turn sums, and the highest of the three.
///
/// # Errors
///
/// Returns [`DnaProtError::InvalidAminoAcid`] on the first unknown residue.
pub fn calculate_configuration_likelihoods(
    protein: &str,
) -> Result<ConfigurationLikelihoods, DnaProtError> {
    let beta_sheet = scales::BETA_SHEET.total(protein)?;
    let alpha_helix = scales::ALPHA_HELIX.total(protein)?;
    let beta_turn = scales::BETA_TURN.total(protein)?;

    let mut likelihoods = ConfigurationLikelihoods {
        beta_sheet,
        alpha_helix,
        beta_turn,
        most_likely: SecondaryStructure::BetaSheet,
        highest_score: beta_sheet,
    };
    for structure in SecondaryStructure::ALL {
        let score = likelihoods.score(structure);
        if score > likelihoods.highest_score {
            likelihoods.most_likely = structure;
            likelihoods.highest_score = score;
        }
    }

    Ok(likelihoods)
}

/// Total HPLC retention coefficient.
///
/// # Errors
///
/// Returns [`DnaProtError::InvalidAminoAcid`] on the first unknown residue.
pub fn calculate_retention_coefficient(protein: &str) -> Result<f64, DnaProtError> {
    scales::RETENTION_COEFFICIENT.total(protein)
}

/// Total side-chain polarity.
///
/// # Errors
///
/// Returns [`DnaProtError::InvalidAminoAcid`] on the first unknown residue.
pub fn calculate_polarity_score(protein: &str) -> Result<f64, DnaProtError> {
    scales::POLARITY.total(protein)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPSILON,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_every_scale_covers_standard_residues() {
        let all = [
            scales::HYDROPHOBICITY,
            scales::MOLECULAR_WEIGHT,
            scales::BETA_SHEET,
            scales::ALPHA_HELIX,
            scales::BETA_TURN,
            scales::RETENTION_COEFFICIENT,
            scales::POLARITY,
        ];
        for scale in all {
            for &residue in &STANDARD_RESIDUES {
                assert!(
                    scale.value(residue as char).is_some(),
                    "{} lacks {}",
                    scale.name(),
                    residue as char
                );
            }
        }
    }

    #[test]
    fn test_scale_lookup() {
        assert_eq!(scales::HYDROPHOBICITY.value('I'), Some(4.5));
        assert_eq!(scales::MOLECULAR_WEIGHT.value('W'), Some(204.0));
        assert_eq!(scales::POLARITY.value('R'), Some(52.0));
        assert_eq!(scales::HYDROPHOBICITY.value('X'), None);
        assert_eq!(scales::HYDROPHOBICITY.value('a'), None);
        assert_eq!(scales::HYDROPHOBICITY.value('é'), None);
    }

    #[test]
    fn test_calculate_hydrophobicity() {
        assert_close(calculate_hydrophobicity("MSLVDRLL").unwrap(), 8.7);
        assert_close(calculate_hydrophobicity("IV").unwrap(), 8.7);
    }

    #[test]
    fn test_calculate_molecular_weight() {
        assert_eq!(calculate_molecular_weight("ACDE").unwrap(), 490.0);
        assert_eq!(calculate_molecular_weight("G").unwrap(), 75.0);
    }

    #[test]
    fn test_calculate_retention_coefficient() {
        assert_close(calculate_retention_coefficient("LF").unwrap(), 39.2);
        assert_close(calculate_retention_coefficient("CE").unwrap(), -16.3);
    }

    #[test]
    fn test_calculate_polarity_score() {
        assert_close(calculate_polarity_score("RK").unwrap(), 101.5);
        assert_close(calculate_polarity_score("AG").unwrap(), 0.0);
    }

    #[test]
    fn test_empty_protein_scores_zero() {
        assert_eq!(calculate_hydrophobicity("").unwrap(), 0.0);
        assert_eq!(calculate_molecular_weight("").unwrap(), 0.0);
        assert_eq!(calculate_retention_coefficient("").unwrap(), 0.0);
        assert_eq!(calculate_polarity_score("").unwrap(), 0.0);
    }

    #[test]
    fn test_invalid_amino_acid_reported() {
        let scorers: [fn(&str) -> Result<f64, DnaProtError>; 4] = [
            calculate_hydrophobicity,
            calculate_molecular_weight,
            calculate_retention_coefficient,
            calculate_polarity_score,
        ];
        for scorer in scorers {
            match scorer("MSLXB") {
                Err(DnaProtError::InvalidAminoAcid(c)) => assert_eq!(c, 'X'),
                other => panic!("Expected InvalidAminoAcid, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_lowercase_is_invalid() {
        assert!(matches!(
            calculate_molecular_weight("ms"),
            Err(DnaProtError::InvalidAminoAcid('m'))
        ));
    }

    #[test]
    fn test_configuration_likelihoods() {
        let helix = calculate_configuration_likelihoods("AAA").unwrap();
        assert_eq!(helix.most_likely, SecondaryStructure::AlphaHelix);
        assert_close(helix.highest_score, 4.26);
        assert_close(helix.beta_sheet, 2.49);
        assert_close(helix.beta_turn, 1.98);

        let sheet = calculate_configuration_likelihoods("VVV").unwrap();
        assert_eq!(sheet.most_likely, SecondaryStructure::BetaSheet);
        assert_close(sheet.highest_score, 5.1);

        let turn = calculate_configuration_likelihoods("GGG").unwrap();
        assert_eq!(turn.most_likely, SecondaryStructure::BetaTurn);
        assert_close(turn.highest_score, 4.68);
    }

    #[test]
    fn test_configuration_likelihoods_tie_prefers_first() {
        // Cysteine scores 1.19 for both beta-sheet and beta-turn
        let tie = calculate_configuration_likelihoods("C").unwrap();
        assert_eq!(tie.most_likely, SecondaryStructure::BetaSheet);
        assert_eq!(tie.highest_score, 1.19);

        let empty = calculate_configuration_likelihoods("").unwrap();
        assert_eq!(empty.most_likely, SecondaryStructure::BetaSheet);
        assert_eq!(empty.highest_score, 0.0);
    }

    #[test]
    fn test_configuration_likelihoods_invalid() {
        assert!(matches!(
            calculate_configuration_likelihoods("AZ"),
            Err(DnaProtError::InvalidAminoAcid('Z'))
        ));
    }
}
