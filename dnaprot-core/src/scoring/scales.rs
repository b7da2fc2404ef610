// =============================================================================
// Per-residue constants
// =============================================================================
//
// Every table is indexed in `STANDARD_RESIDUES` order:
// A, R, N, D, C, Q, E, G, H, I, L, K, M, F, P, S, T, W, Y, V

use super::ResidueScale;

/// Kyte-Doolittle hydropathy index
#[rustfmt::skip]
pub const HYDROPHOBICITY: ResidueScale = ResidueScale::new("hydrophobicity", [
    1.8, -4.5, -3.5, -3.5, 2.5, -3.5, -3.5, -0.4, -3.2, 4.5,
    3.8, -3.9, 1.9, 2.8, -1.6, -0.8, -0.7, -0.9, -1.3, 4.2,
]);

/// Free amino acid mass in daltons, rounded to whole units
#[rustfmt::skip]
pub const MOLECULAR_WEIGHT: ResidueScale = ResidueScale::new("molecular weight", [
    89.0, 174.0, 132.0, 133.0, 121.0, 146.0, 147.0, 75.0, 155.0, 131.0,
    131.0, 146.0, 149.0, 165.0, 115.0, 105.0, 119.0, 204.0, 181.0, 117.0,
]);

/// Chou-Fasman beta-sheet propensity
#[rustfmt::skip]
pub const BETA_SHEET: ResidueScale = ResidueScale::new("beta-sheet", [
    0.83, 0.93, 0.89, 0.54, 1.19, 1.10, 0.37, 0.75, 0.87, 1.60,
    1.30, 0.74, 1.05, 1.38, 0.55, 0.75, 1.19, 1.37, 1.47, 1.70,
]);

/// Chou-Fasman alpha-helix propensity
#[rustfmt::skip]
pub const ALPHA_HELIX: ResidueScale = ResidueScale::new("alpha-helix", [
    1.42, 0.98, 0.67, 1.01, 0.70, 1.11, 1.51, 0.57, 1.00, 1.08,
    1.21, 1.16, 1.45, 1.13, 0.57, 0.77, 0.83, 1.08, 0.69, 1.06,
]);

/// Chou-Fasman beta-turn propensity
#[rustfmt::skip]
pub const BETA_TURN: ResidueScale = ResidueScale::new("beta-turn", [
    0.66, 0.95, 1.56, 1.46, 1.19, 0.98, 0.74, 1.56, 0.95, 0.47,
    0.59, 1.01, 0.60, 0.60, 1.52, 1.43, 0.96, 0.96, 1.14, 0.50,
]);

/// Reversed-phase HPLC retention coefficient
#[rustfmt::skip]
pub const RETENTION_COEFFICIENT: ResidueScale = ResidueScale::new("retention coefficient", [
    7.3, -3.6, -5.7, -2.9, -9.2, -0.3, -7.1, -1.2, -2.1, 6.6,
    20.0, -3.7, 5.6, 19.2, 5.1, -4.1, 0.8, 16.3, 5.9, 3.5,
]);

/// Zimmerman side-chain polarity
#[rustfmt::skip]
pub const POLARITY: ResidueScale = ResidueScale::new("polarity", [
    0.0, 52.0, 3.38, 49.7, 1.48, 3.53, 49.9, 0.0, 51.6, 0.13,
    0.13, 49.5, 1.43, 0.35, 1.58, 1.67, 1.66, 2.1, 1.61, 0.13,
]);
