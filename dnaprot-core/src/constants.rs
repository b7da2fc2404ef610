// =============================================================================
// Sequence motifs
// =============================================================================

/// Ribosome binding site used to segment sequences when none is configured
pub const DEFAULT_SHINE_DALGARNO: &str = "AGGAGG";

/// Start codon in RNA form
pub const START_CODON: &str = "AUG";

/// Length of a codon in bases
pub const CODON_LENGTH: usize = 3;

// =============================================================================
// Flat-file markers
// =============================================================================

/// Record terminator in flat files and section files
pub const RECORD_TERMINATOR: &str = "//";

// =============================================================================
// Alphabets
// =============================================================================

/// Bases kept by the DNA filter
pub const DNA_BASES: &[u8] = b"ATCG";

/// Number of standard amino acids
pub const STANDARD_RESIDUE_COUNT: usize = 20;

/// The standard residues, in the order used by the scoring tables
pub const STANDARD_RESIDUES: [u8; STANDARD_RESIDUE_COUNT] = *b"ARNDCQEGHILKMFPSTWYV";
