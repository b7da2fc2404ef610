/// Find the first occurrence of a Shine-Dalgarno motif.
///
/// Returns the zero-based byte offset of the match, or `None` when the
/// motif is absent or empty.
///
/// # Examples
///
/// ```rust
/// use dnaprot_core::sequence::find_shine_dalgarno;
///
/// assert_eq!(find_shine_dalgarno("ATGAGGAGGTAG", "AGGAGG"), Some(3));
/// assert_eq!(find_shine_dalgarno("ATGCCCTAG", "AGGAGG"), None);
/// ```
#[must_use]
pub fn find_shine_dalgarno(sequence: &str, motif: &str) -> Option<usize> {
    if motif.is_empty() {
        return None;
    }
    sequence.find(motif)
}

/// Cut a sequence into the sections that lie between consecutive motifs.
///
/// Scanning starts right after the first occurrence of `motif` and moves
/// left to right without overlap. Each later occurrence closes a section;
/// the text after the last occurrence is always kept as the final section,
/// even when empty. A sequence without the motif yields no sections.
///
/// # Examples
///
/// ```rust
/// use dnaprot_core::sequence::cut_sequence;
///
/// assert_eq!(cut_sequence("ATGAGGAGGTAG", "AGGAGG"), vec!["TAG"]);
/// assert_eq!(cut_sequence("AGGAGGAGGAGGAGGAGG", "AGGAGG"), vec!["", "", ""]);
/// assert!(cut_sequence("ATGCCCTAG", "AGGAGG").is_empty());
/// ```
#[must_use]
pub fn cut_sequence(sequence: &str, motif: &str) -> Vec<String> {
    let mut sections = Vec::new();
    let Some(first) = find_shine_dalgarno(sequence, motif) else {
        return sections;
    };

    let mut start = first + motif.len();
    while let Some(offset) = find_shine_dalgarno(&sequence[start..], motif) {
        sections.push(sequence[start..start + offset].to_string());
        start += offset + motif.len();
    }
    sections.push(sequence[start..].to_string());

    sections
}
