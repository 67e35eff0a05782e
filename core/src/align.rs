//! Edit-distance scoring between two sequences.
//!
//! Both functions compute the global (Needleman-Wunsch style) unit-cost edit distance.
use bio::alignment::distance::simd::levenshtein;
use eyre::bail;

/// Raw edit distance between `a` and `b`.
///
/// ```
/// use rs_grm_hor::edit_distance;
///
/// assert_eq!(edit_distance(b"ACGT", b"ACGT"), 0);
/// assert_eq!(edit_distance(b"ACGT", b"AGT"), 1);
/// assert_eq!(edit_distance(b"", b"ACG"), 3);
/// ```
pub fn edit_distance(a: &[u8], b: &[u8]) -> u32 {
    levenshtein(a, b)
}

/// Edit distance between `a` and `b` as a percentage of the length of `a`.
/// * Fails if `a` is empty.
///
/// ```
/// use rs_grm_hor::normalized_edit_distance;
///
/// let edp = normalized_edit_distance(b"ACGTACGTAC", b"ACGTACGTAA").unwrap();
/// assert_eq!(edp, 10.0);
/// assert!(normalized_edit_distance(b"", b"ACGT").is_err());
/// ```
pub fn normalized_edit_distance(a: &[u8], b: &[u8]) -> eyre::Result<f64> {
    if a.is_empty() {
        bail!("Cannot compute normalized edit distance against an empty sequence.")
    }
    Ok(f64::from(edit_distance(a, b)) / a.len() as f64 * 100.0)
}

/// Lower bound of [`normalized_edit_distance`] from sequence lengths alone.
/// * An edit distance is never smaller than the difference in length.
pub(crate) fn min_normalized_edit_distance(a_len: usize, b_len: usize) -> f64 {
    if a_len == 0 {
        return f64::INFINITY;
    }
    a_len.abs_diff(b_len) as f64 / a_len as f64 * 100.0
}

#[cfg(test)]
mod test {
    use super::{edit_distance, min_normalized_edit_distance, normalized_edit_distance};

    #[test]
    fn test_edit_distance_indels() {
        assert_eq!(edit_distance(b"TCAGAAACTT", b"TCAGAAACTT"), 0);
        // Substitution
        assert_eq!(edit_distance(b"TCAGAAACTT", b"TCAGTAACTT"), 1);
        // Shifted by one.
        assert_eq!(edit_distance(b"TCAGAAACTT", b"CAGAAACTTN"), 2);
        assert_eq!(edit_distance(b"ACGT", b"NNNN"), 4);
    }

    #[test]
    fn test_normalized_by_first() {
        assert_eq!(normalized_edit_distance(b"ACGT", b"ACGTAAAA").unwrap(), 100.0);
        assert_eq!(normalized_edit_distance(b"ACGTAAAA", b"ACGT").unwrap(), 50.0);
    }

    #[test]
    fn test_length_bound() {
        let a = b"ACGTACGTAC";
        let b = b"ACGTAC";
        assert!(
            min_normalized_edit_distance(a.len(), b.len())
                <= normalized_edit_distance(a, b).unwrap()
        );
        assert_eq!(min_normalized_edit_distance(0, 4), f64::INFINITY);
    }
}
