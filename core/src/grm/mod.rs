use itertools::Itertools;
use rayon::prelude::*;

use crate::{GrmConfig, Monomer};

mod scheme;

pub use scheme::{hor_scheme, HorScheme, SchemeCell};

/// Genome repeat map of a label series.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenomeRepeatMap {
    /// Number of labels recurring after each period. Index 0 is never counted.
    pub frequencies: Vec<usize>,
    /// Distance to the nearest recurrence of each label. 0 if it doesn't recur.
    pub fragments: Vec<usize>,
    /// Index of the monomer following each gap.
    pub gap_indices: Vec<usize>,
    /// Length of each gap in bp.
    pub gap_lengths: Vec<usize>,
}

impl GenomeRepeatMap {
    /// Get the `n` most frequent periods with their counts.
    /// * Highest count first. Ties go to the shorter period.
    ///
    /// ```
    /// use rs_grm_hor::{genome_repeat_map, GrmConfig};
    ///
    /// let series = [0, 1, 2, 0, 1, 2, 0, 1, 2, 3, 4];
    /// let grm = genome_repeat_map(&series, &[], &GrmConfig::default());
    /// assert_eq!(grm.top_periods(7), [(3, 6)]);
    /// ```
    pub fn top_periods(&self, n: usize) -> Vec<(usize, usize)> {
        self.frequencies
            .iter()
            .copied()
            .enumerate()
            .filter(|(_, count)| *count > 0)
            .sorted_by(|(period_a, count_a), (period_b, count_b)| {
                count_b.cmp(count_a).then(period_a.cmp(period_b))
            })
            .take(n)
            .collect()
    }
}

/// Distance to the nearest later recurrence of `series[i]`.
/// * The final label is never a recurrence target.
fn nearest_recurrence<T: PartialEq>(series: &[T], i: usize) -> usize {
    let end = series.len().saturating_sub(1);
    (i + 1..end)
        .find(|j| series[*j] == series[i])
        .map_or(0, |j| j - i)
}

/// Build the [`GenomeRepeatMap`] of a label series.
///
/// # Args
/// * `series`
///     * Column label of each monomer.
/// * `monomers`
///     * [`Monomer`]s in the same order. Only their positions are used, to find gaps.
/// * `config`
///     * Largest period counted and minimum gap length.
///
/// # Returns
/// * Period histogram of width [`GrmConfig::max_period`] + 1, the recurrence distance of each label, and gaps.
///
/// ```
/// use rs_grm_hor::{genome_repeat_map, GrmConfig};
///
/// let grm = genome_repeat_map(&[0, 1, 0, 1, 0, 1], &[], &GrmConfig::default());
/// assert_eq!(grm.fragments, [2, 2, 2, 0, 0, 0]);
/// assert_eq!(grm.frequencies[2], 3);
/// ```
pub fn genome_repeat_map<T>(
    series: &[T],
    monomers: &[Monomer],
    config: &GrmConfig,
) -> GenomeRepeatMap
where
    T: PartialEq + Sync,
{
    let fragments: Vec<usize> = (0..series.len())
        .into_par_iter()
        .map(|i| nearest_recurrence(series, i))
        .collect();

    let mut frequencies = vec![0; config.max_period + 1];
    for fragment in fragments
        .iter()
        .filter(|fragment| (1..=config.max_period).contains(*fragment))
    {
        frequencies[*fragment] += 1;
    }

    let (gap_indices, gap_lengths): (Vec<usize>, Vec<usize>) = monomers
        .iter()
        .tuple_windows()
        .enumerate()
        .filter_map(|(i, (mon_1, mon_2))| {
            let gap_len = mon_2.pos.saturating_sub(mon_1.pos);
            (gap_len > config.min_gap).then_some((i + 1, gap_len))
        })
        .unzip();

    GenomeRepeatMap {
        frequencies,
        fragments,
        gap_indices,
        gap_lengths,
    }
}

#[cfg(test)]
mod test {
    use itertools::Itertools;

    use super::genome_repeat_map;
    use crate::{GrmConfig, Monomer};

    #[test]
    fn test_grm_periods() {
        let series = [0, 1, 2, 3, 0, 1, 2, 3, 0, 1, 5, 3, 0, -1];
        let grm = genome_repeat_map(&series, &[], &GrmConfig::default());
        assert_eq!(grm.fragments, [4, 4, 4, 4, 4, 4, 0, 4, 4, 0, 0, 0, 0, 0]);
        assert_eq!(grm.frequencies.len(), 61);
        assert_eq!(grm.frequencies[4], 8);
        assert_eq!(grm.frequencies.iter().sum::<usize>(), 8);
    }

    #[test]
    fn test_grm_histogram_counts_fragments() {
        let series = [3, 7, 3, 3, 9, 7, 1, 3, 9, 7, 2, 2, 3, 0];
        let grm = genome_repeat_map(&series, &[], &GrmConfig::default());
        assert!(grm.frequencies.iter().sum::<usize>() <= series.len());
        for (period, count) in grm.frequencies.iter().enumerate().skip(1) {
            assert_eq!(
                *count,
                grm.fragments.iter().filter(|f| **f == period).count()
            );
        }
        assert_eq!(grm.frequencies[0], 0);
    }

    #[test]
    fn test_grm_max_period() {
        // Period of 80 exceeds the default max period.
        let series = (0..80).chain(0..80).chain([-1]).collect_vec();
        let grm = genome_repeat_map(&series, &[], &GrmConfig::default());
        assert!(grm.fragments[..80].iter().all(|f| *f == 80));
        assert!(grm.frequencies.iter().all(|f| *f == 0));

        let config = GrmConfig::default().with_max_period(80);
        let grm = genome_repeat_map(&series, &[], &config);
        assert_eq!(grm.frequencies.len(), 81);
        assert_eq!(grm.frequencies[80], 80);
    }

    #[test]
    fn test_grm_two_equal_labels() {
        let grm = genome_repeat_map(&[0, 0], &[], &GrmConfig::default());
        assert_eq!(grm.fragments, [0, 0]);
        assert!(grm.frequencies.iter().all(|f| *f == 0));
    }

    #[test]
    fn test_grm_gaps() {
        let monomers = [0, 171, 342, 5000, 5171, 7000]
            .into_iter()
            .map(|pos| Monomer::from_fragment(pos, b"ACGT"))
            .collect_vec();
        let series = [0, 1, 0, 1, 0, 1];
        let grm = genome_repeat_map(&series, &monomers, &GrmConfig::default());
        assert_eq!(grm.gap_indices, [3, 5]);
        assert_eq!(grm.gap_lengths, [4658, 1829]);

        let config = GrmConfig::default().with_min_gap(2000);
        let grm = genome_repeat_map(&series, &monomers, &config);
        assert_eq!(grm.gap_indices, [3]);
    }

    #[test]
    fn test_grm_empty() {
        let grm = genome_repeat_map::<i64>(&[], &[], &GrmConfig::default());
        assert!(grm.fragments.is_empty());
        assert!(grm.gap_indices.is_empty());
        assert_eq!(grm.frequencies, vec![0; 61]);
    }
}
