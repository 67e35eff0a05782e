use crate::{set_distances, Monomer};

/// Join direct and reverse complement [`Monomer`]s into one list ordered by position.
/// * A lone detection whose neighbours on both sides share the other orientation is dropped.
/// * The final two monomers are always kept.
/// * [`Monomer::dst`] is recomputed.
///
/// ```
/// use rs_grm_hor::{join_orientations, Monomer, Orientation};
///
/// let direct: Vec<Monomer> = [0, 342, 684]
///     .into_iter()
///     .map(|pos| Monomer::from_fragment(pos, b"ACGT"))
///     .collect();
/// let reverse = vec![Monomer {
///     ort: Orientation::ReverseComplement,
///     ..Monomer::from_fragment(171, b"ACGT")
/// }];
/// let monomers = join_orientations(direct, reverse);
/// assert_eq!(
///     monomers.iter().map(|m| m.pos).collect::<Vec<usize>>(),
///     [0, 342, 684]
/// );
/// ```
pub fn join_orientations(direct: Vec<Monomer>, reverse: Vec<Monomer>) -> Vec<Monomer> {
    let mut all_monomers = direct;
    all_monomers.extend(reverse);
    all_monomers.sort_by_key(|mon| mon.pos);

    let n = all_monomers.len();
    if n < 3 {
        set_distances(&mut all_monomers);
        return all_monomers;
    }

    let mut keep = vec![true; n];
    let mut skip = false;
    for i in 0..n - 2 {
        if skip {
            // Dropped monomers don't start a triple.
            keep[i] = false;
            skip = false;
            continue;
        }
        let (a, b, c) = (&all_monomers[i], &all_monomers[i + 1], &all_monomers[i + 2]);
        skip = a.ort != b.ort && a.ort == c.ort;
    }

    let mut monomers: Vec<Monomer> = all_monomers
        .into_iter()
        .zip(keep)
        .filter_map(|(mon, keep)| keep.then_some(mon))
        .collect();
    log::info!(
        "Joined {} monomers. Removed {} isolated opposite orientation monomers.",
        monomers.len(),
        n - monomers.len()
    );
    set_distances(&mut monomers);
    monomers
}
