use itertools::Itertools;

use crate::{set_distances, Monomer};

/// Keep candidates whose divergence is no greater than either neighbour's.
/// * The first and last candidates are always dropped.
///
/// ```
/// use rs_grm_hor::{local_minima, Monomer};
///
/// let mons: Vec<Monomer> = [20.0, 10.0, 0.0, 10.0, 20.0]
///     .into_iter()
///     .enumerate()
///     .map(|(i, div)| Monomer { div, ..Monomer::from_fragment(i, b"ACGT") })
///     .collect();
/// let minima = local_minima(&mons);
/// assert_eq!(minima.len(), 1);
/// assert_eq!(minima[0].pos, 2);
/// ```
pub fn local_minima(monomers: &[Monomer]) -> Vec<Monomer> {
    monomers
        .iter()
        .tuple_windows()
        .filter(|(prev, mon, next)| mon.div <= prev.div && mon.div <= next.div)
        .map(|(_, mon, _)| mon.clone())
        .collect()
}

/// Collapse runs of detections closer than `max_dst` to one another.
/// * Each run keeps its first monomer with the smallest [`Monomer::div2`] at or below `probe_max_div`.
/// * Runs without such a monomer keep their first monomer.
/// * [`Monomer::dst`] is recomputed before and after.
pub fn collapse_duplicates(
    mut monomers: Vec<Monomer>,
    max_dst: usize,
    probe_max_div: u32,
) -> Vec<Monomer> {
    set_distances(&mut monomers);

    let mut collapsed = Vec::new();
    let mut run: Vec<Monomer> = Vec::new();
    for mon in monomers {
        if mon.dst > max_dst && !run.is_empty() {
            collapsed.push(best_in_run(std::mem::take(&mut run), probe_max_div));
        }
        run.push(mon);
    }
    if !run.is_empty() {
        collapsed.push(best_in_run(run, probe_max_div));
    }

    set_distances(&mut collapsed);
    collapsed
}

fn best_in_run(mut run: Vec<Monomer>, probe_max_div: u32) -> Monomer {
    let idx = run
        .iter()
        .enumerate()
        .filter(|(_, mon)| mon.div2 <= probe_max_div)
        .min_by_key(|(_, mon)| mon.div2)
        .map(|(i, _)| i)
        .unwrap_or(0);
    run.swap_remove(idx)
}
