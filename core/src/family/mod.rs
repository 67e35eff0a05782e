use eyre::WrapErr;
use rayon::prelude::*;

use crate::{
    align::{min_normalized_edit_distance, normalized_edit_distance},
    FamilyConfig, Monomer,
};

mod find_union;

pub use find_union::FindUnion;

/// Families of similar [`Monomer`]s, indexed by monomer position.
/// * Each family is stored once, at its smallest member index (its representative).
/// * All other indices hold an empty family.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Families {
    families: Vec<Vec<usize>>,
}

impl Families {
    /// Get the family represented by monomer `i`. Empty if `i` isn't a representative.
    pub fn family(&self, i: usize) -> &[usize] {
        self.families.get(i).map(|fam| &fam[..]).unwrap_or_default()
    }

    /// Number of monomers covered.
    pub fn len(&self) -> usize {
        self.families.len()
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    /// Number of non-empty families.
    pub fn n_families(&self) -> usize {
        self.families.iter().filter(|fam| !fam.is_empty()).count()
    }

    /// Iterate through representatives and their families in monomer order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[usize])> {
        self.families
            .iter()
            .enumerate()
            .filter(|(_, fam)| !fam.is_empty())
            .map(|(i, fam)| (i, &fam[..]))
    }
}

/// Find the candidate family of each monomer.
/// * Monomer `j >= i` joins the candidate family of `i` if its sequence diverges from `i`'s by less than `divergence_limit` percent.
/// * The last monomer has no candidate family of its own.
///
/// # Errors
/// * If a compared monomer `i` has an empty sequence.
pub fn find_family_candidates(
    monomers: &[Monomer],
    divergence_limit: f64,
) -> eyre::Result<Vec<Vec<usize>>> {
    let n = monomers.len();
    let mut candidates: Vec<Vec<usize>> = (0..n.saturating_sub(1))
        .into_par_iter()
        .map(|i| -> eyre::Result<Vec<usize>> {
            let seq_i = &monomers[i].seq;
            let mut family = vec![];
            let mut n_pruned = 0;
            for (j, mon_j) in monomers.iter().enumerate().skip(i) {
                // Length difference alone already exceeds the limit.
                if !seq_i.is_empty()
                    && min_normalized_edit_distance(seq_i.len(), mon_j.seq.len())
                        >= divergence_limit
                {
                    n_pruned += 1;
                    continue;
                }
                let edp = normalized_edit_distance(seq_i, &mon_j.seq)
                    .wrap_err_with(|| format!("Cannot compare monomer {i} to monomer {j}."))?;
                if edp < divergence_limit {
                    family.push(j);
                }
            }
            if n_pruned > 0 {
                log::debug!("Skipped {n_pruned} comparisons of monomer {i} by length.");
            }
            Ok(family)
        })
        .collect::<eyre::Result<_>>()?;
    candidates.resize_with(n, Vec::new);
    Ok(candidates)
}

/// Merge overlapping candidate families transitively.
///
/// ```
/// use rs_grm_hor::join_families;
///
/// let families = join_families(&[vec![0, 2], vec![1], vec![2, 3], vec![]]);
/// assert_eq!(families.family(0), [0, 2, 3]);
/// assert_eq!(families.family(1), [1]);
/// assert!(families.family(2).is_empty());
/// ```
pub fn join_families(candidates: &[Vec<usize>]) -> Families {
    let n = candidates
        .iter()
        .flatten()
        .max()
        .map_or(0, |max_idx| max_idx + 1)
        .max(candidates.len());
    let mut sets = FindUnion::new(n);
    let mut is_member = vec![false; n];

    for family in candidates {
        let Some(first) = family.first() else {
            continue;
        };
        for member in family {
            is_member[*member] = true;
            sets.union(*first, *member);
        }
    }

    let mut families = vec![vec![]; n];
    for i in (0..n).filter(|i| is_member[*i]) {
        let root = sets.find(i);
        families[root].push(i);
    }
    Families { families }
}

/// Group [`Monomer`]s into families of similar sequences.
///
/// ```
/// use rs_grm_hor::{find_families, FamilyConfig, Monomer};
///
/// let monomers: Vec<Monomer> = ["ACGTACGTAC", "TTTTGGGGCC", "ACGTACGTAC"]
///     .into_iter()
///     .enumerate()
///     .map(|(i, seq)| Monomer::from_fragment(i, seq.as_bytes()))
///     .collect();
/// let families = find_families(&monomers, &FamilyConfig::default()).unwrap();
/// assert_eq!(families.family(0), [0, 2]);
/// assert_eq!(families.family(1), [1]);
/// ```
pub fn find_families(monomers: &[Monomer], config: &FamilyConfig) -> eyre::Result<Families> {
    if monomers.is_empty() {
        log::warn!("No monomers to group into families.");
    }
    let candidates = find_family_candidates(monomers, config.divergence_limit)?;
    let families = join_families(&candidates);
    log::info!(
        "Grouped {} monomers into {} families.",
        monomers.len(),
        families.n_families()
    );
    Ok(families)
}
