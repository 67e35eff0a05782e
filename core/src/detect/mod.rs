use eyre::bail;
use rayon::prelude::*;

use crate::{
    align::{edit_distance, normalized_edit_distance},
    sequence::revcomp,
    DetectorConfig, Monomer, Orientation,
};

mod extract;
mod filter;

pub use filter::{collapse_duplicates, local_minima};

/// Find [`Monomer`]s in `seq` resembling the `consensus` using the default [`DetectorConfig`].
///
/// ```
/// use rs_grm_hor::{find_monomers, Orientation};
///
/// let consensus = b"GATTACAGGCTTAACCGTAT";
/// let seq = [&[b'N'; 50][..], consensus, &[b'N'; 50][..]].concat();
///
/// let monomers = find_monomers(&seq, consensus, Orientation::Direct).unwrap();
/// assert_eq!(monomers.len(), 1);
/// assert_eq!(monomers[0].pos, 50);
/// ```
pub fn find_monomers(
    seq: &[u8],
    consensus: &[u8],
    ort: Orientation,
) -> eyre::Result<Vec<Monomer>> {
    find_monomers_with_config(seq, consensus, ort, &DetectorConfig::default())
}

/// Find [`Monomer`]s in `seq` resembling the `consensus`.
///
/// # Args
/// * `seq`
///     * Sequence to scan. Reverse complemented before scanning if `ort` is [`Orientation::ReverseComplement`].
/// * `consensus`
///     * Consensus monomer.
/// * `ort`
///     * Strand to scan.
/// * `config`
///     * Detection thresholds.
///
/// # Returns
/// * [`Monomer`]s ordered by position with their extracted unit sequence.
///     * Reverse complement positions are mapped back as `seq.len() - pos`.
pub fn find_monomers_with_config(
    seq: &[u8],
    consensus: &[u8],
    ort: Orientation,
    config: &DetectorConfig,
) -> eyre::Result<Vec<Monomer>> {
    if consensus.is_empty() {
        bail!("Cannot search for an empty consensus monomer.")
    }
    let rc_seq;
    let seq = match ort {
        Orientation::Direct => seq,
        Orientation::ReverseComplement => {
            rc_seq = revcomp(seq);
            &rc_seq[..]
        }
    };

    let candidates = scan_candidates(seq, consensus, ort, config)?;
    let minima = local_minima(&candidates);
    log::info!(
        "Kept {} local minima from {} candidates in {ort} orientation.",
        minima.len(),
        candidates.len()
    );
    let mut monomers = collapse_duplicates(minima, config.collapse_dst, config.probe_max_div);
    log::info!(
        "Found {} monomers in {ort} orientation from {} candidates.",
        monomers.len(),
        candidates.len()
    );

    extract::set_sequences(&mut monomers, seq, config);
    if ort == Orientation::ReverseComplement {
        extract::set_back_rc_positions(&mut monomers, seq.len());
    }
    Ok(monomers)
}

/// Slide the consensus along `seq` and keep every window below [`DetectorConfig::max_divergence`].
/// * Candidates are dense and overlap.
pub(crate) fn scan_candidates(
    seq: &[u8],
    consensus: &[u8],
    ort: Orientation,
    config: &DetectorConfig,
) -> eyre::Result<Vec<Monomer>> {
    let n_windows = seq.len().saturating_sub(consensus.len() + 1);
    if n_windows == 0 {
        log::warn!(
            "Sequence ({} bp) is too short to scan with a {} bp consensus.",
            seq.len(),
            consensus.len()
        );
        return Ok(vec![]);
    }
    log::debug!("Scanning {n_windows} windows in {ort} orientation.");

    let probe = &consensus[..config.probe_len.min(consensus.len())];
    let candidates: Vec<Option<Monomer>> = (0..n_windows)
        .into_par_iter()
        .map(|i| -> eyre::Result<Option<Monomer>> {
            let edp = normalized_edit_distance(consensus, &seq[i..i + consensus.len()])?;
            if edp >= config.max_divergence {
                return Ok(None);
            }
            let probe_window = &seq[i..(i + config.probe_len).min(seq.len())];
            Ok(Some(Monomer {
                pos: i,
                dst: 0,
                div: edp,
                div2: edit_distance(probe, probe_window),
                ort,
                seq: probe_window.to_vec(),
            }))
        })
        .collect::<eyre::Result<_>>()?;

    Ok(candidates.into_iter().flatten().collect())
}
