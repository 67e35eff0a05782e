use crate::{set_distances, DetectorConfig, Monomer};

/// Replace each monomer's probe with its unit sequence.
/// * Bounded by the next monomer if it starts within [`DetectorConfig::max_spacing`].
/// * Otherwise, and for the last monomer, a [`DetectorConfig::unit_len`] slice clamped to the end of `seq`.
pub(crate) fn set_sequences(monomers: &mut [Monomer], seq: &[u8], config: &DetectorConfig) {
    for i in 0..monomers.len() {
        let next_pos = monomers
            .get(i + 1)
            .filter(|next| next.dst < config.max_spacing)
            .map(|next| next.pos);
        let start = monomers[i].pos.min(seq.len());
        let end = next_pos
            .unwrap_or(start + config.unit_len)
            .clamp(start, seq.len());
        monomers[i].seq = seq[start..end].to_vec();
    }
}

/// Map reverse complement positions back onto the direct strand and reorder.
/// * The unit length is not subtracted so positions mark the unit's 3' end on the direct strand.
pub(crate) fn set_back_rc_positions(monomers: &mut [Monomer], seq_len: usize) {
    for mon in monomers.iter_mut() {
        mon.pos = seq_len.saturating_sub(mon.pos);
    }
    monomers.sort_by_key(|mon| mon.pos);
    set_distances(monomers);
}
