use crate::{
    assign_labels, find_families, find_monomers_with_config, genome_repeat_map, hor_scheme,
    join_orientations, DetectorConfig, Families, FamilyConfig, GenomeRepeatMap, GrmConfig,
    HorScheme, Monomer, Orientation,
};

/// Result of analysing a monomer list for higher-order repeats.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub monomers: Vec<Monomer>,
    pub families: Families,
    /// Column label of each monomer.
    pub labels: Vec<i64>,
    pub grm: GenomeRepeatMap,
    pub scheme: HorScheme,
}

/// Find [`Monomer`]s on both strands of `seq` and join them into a single list.
///
/// # Args
/// * `seq`
///     * Upper-case sequence.
/// * `consensus`
///     * Consensus monomer. ex. [`crate::ALPHA_SATELLITE_CONSENSUS`]
/// * `config`
///     * Detection thresholds.
///
/// # Returns
/// * [`Monomer`]s of both orientations ordered by position.
pub fn find_all_monomers(
    seq: &[u8],
    consensus: &[u8],
    config: &DetectorConfig,
) -> eyre::Result<Vec<Monomer>> {
    let direct = find_monomers_with_config(seq, consensus, Orientation::Direct, config)?;
    let reverse = find_monomers_with_config(seq, consensus, Orientation::ReverseComplement, config)?;
    Ok(join_orientations(direct, reverse))
}

/// Group [`Monomer`]s into families, label them, and build their [`GenomeRepeatMap`] and [`HorScheme`].
pub fn analyse_monomers(
    monomers: Vec<Monomer>,
    family_config: &FamilyConfig,
    grm_config: &GrmConfig,
) -> eyre::Result<Analysis> {
    let families = find_families(&monomers, family_config)?;
    let labels = assign_labels(&families);
    let grm = genome_repeat_map(&labels, &monomers, grm_config);
    if let Some((period, count)) = grm.top_periods(1).first() {
        log::info!("Most frequent period is {period} monomers ({count} recurrences).");
    } else {
        log::warn!("No recurring labels within {} monomers.", grm_config.max_period);
    }
    let scheme = hor_scheme(&monomers, &families, &labels, grm_config);
    Ok(Analysis {
        monomers,
        families,
        labels,
        grm,
        scheme,
    })
}
