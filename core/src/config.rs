/// Human alpha-satellite consensus monomer (171 bp).
pub const ALPHA_SATELLITE_CONSENSUS: &[u8] = b"TCAGAAACTTCTTTGTGATGTGTGCATTCAACTCACAGAGTTGAACCTTCCTTTTGATAGAGCAGTTTTGAAACACTCTTTTTGTAGAATCTGCAAGTGGATATTTGGAGCGCTTTGAGGCCTTCGGTGGAAAAGGAAATATCTTCACATAAAAACTAGACAGAAGCATTC";

/// Parameters for monomer detection.
///
/// ```
/// use rs_grm_hor::DetectorConfig;
///
/// let config = DetectorConfig::default().with_max_divergence(25.0);
/// assert_eq!(config.max_divergence, 25.0);
/// assert_eq!(config.unit_len, 171);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DetectorConfig {
    /// Windows at or above this normalized edit distance (%) to the consensus are not candidates.
    pub max_divergence: f64,
    /// Length of the consensus prefix used to tell apart near-duplicate detections.
    pub probe_len: usize,
    /// Probe edit distance a detection must not exceed to win its duplicate run.
    pub probe_max_div: u32,
    /// Detections this close or closer to their predecessor are duplicates.
    pub collapse_dst: usize,
    /// Units are bounded by the next monomer only if it starts closer than this.
    pub max_spacing: usize,
    /// Length of a unit without a close successor.
    pub unit_len: usize,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            max_divergence: 30.0,
            probe_len: 10,
            probe_max_div: 10,
            collapse_dst: 20,
            max_spacing: 180,
            unit_len: 171,
        }
    }
}

impl DetectorConfig {
    pub fn with_max_divergence(mut self, max_divergence: f64) -> Self {
        self.max_divergence = max_divergence;
        self
    }

    pub fn with_unit_len(mut self, unit_len: usize) -> Self {
        self.unit_len = unit_len;
        self
    }

    pub fn with_max_spacing(mut self, max_spacing: usize) -> Self {
        self.max_spacing = max_spacing;
        self
    }

    pub fn with_probe_len(mut self, probe_len: usize) -> Self {
        self.probe_len = probe_len;
        self
    }

    pub fn with_probe_max_div(mut self, probe_max_div: u32) -> Self {
        self.probe_max_div = probe_max_div;
        self
    }

    pub fn with_collapse_dst(mut self, collapse_dst: usize) -> Self {
        self.collapse_dst = collapse_dst;
        self
    }
}

/// Parameters for family clustering.
#[derive(Debug, Clone, PartialEq)]
pub struct FamilyConfig {
    /// Pairs below this normalized edit distance (%) belong to the same family.
    pub divergence_limit: f64,
}

impl Default for FamilyConfig {
    fn default() -> Self {
        Self {
            divergence_limit: 5.0,
        }
    }
}

impl FamilyConfig {
    pub fn with_divergence_limit(mut self, divergence_limit: f64) -> Self {
        self.divergence_limit = divergence_limit;
        self
    }
}

/// Parameters for the genome repeat map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrmConfig {
    /// Largest period counted in the histogram.
    pub max_period: usize,
    /// Neighbouring monomers further apart than this (bp) delimit a gap.
    pub min_gap: usize,
}

impl Default for GrmConfig {
    fn default() -> Self {
        Self {
            max_period: 60,
            min_gap: 1000,
        }
    }
}

impl GrmConfig {
    pub fn with_max_period(mut self, max_period: usize) -> Self {
        self.max_period = max_period;
        self
    }

    pub fn with_min_gap(mut self, min_gap: usize) -> Self {
        self.min_gap = min_gap;
        self
    }
}
