mod align;
mod config;
mod detect;
mod family;
mod grm;
mod io;
mod label;
mod merge;
mod monomer;
mod pipeline;
mod sequence;

pub use align::{edit_distance, normalized_edit_distance};
pub use config::{DetectorConfig, FamilyConfig, GrmConfig, ALPHA_SATELLITE_CONSENSUS};
pub use detect::{collapse_duplicates, find_monomers, find_monomers_with_config, local_minima};
pub use family::{find_families, find_family_candidates, join_families, Families, FindUnion};
pub use grm::{genome_repeat_map, hor_scheme, GenomeRepeatMap, HorScheme, SchemeCell};
pub use io::{parse_monomers, read_monomers, write_monomers};
pub use label::{assign_labels, ORPHAN};
pub use merge::join_orientations;
pub use monomer::{set_distances, Monomer, Orientation};
pub use pipeline::{analyse_monomers, find_all_monomers, Analysis};
pub use sequence::{complement, read_fasta, revcomp, BaseComposition};
