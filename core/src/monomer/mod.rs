use std::fmt::Display;

mod ort;
mod parse;

pub use ort::Orientation;

/// A detected approximate occurrence of the consensus repeat unit.
///
/// Written and read as a whitespace-delimited record:
/// `{pos} {dst} {div:.2} {div2} {ort} {seq}`
///
/// ```
/// use rs_grm_hor::{Monomer, Orientation};
///
/// let mon = Monomer::new("120 70 0.00 0 d ACGTACGT").unwrap();
/// assert_eq!(mon.pos, 120);
/// assert_eq!(mon.ort, Orientation::Direct);
/// assert_eq!(format!("{mon}"), "120 70 0.00 0 d ACGTACGT");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Monomer {
    /// Start offset in the strand-appropriate sequence.
    pub pos: usize,
    /// Distance from the previous monomer's `pos`. Equals `pos` for the first monomer.
    pub dst: usize,
    /// Normalized edit distance (%) against the full consensus.
    pub div: f64,
    /// Raw edit distance against the consensus probe.
    pub div2: u32,
    pub ort: Orientation,
    pub seq: Vec<u8>,
}

impl Monomer {
    /// Parse a [`Monomer`] from a six-field record.
    pub fn new(s: &str) -> eyre::Result<Self> {
        s.parse()
    }

    /// Construct a [`Monomer`] from a bare sequence fragment.
    /// * `pos` is the index of the fragment and `dst` its length.
    ///
    /// ```
    /// use rs_grm_hor::{Monomer, Orientation};
    ///
    /// let mon = Monomer::from_fragment(3, b"ACGT");
    /// assert_eq!((mon.pos, mon.dst, mon.div2), (3, 4, 0));
    /// assert_eq!(mon.ort, Orientation::Direct);
    /// ```
    pub fn from_fragment(pos: usize, seq: &[u8]) -> Self {
        Monomer {
            pos,
            dst: seq.len(),
            div: 0.0,
            div2: 0,
            ort: Orientation::Direct,
            seq: seq.to_vec(),
        }
    }

    /// Get the extracted unit sequence as a string.
    pub fn seq_str(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.seq)
    }
}

impl Display for Monomer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {:.2} {} {} {}",
            self.pos,
            self.dst,
            self.div,
            self.div2,
            self.ort,
            self.seq_str()
        )
    }
}

/// Recompute [`Monomer::dst`] for a list ordered by [`Monomer::pos`].
///
/// ```
/// use rs_grm_hor::{set_distances, Monomer};
///
/// let mut mons = vec![
///     Monomer::from_fragment(10, b"A"),
///     Monomer::from_fragment(25, b"A"),
///     Monomer::from_fragment(200, b"A"),
/// ];
/// set_distances(&mut mons);
/// assert_eq!(mons.iter().map(|m| m.dst).collect::<Vec<_>>(), [10, 15, 175]);
/// ```
pub fn set_distances(monomers: &mut [Monomer]) {
    let mut last_pos = 0;
    for mon in monomers.iter_mut() {
        mon.dst = mon.pos.saturating_sub(last_pos);
        last_pos = mon.pos;
    }
}
