use std::{fmt::Display, path::Path};

use bio::io::fasta;
use eyre::{ContextCompat, WrapErr};

/// Complement of a nucleotide.
/// * `N` and the don't-care placeholder `X` map to themselves.
/// * Any other symbol maps to `N`.
pub fn complement(base: u8) -> u8 {
    match base {
        b'A' => b'T',
        b'T' => b'A',
        b'C' => b'G',
        b'G' => b'C',
        b'X' => b'X',
        _ => b'N',
    }
}

/// Reverse complement of a sequence.
///
/// ```
/// use rs_grm_hor::revcomp;
///
/// assert_eq!(revcomp(b"AACGTX"), b"XACGTT");
/// assert_eq!(revcomp(&revcomp(b"GATTACAN")), b"GATTACAN");
/// ```
pub fn revcomp(seq: &[u8]) -> Vec<u8> {
    seq.iter().rev().map(|b| complement(*b)).collect()
}

/// Nucleotide counts of a sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BaseComposition {
    pub a: usize,
    pub c: usize,
    pub g: usize,
    pub t: usize,
    pub n: usize,
    pub len: usize,
}

impl BaseComposition {
    /// ```
    /// use rs_grm_hor::BaseComposition;
    ///
    /// let comp = BaseComposition::new(b"AACGTNNX");
    /// assert_eq!((comp.a, comp.n, comp.len), (2, 2, 8));
    /// ```
    pub fn new(seq: &[u8]) -> Self {
        let mut comp = BaseComposition {
            len: seq.len(),
            ..Default::default()
        };
        for base in seq {
            match base {
                b'A' => comp.a += 1,
                b'C' => comp.c += 1,
                b'G' => comp.g += 1,
                b'T' => comp.t += 1,
                b'N' => comp.n += 1,
                _ => (),
            }
        }
        comp
    }
}

impl Display for BaseComposition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "A: {}, C: {}, G: {}, T: {}, N: {}, Sequence Length: {}",
            self.a, self.c, self.g, self.t, self.n, self.len
        )
    }
}

/// Read the first record of a FASTA file.
///
/// # Returns
/// * The sequence name and its upper-cased sequence.
///     * NCBI-style identifiers (`gi|123|gb|NAME|`) are reduced to their fourth field.
pub fn read_fasta(fasta: impl AsRef<Path>) -> eyre::Result<(String, Vec<u8>)> {
    let fasta = fasta.as_ref();
    let reader = fasta::Reader::from_file(fasta)
        .map_err(|err| eyre::eyre!("{err}"))
        .wrap_err_with(|| format!("Cannot open FASTA file, {fasta:?}."))?;
    let record = reader
        .records()
        .next()
        .with_context(|| format!("No records in FASTA file, {fasta:?}."))?
        .wrap_err_with(|| format!("Invalid FASTA record in {fasta:?}."))?;

    let id = record.id();
    let name = id.split('|').nth(3).unwrap_or(id).to_owned();
    let seq = record.seq().to_ascii_uppercase();

    log::info!("{name}: {}", BaseComposition::new(&seq));
    Ok((name, seq))
}

#[cfg(test)]
mod test {
    use super::{complement, read_fasta, revcomp, BaseComposition};

    #[test]
    fn test_complement_unknown() {
        assert_eq!(complement(b'A'), b'T');
        assert_eq!(complement(b'X'), b'X');
        assert_eq!(complement(b'R'), b'N');
        assert_eq!(complement(b'a'), b'N');
    }

    #[test]
    fn test_revcomp_twice() {
        const SEQ: &[u8] = b"TCAGAAACTTCTTTGTGATGNNNNXACGT";
        assert_eq!(revcomp(SEQ), b"ACGTXNNNNCATCACAAAGAAGTTTCTGA");
        assert_eq!(revcomp(&revcomp(SEQ)), SEQ);
        assert!(revcomp(b"").is_empty());
    }

    #[test]
    fn test_base_composition() {
        assert_eq!(
            BaseComposition::new(b"ACGTTGCANNX"),
            BaseComposition {
                a: 2,
                c: 2,
                g: 2,
                t: 2,
                n: 2,
                len: 11
            }
        );
    }

    #[test]
    fn test_read_fasta() {
        let (name, seq) = read_fasta("test/seq.fa").unwrap();
        assert_eq!(name, "NC_000001.11");
        assert_eq!(seq, b"ACGTNNNNACGTACGTTTGCA");
    }

    #[test]
    fn test_read_fasta_missing() {
        assert!(read_fasta("test/missing.fa").is_err());
    }

    #[test]
    fn test_read_fasta_empty() {
        assert!(read_fasta("test/empty.fa").is_err());
        // A record without sequence lines is read as an empty sequence.
        let (name, seq) = read_fasta("test/header_only.fa").unwrap();
        assert_eq!(name, "only_header");
        assert!(seq.is_empty());
    }
}
