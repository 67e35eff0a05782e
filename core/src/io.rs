use std::{
    fs::File,
    io::{BufRead, BufReader, Write},
    path::Path,
    str::FromStr,
};

use eyre::{bail, WrapErr};
use itertools::Itertools;

use crate::Monomer;

/// Read [`Monomer`] records from a file.
///
/// # Args
/// * `infile`
///     * Path to a file of whitespace-delimited monomer records.
/// * `start`
///     * Number of leading lines to skip.
///
/// # Returns
/// * [`Monomer`]s in file order.
///
/// # Examples
/// ```
/// use rs_grm_hor::read_monomers;
///
/// let monomers = read_monomers("test/mons.mon", 0).unwrap();
/// assert_eq!(monomers.len(), 8);
/// ```
pub fn read_monomers(infile: impl AsRef<Path>, start: usize) -> eyre::Result<Vec<Monomer>> {
    let infile = infile.as_ref();
    let file =
        File::open(infile).wrap_err_with(|| format!("Cannot open monomer file, {infile:?}."))?;
    parse_monomers(BufReader::new(file), start)
}

/// Parse [`Monomer`] records.
/// * Lines with 6 fields are full records.
/// * Lines with a single field are bare sequence fragments. See [`Monomer::from_fragment`].
/// * Blank lines are skipped.
///
/// # Errors
/// * Any line with a different number of fields, or a record that fails to parse.
pub fn parse_monomers(reader: impl BufRead, start: usize) -> eyre::Result<Vec<Monomer>> {
    let mut monomers = vec![];
    for (i, line) in reader.lines().enumerate().skip(start) {
        let line = line?;
        let fields = line.split_whitespace().collect_vec();
        let mon = match fields[..] {
            [] => continue,
            [seq] => Monomer::from_fragment(i, seq.as_bytes()),
            [_, _, _, _, _, _] => Monomer::from_str(&line)
                .wrap_err_with(|| format!("Invalid monomer record on line {}.", i + 1))?,
            _ => bail!(
                "Invalid monomer record on line {}. Expected 6 fields or a sequence, found {} fields.",
                i + 1,
                fields.len()
            ),
        };
        monomers.push(mon);
    }
    log::info!("Read {} monomers.", monomers.len());
    Ok(monomers)
}

/// Write [`Monomer`]s as records, one per line.
///
/// ```
/// use rs_grm_hor::{parse_monomers, write_monomers};
///
/// let monomers = parse_monomers("0 0 0.00 0 d ACGT\n171 171 1.75 2 r TTGA\n".as_bytes(), 0).unwrap();
/// let mut out = vec![];
/// write_monomers(&mut out, &monomers).unwrap();
/// assert_eq!(parse_monomers(&out[..], 0).unwrap(), monomers);
/// ```
pub fn write_monomers(writer: &mut impl Write, monomers: &[Monomer]) -> eyre::Result<()> {
    for mon in monomers {
        writeln!(writer, "{mon}")?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod test {
    use itertools::Itertools;

    use super::{parse_monomers, read_monomers, write_monomers};
    use crate::{Monomer, Orientation};

    #[test]
    fn test_read_monomers() {
        let monomers = read_monomers("test/mons.mon", 0).unwrap();
        assert_eq!(
            monomers.iter().map(|m| (m.pos, m.dst)).collect_vec(),
            [
                (3452, 3452),
                (3623, 171),
                (3794, 171),
                (3965, 171),
                (4136, 171),
                (4307, 171),
                (6210, 1903),
                (6381, 171)
            ]
        );
        assert_eq!(monomers[1].div, 12.28);
        assert_eq!(monomers[6].ort, Orientation::ReverseComplement);
    }

    #[test]
    fn test_read_monomers_start() {
        let monomers = read_monomers("test/mons.mon", 6).unwrap();
        assert_eq!(monomers.iter().map(|m| m.pos).collect_vec(), [6210, 6381]);
    }

    #[test]
    fn test_read_monomers_missing() {
        assert!(read_monomers("test/missing.mon", 0).is_err());
    }

    #[test]
    fn test_parse_fragments() {
        let monomers = parse_monomers("ACGTACGT\n\nTTGCA\n".as_bytes(), 0).unwrap();
        assert_eq!(
            monomers,
            [
                Monomer::from_fragment(0, b"ACGTACGT"),
                Monomer::from_fragment(2, b"TTGCA")
            ]
        );
        assert_eq!(monomers[1].dst, 5);
    }

    #[test]
    fn test_parse_malformed() {
        let err = parse_monomers("0 0 0.00 0 d ACGT\n171 171 d ACGT\n".as_bytes(), 0).unwrap_err();
        assert!(err.to_string().contains("line 2"));
        // Six fields that don't parse.
        assert!(parse_monomers("0 0 0.00 0 x ACGT\n".as_bytes(), 0).is_err());
    }

    #[test]
    fn test_write_roundtrip() {
        let monomers = read_monomers("test/mons.mon", 0).unwrap();
        let mut out = vec![];
        write_monomers(&mut out, &monomers).unwrap();
        let expected = std::fs::read_to_string("test/mons.mon").unwrap();
        assert_eq!(String::from_utf8(out.clone()).unwrap(), expected);
        assert_eq!(parse_monomers(&out[..], 0).unwrap(), monomers);
    }
}
