use std::str::FromStr;

use eyre::{bail, WrapErr};
use itertools::Itertools;

use super::{Monomer, Orientation};

impl FromStr for Monomer {
    type Err = eyre::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((pos, dst, div, div2, ort, seq)) = s.split_whitespace().collect_tuple() else {
            bail!("Invalid monomer record, {s}. Expected 6 whitespace-delimited fields.")
        };
        Ok(Monomer {
            pos: pos
                .parse()
                .wrap_err_with(|| format!("Invalid monomer position, {pos}."))?,
            dst: dst
                .parse()
                .wrap_err_with(|| format!("Invalid monomer distance, {dst}."))?,
            div: div
                .parse()
                .wrap_err_with(|| format!("Invalid monomer divergence, {div}."))?,
            div2: div2
                .parse()
                .wrap_err_with(|| format!("Invalid monomer probe divergence, {div2}."))?,
            ort: Orientation::from_str(ort)?,
            seq: seq.as_bytes().to_vec(),
        })
    }
}

#[cfg(test)]
mod test {
    use crate::{Monomer, Orientation};

    #[test]
    fn test_parse_record() {
        const REC: &str = "2732060 171 12.87 2 r TCAGAAACTTCTTTGTGATG";
        assert_eq!(
            Monomer::new(REC).unwrap(),
            Monomer {
                pos: 2732060,
                dst: 171,
                div: 12.87,
                div2: 2,
                ort: Orientation::ReverseComplement,
                seq: b"TCAGAAACTTCTTTGTGATG".to_vec(),
            }
        );
    }

    #[test]
    fn test_parse_tabs_and_padding() {
        let mon = Monomer::new("  10\t10\t0.00\t0\td\tACGT \n").unwrap();
        assert_eq!(mon.pos, 10);
        assert_eq!(mon.seq, b"ACGT");
    }

    #[test]
    fn test_invalid_record() {
        // Too few fields.
        assert!(Monomer::new("10 10 0.00 0 d").is_err());
        // Too many fields.
        assert!(Monomer::new("10 10 0.00 0 d ACGT extra").is_err());
        // Negative position.
        assert!(Monomer::new("-10 10 0.00 0 d ACGT").is_err());
        // Unknown orientation.
        assert!(Monomer::new("10 10 0.00 0 + ACGT").is_err());
        // Non-numeric divergence.
        assert!(Monomer::new("10 10 low 0 d ACGT").is_err());
    }

    #[test]
    fn test_record_roundtrip() {
        const REC: &str = "164 164 3.51 1 d ACGTNNNN";
        let mon = Monomer::new(REC).unwrap();
        assert_eq!(format!("{mon}"), REC);
        assert_eq!(Monomer::new(&format!("{mon}")).unwrap(), mon);
    }
}
