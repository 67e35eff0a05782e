use std::{fmt::Display, str::FromStr};

use eyre::bail;

/// Strand a [`super::Monomer`] was detected on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Direct,
    ReverseComplement,
}

impl Orientation {
    pub fn char(&self) -> char {
        match self {
            Orientation::Direct => 'd',
            Orientation::ReverseComplement => 'r',
        }
    }
}

impl FromStr for Orientation {
    type Err = eyre::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "d" | "direct" => Orientation::Direct,
            "r" | "reverse" => Orientation::ReverseComplement,
            _ => bail!("Invalid orientation, {s}."),
        })
    }
}

impl TryFrom<char> for Orientation {
    type Error = eyre::Error;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        Ok(match value {
            'd' => Orientation::Direct,
            'r' => Orientation::ReverseComplement,
            _ => bail!("Invalid orientation, {value}."),
        })
    }
}

impl Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.char())
    }
}
