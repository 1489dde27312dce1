//! Lookup of the basis tables by name.

use core::{fmt, str::FromStr};

use gf_bases::Basis;
use static_assertions::const_assert_eq;

use crate::Error;

const_assert_eq!(gf_bases::GF2_8_ROWS, 24);
const_assert_eq!(gf_bases::GF2_4_ROWS, 6);
const_assert_eq!(gf_bases::GF2_2_ROWS, 3);

/// One of the three basis tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Table {
    /// Bases of GF(2⁸) over GF(2⁴).
    Gf2_8,

    /// Bases of GF(2⁴) over GF(2²).
    Gf2_4,

    /// Bases of GF(2²) over GF(2).
    Gf2_2,
}

impl Table {
    /// Every table, in the order they are emitted.
    pub const ALL: [Table; 3] = [Table::Gf2_8, Table::Gf2_4, Table::Gf2_2];

    /// The identifier used to look up this table.
    pub fn name(self) -> &'static str {
        match self {
            Table::Gf2_8 => "GF2_8",
            Table::Gf2_4 => "GF2_4",
            Table::Gf2_2 => "GF2_2",
        }
    }

    pub fn rows(self) -> &'static [Basis] {
        match self {
            Table::Gf2_8 => &gf_bases::GF2_8,
            Table::Gf2_4 => &gf_bases::GF2_4,
            Table::Gf2_2 => &gf_bases::GF2_2,
        }
    }

    /// The degree of the field whose bases this table lists.
    pub fn subfield_bits(self) -> u32 {
        match self {
            Table::Gf2_8 => 8,
            Table::Gf2_4 => 4,
            Table::Gf2_2 => 2,
        }
    }
}

impl FromStr for Table {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Table::ALL.iter()
            .copied()
            .find(|t| t.name() == s)
            .ok_or_else(|| Error::InvalidArgument(format!("unknown table {:?}", s)))
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns the rows of the table called `name` (`"GF2_8"`, `"GF2_4"` or `"GF2_2"`).
pub fn get_table(name: &str) -> crate::Result<&'static [Basis]> {
    name.parse::<Table>().map(Table::rows)
}

#[cfg(test)]
mod tests {
    use rand::{Rng, distributions::Alphanumeric};

    use super::*;

    #[test]
    fn lookup() {
        assert_eq!(get_table("GF2_8").unwrap().len(), 24);
        assert_eq!(get_table("GF2_4").unwrap().len(), 6);
        assert_eq!(get_table("GF2_2").unwrap().len(), 3);
        assert_eq!(get_table("GF2_4").unwrap()[0].bytes(), [0xe0, 0xe1]);
    }

    #[test]
    fn names_are_exact() {
        for name in &["bogus", "", "gf2_8", "GF2_8 ", "GF2_16", "GF(2^8)"] {
            match get_table(name) {
                Err(Error::InvalidArgument(_)) => {}
                other => panic!("{:?} was accepted: {:?}", name, other),
            }
        }
    }

    #[test]
    fn random_names_are_rejected() {
        let mut rng = rand::thread_rng();

        for _ in 0..1000 {
            let len = rng.gen_range(0, 8);
            let name: String = rng.sample_iter(&Alphanumeric).take(len).collect();

            // Table names contain '_', which `Alphanumeric` never produces.
            assert!(get_table(&name).is_err(), "{:?}", name);
        }
    }

    #[test]
    fn name_round_trip() {
        for &t in Table::ALL.iter() {
            assert_eq!(t.name().parse::<Table>(), Ok(t));
            assert_eq!(t.to_string(), t.name());
        }
    }

    #[test]
    fn subfield_bits() {
        let bits: Vec<_> = Table::ALL.iter().map(|t| t.subfield_bits()).collect();
        assert_eq!(bits, [8, 4, 2]);
    }

    #[test]
    fn reads_are_stable() {
        let first = get_table("GF2_8").unwrap();
        let second = get_table("GF2_8").unwrap();
        assert_eq!(first.as_ptr(), second.as_ptr());
        assert_eq!(first, second);
    }
}
