//! Basis constants for Canright's composite-field AES S-box.
//!
//! The S-box inverse can be computed in GF(2⁸) represented as GF(((2²)²)²), where each level is
//! spanned by a pair of conjugates. This crate lists the candidate pairs for every level as
//! constant data: [`GF2_8`], [`GF2_4`] and [`GF2_2`]. All bytes are written in the polynomial
//! basis of GF(2⁸)/(x⁸ + x⁴ + x³ + x + 1).
//!
//! Each byte is also reachable by the name it is known by in the literature (`d16`, `alpha4`,
//! `omega2`, ...). See the [`symbolic`] module.

#![cfg_attr(not(test), no_std)]

use core::fmt;

pub mod symbolic;
mod tables;

pub use self::symbolic::{alias, aliases, Alias};
pub use self::tables::{GF2_2, GF2_4, GF2_8, GF2_2_ROWS, GF2_4_ROWS, GF2_8_ROWS};

/// A pair of field elements spanning one level of the tower.
///
/// Rows come in two shapes: `[x^k, x]`, a normal basis formed by two conjugates, and `[x, 1]`, a
/// polynomial basis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Basis(pub Alias, pub Alias);

impl Basis {
    /// The two elements of this basis as raw bytes.
    pub const fn bytes(&self) -> [u8; 2] {
        [self.0.value, self.1.value]
    }

    /// The names of the two elements.
    pub const fn names(&self) -> [&'static str; 2] {
        [self.0.name, self.1.name]
    }

    /// Returns `true` if this row has the shape `[x, 1]`.
    ///
    /// This only looks at the names used to write the row down. It says nothing about whether the
    /// pair is linearly independent.
    pub fn is_polynomial(&self) -> bool {
        self.1 == symbolic::ONE
    }
}

impl From<Basis> for [u8; 2] {
    fn from(basis: Basis) -> Self {
        basis.bytes()
    }
}

impl fmt::Display for Basis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.0, self.1)
    }
}
