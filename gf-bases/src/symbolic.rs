//! Named elements of GF(2⁸).
//!
//! Every byte in the tables is one of a handful of field elements together with its conjugates
//! under the Frobenius map `x ↦ x²`. The suffix of each name is the power, so `D16` is `d¹⁶`.

use core::fmt;

/// A byte with the name it is written as in the tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Alias {
    pub name: &'static str,
    pub value: u8,
}

impl fmt::Display for Alias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

macro_rules! named_elements {
    ($( $(#[$meta:meta])* $ident:ident = $name:literal, $value:literal; )*) => {
        $(
            $(#[$meta])*
            pub const $ident: Alias = Alias { name: $name, value: $value };
        )*

        const ALL: &[Alias] = &[ $( $ident ),* ];
    }
}

named_elements! {
    /// The multiplicative identity.
    ONE = "one", 0x01;

    /// Generates the normal basis of GF(2⁸) over GF(2⁴).
    D = "d", 0xff;
    D2 = "d2", 0x13;
    D4 = "d4", 0x1e;
    D8 = "d8", 0x4f;
    D128 = "d128", 0x4e;
    D64 = "d64", 0x1f;
    D32 = "d32", 0x12;
    D16 = "d16", 0xfe;

    /// A second root over GF(2⁴), alternative to `d`.
    L = "L", 0xa2;
    L2 = "L2", 0xf2;
    L4 = "L4", 0x42;
    L8 = "L8", 0xaf;
    L16 = "L16", 0xa3;
    L32 = "L32", 0xf3;
    L64 = "L64", 0x43;
    L128 = "L128", 0xae;

    /// Generates GF(2⁴) over GF(2²).
    ALPHA = "alpha", 0xe1;
    ALPHA2 = "alpha2", 0x5c;
    ALPHA4 = "alpha4", 0xe0;
    ALPHA8 = "alpha8", 0x5d;

    /// Generates GF(2²) over GF(2).
    OMEGA = "omega", 0xbd;
    OMEGA2 = "omega2", 0xbc;
}

/// All named elements, in the order they are introduced above.
pub fn aliases() -> &'static [Alias] {
    ALL
}

/// Looks up a named element. Names are case-sensitive (`L8`, but `alpha8`).
pub fn alias(name: &str) -> Option<Alias> {
    ALL.iter().copied().find(|a| a.name == name)
}
