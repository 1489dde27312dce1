use crate::Basis;
use crate::symbolic::*;

pub const GF2_8_ROWS: usize = 24;
pub const GF2_4_ROWS: usize = 6;
pub const GF2_2_ROWS: usize = 3;

/// Bases of GF(2⁸) over GF(2⁴).
///
/// The first eight rows are normal bases `[x¹⁶, x]`, the remaining sixteen polynomial bases
/// `[x, 1]`.
pub static GF2_8: [Basis; GF2_8_ROWS] = [
    Basis(D16, D),
    Basis(D32, D2),
    Basis(D64, D4),
    Basis(D128, D8),
    Basis(L16, L),
    Basis(L32, L2),
    Basis(L64, L4),
    Basis(L128, L8),

    Basis(D, ONE),
    Basis(D16, ONE),
    Basis(D2, ONE),
    Basis(D32, ONE),
    Basis(D4, ONE),
    Basis(D64, ONE),
    Basis(D8, ONE),
    Basis(D128, ONE),
    Basis(L, ONE),
    Basis(L16, ONE),
    Basis(L2, ONE),
    Basis(L32, ONE),
    Basis(L4, ONE),
    Basis(L64, ONE),
    Basis(L8, ONE),
    Basis(L128, ONE),
];

/// Bases of GF(2⁴) over GF(2²).
pub static GF2_4: [Basis; GF2_4_ROWS] = [
    Basis(ALPHA4, ALPHA),
    Basis(ALPHA8, ALPHA2),

    Basis(ALPHA, ONE),
    Basis(ALPHA4, ONE),
    Basis(ALPHA2, ONE),
    Basis(ALPHA8, ONE),
];

/// Bases of GF(2²) over GF(2).
pub static GF2_2: [Basis; GF2_2_ROWS] = [
    Basis(OMEGA2, OMEGA),

    Basis(OMEGA, ONE),
    Basis(OMEGA2, ONE),
];
