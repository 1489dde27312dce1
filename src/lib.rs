//! Basis tables for Canright's compact AES S-box.
//!
//! Canright computes the AES S-box inverse in a tower of subfields, GF(2⁸) over GF(2⁴) over GF(2²)
//! over GF(2). Which basis is chosen at each level changes the cost of the resulting circuit, so a
//! search over all combinations needs every candidate basis as input. This crate provides them:
//!
//! | Table   | Rows | Level               |
//! | ------- | ---- | ------------------- |
//! | `GF2_8` | 24   | GF(2⁸) over GF(2⁴)  |
//! | `GF2_4` | 6    | GF(2⁴) over GF(2²)  |
//! | `GF2_2` | 3    | GF(2²) over GF(2)   |
//!
//! The constants themselves live in the [`gf_bases`] crate. This crate looks them up by name and
//! renders them as text, either as hex pairs or as source code for a downstream search program.
//!
//! ```
//! use canright_bases::{get_table, emit_all, Format};
//!
//! let gf2_8 = get_table("GF2_8").unwrap();
//! assert_eq!(gf2_8[0].bytes(), [0xfe, 0xff]);
//!
//! assert!(get_table("GF2_16").is_err());
//! assert!(emit_all(Format::Hex).starts_with("GF2_8:\n0xfe, 0xff\n"));
//! ```

mod emit;
mod error;
mod table;

pub use gf_bases::{self, Alias, Basis};

pub use self::emit::{emit_all, emit_table, write_all, write_table, Format};
pub use self::error::Error;
pub use self::table::{get_table, Table};

pub type Result<T> = core::result::Result<T, Error>;
