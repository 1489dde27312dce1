//! Textual renderings of the basis tables.

use core::{fmt::{self, Write}, str::FromStr};
use std::io;

use gf_bases::Basis;

use crate::{Error, Table};

/// How the tables are written out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Format {
    /// A `GF2_8:` header, then one `0xfe, 0xff` row per line.
    Hex,

    /// One `GF2_8 = [[254, 255], ...]` list literal per table.
    Python,

    /// `static const uint8_t` array definitions.
    C,

    /// Like `Hex`, but rows are written with element names (`d16, d`).
    Symbolic,
}

impl Default for Format {
    fn default() -> Self {
        Format::Hex
    }
}

impl Format {
    pub const ALL: [Format; 4] = [Format::Hex, Format::Python, Format::C, Format::Symbolic];

    pub fn name(self) -> &'static str {
        match self {
            Format::Hex => "hex",
            Format::Python => "python",
            Format::C => "c",
            Format::Symbolic => "symbolic",
        }
    }

    /// The text placed between two consecutive tables.
    fn separator(self) -> &'static str {
        match self {
            Format::Python => "",
            _ => "\n",
        }
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Format::ALL.iter()
            .copied()
            .find(|f| f.name() == s)
            .ok_or_else(|| Error::InvalidArgument(format!("unknown format {:?}", s)))
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn write_hex(w: &mut impl Write, table: Table) -> fmt::Result {
    writeln!(w, "{}:", table)?;
    for row in table.rows() {
        let [a, b] = row.bytes();
        writeln!(w, "{:#04x}, {:#04x}", a, b)?;
    }

    Ok(())
}

fn write_python(w: &mut impl Write, table: Table) -> fmt::Result {
    write!(w, "{} = [", table)?;
    for (i, row) in table.rows().iter().enumerate() {
        if i != 0 {
            w.write_str(", ")?;
        }

        let [a, b] = row.bytes();
        write!(w, "[{}, {}]", a, b)?;
    }

    w.write_str("]\n")
}

fn write_c(w: &mut impl Write, table: Table) -> fmt::Result {
    let rows = table.rows();

    writeln!(w, "static const uint8_t {}[{}][2] = {{", table, rows.len())?;
    for row in rows {
        let [a, b] = row.bytes();
        writeln!(w, "  {{0x{:02X}, 0x{:02X}}},", a, b)?;
    }

    w.write_str("};\n")
}

fn write_symbolic(w: &mut impl Write, table: Table) -> fmt::Result {
    writeln!(w, "{}:", table)?;
    for row in table.rows() {
        let Basis(a, b) = row;
        let kind = if row.is_polynomial() { "polynomial" } else { "normal" };

        let pair = format!("{}, {}", a, b);
        writeln!(w, "{:<15}# {}", pair, kind)?;
    }

    Ok(())
}

/// Writes a single table to `w`.
pub fn write_table(w: &mut impl Write, table: Table, format: Format) -> fmt::Result {
    match format {
        Format::Hex => write_hex(w, table),
        Format::Python => write_python(w, table),
        Format::C => write_c(w, table),
        Format::Symbolic => write_symbolic(w, table),
    }
}

/// Renders a single table. The result always ends with a newline.
pub fn emit_table(table: Table, format: Format) -> String {
    let mut out = String::new();

    // Formatting into a `String` is infallible.
    let _ = write_table(&mut out, table, format);
    out
}

/// Renders all three tables, `GF2_8` first and `GF2_2` last.
///
/// The output depends only on `format`.
pub fn emit_all(format: Format) -> String {
    let mut out = String::new();

    for (i, &table) in Table::ALL.iter().enumerate() {
        if i != 0 {
            out.push_str(format.separator());
        }

        log::trace!("rendering {} as {}", table, format);
        let _ = write_table(&mut out, table, format);
    }

    out
}

/// Writes `emit_all(format)` to `writer`.
pub fn write_all(mut writer: impl io::Write, format: Format) -> io::Result<()> {
    writer.write_all(emit_all(format).as_bytes())?;
    writer.flush()
}
