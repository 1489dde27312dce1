use std::io::{self, Write};

use clap::{Parser, ValueEnum};
use log::debug;

use canright_bases::{emit_table, gf_bases, Format, Table};

#[derive(Parser)]
#[command(name = "canright-bases")]
#[command(about = "Print the basis tables used to search for compact AES S-boxes", long_about = None)]
struct Cli {
    /// Output format
    #[arg(short, long, default_value = "hex")]
    format: FormatArg,

    /// Print only this table: GF2_8, GF2_4 or GF2_2
    table: Option<String>,

    /// Print the named field elements instead of the tables
    #[arg(long, conflicts_with = "table")]
    aliases: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Hex,
    Python,
    C,
    Symbolic,
}

impl From<FormatArg> for Format {
    fn from(val: FormatArg) -> Self {
        match val {
            FormatArg::Hex => Format::Hex,
            FormatArg::Python => Format::Python,
            FormatArg::C => Format::C,
            FormatArg::Symbolic => Format::Symbolic,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let format = Format::from(cli.format);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.aliases {
        debug!("listing {} named elements", gf_bases::aliases().len());
        for alias in gf_bases::aliases() {
            writeln!(out, "{} = {:#04x}", alias.name, alias.value)?;
        }

        out.flush()?;
        return Ok(());
    }

    match cli.table {
        Some(name) => {
            let table: Table = name.parse()?;
            debug!("emitting {} ({} rows) as {}", table, table.rows().len(), format);

            out.write_all(emit_table(table, format).as_bytes())?;
            out.flush()?;
        }

        None => {
            debug!("emitting all tables as {}", format);
            canright_bases::write_all(&mut out, format)?;
        }
    }

    Ok(())
}
