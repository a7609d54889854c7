use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

/// Intel 8086 MOV-family disassembler
#[derive(Parser)]
#[command(name = "dis8086", version, about)]
struct Cli {
    /// Input file of raw 8086 machine code
    input: PathBuf,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Decode rules for displacements and direct addresses: literal or hardware
    #[arg(short, long, default_value = "literal")]
    semantics: String,

    /// Append encoded bytes as a trailing comment
    #[arg(long)]
    hex: bool,

    /// Append byte offsets as a trailing comment
    #[arg(long)]
    addresses: bool,

    /// Use uppercase mnemonics (MOV instead of mov)
    #[arg(long)]
    uppercase: bool,

    /// Emit `db` lines for undecodable bytes instead of aborting
    #[arg(long)]
    lenient: bool,

    /// Print a decode summary to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let data = std::fs::read(&cli.input)
        .with_context(|| format!("reading '{}'", cli.input.display()))?;

    let semantics: dis8086::Semantics = cli.semantics.parse()?;

    let options = dis8086::ListingOptions {
        show_hex: cli.hex,
        show_addresses: cli.addresses,
        uppercase: cli.uppercase,
        semantics,
        lenient: cli.lenient,
    };

    let listing = dis8086::generate_listing(&data, &options)
        .with_context(|| format!("decoding '{}'", cli.input.display()))?;

    if cli.verbose {
        print_summary(cli, &data, &listing, semantics);
    }

    let output_text: String = listing.iter().map(|l| format!("{}\n", l.text)).collect();

    if let Some(path) = &cli.output {
        std::fs::write(path, &output_text)
            .with_context(|| format!("writing '{}'", path.display()))?;
    } else {
        print!("{output_text}");
    }

    Ok(())
}

fn print_summary(
    cli: &Cli,
    data: &[u8],
    listing: &[dis8086::ListingLine],
    semantics: dis8086::Semantics,
) {
    let count = |kind: dis8086::LineKind| listing.iter().filter(|l| l.kind == kind).count();
    eprintln!("Input: {} ({} bytes)", cli.input.display(), data.len());
    eprintln!("Semantics: {semantics}");
    eprintln!("Instructions: {}", count(dis8086::LineKind::Instruction));
    eprintln!("Data bytes: {}", count(dis8086::LineKind::Data));
}
