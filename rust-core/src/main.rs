use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use env_logger::Env;
use hall_symmetry::{HallInfo, HallSymbol, LatticeType, OperationList, Result};
use log::{error, info, warn};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "hall-symmetry")]
#[command(about = "Decode Hall symbols and generate space-group operations")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate all symmetry operations of a Hall symbol
    Generate {
        /// Hall symbol, e.g. "-P 2ac 2n"
        symbol: String,

        /// Print the operations as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show how a Hall symbol is decoded term by term
    Dump {
        /// Hall symbol
        symbol: String,
    },
    /// Translate a SHELX LATT value into its Hall lattice symbol
    Lattice {
        /// LATT value, negative for non-centrosymmetric
        #[arg(allow_negative_numbers = true)]
        latt: i32,
    },
    /// Check a file of "symbol;count" lines against the generated operation counts
    Verify {
        /// Input file path
        file: PathBuf,
    },
}

#[derive(Serialize)]
struct GeneratedGroup<'a> {
    symbol: &'a str,
    primitive_symbol: String,
    lattice: LatticeType,
    centrosymmetric: bool,
    operations: &'a OperationList,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    info!("Starting hall-symmetry v{}", hall_symmetry::VERSION);

    match cli.command {
        Commands::Generate { symbol, json } => generate(&symbol, json),
        Commands::Dump { symbol } => dump(&symbol),
        Commands::Lattice { latt } => lattice(latt),
        Commands::Verify { file } => Ok(verify(&file)?),
    }
}

fn generate(text: &str, json: bool) -> Result<()> {
    let symbol = HallSymbol::parse(text)?;
    let operations = symbol.operations();
    info!("{}: {} operations", symbol, operations.len());

    if json {
        let group = GeneratedGroup {
            symbol: symbol.symbol(),
            primitive_symbol: symbol.primitive_symbol(),
            lattice: symbol.lattice(),
            centrosymmetric: symbol.is_centrosymmetric(),
            operations: &operations,
        };
        println!("{}", serde_json::to_string_pretty(&group)?);
        return Ok(());
    }

    for (i, op) in operations.iter().enumerate() {
        println!("operation {}", i + 1);
        print!("{}", op);
    }
    Ok(())
}

fn dump(text: &str) -> Result<()> {
    let info = HallInfo::new(text);
    if let Some(symbol) = info.symbol() {
        print!("{}", symbol.dump_info());
    }
    match info.error() {
        Some(err) => Err(err.clone().into()),
        None => Ok(()),
    }
}

fn lattice(latt: i32) -> Result<()> {
    let symbol = LatticeType::hall_equivalent(latt)
        .ok_or_else(|| format!("LATT {} has no Hall equivalent", latt))?;
    if let Some((lattice, _)) = LatticeType::from_shelx_latt(latt) {
        info!("LATT {}: {}", latt, lattice.designation());
    }
    println!("{}", symbol);
    Ok(())
}

fn verify(path: &Path) -> anyhow::Result<()> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let mut checked = 0;
    let mut failed = 0;
    for (line_no, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (text, count) = line
            .rsplit_once(';')
            .with_context(|| format!("line {}: expected 'symbol;count'", line_no + 1))?;
        let expected: usize = count
            .trim()
            .parse()
            .with_context(|| format!("line {}: bad operation count '{}'", line_no + 1, count))?;

        checked += 1;
        let result = HallSymbol::parse(text).and_then(|symbol| {
            let mut operations = OperationList::with_identity();
            symbol.generate_checked(&mut operations, expected)
        });
        if let Err(err) = result {
            if !matches!(err, hall_symmetry::HallError::OperatorMismatch { .. }) {
                error!("line {}: {}", line_no + 1, err);
            }
            println!("FAIL {}", err);
            failed += 1;
        }
    }

    if checked == 0 {
        warn!("No Hall symbols found in {}", path.display());
    }
    println!("{} checked, {} failed", checked, failed);
    if failed > 0 {
        return Err(anyhow!("{} of {} Hall symbols failed", failed, checked));
    }
    Ok(())
}
