//! enmascara CLI - synthetic Spanish identifiers from the command line
//!
//! Usage:
//! ```bash
//! enmascara iban --bank 1465 --branch 0000 --count 5
//! enmascara bban --bank random --seed 42
//! enmascara nid --kind foreign --json
//! enmascara validate iban ES9121000418450200051332
//! enmascara banks
//! ```

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use enmascara::bank::{self, Bban, DEFAULT_BANK_CODE, DEFAULT_BRANCH_CODE, Iban};
use enmascara::national_id::{NationalId, NationalIdKind};

/// Deterministic generator of checksum-correct Spanish identifiers
#[derive(Parser)]
#[command(name = "enmascara")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase output verbosity
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Seed for reproducible output
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// How many identifiers to generate
    #[arg(short = 'n', long, default_value_t = 1, global = true)]
    count: usize,

    /// Emit JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,

    /// Group digits the way they are printed on paper
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Spanish IBANs
    Iban(AccountArgs),

    /// Generate Spanish BBANs (CCC)
    Bban(AccountArgs),

    /// Generate DNI/NIE numbers
    Nid {
        /// Document kind (both are equally likely when omitted)
        #[arg(long)]
        kind: Option<KindArg>,
    },

    /// Validate an identifier, exiting with status 1 when invalid
    Validate {
        /// Identifier format
        format: FormatArg,
        /// The identifier to check
        code: String,
    },

    /// List the bank registry
    Banks,
}

#[derive(clap::Args)]
struct AccountArgs {
    /// 4-digit bank code, or "random" for any registered bank
    #[arg(long, default_value = DEFAULT_BANK_CODE)]
    bank: String,
    /// 4-digit branch code
    #[arg(long, default_value = DEFAULT_BRANCH_CODE)]
    branch: String,
    /// 10-digit account number (random when omitted)
    #[arg(long)]
    account: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    National,
    Foreign,
}

impl From<KindArg> for NationalIdKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::National => NationalIdKind::National,
            KindArg::Foreign => NationalIdKind::Foreign,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Iban,
    Bban,
    Nid,
}

#[derive(Serialize)]
struct BankRow {
    code: &'static str,
    name: &'static str,
    bic: Option<&'static str>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "enmascara=debug"
    } else {
        "enmascara=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
    debug!("verbose mode activated");
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let mut rng = match cli.seed {
        Some(seed) => {
            info!(seed, "using seeded generator");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    match &cli.command {
        Commands::Iban(args) => {
            let mut out = Vec::with_capacity(cli.count);
            for _ in 0..cli.count {
                let bank = pick_bank(&mut rng, &args.bank);
                let iban =
                    Iban::generate_with_rng(&mut rng, bank, &args.branch, args.account.as_deref())
                        .with_context(|| format!("cannot generate IBAN for bank {bank}"))?;
                let text = if cli.pretty {
                    iban.formatted()
                } else {
                    iban.to_string()
                };
                out.push((iban, text));
            }
            emit(cli.json, out)?;
        }
        Commands::Bban(args) => {
            let mut out = Vec::with_capacity(cli.count);
            for _ in 0..cli.count {
                let bank = pick_bank(&mut rng, &args.bank);
                let bban =
                    Bban::generate_with_rng(&mut rng, bank, &args.branch, args.account.as_deref())
                        .with_context(|| format!("cannot generate BBAN for bank {bank}"))?;
                let text = if cli.pretty {
                    bban.formatted()
                } else {
                    bban.to_string()
                };
                out.push((bban, text));
            }
            emit(cli.json, out)?;
        }
        Commands::Nid { kind } => {
            let out = (0..cli.count)
                .map(|_| {
                    let id = NationalId::generate_with_rng(&mut rng, kind.map(Into::into));
                    let text = id.to_string();
                    (id, text)
                })
                .collect();
            emit(cli.json, out)?;
        }
        Commands::Validate { format, code } => {
            let result = match format {
                FormatArg::Iban => Iban::validate(code).map(|_| ()).map_err(|e| e.to_string()),
                FormatArg::Bban => Bban::validate(code).map(|_| ()).map_err(|e| e.to_string()),
                FormatArg::Nid => NationalId::parse(code)
                    .map(|_| ())
                    .map_err(|e| e.to_string()),
            };
            return Ok(match result {
                Ok(()) => {
                    println!("{code}: valid");
                    ExitCode::SUCCESS
                }
                Err(reason) => {
                    eprintln!("{code}: {reason}");
                    ExitCode::FAILURE
                }
            });
        }
        Commands::Banks => {
            let rows: Vec<BankRow> = bank::banks()
                .map(|b| BankRow {
                    code: b.code(),
                    name: b.name(),
                    bic: b.bic(),
                })
                .collect();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                for row in rows {
                    println!("{} {} {}", row.code, row.name, row.bic.unwrap_or("-"));
                }
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn pick_bank<'a>(rng: &mut dyn RngCore, requested: &'a str) -> &'a str {
    if requested.eq_ignore_ascii_case("random") {
        bank::random_bank(rng).code()
    } else {
        requested
    }
}

fn emit<T: Serialize>(json: bool, items: Vec<(T, String)>) -> Result<()> {
    if json {
        let values: Vec<&T> = items.iter().map(|(value, _)| value).collect();
        println!("{}", serde_json::to_string_pretty(&values)?);
    } else {
        for (_, text) in items {
            println!("{text}");
        }
    }
    Ok(())
}
