//! # Divider CLI
//!
//! Command-line harness for the voltage divider solver. One-shot
//! subcommands mirror the two calculator forms; `json` accepts a
//! `CalculationRequest` document for scripted or LLM use; `repl` drives the
//! headless form interactively.
//!
//! Exit status is 0 on success and 1 on any calculation or harness error.
//! Set `RUST_LOG=divider_core=debug` to trace the solver.

mod config;
mod repl;
mod report;

use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use divider_core::calculations::{
    calculate_item, CalculationItem, CalculationRequest, ThreeResistorInput, TwoTerminalInput,
};
use divider_core::measurement::ResistorEntry;
use divider_core::{CalcResult, UnitPolicy, UnitScale};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "divider")]
#[command(version)]
#[command(about = "Solve resistive voltage dividers")]
struct Cli {
    /// Load solver settings from this TOML file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print results and errors as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Treat unrecognized unit tags as Ω instead of rejecting them
    #[arg(long, global = true)]
    lenient_units: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Voltage across each of three series resistors
    Three(ThreeArgs),
    /// Solve a two-resistor divider for the value left out
    Two(TwoArgs),
    /// Calculate a JSON calculation request read from FILE (or stdin)
    Json {
        /// Path to the JSON document; '-' or nothing reads stdin
        file: Option<PathBuf>,
    },
    /// Interactive prompt over the calculator form
    Repl,
}

#[derive(Args, Debug)]
struct ThreeArgs {
    /// Input voltage (V)
    #[arg(long, allow_hyphen_values = true)]
    vin: String,

    #[arg(long, allow_hyphen_values = true)]
    r1: String,

    #[arg(long, default_value = "Ω")]
    r1_unit: String,

    #[arg(long, allow_hyphen_values = true)]
    r2: String,

    #[arg(long, default_value = "Ω")]
    r2_unit: String,

    #[arg(long, allow_hyphen_values = true)]
    r3: String,

    #[arg(long, default_value = "Ω")]
    r3_unit: String,
}

impl ThreeArgs {
    fn to_input(&self, policy: UnitPolicy) -> CalcResult<ThreeResistorInput> {
        Ok(ThreeResistorInput {
            vin: self.vin.clone(),
            r1: entry(&self.r1, &self.r1_unit, policy)?,
            r2: entry(&self.r2, &self.r2_unit, policy)?,
            r3: entry(&self.r3, &self.r3_unit, policy)?,
        })
    }
}

/// Leave exactly one of Vs, R1, R2, Vout out to solve for it
#[derive(Args, Debug)]
struct TwoArgs {
    /// Source voltage (V)
    #[arg(long, allow_hyphen_values = true)]
    vs: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    r1: Option<String>,

    #[arg(long, default_value = "Ω")]
    r1_unit: String,

    #[arg(long, allow_hyphen_values = true)]
    r2: Option<String>,

    #[arg(long, default_value = "Ω")]
    r2_unit: String,

    /// Output voltage across R2 (V)
    #[arg(long, allow_hyphen_values = true)]
    vout: Option<String>,
}

impl TwoArgs {
    fn to_input(&self, policy: UnitPolicy) -> CalcResult<TwoTerminalInput> {
        Ok(TwoTerminalInput {
            vs: self.vs.clone().unwrap_or_default(),
            r1: entry(self.r1.as_deref().unwrap_or_default(), &self.r1_unit, policy)?,
            r2: entry(self.r2.as_deref().unwrap_or_default(), &self.r2_unit, policy)?,
            vout: self.vout.clone().unwrap_or_default(),
        })
    }
}

fn entry(text: &str, unit: &str, policy: UnitPolicy) -> CalcResult<ResistorEntry> {
    Ok(ResistorEntry::new(text, UnitScale::resolve(unit, policy)?))
}

/// Read a request document. Unit tags are resolved later so the unit policy
/// applies and a bad tag is reported as `InvalidUnit`.
fn read_request(file: Option<&Path>) -> Result<CalculationRequest> {
    let content = match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).context("Failed to read stdin")?;
            buf
        }
    };
    serde_json::from_str(&content).context("Invalid calculation JSON")
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let mut settings = config::load(cli.config.as_deref())?;
    if cli.lenient_units {
        settings = settings.with_unit_policy(UnitPolicy::Lenient);
    }
    let policy = settings.unit_policy;

    let item = match &cli.command {
        Command::Repl => {
            repl::run(&settings, cli.json)?;
            return Ok(ExitCode::SUCCESS);
        }
        Command::Json { file } => read_request(file.as_deref())?.resolve(policy),
        Command::Three(args) => args.to_input(policy).map(CalculationItem::ThreeResistor),
        Command::Two(args) => args.to_input(policy).map(CalculationItem::TwoTerminal),
    };

    match item.and_then(|item| calculate_item(&item, &settings)) {
        Ok(outcome) => {
            report::write_outcome(&mut io::stdout(), &outcome, &settings, cli.json)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            tracing::debug!(code = err.error_code(), "calculation failed");
            report::write_error(&mut io::stderr(), &err, cli.json)?;
            Ok(ExitCode::FAILURE)
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
