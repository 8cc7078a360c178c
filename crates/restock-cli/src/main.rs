//! restock - procurement reorder optimizer.
//!
//! Reads the items, suppliers and pricing tables, builds the purchasing
//! model and prints the optimal plan.
//!
//! Run with: `restock --items data/items.csv --suppliers data/suppliers.csv
//! --pricing data/pricing.csv`

mod error;
mod input;
mod report;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use restock_config::{ConfigError, PlanConfig, SolveMode};
use restock_core::Dataset;
use restock_solver::SolveError;
use tracing_subscriber::EnvFilter;

use error::CliError;

#[derive(Debug, Parser)]
#[command(
    name = "restock",
    version,
    about = "Optimize which items to reorder, from which suppliers, in how many pallets"
)]
struct Args {
    /// Items table (CSV)
    #[arg(long, value_name = "FILE")]
    items: PathBuf,

    /// Suppliers table (CSV)
    #[arg(long, value_name = "FILE")]
    suppliers: PathBuf,

    /// Pricing table (CSV)
    #[arg(long, value_name = "FILE")]
    pricing: PathBuf,

    /// Planning configuration (TOML, or YAML by extension)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Solve the continuous relaxation instead of the integer program
    #[arg(long)]
    relaxed: bool,

    /// Print a preview of each input table before solving
    #[arg(long)]
    preview: bool,
}

fn main() -> ExitCode {
    let filter = EnvFilter::builder()
        .with_default_directive("restock_solver=info".parse().unwrap())
        .from_env_lossy()
        .add_directive("restock_model=info".parse().unwrap());
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Solve(SolveError::NoFeasiblePlan)) => {
            report::print_infeasible();
            ExitCode::from(1)
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(2)
        }
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let (items, suppliers, pricing) =
        input::load_tables(&args.items, &args.suppliers, &args.pricing)?;

    if args.preview {
        report::preview_items(&items);
        report::preview_suppliers(&suppliers);
        report::preview_pricing(&pricing);
    }

    let dataset = Dataset::from_records(items, suppliers, pricing)?;

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => PlanConfig::default(),
    };
    if args.relaxed {
        config = config.with_mode(SolveMode::ContinuousRelaxation);
    }

    let plan = restock_solver::plan_purchases(&dataset, &config)?;
    report::print_plan(&plan);
    Ok(())
}

fn load_config(path: &Path) -> Result<PlanConfig, ConfigError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml" | "yml") => PlanConfig::from_yaml_file(path),
        _ => PlanConfig::from_toml_file(path),
    }
}
