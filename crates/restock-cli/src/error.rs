//! CLI error type.

use restock_config::ConfigError;
use restock_core::DataError;
use restock_solver::SolveError;
use thiserror::Error;

/// Anything that can stop a planning run.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read input table: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Solve(#[from] SolveError),
}
