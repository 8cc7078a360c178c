//! Restock Solver - Solver engine boundary and plan interpretation
//!
//! This crate owns everything past model assembly:
//! - The [`SolverEngine`] trait the model is submitted through
//! - The microlp-backed engine used by default
//! - The result interpreter mapping solved values back into a
//!   [`PurchasePlan`]

pub mod engine;
pub mod error;
pub mod microlp;
pub mod plan;

#[cfg(test)]
mod tests;

pub use engine::{create_engine, SolutionValues, SolveOutcome, SolverEngine};
pub use error::SolveError;
pub use microlp::MicrolpEngine;
pub use plan::{interpret, OrderLine, PurchasePlan};

use restock_config::PlanConfig;
use restock_core::Dataset;
use tracing::info;

/// Builds the model for a dataset, solves it, and interprets the result.
///
/// This is the one-call path from validated input to a purchasing plan:
/// assemble -> submit to the configured engine -> interpret. The model is
/// frozen once submitted; nothing is retried or relaxed on failure.
///
/// # Errors
///
/// Construction errors surface before submission; [`SolveError::NoFeasiblePlan`]
/// and [`SolveError::Unbounded`] report what the engine found.
pub fn plan_purchases(dataset: &Dataset, config: &PlanConfig) -> Result<PurchasePlan, SolveError> {
    let model = restock_model::assemble(dataset, config)?;
    let engine = create_engine(&config.engine)?;

    info!(
        engine = engine.name(),
        variables = model.linear.variables.len(),
        constraints = model.linear.constraints.len(),
        "solving purchasing model"
    );

    let outcome = engine.solve(&model.linear)?;
    let plan = interpret(outcome, &model, dataset.catalog())?;

    info!(
        lines = plan.lines.len(),
        total_cost = plan.total_cost,
        "purchasing plan ready"
    );

    Ok(plan)
}
