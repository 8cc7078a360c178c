//! Error types for restock-solver

use restock_model::ModelError;
use thiserror::Error;

/// Errors raised while solving a model or reading its solution back.
#[derive(Debug, Error)]
pub enum SolveError {
    /// The assembled constraints admit no solution.
    ///
    /// Reported, not fatal: the caller may relax its inputs and retry.
    /// Nothing is auto-relaxed here.
    #[error("no feasible purchasing plan: the constraints admit no solution")]
    NoFeasiblePlan,

    /// The model is unbounded, which for a cost minimization points at a
    /// configuration fault such as missing upper bounds in continuous mode.
    #[error("model is unbounded; check variable upper bounds in continuous mode")]
    Unbounded,

    /// The requested solver engine cannot be initialized. Fatal: the
    /// optimization cannot proceed without one.
    #[error("solver engine {0:?} is not available")]
    SolverUnavailable(String),

    /// The engine failed while solving.
    #[error("solver engine failed: {0}")]
    Engine(String),

    /// Model construction failed before submission.
    #[error(transparent)]
    Model(#[from] ModelError),
}
