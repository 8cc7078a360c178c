//! The solver engine boundary.
//!
//! An engine accepts a frozen [`LinearModel`] and reports back one of
//! optimal/infeasible/unbounded, plus the variable values when optimal.
//! What happens inside the call (pivoting, branching, internal threads)
//! is the engine's concern and opaque to this crate.

use restock_model::{LinearModel, VarId};

use crate::error::SolveError;
use crate::microlp::MicrolpEngine;

/// Solved variable values, addressed by [`VarId`].
#[derive(Debug, Clone, PartialEq)]
pub struct SolutionValues {
    values: Vec<f64>,
}

impl SolutionValues {
    /// Wraps a value vector indexed like the model's variable list.
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Solved value of one variable.
    pub fn value(&self, var: VarId) -> f64 {
        self.values[var.index()]
    }

    /// Number of variables in the solution.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if the solution covers no variables.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// What the engine reported for a submitted model.
///
/// Infeasibility and unboundedness are results, not errors: the engine is
/// the only component allowed to report them, and the caller decides how
/// to surface each.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveOutcome {
    /// An optimal assignment was found.
    Optimal(SolutionValues),
    /// The constraints admit no solution.
    Infeasible,
    /// The objective can improve without bound.
    Unbounded,
}

/// A general-purpose LP/MILP solver behind a narrow boundary.
pub trait SolverEngine {
    /// Engine name for logs and configuration.
    fn name(&self) -> &'static str;

    /// Solves the model. The model is treated as frozen from call-time on.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::Engine`] only for engine faults; infeasible
    /// and unbounded models are ordinary [`SolveOutcome`]s.
    fn solve(&self, model: &LinearModel) -> Result<SolveOutcome, SolveError>;
}

/// Creates the engine named in the configuration.
///
/// # Errors
///
/// Returns [`SolveError::SolverUnavailable`] for a name no compiled-in
/// engine answers to.
///
/// # Example
///
/// ```
/// use restock_solver::create_engine;
///
/// assert!(create_engine("microlp").is_ok());
/// assert!(create_engine("cplex").is_err());
/// ```
pub fn create_engine(name: &str) -> Result<Box<dyn SolverEngine>, SolveError> {
    match name {
        "microlp" => Ok(Box::new(MicrolpEngine)),
        other => Err(SolveError::SolverUnavailable(other.to_string())),
    }
}
