//! Pure-Rust engine backed by `good_lp`'s microlp solver.

use good_lp::solvers::microlp::microlp;
use good_lp::{
    constraint, variable, Expression, ProblemVariables, ResolutionError, Solution, SolverModel,
    Variable,
};
use restock_model::{CmpOp, Direction, LinearExpr, LinearModel, VarKind};
use tracing::debug;

use crate::engine::{SolutionValues, SolveOutcome, SolverEngine};
use crate::error::SolveError;

/// Solver engine translating the model into `good_lp` terms and solving it
/// with microlp. Handles both the integer and the continuous formulation.
#[derive(Debug, Clone, Copy, Default)]
pub struct MicrolpEngine;

impl SolverEngine for MicrolpEngine {
    fn name(&self) -> &'static str {
        "microlp"
    }

    fn solve(&self, model: &LinearModel) -> Result<SolveOutcome, SolveError> {
        let mut pb = ProblemVariables::new();
        let mut vars: Vec<Variable> = Vec::with_capacity(model.variables.len());
        for def in &model.variables {
            let mut definition = variable().min(def.lower);
            if let Some(upper) = def.upper {
                definition = definition.max(upper);
            }
            if def.kind == VarKind::Integer {
                definition = definition.integer();
            }
            vars.push(pb.add(definition));
        }

        let objective = to_expression(&model.objective.expr, &vars);
        let mut problem = match model.objective.direction {
            Direction::Minimize => pb.minimise(objective).using(microlp),
            Direction::Maximize => pb.maximise(objective).using(microlp),
        };

        for row in &model.constraints {
            let lhs = to_expression(&row.expr, &vars);
            problem = problem.with(match row.op {
                CmpOp::Le => constraint::leq(lhs, row.rhs),
                CmpOp::Ge => constraint::geq(lhs, row.rhs),
                CmpOp::Eq => constraint::eq(lhs, row.rhs),
            });
        }

        debug!(
            variables = model.variables.len(),
            constraints = model.constraints.len(),
            "submitting model to microlp"
        );

        match problem.solve() {
            Ok(solution) => {
                let values = vars.iter().map(|&v| solution.value(v)).collect();
                Ok(SolveOutcome::Optimal(SolutionValues::new(values)))
            }
            Err(ResolutionError::Infeasible) => Ok(SolveOutcome::Infeasible),
            Err(ResolutionError::Unbounded) => Ok(SolveOutcome::Unbounded),
            Err(other) => Err(SolveError::Engine(other.to_string())),
        }
    }
}

fn to_expression(expr: &LinearExpr, vars: &[Variable]) -> Expression {
    let mut out = Expression::default();
    for &(id, coefficient) in expr.terms() {
        out += vars[id.index()] * coefficient;
    }
    out
}
