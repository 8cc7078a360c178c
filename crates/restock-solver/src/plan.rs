//! Result interpretation: solver outcome -> purchasing plan.

use restock_core::Catalog;
use restock_model::{PlanModel, VarId, VarKind};

use crate::engine::{SolutionValues, SolveOutcome};
use crate::error::SolveError;

/// Values below this are solver noise around zero, not an order.
const ORDER_EPSILON: f64 = 1e-6;

/// One line of the purchasing plan: order `pallets` of `item` from `supplier`.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    /// Item id.
    pub item: usize,
    /// Supplier id.
    pub supplier: usize,
    /// Pallets to order. Whole numbers in the integer formulation,
    /// possibly fractional under the continuous relaxation.
    pub pallets: f64,
    /// Line cost: pallets times the catalog's per-pallet cost.
    pub cost: f64,
}

/// The purchasing plan read back from an optimal solution.
#[derive(Debug, Clone, PartialEq)]
pub struct PurchasePlan {
    /// Lines with a positive order quantity, in variable creation order.
    pub lines: Vec<OrderLine>,
    /// Total cost recomputed from the catalog, independent of the solver's
    /// own objective bookkeeping.
    pub total_cost: f64,
}

/// Maps a solve outcome back into domain terms.
///
/// Integer-kind values are rounded to the nearest whole pallet first; the
/// solver returns them as floats with numerical noise. Only positive
/// quantities become plan lines, so pairs absent from the catalog (which
/// have no variable at all) can never appear.
///
/// # Errors
///
/// [`SolveError::NoFeasiblePlan`] for an infeasible model and
/// [`SolveError::Unbounded`] for an unbounded one.
pub fn interpret(
    outcome: SolveOutcome,
    plan: &PlanModel,
    catalog: &Catalog,
) -> Result<PurchasePlan, SolveError> {
    let values = match outcome {
        SolveOutcome::Optimal(values) => values,
        SolveOutcome::Infeasible => return Err(SolveError::NoFeasiblePlan),
        SolveOutcome::Unbounded => return Err(SolveError::Unbounded),
    };

    let mut lines = Vec::new();
    let mut total_cost = 0.0;
    for def in plan.orders.defs() {
        let pallets = order_quantity(&values, def.id, def.kind);
        if pallets <= ORDER_EPSILON {
            continue;
        }
        let Some(cost_per_pallet) = catalog.cost_per_pallet(def.item, def.supplier) else {
            continue;
        };
        let cost = cost_per_pallet * pallets;
        total_cost += cost;
        lines.push(OrderLine {
            item: def.item,
            supplier: def.supplier,
            pallets,
            cost,
        });
    }

    Ok(PurchasePlan { lines, total_cost })
}

fn order_quantity(values: &SolutionValues, id: VarId, kind: VarKind) -> f64 {
    let value = values.value(id);
    match kind {
        VarKind::Integer => value.round(),
        VarKind::Continuous => value,
    }
}
