//! Cost-minimization objective.

use restock_core::Catalog;

use crate::linear::{LinearExpr, Objective};
use crate::variable::OrderVariables;

/// Builds `minimize sum(cost_ij * order_ij)` over all catalog-valid pairs.
///
/// Costs are already per pallet, matching the variables' unit, so the
/// catalog cost is the coefficient as-is. Pairs absent from the catalog
/// have no variable and contribute no term.
pub fn minimize_cost(catalog: &Catalog, orders: &OrderVariables) -> Objective {
    let mut expr = LinearExpr::new();
    for def in orders.defs() {
        if let Some(cost) = catalog.cost_per_pallet(def.item, def.supplier) {
            expr.push(def.id, cost);
        }
    }
    Objective::minimize(expr)
}
