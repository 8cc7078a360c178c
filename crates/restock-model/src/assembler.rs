//! Model assembly: dataset + configuration -> frozen linear model.

use restock_config::PlanConfig;
use restock_core::Dataset;
use tracing::debug;

use crate::constraint;
use crate::error::ModelError;
use crate::linear::LinearModel;
use crate::objective;
use crate::variable::OrderVariables;

/// A fully assembled model plus the variable addressing needed to read a
/// solution back into (item, supplier, pallets) terms.
#[derive(Debug, Clone)]
pub struct PlanModel {
    /// The frozen model handed to the solver engine.
    pub linear: LinearModel,
    /// Variable identities by (item, supplier).
    pub orders: OrderVariables,
}

/// Assembles the complete model: variables, constraint families, objective.
///
/// Construction is deterministic and single-threaded; the returned model
/// is immutable from here on. Every data problem was already rejected by
/// [`Dataset::from_records`], so the only failure left is an unusable
/// configuration.
///
/// # Errors
///
/// Returns [`ModelError::InvalidConfig`] if the configuration fails its
/// own validation.
pub fn assemble(dataset: &Dataset, config: &PlanConfig) -> Result<PlanModel, ModelError> {
    config
        .validate()
        .map_err(|err| ModelError::InvalidConfig(err.to_string()))?;

    let items = dataset.items();
    let suppliers = dataset.suppliers();
    let catalog = dataset.catalog();
    let upp = config.units_per_pallet;

    let orders = OrderVariables::for_catalog(items, suppliers, catalog, config);

    let mut constraints = Vec::new();
    constraints.extend(constraint::stock_coverage(items, &orders, upp));
    constraints.extend(constraint::supplier_capacity(suppliers, &orders));
    constraints.extend(constraint::lead_time_demand(
        items, suppliers, catalog, &orders, upp,
    ));
    constraints.extend(constraint::shelf_life_sell_through(items, &orders, upp));
    constraints.extend(constraint::max_stock_cap(items, &orders, upp));

    let objective = objective::minimize_cost(catalog, &orders);

    debug!(
        items = items.len(),
        suppliers = suppliers.len(),
        variables = orders.len(),
        constraints = constraints.len(),
        "model assembled"
    );

    Ok(PlanModel {
        linear: LinearModel {
            variables: orders.defs().to_vec(),
            constraints,
            objective,
        },
        orders,
    })
}
