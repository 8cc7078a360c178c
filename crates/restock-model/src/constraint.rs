//! Constraint families.
//!
//! Each function translates one business rule into linear rows:
//! - `stock_coverage`: ordered units must close the gap to minimum stock
//! - `supplier_capacity`: per-supplier pallet totals within declared bounds
//! - `lead_time_demand`: stock plus order covers demand during lead time
//! - `shelf_life_sell_through`: stock plus order sellable before the
//!   15-day pre-expiry margin
//! - `max_stock_cap`: stock plus order never exceeds maximum stock
//!
//! The sixth family, supplier availability (`order = 0` for pairs not in
//! the catalog), is enforced by construction: [`OrderVariables`] never
//! creates a variable for an invalid pair, so no explicit equality rows
//! are emitted and none can conflict.

use restock_core::{Catalog, Item, Supplier};

use crate::linear::{LinearConstraint, LinearExpr};
use crate::variable::OrderVariables;

/// Days before expiry by which ordered stock must be sold through.
pub const SELL_THROUGH_MARGIN_DAYS: i64 = 15;

/// Ordered units must cover the gap between minimum and current stock.
///
/// Per item `i`: `sum_j(order_ij * units_per_pallet) >= min_stock_i - current_stock_i`.
///
/// Emitted for every item, including one no supplier carries: its empty
/// pallet sum against a positive gap is exactly the infeasibility the
/// solver should report.
pub fn stock_coverage(
    items: &[Item],
    orders: &OrderVariables,
    units_per_pallet: i64,
) -> Vec<LinearConstraint> {
    let upp = units_per_pallet as f64;
    items
        .iter()
        .map(|item| {
            let expr: LinearExpr = orders.for_item(item.id).map(|def| (def.id, upp)).collect();
            LinearConstraint::ge(
                format!("stock_coverage/item_{}", item.id),
                expr,
                (item.min_stock - item.current_stock) as f64,
            )
        })
        .collect()
}

/// Each supplier's pallet total across all items stays within its bounds.
///
/// Per supplier `j`: `min_pallets_j <= sum_i(order_ij) <= max_pallets_j`,
/// emitted as two rows. A supplier carrying no items still gets both rows;
/// with `min_pallets > 0` the empty sum makes the model infeasible, which
/// is the correct diagnosis rather than a construction failure.
pub fn supplier_capacity(
    suppliers: &[Supplier],
    orders: &OrderVariables,
) -> Vec<LinearConstraint> {
    let mut rows = Vec::with_capacity(suppliers.len() * 2);
    for supplier in suppliers {
        let expr: LinearExpr = orders
            .for_supplier(supplier.id)
            .map(|def| (def.id, 1.0))
            .collect();
        rows.push(LinearConstraint::ge(
            format!("supplier_capacity/supplier_{}_min", supplier.id),
            expr.clone(),
            f64::from(supplier.min_pallets),
        ));
        rows.push(LinearConstraint::le(
            format!("supplier_capacity/supplier_{}_max", supplier.id),
            expr,
            f64::from(supplier.max_pallets),
        ));
    }
    rows
}

/// Stock on hand plus everything ordered covers expected demand during
/// each supplying supplier's lead time.
///
/// Per (item `i`, supplier `j`) pair the supplier actually provides:
/// `current_stock_i + sum_j'(order_ij' * units_per_pallet) >= avg_daily_sale_i * lead_time_j`.
pub fn lead_time_demand(
    items: &[Item],
    suppliers: &[Supplier],
    catalog: &Catalog,
    orders: &OrderVariables,
    units_per_pallet: i64,
) -> Vec<LinearConstraint> {
    let upp = units_per_pallet as f64;
    let mut rows = Vec::new();
    for item in items {
        for supplier in suppliers {
            if !catalog.supplies(item.id, supplier.id) {
                continue;
            }
            let expr: LinearExpr = orders.for_item(item.id).map(|def| (def.id, upp)).collect();
            let demand = item.avg_daily_sale * supplier.lead_time_days as f64;
            rows.push(LinearConstraint::ge(
                format!("lead_time_demand/item_{}_supplier_{}", item.id, supplier.id),
                expr,
                demand - item.current_stock as f64,
            ));
        }
    }
    rows
}

/// Stock plus order must be sellable before the pre-expiry margin.
///
/// Per item `i` with at least one supplier:
/// `sum_j(order_ij * units_per_pallet) <= avg_daily_sale_i * (expiry_days_i - 15) - current_stock_i`.
///
/// The right-hand side is clamped at zero: an item already holding more
/// than it can sell through gets its order variables forced to zero
/// instead of an always-infeasible negative bound.
pub fn shelf_life_sell_through(
    items: &[Item],
    orders: &OrderVariables,
    units_per_pallet: i64,
) -> Vec<LinearConstraint> {
    let upp = units_per_pallet as f64;
    let mut rows = Vec::new();
    for item in items {
        let expr: LinearExpr = orders.for_item(item.id).map(|def| (def.id, upp)).collect();
        if expr.is_empty() {
            continue;
        }
        let sellable_days = (item.expiry_days - SELL_THROUGH_MARGIN_DAYS).max(0);
        let sellable = item.avg_daily_sale * sellable_days as f64;
        let rhs = (sellable - item.current_stock as f64).max(0.0);
        rows.push(LinearConstraint::le(
            format!("shelf_life/item_{}", item.id),
            expr,
            rhs,
        ));
    }
    rows
}

/// Stock plus order never exceeds the item's maximum stock.
///
/// Per item `i` with at least one supplier:
/// `sum_j(order_ij * units_per_pallet) <= max_stock_i - current_stock_i`.
pub fn max_stock_cap(
    items: &[Item],
    orders: &OrderVariables,
    units_per_pallet: i64,
) -> Vec<LinearConstraint> {
    let upp = units_per_pallet as f64;
    let mut rows = Vec::new();
    for item in items {
        let expr: LinearExpr = orders.for_item(item.id).map(|def| (def.id, upp)).collect();
        if expr.is_empty() {
            continue;
        }
        rows.push(LinearConstraint::le(
            format!("max_stock/item_{}", item.id),
            expr,
            (item.max_stock - item.current_stock) as f64,
        ));
    }
    rows
}
