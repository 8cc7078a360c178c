//! End-to-end solve tests against the microlp engine.

use restock_config::{PlanConfig, SolveMode};
use restock_core::{Dataset, Item, PricingEntry, Supplier};
use restock_model::assemble;

use crate::engine::{SolutionValues, SolveOutcome};
use crate::error::SolveError;
use crate::plan::interpret;
use crate::plan_purchases;

fn item(id: usize, current: i64, min: i64, max: i64, avg: f64, expiry: i64) -> Item {
    Item {
        id,
        current_stock: current,
        min_stock: min,
        max_stock: max,
        avg_daily_sale: avg,
        expiry_days: expiry,
    }
}

fn supplier(id: usize, min: u32, max: u32, lead: i64) -> Supplier {
    Supplier {
        id,
        min_pallets: min,
        max_pallets: max,
        lead_time_days: lead,
    }
}

fn pricing(item_id: usize, supplier_id: usize, cost: f64) -> PricingEntry {
    PricingEntry {
        item_id,
        supplier_id,
        cost_per_pallet: cost,
    }
}

// One item short 80 units, one supplier at 240 per pallet of 24 units.
fn single_pair() -> Dataset {
    Dataset::from_records(
        vec![item(1, 20, 100, 200, 8.0, 30)],
        vec![supplier(1, 1, 50, 3)],
        vec![pricing(1, 1, 240.0)],
    )
    .unwrap()
}

#[test]
fn integer_plan_orders_whole_pallets() {
    let plan = plan_purchases(&single_pair(), &PlanConfig::default()).unwrap();

    // ceil((100 - 20) / 24) = 4 pallets at 240 each.
    assert_eq!(plan.lines.len(), 1);
    let line = &plan.lines[0];
    assert_eq!((line.item, line.supplier), (0, 0));
    assert_eq!(line.pallets, 4.0);
    assert_eq!(line.cost, 960.0);
    assert_eq!(plan.total_cost, 960.0);

    // The stock rule holds at the optimum.
    assert!(20.0 + line.pallets * 24.0 >= 100.0);
    // So do the supplier's pallet bounds.
    assert!(line.pallets >= 1.0 && line.pallets <= 50.0);
}

#[test]
fn relaxation_orders_fractional_pallets() {
    let config = PlanConfig::default().with_mode(SolveMode::ContinuousRelaxation);
    let plan = plan_purchases(&single_pair(), &config).unwrap();

    // Exactly the 80-unit gap: 80 / 24 pallets.
    assert_eq!(plan.lines.len(), 1);
    let line = &plan.lines[0];
    assert!((line.pallets - 80.0 / 24.0).abs() < 1e-6);
    assert!((plan.total_cost - 240.0 * 80.0 / 24.0).abs() < 1e-6);
}

#[test]
fn plan_prefers_the_cheaper_supplier() {
    let dataset = Dataset::from_records(
        vec![
            item(1, 0, 48, 480, 10.0, 40),
            item(2, 0, 24, 240, 10.0, 40),
        ],
        vec![supplier(1, 0, 100, 0), supplier(2, 0, 100, 0)],
        vec![
            pricing(1, 1, 100.0),
            pricing(1, 2, 300.0),
            pricing(2, 1, 50.0),
        ],
    )
    .unwrap();

    let plan = plan_purchases(&dataset, &PlanConfig::default()).unwrap();

    // Everything comes from supplier 0; supplier 1 is priced out.
    assert!(plan.lines.iter().all(|line| line.supplier == 0));
    let ordered: Vec<(usize, f64)> = plan
        .lines
        .iter()
        .map(|line| (line.item, line.pallets))
        .collect();
    assert_eq!(ordered, vec![(0, 2.0), (1, 1.0)]);
    assert_eq!(plan.total_cost, 250.0);
}

#[test]
fn plan_never_orders_outside_the_catalog() {
    let dataset = Dataset::from_records(
        vec![
            item(1, 0, 48, 480, 10.0, 40),
            item(2, 0, 24, 240, 10.0, 40),
        ],
        vec![supplier(1, 0, 100, 0), supplier(2, 0, 100, 0)],
        vec![
            pricing(1, 1, 100.0),
            pricing(1, 2, 300.0),
            pricing(2, 1, 50.0),
        ],
    )
    .unwrap();

    let plan = plan_purchases(&dataset, &PlanConfig::default()).unwrap();
    for line in &plan.lines {
        assert!(dataset.catalog().supplies(line.item, line.supplier));
    }

    // Round-trip: the reported total matches a recomputation from the
    // catalog and the returned quantities.
    let recomputed: f64 = plan
        .lines
        .iter()
        .map(|line| {
            line.pallets
                * dataset
                    .catalog()
                    .cost_per_pallet(line.item, line.supplier)
                    .unwrap()
        })
        .sum();
    assert!((plan.total_cost - recomputed).abs() < 1e-9);
}

#[test]
fn identical_input_yields_identical_objective() {
    let dataset = Dataset::from_records(
        vec![
            item(1, 0, 48, 480, 10.0, 40),
            item(2, 0, 24, 240, 10.0, 40),
        ],
        vec![supplier(1, 0, 100, 0), supplier(2, 0, 100, 0)],
        vec![
            pricing(1, 1, 100.0),
            pricing(1, 2, 300.0),
            pricing(2, 1, 50.0),
        ],
    )
    .unwrap();

    let first = plan_purchases(&dataset, &PlanConfig::default()).unwrap();
    let second = plan_purchases(&dataset, &PlanConfig::default()).unwrap();
    assert_eq!(first.total_cost, second.total_cost);
}

#[test]
fn empty_supplier_with_minimum_is_infeasible() {
    // Supplier 2 appears in no pricing row but demands at least 2 pallets
    // per order: the model must come back infeasible, not crash.
    let dataset = Dataset::from_records(
        vec![item(1, 20, 100, 200, 8.0, 30)],
        vec![supplier(1, 1, 50, 3), supplier(2, 2, 10, 5)],
        vec![pricing(1, 1, 240.0)],
    )
    .unwrap();

    let err = plan_purchases(&dataset, &PlanConfig::default()).unwrap_err();
    assert!(matches!(err, SolveError::NoFeasiblePlan));
}

#[test]
fn overstocked_item_orders_nothing() {
    // Sell-through capacity is exhausted by stock on hand; the clamp turns
    // this into "order zero", not an infeasible model.
    let dataset = Dataset::from_records(
        vec![item(1, 100, 0, 200, 1.0, 20)],
        vec![supplier(1, 0, 50, 0)],
        vec![pricing(1, 1, 100.0)],
    )
    .unwrap();

    let plan = plan_purchases(&dataset, &PlanConfig::default()).unwrap();
    assert!(plan.lines.is_empty());
    assert_eq!(plan.total_cost, 0.0);
}

#[test]
fn unknown_engine_is_unavailable() {
    let config = PlanConfig::default().with_engine("cplex");
    let err = plan_purchases(&single_pair(), &config).unwrap_err();
    assert!(matches!(err, SolveError::SolverUnavailable(name) if name == "cplex"));
}

#[test]
fn interpret_reads_values_back_as_plan_lines() {
    let dataset = single_pair();
    let model = assemble(&dataset, &PlanConfig::default()).unwrap();

    // Integer values arrive from the solver with numerical noise.
    let outcome = SolveOutcome::Optimal(SolutionValues::new(vec![3.9999999]));
    let plan = interpret(outcome, &model, dataset.catalog()).unwrap();
    assert_eq!(plan.lines.len(), 1);
    assert_eq!(plan.lines[0].pallets, 4.0);
    assert_eq!(plan.total_cost, 960.0);
}

#[test]
fn interpret_surfaces_infeasibility() {
    let dataset = single_pair();
    let model = assemble(&dataset, &PlanConfig::default()).unwrap();

    let err = interpret(SolveOutcome::Infeasible, &model, dataset.catalog()).unwrap_err();
    assert!(matches!(err, SolveError::NoFeasiblePlan));

    let err = interpret(SolveOutcome::Unbounded, &model, dataset.catalog()).unwrap_err();
    assert!(matches!(err, SolveError::Unbounded));
}
