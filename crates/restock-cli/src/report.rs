//! Console output: table previews and the purchasing plan.

use owo_colors::OwoColorize;
use restock_core::{Item, PricingEntry, Supplier};
use restock_solver::PurchasePlan;

const PREVIEW_ROWS: usize = 5;

/// Prints the head of the items table plus a row count.
pub fn preview_items(items: &[Item]) {
    print_header("Items", items.len());
    for item in items.iter().take(PREVIEW_ROWS) {
        println!(
            "  #{:<4} stock {:>6}  min {:>6}  max {:>6}  sale/day {:>7.2}  expiry {:>4}d",
            item.id, item.current_stock, item.min_stock, item.max_stock, item.avg_daily_sale,
            item.expiry_days
        );
    }
    print_elision(items.len());
}

/// Prints the head of the suppliers table plus a row count.
pub fn preview_suppliers(suppliers: &[Supplier]) {
    print_header("Suppliers", suppliers.len());
    for supplier in suppliers.iter().take(PREVIEW_ROWS) {
        println!(
            "  #{:<4} pallets {:>4}..{:<4}  lead time {:>4}d",
            supplier.id, supplier.min_pallets, supplier.max_pallets, supplier.lead_time_days
        );
    }
    print_elision(suppliers.len());
}

/// Prints the head of the pricing table plus a row count.
pub fn preview_pricing(pricing: &[PricingEntry]) {
    print_header("Pricing", pricing.len());
    for entry in pricing.iter().take(PREVIEW_ROWS) {
        println!(
            "  item #{:<4} supplier #{:<4} {:>10.2}/pallet",
            entry.item_id, entry.supplier_id, entry.cost_per_pallet
        );
    }
    print_elision(pricing.len());
}

/// Prints the purchasing plan, one line per positive order.
pub fn print_plan(plan: &PurchasePlan) {
    if plan.lines.is_empty() {
        println!("{}", "Nothing to order: stock already covers demand".green());
        return;
    }

    println!("{}", "Optimal purchasing plan".bright_green().bold());
    for line in &plan.lines {
        println!(
            "  item {:>3}  supplier {:>3}  {:>10} pallets  {:>12.2}",
            line.item.cyan(),
            line.supplier.cyan(),
            format_pallets(line.pallets),
            line.cost
        );
    }
    println!(
        "  {} {:.2}",
        "total cost".bold(),
        plan.total_cost.bright_yellow()
    );
}

/// Prints the no-feasible-plan diagnosis.
pub fn print_infeasible() {
    eprintln!(
        "{}",
        "No feasible plan: the stock, capacity and shelf-life rules cannot all be met".red()
    );
}

fn print_header(name: &str, rows: usize) {
    println!("{} ({} rows)", name.bright_cyan().bold(), rows);
}

fn print_elision(rows: usize) {
    if rows > PREVIEW_ROWS {
        println!("  ... {} more", rows - PREVIEW_ROWS);
    }
    println!();
}

fn format_pallets(pallets: f64) -> String {
    if (pallets - pallets.round()).abs() < 1e-9 {
        format!("{}", pallets.round() as i64)
    } else {
        format!("{pallets:.3}")
    }
}
