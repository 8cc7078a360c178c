//! Validated, normalized problem input.

use std::collections::HashSet;

use crate::catalog::Catalog;
use crate::error::{DataError, Result};
use crate::record::{Item, PricingEntry, Supplier};

/// The complete, validated input to one planning run.
///
/// Input tables use 1-based ids; `from_records` shifts every id to 0-based,
/// checks referential integrity between the tables and enforces the field
/// invariants, so downstream model construction never has to re-validate.
/// The catalog is built here as well, making every data error surface
/// before a model exists.
#[derive(Debug, Clone)]
pub struct Dataset {
    items: Vec<Item>,
    suppliers: Vec<Supplier>,
    pricing: Vec<PricingEntry>,
    catalog: Catalog,
}

impl Dataset {
    /// Normalizes and validates raw records into a dataset.
    ///
    /// # Errors
    ///
    /// Returns a [`DataError`] for 0 ids in 1-based tables, duplicate ids,
    /// field invariant violations, pricing rows referencing unknown ids,
    /// negative costs, or conflicting duplicate pricing.
    pub fn from_records(
        mut items: Vec<Item>,
        mut suppliers: Vec<Supplier>,
        mut pricing: Vec<PricingEntry>,
    ) -> Result<Self> {
        let mut item_ids = HashSet::new();
        for item in &mut items {
            item.id = normalize_id(item.id, "items")?;
            if !item_ids.insert(item.id) {
                return Err(DataError::DuplicateItem(item.id));
            }
            validate_item(item)?;
        }

        let mut supplier_ids = HashSet::new();
        for supplier in &mut suppliers {
            supplier.id = normalize_id(supplier.id, "suppliers")?;
            if !supplier_ids.insert(supplier.id) {
                return Err(DataError::DuplicateSupplier(supplier.id));
            }
            validate_supplier(supplier)?;
        }

        for entry in &mut pricing {
            entry.item_id = normalize_id(entry.item_id, "pricing")?;
            entry.supplier_id = normalize_id(entry.supplier_id, "pricing")?;
            if !item_ids.contains(&entry.item_id) {
                return Err(DataError::UnknownItem(entry.item_id));
            }
            if !supplier_ids.contains(&entry.supplier_id) {
                return Err(DataError::UnknownSupplier(entry.supplier_id));
            }
            if entry.cost_per_pallet < 0.0 {
                return Err(DataError::NegativeCost {
                    item: entry.item_id,
                    supplier: entry.supplier_id,
                    cost: entry.cost_per_pallet,
                });
            }
        }

        let catalog = Catalog::from_pricing(&pricing)?;

        Ok(Self {
            items,
            suppliers,
            pricing,
            catalog,
        })
    }

    /// Items in input order, ids normalized to 0-based.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Suppliers in input order, ids normalized to 0-based.
    pub fn suppliers(&self) -> &[Supplier] {
        &self.suppliers
    }

    /// Normalized pricing rows.
    pub fn pricing(&self) -> &[PricingEntry] {
        &self.pricing
    }

    /// The supplier catalog derived from the pricing table.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

fn normalize_id(id: usize, table: &'static str) -> Result<usize> {
    id.checked_sub(1).ok_or(DataError::OneBasedId { table })
}

fn validate_item(item: &Item) -> Result<()> {
    let fail = |reason: String| DataError::InvalidItem {
        id: item.id,
        reason,
    };

    if item.current_stock < 0 {
        return Err(fail(format!(
            "current stock {} is negative",
            item.current_stock
        )));
    }
    if item.current_stock > item.max_stock {
        return Err(fail(format!(
            "current stock {} exceeds max stock {}",
            item.current_stock, item.max_stock
        )));
    }
    if item.min_stock > item.max_stock {
        return Err(fail(format!(
            "min stock {} exceeds max stock {}",
            item.min_stock, item.max_stock
        )));
    }
    if item.avg_daily_sale.is_nan() || item.avg_daily_sale < 0.0 {
        return Err(fail(format!(
            "average daily sale {} is not a non-negative number",
            item.avg_daily_sale
        )));
    }
    // The shelf-life rule sells stock through up to 15 days before expiry;
    // anything at or below that margin cannot be ordered meaningfully.
    if item.expiry_days <= 15 {
        return Err(fail(format!(
            "expiry of {} days is within the 15-day sell-through margin",
            item.expiry_days
        )));
    }
    Ok(())
}

fn validate_supplier(supplier: &Supplier) -> Result<()> {
    if supplier.min_pallets > supplier.max_pallets {
        return Err(DataError::InvalidSupplier {
            id: supplier.id,
            reason: format!(
                "min pallets {} exceeds max pallets {}",
                supplier.min_pallets, supplier.max_pallets
            ),
        });
    }
    if supplier.lead_time_days < 0 {
        return Err(DataError::InvalidSupplier {
            id: supplier.id,
            reason: format!("lead time {} days is negative", supplier.lead_time_days),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: usize) -> Item {
        Item {
            id,
            current_stock: 20,
            min_stock: 100,
            max_stock: 200,
            avg_daily_sale: 8.0,
            expiry_days: 30,
        }
    }

    fn supplier(id: usize) -> Supplier {
        Supplier {
            id,
            min_pallets: 1,
            max_pallets: 50,
            lead_time_days: 3,
        }
    }

    fn pricing(item_id: usize, supplier_id: usize) -> PricingEntry {
        PricingEntry {
            item_id,
            supplier_id,
            cost_per_pallet: 240.0,
        }
    }

    #[test]
    fn ids_are_shifted_to_zero_based() {
        let dataset = Dataset::from_records(
            vec![item(1), item(2)],
            vec![supplier(1)],
            vec![pricing(2, 1)],
        )
        .unwrap();

        assert_eq!(dataset.items()[0].id, 0);
        assert_eq!(dataset.items()[1].id, 1);
        assert_eq!(dataset.suppliers()[0].id, 0);
        assert_eq!(dataset.pricing()[0].item_id, 1);
        assert_eq!(dataset.pricing()[0].supplier_id, 0);
        assert!(dataset.catalog().supplies(1, 0));
    }

    #[test]
    fn zero_id_is_rejected() {
        let err = Dataset::from_records(vec![item(0)], vec![], vec![]).unwrap_err();
        assert_eq!(err, DataError::OneBasedId { table: "items" });
    }

    #[test]
    fn duplicate_item_id_is_rejected() {
        let err = Dataset::from_records(vec![item(1), item(1)], vec![], vec![]).unwrap_err();
        assert_eq!(err, DataError::DuplicateItem(0));
    }

    #[test]
    fn pricing_must_reference_known_ids() {
        let err =
            Dataset::from_records(vec![item(1)], vec![supplier(1)], vec![pricing(3, 1)])
                .unwrap_err();
        assert_eq!(err, DataError::UnknownItem(2));

        let err =
            Dataset::from_records(vec![item(1)], vec![supplier(1)], vec![pricing(1, 4)])
                .unwrap_err();
        assert_eq!(err, DataError::UnknownSupplier(3));
    }

    #[test]
    fn stock_invariants_are_enforced() {
        let mut bad = item(1);
        bad.current_stock = 300;
        let err = Dataset::from_records(vec![bad], vec![], vec![]).unwrap_err();
        assert!(matches!(err, DataError::InvalidItem { id: 0, .. }));

        let mut bad = item(1);
        bad.min_stock = 500;
        let err = Dataset::from_records(vec![bad], vec![], vec![]).unwrap_err();
        assert!(matches!(err, DataError::InvalidItem { id: 0, .. }));
    }

    #[test]
    fn short_expiry_is_rejected() {
        let mut bad = item(1);
        bad.expiry_days = 15;
        let err = Dataset::from_records(vec![bad], vec![], vec![]).unwrap_err();
        assert!(matches!(err, DataError::InvalidItem { id: 0, .. }));
    }

    #[test]
    fn supplier_invariants_are_enforced() {
        let mut bad = supplier(1);
        bad.min_pallets = 60;
        let err = Dataset::from_records(vec![], vec![bad], vec![]).unwrap_err();
        assert!(matches!(err, DataError::InvalidSupplier { id: 0, .. }));

        let mut bad = supplier(1);
        bad.lead_time_days = -1;
        let err = Dataset::from_records(vec![], vec![bad], vec![]).unwrap_err();
        assert!(matches!(err, DataError::InvalidSupplier { id: 0, .. }));
    }

    #[test]
    fn conflicting_pricing_surfaces_at_ingestion() {
        let mut conflicting = pricing(1, 1);
        conflicting.cost_per_pallet = 999.0;
        let err = Dataset::from_records(
            vec![item(1)],
            vec![supplier(1)],
            vec![pricing(1, 1), conflicting],
        )
        .unwrap_err();
        assert!(matches!(err, DataError::ConflictingPricing { .. }));
    }
}
