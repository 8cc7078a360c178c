//! Supplier catalog: who can supply what, and at what cost.

use std::collections::HashMap;

use crate::error::{DataError, Result};
use crate::record::PricingEntry;

/// Read-only mapping of supplier -> item -> cost per pallet.
///
/// Built once from the pricing table; `supplies` and `cost_per_pallet` are
/// O(1) lookups. The catalog is immutable for the lifetime of a model
/// build and must be rebuilt when pricing input changes.
///
/// # Example
///
/// ```
/// use restock_core::{Catalog, PricingEntry};
///
/// let pricing = vec![PricingEntry { item_id: 0, supplier_id: 1, cost_per_pallet: 240.0 }];
/// let catalog = Catalog::from_pricing(&pricing).unwrap();
///
/// assert!(catalog.supplies(0, 1));
/// assert_eq!(catalog.cost_per_pallet(0, 1), Some(240.0));
/// assert!(!catalog.supplies(0, 0));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    by_supplier: HashMap<usize, HashMap<usize, f64>>,
    pair_count: usize,
}

impl Catalog {
    /// Builds the catalog from normalized pricing rows.
    ///
    /// Exact duplicate rows are tolerated; the same pair priced twice with
    /// different costs is a [`DataError::ConflictingPricing`].
    pub fn from_pricing(pricing: &[PricingEntry]) -> Result<Self> {
        let mut by_supplier: HashMap<usize, HashMap<usize, f64>> = HashMap::new();
        let mut pair_count = 0;

        for entry in pricing {
            let items = by_supplier.entry(entry.supplier_id).or_default();
            match items.insert(entry.item_id, entry.cost_per_pallet) {
                None => pair_count += 1,
                Some(previous) if previous != entry.cost_per_pallet => {
                    return Err(DataError::ConflictingPricing {
                        item: entry.item_id,
                        supplier: entry.supplier_id,
                        first: previous,
                        second: entry.cost_per_pallet,
                    });
                }
                Some(_) => {}
            }
        }

        Ok(Self {
            by_supplier,
            pair_count,
        })
    }

    /// Returns true if the supplier carries the item.
    pub fn supplies(&self, item: usize, supplier: usize) -> bool {
        self.by_supplier
            .get(&supplier)
            .is_some_and(|items| items.contains_key(&item))
    }

    /// Per-pallet cost of the item from the supplier, if the pair is valid.
    pub fn cost_per_pallet(&self, item: usize, supplier: usize) -> Option<f64> {
        self.by_supplier
            .get(&supplier)
            .and_then(|items| items.get(&item))
            .copied()
    }

    /// Number of distinct items the supplier carries.
    pub fn item_count(&self, supplier: usize) -> usize {
        self.by_supplier
            .get(&supplier)
            .map_or(0, |items| items.len())
    }

    /// Number of valid (item, supplier) pairs.
    pub fn pair_count(&self) -> usize {
        self.pair_count
    }

    /// True if no supplier carries any item.
    pub fn is_empty(&self) -> bool {
        self.pair_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(item: usize, supplier: usize, cost: f64) -> PricingEntry {
        PricingEntry {
            item_id: item,
            supplier_id: supplier,
            cost_per_pallet: cost,
        }
    }

    #[test]
    fn lookups_cover_only_priced_pairs() {
        let catalog =
            Catalog::from_pricing(&[entry(0, 0, 100.0), entry(1, 0, 150.0), entry(1, 1, 140.0)])
                .unwrap();

        assert!(catalog.supplies(0, 0));
        assert!(catalog.supplies(1, 1));
        assert!(!catalog.supplies(0, 1));
        assert_eq!(catalog.cost_per_pallet(1, 0), Some(150.0));
        assert_eq!(catalog.cost_per_pallet(0, 1), None);
        assert_eq!(catalog.pair_count(), 3);
        assert_eq!(catalog.item_count(0), 2);
        assert_eq!(catalog.item_count(7), 0);
    }

    #[test]
    fn exact_duplicate_rows_are_tolerated() {
        let catalog = Catalog::from_pricing(&[entry(0, 0, 100.0), entry(0, 0, 100.0)]).unwrap();
        assert_eq!(catalog.pair_count(), 1);
    }

    #[test]
    fn conflicting_costs_are_rejected() {
        let err = Catalog::from_pricing(&[entry(0, 0, 100.0), entry(0, 0, 120.0)]).unwrap_err();
        assert_eq!(
            err,
            DataError::ConflictingPricing {
                item: 0,
                supplier: 0,
                first: 100.0,
                second: 120.0,
            }
        );
    }

    #[test]
    fn empty_pricing_yields_empty_catalog() {
        let catalog = Catalog::from_pricing(&[]).unwrap();
        assert!(catalog.is_empty());
        assert!(!catalog.supplies(0, 0));
    }
}
