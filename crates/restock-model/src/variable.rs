//! Order variable factory.

use std::collections::HashMap;

use restock_config::{PlanConfig, SolveMode};
use restock_core::{Catalog, Item, Supplier};

use crate::error::ModelError;
use crate::linear::{VarId, VarKind, VariableDef};

/// The decision variables of one model: pallets ordered per (item, supplier).
///
/// Variables exist only for pairs present in the catalog. A pair the
/// catalog does not recognize has no variable at all, which pins its order
/// quantity to zero by construction; [`OrderVariables::get`] surfaces such
/// lookups as [`ModelError::InvalidPair`] instead of inventing a variable.
///
/// Creation order is item-major over the input tables, so identical input
/// always produces the identical variable layout.
#[derive(Debug, Clone)]
pub struct OrderVariables {
    defs: Vec<VariableDef>,
    index: HashMap<(usize, usize), VarId>,
}

impl OrderVariables {
    /// Creates one variable per catalog-valid (item, supplier) pair.
    ///
    /// Bounds and kind follow the configured mode: bounded integers
    /// `[0, pallet_cap]` for whole-pallet ordering, or continuous
    /// `[0, inf)` for the relaxation.
    pub fn for_catalog(
        items: &[Item],
        suppliers: &[Supplier],
        catalog: &Catalog,
        config: &PlanConfig,
    ) -> Self {
        let (upper, kind) = match config.mode {
            SolveMode::Integer => (Some(f64::from(config.pallet_cap)), VarKind::Integer),
            SolveMode::ContinuousRelaxation => (None, VarKind::Continuous),
        };

        let mut defs = Vec::new();
        let mut index = HashMap::new();
        for item in items {
            for supplier in suppliers {
                if !catalog.supplies(item.id, supplier.id) {
                    continue;
                }
                let id = VarId::new(defs.len());
                defs.push(VariableDef {
                    id,
                    item: item.id,
                    supplier: supplier.id,
                    lower: 0.0,
                    upper,
                    kind,
                });
                index.insert((item.id, supplier.id), id);
            }
        }

        Self { defs, index }
    }

    /// Variable for a pair the catalog must recognize.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidPair`] if the supplier does not carry
    /// the item.
    pub fn get(&self, item: usize, supplier: usize) -> Result<VarId, ModelError> {
        self.lookup(item, supplier)
            .ok_or(ModelError::InvalidPair { item, supplier })
    }

    /// Variable for a pair, or `None` if the pair is not in the catalog.
    pub fn lookup(&self, item: usize, supplier: usize) -> Option<VarId> {
        self.index.get(&(item, supplier)).copied()
    }

    /// All variable definitions in creation order.
    pub fn defs(&self) -> &[VariableDef] {
        &self.defs
    }

    /// Variables ordering the given item, in creation order.
    pub fn for_item(&self, item: usize) -> impl Iterator<Item = &VariableDef> {
        self.defs.iter().filter(move |def| def.item == item)
    }

    /// Variables ordered from the given supplier, in creation order.
    pub fn for_supplier(&self, supplier: usize) -> impl Iterator<Item = &VariableDef> {
        self.defs.iter().filter(move |def| def.supplier == supplier)
    }

    /// The (item, supplier) pair a variable stands for.
    pub fn pair(&self, var: VarId) -> (usize, usize) {
        let def = &self.defs[var.index()];
        (def.item, def.supplier)
    }

    /// Number of variables.
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    /// True if the model has no variables.
    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}
