//! Error types for restock-core

use thiserror::Error;

/// Errors raised while validating input records or building the catalog.
///
/// All variants are detected before model construction starts; none of
/// them are retried.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DataError {
    /// An id of 0 in a table whose ids are 1-based.
    #[error("{table} table contains id 0: input ids are 1-based")]
    OneBasedId {
        /// Name of the offending table.
        table: &'static str,
    },

    /// The same item id appears twice in the items table.
    #[error("duplicate item id {0}")]
    DuplicateItem(usize),

    /// The same supplier id appears twice in the suppliers table.
    #[error("duplicate supplier id {0}")]
    DuplicateSupplier(usize),

    /// An item record violates a field invariant.
    #[error("item {id}: {reason}")]
    InvalidItem {
        /// Normalized (0-based) item id.
        id: usize,
        /// Human-readable description of the violated invariant.
        reason: String,
    },

    /// A supplier record violates a field invariant.
    #[error("supplier {id}: {reason}")]
    InvalidSupplier {
        /// Normalized (0-based) supplier id.
        id: usize,
        /// Human-readable description of the violated invariant.
        reason: String,
    },

    /// A pricing row references an item that is not in the items table.
    #[error("pricing references unknown item {0}")]
    UnknownItem(usize),

    /// A pricing row references a supplier that is not in the suppliers table.
    #[error("pricing references unknown supplier {0}")]
    UnknownSupplier(usize),

    /// A pricing row carries a negative per-pallet cost.
    #[error("negative cost {cost} for item {item} from supplier {supplier}")]
    NegativeCost {
        /// Normalized item id.
        item: usize,
        /// Normalized supplier id.
        supplier: usize,
        /// The offending cost.
        cost: f64,
    },

    /// The same (item, supplier) pair is priced twice with different costs.
    ///
    /// Exact duplicates are tolerated (last write wins with an identical
    /// value); a conflicting cost hides a data error and is fatal.
    #[error("conflicting cost for item {item} from supplier {supplier}: {first} vs {second}")]
    ConflictingPricing {
        /// Normalized item id.
        item: usize,
        /// Normalized supplier id.
        supplier: usize,
        /// The cost seen first.
        first: f64,
        /// The conflicting cost seen later.
        second: f64,
    },
}

/// Result type alias for restock-core operations.
pub type Result<T> = std::result::Result<T, DataError>;
