//! Error types for restock-model

use thiserror::Error;

/// Errors raised during model construction.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ModelError {
    /// A variable was requested for a pair the catalog does not recognize.
    ///
    /// Variables exist only for (item, supplier) pairs present in the
    /// catalog; there is no implicit zero-pinned variable for the rest.
    #[error("no pricing for item {item} from supplier {supplier}: pair not in catalog")]
    InvalidPair {
        /// Item id of the requested pair.
        item: usize,
        /// Supplier id of the requested pair.
        supplier: usize,
    },

    /// The planning configuration is unusable for model construction.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
