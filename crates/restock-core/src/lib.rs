//! Restock Core - Domain records and supplier catalog for procurement planning
//!
//! This crate provides the fundamental data types for restock:
//! - Item, supplier and pricing records as they arrive from tabular input
//! - Dataset validation and 1-based to 0-based id normalization
//! - The Catalog lookup of which supplier sells which item at what cost

pub mod catalog;
pub mod dataset;
pub mod error;
pub mod record;

pub use catalog::Catalog;
pub use dataset::Dataset;
pub use error::{DataError, Result};
pub use record::{Item, PricingEntry, Supplier};
