//! Input records as they arrive from tabular data.
//!
//! Field names mirror the upstream CSV headers via serde renames, so the
//! records deserialize directly from the raw tables. Ids arrive 1-based
//! and are shifted to 0-based by [`Dataset::from_records`](crate::Dataset::from_records).

use serde::{Deserialize, Serialize};

/// A stocked item eligible for reordering.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Item {
    /// Item id. 1-based in input tables, 0-based once inside a [`Dataset`](crate::Dataset).
    #[serde(rename = "ItemID")]
    pub id: usize,

    /// Units currently on hand.
    #[serde(rename = "CurrentStock")]
    pub current_stock: i64,

    /// Minimum units that must be on hand after the order arrives.
    #[serde(rename = "MinStock")]
    pub min_stock: i64,

    /// Maximum units the warehouse can hold for this item.
    #[serde(rename = "MaxStock")]
    pub max_stock: i64,

    /// Average units sold per day.
    #[serde(rename = "AverageDailySale")]
    pub avg_daily_sale: f64,

    /// Days until the item expires once received.
    #[serde(rename = "Expiry (days)")]
    pub expiry_days: i64,
}

/// A supplier and its per-order pallet bounds.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Supplier {
    /// Supplier id. 1-based in input tables, 0-based once inside a dataset.
    #[serde(rename = "SupplierID")]
    pub id: usize,

    /// Minimum pallets this supplier accepts per order.
    #[serde(rename = "MinPallets")]
    pub min_pallets: u32,

    /// Maximum pallets this supplier can deliver per order.
    #[serde(rename = "MaxPallets")]
    pub max_pallets: u32,

    /// Days between placing an order and receiving it.
    #[serde(rename = "LeadTime (days)")]
    pub lead_time_days: i64,
}

/// One row of the pricing table: a supplier's per-pallet cost for an item.
///
/// Pricing rows define the only valid (item, supplier) pairs; a pair absent
/// from pricing means the supplier cannot supply that item.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PricingEntry {
    /// Item id, normalized together with the items table.
    #[serde(rename = "ItemID")]
    pub item_id: usize,

    /// Supplier id, normalized together with the suppliers table.
    #[serde(rename = "SupplierID")]
    pub supplier_id: usize,

    /// Cost of one pallet of this item from this supplier.
    #[serde(rename = "CostPerPallet")]
    pub cost_per_pallet: f64,
}
