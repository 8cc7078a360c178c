//! CSV ingestion for the three input tables.

use std::path::Path;

use restock_core::{Item, PricingEntry, Supplier};
use serde::de::DeserializeOwned;

use crate::error::CliError;

/// Reads the items, suppliers and pricing tables.
///
/// Records come back exactly as the tables state them, 1-based ids
/// included; normalization and validation happen in
/// [`restock_core::Dataset::from_records`].
pub fn load_tables(
    items: &Path,
    suppliers: &Path,
    pricing: &Path,
) -> Result<(Vec<Item>, Vec<Supplier>, Vec<PricingEntry>), CliError> {
    Ok((
        read_records(items)?,
        read_records(suppliers)?,
        read_records(pricing)?,
    ))
}

fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, csv::Error> {
    let mut reader = csv::Reader::from_path(path)?;
    reader.deserialize().collect()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn tables_round_trip_through_csv() {
        let dir = tempfile::tempdir().unwrap();
        let items = write_file(
            &dir,
            "items.csv",
            "ItemID,CurrentStock,MinStock,MaxStock,AverageDailySale,Expiry (days)\n\
             1,20,100,200,8.0,30\n\
             2,10,50,150,4.0,40\n",
        );
        let suppliers = write_file(
            &dir,
            "suppliers.csv",
            "SupplierID,MinPallets,MaxPallets,LeadTime (days)\n1,1,50,3\n",
        );
        let pricing = write_file(
            &dir,
            "pricing.csv",
            "ItemID,SupplierID,CostPerPallet\n1,1,240.0\n2,1,180.0\n",
        );

        let (items, suppliers, pricing) = load_tables(&items, &suppliers, &pricing).unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, 1);
        assert_eq!(items[0].expiry_days, 30);
        assert_eq!(items[1].avg_daily_sale, 4.0);
        assert_eq!(suppliers[0].lead_time_days, 3);
        assert_eq!(pricing[1].cost_per_pallet, 180.0);
    }

    #[test]
    fn missing_file_is_a_csv_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.csv");
        let result = load_tables(&missing, &missing, &missing);
        assert!(matches!(result, Err(CliError::Csv(_))));
    }
}
