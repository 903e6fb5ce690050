//! The CSV files shipped in the workspace `data/` directory must load.

use std::path::PathBuf;

use data::DataStore;
use types::{City, Dataset, PopulationRecord, SalesRecord, StockPrice};

fn store() -> DataStore {
    DataStore::new(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data"))
}

#[test]
fn test_every_bundled_dataset_is_available() {
    for info in store().catalog() {
        assert!(info.available, "{}: {:?}", info.name, info.error);
        assert!(info.row_count.unwrap_or(0) > 0, "{} is empty", info.name);
    }
}

#[test]
fn test_bundled_cities_lead_with_tokyo() {
    let cities: Vec<City> = store().load().unwrap();
    assert_eq!(cities[0].name, "Tokyo");
    assert_eq!(cities[0].population, 37_400_000);
    assert!(cities.iter().all(|c| (-90.0..=90.0).contains(&c.latitude)));
    assert!(cities.iter().all(|c| (-180.0..=180.0).contains(&c.longitude)));
}

#[test]
fn test_bundled_natural_keys_are_unique() {
    let store = store();

    let sales: Vec<SalesRecord> = store.load().unwrap();
    let mut keys: Vec<_> = sales.iter().map(|s| s.key()).collect();
    keys.sort();
    keys.dedup();
    assert_eq!(keys.len(), sales.len());

    let prices: Vec<StockPrice> = store.load().unwrap();
    let mut keys: Vec<_> = prices.iter().map(|p| p.key()).collect();
    keys.sort();
    keys.dedup();
    assert_eq!(keys.len(), prices.len());

    let population: Vec<PopulationRecord> = store.load().unwrap();
    let mut keys: Vec<_> = population.iter().map(|p| p.key()).collect();
    keys.sort();
    keys.dedup();
    assert_eq!(keys.len(), population.len());
}

#[test]
fn test_row_counts_match_catalog() {
    let store = store();
    let cities: Vec<City> = store.load().unwrap();
    assert_eq!(store.row_count(Dataset::Cities).unwrap(), cities.len());
    assert_eq!(store.describe(Dataset::Cities).row_count, Some(cities.len()));
}
