//! Core types for the Vizora dashboard.
//!
//! This crate provides the four record kinds served by the data server and
//! consumed by the dashboard views, plus the closed [`Dataset`] catalogue that
//! ties each record kind to its backing file and HTTP path.
//!
//! Records are plain immutable data. Field names are the wire format: the
//! CSV header row on disk and the JSON keys on the API are identical.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Dataset Catalogue
// =============================================================================

/// One of the fixed collections exposed by the data server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dataset {
    Cities,
    Sales,
    StockPrices,
    Population,
}

impl Dataset {
    /// Every dataset, in catalogue order.
    pub const ALL: [Dataset; 4] = [
        Dataset::Cities,
        Dataset::Sales,
        Dataset::StockPrices,
        Dataset::Population,
    ];

    /// Short machine name (matches the serde representation).
    pub fn name(self) -> &'static str {
        match self {
            Dataset::Cities => "cities",
            Dataset::Sales => "sales",
            Dataset::StockPrices => "stock_prices",
            Dataset::Population => "population",
        }
    }

    /// Backing CSV file name, relative to the data directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Dataset::Cities => "cities.csv",
            Dataset::Sales => "sales.csv",
            Dataset::StockPrices => "stock_prices.csv",
            Dataset::Population => "population.csv",
        }
    }

    /// HTTP path serving this dataset.
    pub fn endpoint(self) -> &'static str {
        match self {
            Dataset::Cities => "/api/cities",
            Dataset::Sales => "/api/sales",
            Dataset::StockPrices => "/api/stock-prices",
            Dataset::Population => "/api/population",
        }
    }

    /// Fixed column set of the record kind stored in this dataset.
    pub fn columns(self) -> &'static [&'static str] {
        match self {
            Dataset::Cities => City::COLUMNS,
            Dataset::Sales => SalesRecord::COLUMNS,
            Dataset::StockPrices => StockPrice::COLUMNS,
            Dataset::Population => PopulationRecord::COLUMNS,
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Record Trait
// =============================================================================

/// A row type with a fixed schema, stored in exactly one [`Dataset`].
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Dataset holding rows of this kind.
    const DATASET: Dataset;

    /// Fixed field set, in declaration order.
    const COLUMNS: &'static [&'static str];

    /// First float column holding `NaN` or an infinity, if any.
    ///
    /// JSON has no encoding for these values, so a row carrying one cannot
    /// be served.
    fn non_finite_column(&self) -> Option<&'static str>;
}

/// Name of the first non-finite value among `fields`.
fn first_non_finite(fields: &[(&'static str, f64)]) -> Option<&'static str> {
    fields
        .iter()
        .find(|(_, value)| !value.is_finite())
        .map(|&(name, _)| name)
}

// =============================================================================
// Record Kinds
// =============================================================================

/// A city with coordinates and population, drawn as a point on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
    pub population: u64,
}

impl Record for City {
    const DATASET: Dataset = Dataset::Cities;
    const COLUMNS: &'static [&'static str] =
        &["name", "country", "latitude", "longitude", "population"];

    fn non_finite_column(&self) -> Option<&'static str> {
        first_non_finite(&[("latitude", self.latitude), ("longitude", self.longitude)])
    }
}

impl City {
    /// Natural key.
    pub fn key(&self) -> &str {
        &self.name
    }

    /// Coordinates as `(longitude, latitude)`, the canvas `(x, y)` order.
    pub fn lon_lat(&self) -> (f64, f64) {
        (self.longitude, self.latitude)
    }
}

/// Monthly sales figure for one product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    /// Year-month, e.g. `2024-01`.
    pub month: String,
    pub product: String,
    pub sales: f64,
}

impl Record for SalesRecord {
    const DATASET: Dataset = Dataset::Sales;
    const COLUMNS: &'static [&'static str] = &["month", "product", "sales"];

    fn non_finite_column(&self) -> Option<&'static str> {
        first_non_finite(&[("sales", self.sales)])
    }
}

impl SalesRecord {
    /// Natural key: `(month, product)`.
    pub fn key(&self) -> (&str, &str) {
        (&self.month, &self.product)
    }
}

/// Daily OHLCV quote for one ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockPrice {
    pub symbol: String,
    pub date: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

impl Record for StockPrice {
    const DATASET: Dataset = Dataset::StockPrices;
    const COLUMNS: &'static [&'static str] =
        &["symbol", "date", "open", "high", "low", "close", "volume"];

    fn non_finite_column(&self) -> Option<&'static str> {
        first_non_finite(&[
            ("open", self.open),
            ("high", self.high),
            ("low", self.low),
            ("close", self.close),
        ])
    }
}

impl StockPrice {
    /// Natural key: `(symbol, date)`.
    pub fn key(&self) -> (&str, &str) {
        (&self.symbol, &self.date)
    }

    /// Close minus open.
    pub fn change(&self) -> f64 {
        self.close - self.open
    }
}

/// Yearly population and GDP per capita for one country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopulationRecord {
    pub country: String,
    pub year: i32,
    pub population: u64,
    pub gdp_per_capita: f64,
}

impl Record for PopulationRecord {
    const DATASET: Dataset = Dataset::Population;
    const COLUMNS: &'static [&'static str] = &["country", "year", "population", "gdp_per_capita"];

    fn non_finite_column(&self) -> Option<&'static str> {
        first_non_finite(&[("gdp_per_capita", self.gdp_per_capita)])
    }
}

impl PopulationRecord {
    /// Natural key: `(country, year)`.
    pub fn key(&self) -> (&str, i32) {
        (&self.country, self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn keys(value: &Value) -> Vec<String> {
        value
            .as_object()
            .map(|o| o.keys().cloned().collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_dataset_paths() {
        assert_eq!(Dataset::Cities.endpoint(), "/api/cities");
        assert_eq!(Dataset::StockPrices.endpoint(), "/api/stock-prices");
        assert_eq!(Dataset::StockPrices.file_name(), "stock_prices.csv");
        assert_eq!(Dataset::Population.to_string(), "population");
    }

    #[test]
    fn test_dataset_serde_name_matches_name() {
        for dataset in Dataset::ALL {
            let json = serde_json::to_string(&dataset).unwrap();
            assert_eq!(json, format!("\"{}\"", dataset.name()));
        }
    }

    #[test]
    fn test_city_serializes_fixed_field_set() {
        let city = City {
            name: "Tokyo".into(),
            country: "Japan".into(),
            latitude: 35.6762,
            longitude: 139.6503,
            population: 37_400_000,
        };

        let value = serde_json::to_value(&city).unwrap();
        let mut fields = keys(&value);
        fields.sort();
        let mut expected: Vec<String> = City::COLUMNS.iter().map(|s| s.to_string()).collect();
        expected.sort();
        assert_eq!(fields, expected);
        assert!(value["population"].is_u64());
        assert!(value["latitude"].is_f64());
    }

    #[test]
    fn test_columns_match_serialized_order() {
        let stock = StockPrice {
            symbol: "AAPL".into(),
            date: "2024-01-02".into(),
            open: 187.15,
            high: 188.44,
            low: 183.89,
            close: 185.64,
            volume: 82_488_700,
        };
        let json = serde_json::to_string(&stock).unwrap();
        let mut last = 0;
        for column in StockPrice::COLUMNS {
            let pos = json.find(&format!("\"{}\"", column)).unwrap();
            assert!(pos >= last);
            last = pos;
        }
        assert!((stock.change() - (185.64 - 187.15)).abs() < 1e-9);
    }

    #[test]
    fn test_natural_keys() {
        let sale = SalesRecord {
            month: "2024-01".into(),
            product: "Laptops".into(),
            sales: 125000.0,
        };
        assert_eq!(sale.key(), ("2024-01", "Laptops"));

        let pop = PopulationRecord {
            country: "India".into(),
            year: 2020,
            population: 1_380_004_385,
            gdp_per_capita: 1900.7,
        };
        assert_eq!(pop.key(), ("India", 2020));
        assert_eq!(<PopulationRecord as Record>::DATASET, Dataset::Population);
    }

    #[test]
    fn test_non_finite_column() {
        let mut quote = StockPrice {
            symbol: "MSFT".into(),
            date: "2024-01-02".into(),
            open: 373.86,
            high: 375.90,
            low: 366.77,
            close: 370.87,
            volume: 25_258_600,
        };
        assert_eq!(quote.non_finite_column(), None);

        quote.low = f64::NEG_INFINITY;
        quote.close = f64::NAN;
        assert_eq!(quote.non_finite_column(), Some("low"));

        let sale = SalesRecord {
            month: "2024-01".into(),
            product: "Laptops".into(),
            sales: f64::INFINITY,
        };
        assert_eq!(sale.non_finite_column(), Some("sales"));
    }
}
