//! End-to-end tests for the data endpoints.
//!
//! Each test writes fixtures into a temp directory, serves them on an
//! ephemeral port, and drives the server over real HTTP.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use data::DataStore;
use serde_json::Value;
use server::ServerState;
use tempfile::TempDir;
use tokio::net::TcpListener;

const CITIES: &str = "name,country,latitude,longitude,population\n\
    Tokyo,Japan,35.6762,139.6503,37400000\n\
    Delhi,India,28.7041,77.1025,32900000\n\
    Shanghai,China,31.2304,121.4737,29200000\n";

const SALES: &str = "month,product,sales\n\
    2024-01,Laptops,125000.5\n\
    2024-01,Phones,98000.25\n\
    2024-02,Laptops,131250.75\n\
    2024-02,Phones,101999.99\n";

const STOCKS: &str = "symbol,date,open,high,low,close,volume\n\
    AAPL,2024-01-02,187.15,188.44,183.89,185.64,82488700\n\
    MSFT,2024-01-02,373.86,375.90,366.77,370.87,25258600\n";

const POPULATION: &str = "country,year,population,gdp_per_capita\n\
    Japan,2021,125700000,39312.7\n\
    Japan,2020,125800000,40113.1\n";

fn fixtures(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (name, contents) in files {
        fs::write(dir.path().join(name), contents).unwrap();
    }
    dir
}

async fn spawn(dir: &Path) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let state = ServerState::new(DataStore::new(dir));
    tokio::spawn(server::serve(listener, state));
    format!("http://{}", addr)
}

async fn get_json(url: &str) -> (u16, Value) {
    let response = reqwest::get(url).await.unwrap();
    let status = response.status().as_u16();
    let body = response.json::<Value>().await.unwrap();
    (status, body)
}

fn field_set(value: &Value) -> HashSet<String> {
    value.as_object().unwrap().keys().cloned().collect()
}

fn expected_fields(columns: &[&str]) -> HashSet<String> {
    columns.iter().map(|c| c.to_string()).collect()
}

#[tokio::test]
async fn test_root_is_liveness_marker() {
    let dir = fixtures(&[]);
    let base = spawn(dir.path()).await;

    let (status, body) = get_json(&base).await;
    assert_eq!(status, 200);
    assert_eq!(body["message"], "Vizora Data API");

    let (status, body) = get_json(&format!("{}/health", base)).await;
    assert_eq!(status, 200);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_cities_scenario() {
    let dir = fixtures(&[("cities.csv", CITIES)]);
    let base = spawn(dir.path()).await;

    let response = reqwest::get(format!("{}/api/cities", base)).await.unwrap();
    assert_eq!(response.status().as_u16(), 200);
    let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("application/json"));

    let body: Value = response.json().await.unwrap();
    let cities = body.as_array().unwrap();
    assert_eq!(cities.len(), 3);

    let names: Vec<&str> = cities.iter().map(|c| c["name"].as_str().unwrap()).collect();
    assert_eq!(names, ["Tokyo", "Delhi", "Shanghai"]);

    let populations: Vec<u64> = cities
        .iter()
        .map(|c| c["population"].as_u64().unwrap())
        .collect();
    assert_eq!(populations, [37_400_000, 32_900_000, 29_200_000]);

    for city in cities {
        assert_eq!(field_set(city), expected_fields(<types::City as types::Record>::COLUMNS));
        assert!(city["latitude"].is_f64());
        assert!(city["longitude"].is_f64());
        assert!(city["population"].is_u64());
    }
}

#[tokio::test]
async fn test_sales_scenario() {
    let dir = fixtures(&[("sales.csv", SALES)]);
    let base = spawn(dir.path()).await;

    let (status, body) = get_json(&format!("{}/api/sales", base)).await;
    assert_eq!(status, 200);
    let sales = body.as_array().unwrap();
    assert_eq!(sales.len(), 4);

    let pairs: HashSet<(String, String)> = sales
        .iter()
        .map(|s| {
            (
                s["month"].as_str().unwrap().to_string(),
                s["product"].as_str().unwrap().to_string(),
            )
        })
        .collect();
    assert_eq!(pairs.len(), 4);

    let values: Vec<f64> = sales.iter().map(|s| s["sales"].as_f64().unwrap()).collect();
    assert_eq!(values, [125000.5, 98000.25, 131250.75, 101999.99]);
}

#[tokio::test]
async fn test_stock_prices_and_population_are_typed() {
    let dir = fixtures(&[("stock_prices.csv", STOCKS), ("population.csv", POPULATION)]);
    let base = spawn(dir.path()).await;

    let (status, body) = get_json(&format!("{}/api/stock-prices", base)).await;
    assert_eq!(status, 200);
    let stocks = body.as_array().unwrap();
    assert_eq!(stocks.len(), 2);
    for stock in stocks {
        for field in ["open", "high", "low", "close"] {
            assert!(stock[field].is_number(), "{} should be a number", field);
        }
        assert!(stock["volume"].is_u64());
        assert_eq!(stock.as_object().unwrap().len(), 7);
    }

    let (status, body) = get_json(&format!("{}/api/population", base)).await;
    assert_eq!(status, 200);
    let rows = body.as_array().unwrap();
    // File order, not year order
    assert_eq!(rows[0]["year"], 2021);
    assert_eq!(rows[1]["year"], 2020);
    assert!(rows[0]["population"].is_u64());
    assert!(rows[0]["gdp_per_capita"].is_f64());
}

#[tokio::test]
async fn test_repeated_calls_are_byte_identical() {
    let dir = fixtures(&[("cities.csv", CITIES)]);
    let base = spawn(dir.path()).await;
    let url = format!("{}/api/cities", base);

    let first = reqwest::get(&url).await.unwrap().bytes().await.unwrap();
    let second = reqwest::get(&url).await.unwrap().bytes().await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_empty_file_is_empty_array() {
    let dir = fixtures(&[("sales.csv", "")]);
    let base = spawn(dir.path()).await;

    let (status, body) = get_json(&format!("{}/api/sales", base)).await;
    assert_eq!(status, 200);
    assert_eq!(body, Value::Array(vec![]));
}

#[tokio::test]
async fn test_malformed_file_is_server_error() {
    let dir = fixtures(&[(
        "cities.csv",
        "name,country,latitude,longitude,population\n\
         Tokyo,Japan,35.6762,139.6503,37400000\n\
         Delhi,India,28.7041\n",
    )]);
    let base = spawn(dir.path()).await;

    let (status, body) = get_json(&format!("{}/api/cities", base)).await;
    assert_eq!(status, 500);
    assert!(body.is_object());
    assert_eq!(body["status"], 500);
    assert!(body["error"].as_str().unwrap().starts_with("Data unavailable"));
}

#[tokio::test]
async fn test_non_finite_numbers_are_server_error() {
    let dir = fixtures(&[
        ("sales.csv", "month,product,sales\n2024-01,Laptops,NaN\n2024-02,Phones,inf\n"),
        (
            "stock_prices.csv",
            "symbol,date,open,high,low,close,volume\n\
             AAPL,2024-01-02,187.15,inf,183.89,185.64,82488700\n",
        ),
    ]);
    let base = spawn(dir.path()).await;

    let (status, body) = get_json(&format!("{}/api/sales", base)).await;
    assert_eq!(status, 500);
    let error = body["error"].as_str().unwrap();
    assert!(error.starts_with("Data unavailable"));
    assert!(error.contains("non-finite sales on row 1"));

    let (status, body) = get_json(&format!("{}/api/stock-prices", base)).await;
    assert_eq!(status, 500);
    assert!(body["error"].as_str().unwrap().contains("non-finite high"));

    let (status, body) = get_json(&format!("{}/api/datasets", base)).await;
    assert_eq!(status, 200);
    assert_eq!(body[1]["available"], false);
    assert_eq!(body[2]["available"], false);
}

#[tokio::test]
async fn test_missing_file_is_server_error() {
    let dir = fixtures(&[]);
    let base = spawn(dir.path()).await;

    let (status, body) = get_json(&format!("{}/api/population", base)).await;
    assert_eq!(status, 500);
    assert!(body["error"].as_str().unwrap().contains("not found"));
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let dir = fixtures(&[("cities.csv", CITIES)]);
    let base = spawn(dir.path()).await;

    let response = reqwest::Client::new()
        .get(format!("{}/api/cities", base))
        .header("Origin", "http://localhost:5173")
        .send()
        .await
        .unwrap();
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
}

#[tokio::test]
async fn test_dataset_catalog() {
    let dir = fixtures(&[("cities.csv", CITIES), ("sales.csv", "garbage\n\"unterminated")]);
    let base = spawn(dir.path()).await;

    let (status, body) = get_json(&format!("{}/api/datasets", base)).await;
    assert_eq!(status, 200);
    let catalog = body.as_array().unwrap();
    assert_eq!(catalog.len(), 4);

    assert_eq!(catalog[0]["name"], "cities");
    assert_eq!(catalog[0]["available"], true);
    assert_eq!(catalog[0]["row_count"], 3);
    assert_eq!(catalog[0]["endpoint"], "/api/cities");
    assert_eq!(catalog[0]["column_count"], 5);
    assert!(catalog[0]["last_modified"].is_u64());

    assert_eq!(catalog[1]["name"], "sales");
    assert_eq!(catalog[1]["available"], false);
    assert!(catalog[1]["error"].is_string());

    assert_eq!(catalog[2]["available"], false);
    assert_eq!(catalog[2]["size_bytes"], Value::Null);
    assert_eq!(catalog[2]["last_modified"], Value::Null);
}

#[tokio::test]
async fn test_unknown_path_is_json_404() {
    let dir = fixtures(&[]);
    let base = spawn(dir.path()).await;

    let (status, body) = get_json(&format!("{}/api/unknown", base)).await;
    assert_eq!(status, 404);
    assert_eq!(body["error"], "Not found: /api/unknown");
}
