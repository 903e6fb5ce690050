//! TUI widgets, one per view plus a status panel.
//!
//! Each widget has a single responsibility (SoC):
//! - `CityMap`: Renders city markers on a world map
//! - `SalesChart`: Renders monthly sales as grouped bars
//! - `PopulationChart`: Renders one trend line per country
//! - `ArcOverlay`: Renders arcs between cities at a given instant
//! - `StockTable`: Renders the stock listing
//! - `StatusPanel`: Renders loading, error and empty states
//!
//! Widgets are pure functions of (model, selection, clock).

mod arc_overlay;
mod city_map;
mod population_chart;
mod sales_chart;
mod status;
mod stock_table;

pub use arc_overlay::ArcOverlay;
pub use city_map::CityMap;
pub use population_chart::PopulationChart;
pub use sales_chart::SalesChart;
pub use status::StatusPanel;
pub use stock_table::StockTable;

use client::transform::Rgb;
use ratatui::style::Color;

/// Colours for per-product bars and per-country lines.
const SERIES_COLORS: &[Color] = &[
    Color::Cyan,
    Color::Green,
    Color::Yellow,
    Color::Magenta,
    Color::Red,
    Color::Blue,
    Color::LightCyan,
    Color::LightGreen,
];

/// Stable colour for the `index`-th series.
pub(crate) fn series_color(index: usize) -> Color {
    SERIES_COLORS[index % SERIES_COLORS.len()]
}

pub(crate) fn rgb(color: Rgb) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

/// Compact human form of a large count: 37.4M, 950.0K.
pub(crate) fn compact(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1e9 {
        format!("{:.1}B", value / 1e9)
    } else if abs >= 1e6 {
        format!("{:.1}M", value / 1e6)
    } else if abs >= 1e3 {
        format!("{:.1}K", value / 1e3)
    } else {
        format!("{value:.0}")
    }
}
