//! Pure transforms from fetched rows to drawable models.
//!
//! Each transform has a single responsibility:
//! - [`sales`]: `SalesGrid` for grouped bars (month x product)
//! - [`population`]: one `PopulationSeries` per country, ordered by year
//! - [`cities`]: `CityScale` for marker radius and colour
//! - [`arcs`]: parametric arc animation as a function of time
//!
//! Nothing here performs I/O or keeps state between calls.

pub mod arcs;
pub mod cities;
pub mod population;
pub mod sales;

pub use arcs::{
    Arc, ArcConfig, ArcFrame, ArcPoint, arc_frame, arc_path, arc_position, build_arcs, phase,
};
pub use cities::{CityMarker, CityScale, Rgb, ScaleConfig, markers};
pub use population::{
    PopulationPoint, PopulationSeries, group_by_country, population_range, year_range,
};
pub use sales::SalesGrid;

/// Linear interpolation between `a` and `b` at fraction `t`.
pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
