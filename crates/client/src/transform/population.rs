//! Population rows grouped into per-country trend lines.

use types::PopulationRecord;

/// One point on a country's trend line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopulationPoint {
    pub year: i32,
    pub population: u64,
    pub gdp_per_capita: f64,
}

/// A country's population history, ordered by year.
#[derive(Debug, Clone, PartialEq)]
pub struct PopulationSeries {
    pub country: String,
    pub points: Vec<PopulationPoint>,
}

impl PopulationSeries {
    /// `(year, population)` pairs as chart coordinates.
    pub fn coordinates(&self) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .map(|p| (p.year as f64, p.population as f64))
            .collect()
    }

    /// Most recent point.
    pub fn latest(&self) -> Option<&PopulationPoint> {
        self.points.last()
    }
}

/// Group rows by country (first-seen order) and sort each group by year.
///
/// The sort is stable, so rows sharing a year keep their file order.
pub fn group_by_country(records: &[PopulationRecord]) -> Vec<PopulationSeries> {
    let mut series: Vec<PopulationSeries> = Vec::new();

    for record in records {
        let point = PopulationPoint {
            year: record.year,
            population: record.population,
            gdp_per_capita: record.gdp_per_capita,
        };
        match series.iter_mut().find(|s| s.country == record.country) {
            Some(existing) => existing.points.push(point),
            None => series.push(PopulationSeries {
                country: record.country.clone(),
                points: vec![point],
            }),
        }
    }

    for s in &mut series {
        s.points.sort_by_key(|p| p.year);
    }
    series
}

/// Inclusive `(first, last)` year across all series.
pub fn year_range(series: &[PopulationSeries]) -> Option<(i32, i32)> {
    let years = series.iter().flat_map(|s| s.points.iter().map(|p| p.year));
    let (min, max) = years.fold((i32::MAX, i32::MIN), |(lo, hi), y| (lo.min(y), hi.max(y)));
    (min <= max).then_some((min, max))
}

/// Inclusive `(min, max)` population across all series.
pub fn population_range(series: &[PopulationSeries]) -> Option<(u64, u64)> {
    let values = series
        .iter()
        .flat_map(|s| s.points.iter().map(|p| p.population));
    let (min, max) = values.fold((u64::MAX, u64::MIN), |(lo, hi), v| (lo.min(v), hi.max(v)));
    (min <= max).then_some((min, max))
}
