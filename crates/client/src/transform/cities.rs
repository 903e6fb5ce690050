//! Population-driven marker scale for the city map.

use types::City;

use super::lerp;

/// 24-bit colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channel-wise interpolation towards `other`.
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let channel = |a: u8, b: u8| lerp(a as f64, b as f64, t).round().clamp(0.0, 255.0) as u8;
        Rgb {
            r: channel(self.r, other.r),
            g: channel(self.g, other.g),
            b: channel(self.b, other.b),
        }
    }
}

/// Output ranges for the marker scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleConfig {
    /// Radius of the least populous city, in degrees.
    pub min_radius: f64,
    /// Radius of the most populous city, in degrees.
    pub max_radius: f64,
    pub low_color: Rgb,
    pub high_color: Rgb,
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            min_radius: 1.5,
            max_radius: 6.0,
            low_color: Rgb::new(255, 237, 160),
            high_color: Rgb::new(240, 59, 32),
        }
    }
}

/// Linear scale from population to marker radius and colour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CityScale {
    min_population: u64,
    max_population: u64,
    config: ScaleConfig,
}

impl CityScale {
    /// Fit the scale to the population range of `cities`.
    pub fn fit(cities: &[City], config: ScaleConfig) -> Self {
        let min_population = cities.iter().map(|c| c.population).min().unwrap_or(0);
        let max_population = cities.iter().map(|c| c.population).max().unwrap_or(0);
        Self {
            min_population,
            max_population,
            config,
        }
    }

    /// Position of `population` within the fitted range, in `[0, 1]`.
    ///
    /// A single-valued range puts everything at the midpoint.
    pub fn fraction(&self, population: u64) -> f64 {
        if self.max_population <= self.min_population {
            return 0.5;
        }
        let span = (self.max_population - self.min_population) as f64;
        (population.saturating_sub(self.min_population) as f64 / span).clamp(0.0, 1.0)
    }

    pub fn radius(&self, population: u64) -> f64 {
        lerp(
            self.config.min_radius,
            self.config.max_radius,
            self.fraction(population),
        )
    }

    pub fn color(&self, population: u64) -> Rgb {
        self.config
            .low_color
            .lerp(self.config.high_color, self.fraction(population))
    }
}

/// A city ready to be drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct CityMarker {
    pub name: String,
    pub country: String,
    pub longitude: f64,
    pub latitude: f64,
    pub population: u64,
    pub radius: f64,
    pub color: Rgb,
}

/// Scale every city, keeping input order.
pub fn markers(cities: &[City], config: ScaleConfig) -> Vec<CityMarker> {
    let scale = CityScale::fit(cities, config);
    cities
        .iter()
        .map(|c| CityMarker {
            name: c.name.clone(),
            country: c.country.clone(),
            longitude: c.longitude,
            latitude: c.latitude,
            population: c.population,
            radius: scale.radius(c.population),
            color: scale.color(c.population),
        })
        .collect()
}
