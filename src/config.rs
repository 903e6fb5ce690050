//! Central configuration for the Vizora dashboard.
//!
//! Everything the terminal views can be tuned with lives here. Server
//! settings come from `server::ServerConfig`.

use client::transform::{ArcConfig, Rgb, ScaleConfig};
use tui::ActiveView;

/// Dashboard rendering configuration.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    // ─────────────────────────────────────────────────────────────────────────
    // Rendering
    // ─────────────────────────────────────────────────────────────────────────
    /// TUI frame rate (frames per second). Also the arc animation rate.
    pub frame_rate: u64,
    /// View shown at startup.
    pub start_view: ActiveView,

    // ─────────────────────────────────────────────────────────────────────────
    // City Markers
    // ─────────────────────────────────────────────────────────────────────────
    /// Marker radius of the least populous city, in degrees.
    pub min_radius: f64,
    /// Marker radius of the most populous city, in degrees.
    pub max_radius: f64,
    /// Marker colour of the least populous city.
    pub low_color: Rgb,
    /// Marker colour of the most populous city.
    pub high_color: Rgb,

    // ─────────────────────────────────────────────────────────────────────────
    // Arc Animation
    // ─────────────────────────────────────────────────────────────────────────
    /// Seconds for one arc traversal.
    pub arc_period_secs: f64,
    /// Visible trail as a fraction of the arc (0.0 - 1.0).
    pub arc_trail: f64,
    /// Lift at the arc midpoint, in degrees of latitude.
    pub arc_height: f64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        let scale = ScaleConfig::default();
        let arcs = ArcConfig::default();
        Self {
            // Rendering
            frame_rate: 30,
            start_view: ActiveView::Map,

            // City Markers
            min_radius: scale.min_radius,
            max_radius: scale.max_radius,
            low_color: scale.low_color,
            high_color: scale.high_color,

            // Arc Animation
            arc_period_secs: arcs.period_secs,
            arc_trail: arcs.trail,
            arc_height: arcs.height,
        }
    }
}

impl DashboardConfig {
    // ─────────────────────────────────────────────────────────────────────────
    // Builder-style setters for fluent configuration
    // ─────────────────────────────────────────────────────────────────────────

    /// Set the frame rate (at least 1).
    pub fn frame_rate(mut self, fps: u64) -> Self {
        self.frame_rate = fps.max(1);
        self
    }

    /// Set the view shown at startup.
    pub fn start_view(mut self, view: ActiveView) -> Self {
        self.start_view = view;
        self
    }

    /// Set the marker radius range. Arguments may come in either order.
    pub fn radius_range(mut self, a: f64, b: f64) -> Self {
        self.min_radius = a.min(b);
        self.max_radius = a.max(b);
        self
    }

    /// Set seconds per arc traversal.
    pub fn arc_period(mut self, secs: f64) -> Self {
        self.arc_period_secs = secs;
        self
    }

    /// Set the arc trail length, clamped to 0.0 - 1.0.
    pub fn arc_trail(mut self, fraction: f64) -> Self {
        self.arc_trail = fraction.clamp(0.0, 1.0);
        self
    }

    /// Set the arc midpoint lift.
    pub fn arc_height(mut self, degrees: f64) -> Self {
        self.arc_height = degrees;
        self
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Computed Properties
    // ─────────────────────────────────────────────────────────────────────────

    /// Marker scale for the map and overlay views.
    pub fn scale_config(&self) -> ScaleConfig {
        ScaleConfig {
            min_radius: self.min_radius,
            max_radius: self.max_radius,
            low_color: self.low_color,
            high_color: self.high_color,
        }
    }

    /// Arc animation parameters for the overlay view.
    pub fn arc_config(&self) -> ArcConfig {
        ArcConfig {
            period_secs: self.arc_period_secs,
            trail: self.arc_trail,
            height: self.arc_height,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Preset Configurations
// ─────────────────────────────────────────────────────────────────────────────

impl DashboardConfig {
    /// Slow terminals and remote sessions: fewer frames, slower arcs.
    pub fn low_power() -> Self {
        Self::default().frame_rate(10).arc_period(8.0)
    }
}
