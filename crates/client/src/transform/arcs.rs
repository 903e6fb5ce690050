//! Animated arcs between cities for the overlay view.
//!
//! The animation has no state. Every frame asks [`arc_frame`] where each arc
//! is at the current wall-clock time, and the answer depends on nothing else.

use std::f64::consts::PI;

use types::City;

use super::lerp;

/// Animation parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcConfig {
    /// Seconds for the head to travel from origin to destination.
    pub period_secs: f64,
    /// Length of the visible trail as a fraction of the arc.
    pub trail: f64,
    /// Lift at the arc's midpoint, in degrees of latitude.
    pub height: f64,
}

impl Default for ArcConfig {
    fn default() -> Self {
        Self {
            period_secs: 4.0,
            trail: 0.25,
            height: 12.0,
        }
    }
}

/// An arc between two cities, interpolated linearly in lon/lat space.
#[derive(Debug, Clone, PartialEq)]
pub struct Arc {
    pub from: String,
    pub to: String,
    /// `(longitude, latitude)` of the origin.
    pub start: (f64, f64),
    /// `(longitude, latitude)` of the destination.
    pub end: (f64, f64),
}

/// A point along an arc, lifted above the map by `altitude`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcPoint {
    pub longitude: f64,
    pub latitude: f64,
    pub altitude: f64,
}

impl ArcPoint {
    /// Canvas coordinates: altitude drawn as a northward offset.
    pub fn projected(&self) -> (f64, f64) {
        (self.longitude, self.latitude + self.altitude)
    }
}

/// Visible segment of one arc at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcFrame {
    pub tail: ArcPoint,
    pub head: ArcPoint,
    /// Head position along the arc, in `[0, 1)`.
    pub progress: f64,
}

/// Link cities in descending population order: 1st to 2nd, 2nd to 3rd, ...
pub fn build_arcs(cities: &[City]) -> Vec<Arc> {
    let mut ordered: Vec<&City> = cities.iter().collect();
    ordered.sort_by(|a, b| b.population.cmp(&a.population));

    ordered
        .windows(2)
        .map(|pair| Arc {
            from: pair[0].name.clone(),
            to: pair[1].name.clone(),
            start: pair[0].lon_lat(),
            end: pair[1].lon_lat(),
        })
        .collect()
}

/// Fractional position in the animation cycle at `time_secs`.
///
/// `offset` shifts the cycle so arcs do not move in lockstep.
pub fn phase(time_secs: f64, period_secs: f64, offset: f64) -> f64 {
    if period_secs <= 0.0 || !time_secs.is_finite() {
        return 0.0;
    }
    (time_secs / period_secs + offset).rem_euclid(1.0)
}

/// Point at `progress` (clamped to `[0, 1]`) along `arc`.
///
/// Altitude follows a half sine: zero at both ends, `height` at the middle.
pub fn arc_position(arc: &Arc, progress: f64, height: f64) -> ArcPoint {
    let t = progress.clamp(0.0, 1.0);
    ArcPoint {
        longitude: lerp(arc.start.0, arc.end.0, t),
        latitude: lerp(arc.start.1, arc.end.1, t),
        altitude: height * (PI * t).sin(),
    }
}

/// Visible segment of arc `index` (of `count`) at `time_secs`.
pub fn arc_frame(arc: &Arc, index: usize, count: usize, time_secs: f64, config: &ArcConfig) -> ArcFrame {
    let offset = if count == 0 {
        0.0
    } else {
        index as f64 / count as f64
    };
    let progress = phase(time_secs, config.period_secs, offset);
    let tail = (progress - config.trail).max(0.0);

    ArcFrame {
        tail: arc_position(arc, tail, config.height),
        head: arc_position(arc, progress, config.height),
        progress,
    }
}

/// The whole arc as `segments + 1` evenly spaced points.
pub fn arc_path(arc: &Arc, segments: usize, height: f64) -> Vec<ArcPoint> {
    let segments = segments.max(1);
    (0..=segments)
        .map(|i| arc_position(arc, i as f64 / segments as f64, height))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arc() -> Arc {
        Arc {
            from: "A".into(),
            to: "B".into(),
            start: (0.0, 0.0),
            end: (100.0, 20.0),
        }
    }

    fn city(name: &str, population: u64, lon: f64) -> City {
        City {
            name: name.into(),
            country: "X".into(),
            latitude: 0.0,
            longitude: lon,
            population,
        }
    }

    #[test]
    fn test_phase_wraps() {
        assert_eq!(phase(0.0, 4.0, 0.0), 0.0);
        assert_eq!(phase(2.0, 4.0, 0.0), 0.5);
        assert_eq!(phase(6.0, 4.0, 0.0), 0.5);
        assert_eq!(phase(1.0, 4.0, 0.75), 0.0);
        assert_eq!(phase(5.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_endpoints_touch_the_ground() {
        let start = arc_position(&arc(), 0.0, 10.0);
        let end = arc_position(&arc(), 1.0, 10.0);
        assert_eq!((start.longitude, start.latitude), (0.0, 0.0));
        assert_eq!((end.longitude, end.latitude), (100.0, 20.0));
        assert_eq!(start.altitude, 0.0);
        assert!(end.altitude.abs() < 1e-9);
    }

    #[test]
    fn test_apex_at_midpoint() {
        let mid = arc_position(&arc(), 0.5, 10.0);
        assert_eq!(mid.longitude, 50.0);
        assert!((mid.altitude - 10.0).abs() < 1e-12);
        assert_eq!(mid.projected(), (50.0, 10.0 + mid.altitude));
    }

    #[test]
    fn test_frame_is_pure_function_of_time() {
        let config = ArcConfig::default();
        let a = arc_frame(&arc(), 1, 3, 1234.5, &config);
        let b = arc_frame(&arc(), 1, 3, 1234.5, &config);
        assert_eq!(a, b);

        let later = arc_frame(&arc(), 1, 3, 1234.5 + config.period_secs, &config);
        assert!((a.progress - later.progress).abs() < 1e-9);
    }

    #[test]
    fn test_tail_trails_head() {
        let config = ArcConfig {
            period_secs: 10.0,
            trail: 0.2,
            height: 5.0,
        };
        let frame = arc_frame(&arc(), 0, 1, 5.0, &config);
        assert_eq!(frame.progress, 0.5);
        assert!((frame.tail.longitude - 30.0).abs() < 1e-9);
        assert_eq!(frame.head.longitude, 50.0);

        // Near the start the tail is pinned to the origin
        let early = arc_frame(&arc(), 0, 1, 0.5, &config);
        assert_eq!(early.tail.longitude, 0.0);
    }

    #[test]
    fn test_build_arcs_by_population() {
        let arcs = build_arcs(&[
            city("Delhi", 2, 77.0),
            city("Tokyo", 3, 139.0),
            city("Shanghai", 1, 121.0),
        ]);
        assert_eq!(arcs.len(), 2);
        assert_eq!((arcs[0].from.as_str(), arcs[0].to.as_str()), ("Tokyo", "Delhi"));
        assert_eq!((arcs[1].from.as_str(), arcs[1].to.as_str()), ("Delhi", "Shanghai"));
        assert_eq!(arcs[0].start, (139.0, 0.0));

        assert!(build_arcs(&[city("Solo", 1, 0.0)]).is_empty());
    }

    #[test]
    fn test_arc_path_spans_arc() {
        let path = arc_path(&arc(), 4, 0.0);
        assert_eq!(path.len(), 5);
        assert_eq!(path[0].longitude, 0.0);
        assert_eq!(path[4].longitude, 100.0);
    }
}
