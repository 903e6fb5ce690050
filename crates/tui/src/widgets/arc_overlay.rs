//! Arc overlay widget - animated arcs between cities.
//!
//! The widget is told the time; it keeps no animation state. Each arc is
//! drawn as a faint full path plus a bright segment from the frame's tail to
//! its head, both computed by `client::transform::arc_frame`.

use client::OverlayModel;
use client::transform::{ArcConfig, arc_frame, arc_path, arc_position};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    widgets::{
        Block, Borders, Widget,
        canvas::{Canvas, Line as CanvasLine, Points},
    },
};

use super::city_map::{X_BOUNDS, Y_BOUNDS, draw_markers, draw_world};

/// Segments used for the faint full path of each arc.
const PATH_SEGMENTS: usize = 24;
/// Segments used for the bright trail.
const TRAIL_SEGMENTS: usize = 6;

/// Cities and arcs at one instant.
pub struct ArcOverlay<'a> {
    model: &'a OverlayModel,
    config: ArcConfig,
    time_secs: f64,
    selected: Option<usize>,
}

impl<'a> ArcOverlay<'a> {
    pub fn new(model: &'a OverlayModel, config: ArcConfig) -> Self {
        Self {
            model,
            config,
            time_secs: 0.0,
            selected: None,
        }
    }

    /// Wall-clock time to draw at, in seconds.
    pub fn time(mut self, time_secs: f64) -> Self {
        self.time_secs = time_secs;
        self
    }

    pub fn selected(mut self, index: Option<usize>) -> Self {
        self.selected = index;
        self
    }

    /// Canvas polyline of each arc's bright segment, tail first, head last.
    fn trails(&self) -> Vec<Vec<(f64, f64)>> {
        let count = self.model.arcs.len();
        self.model
            .arcs
            .iter()
            .enumerate()
            .map(|(i, arc)| {
                let frame = arc_frame(arc, i, count, self.time_secs, &self.config);
                let from = (frame.progress - self.config.trail).max(0.0);
                let mut points: Vec<(f64, f64)> = (0..TRAIL_SEGMENTS)
                    .map(|s| {
                        let t = from + (frame.progress - from) * s as f64 / TRAIL_SEGMENTS as f64;
                        arc_position(arc, t, self.config.height).projected()
                    })
                    .collect();
                points.push(frame.head.projected());
                points
            })
            .collect()
    }
}

impl Widget for ArcOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let paths: Vec<Vec<(f64, f64)>> = self
            .model
            .arcs
            .iter()
            .map(|arc| {
                arc_path(arc, PATH_SEGMENTS, self.config.height)
                    .iter()
                    .map(|p| p.projected())
                    .collect()
            })
            .collect();
        let trails = self.trails();
        let heads: Vec<(f64, f64)> = trails.iter().filter_map(|t| t.last().copied()).collect();
        let markers = &self.model.markers;
        let selected = self.selected;

        Canvas::default()
            .block(
                Block::default()
                    .title(format!("Arc Overlay ({} arcs)", self.model.arcs.len()))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::White)),
            )
            .marker(Marker::Braille)
            .x_bounds(X_BOUNDS)
            .y_bounds(Y_BOUNDS)
            .paint(|ctx| {
                draw_world(ctx);
                for path in &paths {
                    for pair in path.windows(2) {
                        ctx.draw(&CanvasLine::new(
                            pair[0].0,
                            pair[0].1,
                            pair[1].0,
                            pair[1].1,
                            Color::Gray,
                        ));
                    }
                }
                ctx.layer();
                for trail in &trails {
                    for pair in trail.windows(2) {
                        ctx.draw(&CanvasLine::new(
                            pair[0].0,
                            pair[0].1,
                            pair[1].0,
                            pair[1].1,
                            Color::LightCyan,
                        ));
                    }
                }
                ctx.draw(&Points {
                    coords: &heads,
                    color: Color::White,
                });
                ctx.layer();
                draw_markers(ctx, markers, selected);
            })
            .render(area, buf);
    }
}
