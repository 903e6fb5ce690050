//! City map widget - population-scaled markers on a world map.

use client::transform::CityMarker;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Block, Borders, Widget,
        canvas::{Canvas, Circle, Context, Map, MapResolution},
    },
};

use super::{compact, rgb};

/// Longitude bounds of the world map.
pub(crate) const X_BOUNDS: [f64; 2] = [-180.0, 180.0];
/// Latitude bounds of the world map.
pub(crate) const Y_BOUNDS: [f64; 2] = [-90.0, 90.0];

/// Draw the coastline layer.
pub(crate) fn draw_world(ctx: &mut Context) {
    ctx.draw(&Map {
        resolution: MapResolution::High,
        color: Color::DarkGray,
    });
    ctx.layer();
}

/// Draw one circle per marker, and the selected marker's label.
pub(crate) fn draw_markers(ctx: &mut Context, markers: &[CityMarker], selected: Option<usize>) {
    for marker in markers {
        ctx.draw(&Circle {
            x: marker.longitude,
            y: marker.latitude,
            radius: marker.radius,
            color: rgb(marker.color),
        });
    }

    if let Some(marker) = selected.and_then(|i| markers.get(i)) {
        ctx.layer();
        ctx.print(
            marker.longitude + marker.radius,
            marker.latitude,
            Line::from(Span::styled(
                marker.name.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
        );
    }
}

const TITLE: &str = "City Map";

/// World map with one marker per city.
pub struct CityMap<'a> {
    markers: &'a [CityMarker],
    selected: Option<usize>,
}

impl<'a> CityMap<'a> {
    pub fn new(markers: &'a [CityMarker]) -> Self {
        Self {
            markers,
            selected: None,
        }
    }

    /// Highlight the marker at `index`.
    pub fn selected(mut self, index: Option<usize>) -> Self {
        self.selected = index;
        self
    }

    fn caption(&self) -> String {
        match self.selected.and_then(|i| self.markers.get(i)) {
            Some(m) => format!(
                "{TITLE} - {}, {} ({:.2}, {:.2}) pop {}",
                m.name,
                m.country,
                m.latitude,
                m.longitude,
                compact(m.population as f64)
            ),
            None => TITLE.to_string(),
        }
    }
}

impl Widget for CityMap<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let caption = self.caption();
        let markers = self.markers;
        let selected = self.selected;

        Canvas::default()
            .block(
                Block::default()
                    .title(caption)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::White)),
            )
            .marker(Marker::Braille)
            .x_bounds(X_BOUNDS)
            .y_bounds(Y_BOUNDS)
            .paint(|ctx| {
                draw_world(ctx);
                draw_markers(ctx, markers, selected);
            })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use client::transform::Rgb;

    fn tokyo() -> CityMarker {
        CityMarker {
            name: "Tokyo".into(),
            country: "Japan".into(),
            longitude: 139.6917,
            latitude: 35.6895,
            population: 37_400_000,
            radius: 6.0,
            color: Rgb::new(240, 59, 32),
        }
    }

    #[test]
    fn test_city_map_renders() {
        let markers = vec![tokyo()];
        let area = Rect::new(0, 0, 80, 30);
        let mut buf = Buffer::empty(area);
        CityMap::new(&markers).selected(Some(0)).render(area, &mut buf);

        let text: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Tokyo, Japan"));
    }

    #[test]
    fn test_selection_out_of_range() {
        let markers = vec![tokyo()];
        let widget = CityMap::new(&markers).selected(Some(5));
        assert_eq!(widget.caption(), "City Map");
    }
}
