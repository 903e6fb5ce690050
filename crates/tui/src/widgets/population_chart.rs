//! Population chart widget - one trend line per country.

use client::transform::{PopulationSeries, population_range, year_range};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::Line,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, LegendPosition, Widget},
};

use super::{compact, series_color};

/// Line chart of population by year.
pub struct PopulationChart<'a> {
    series: &'a [PopulationSeries],
    /// Highlighted country index.
    selected: Option<usize>,
}

impl<'a> PopulationChart<'a> {
    pub fn new(series: &'a [PopulationSeries]) -> Self {
        Self {
            series,
            selected: None,
        }
    }

    /// Highlight the country at `index`.
    pub fn selected(mut self, index: Option<usize>) -> Self {
        self.selected = index;
        self
    }

    /// X bounds over all years. A single year gets one year of margin.
    fn x_bounds(&self) -> [f64; 2] {
        match year_range(self.series) {
            Some((first, last)) if first < last => [first as f64, last as f64],
            Some((year, _)) => [year as f64 - 1.0, year as f64 + 1.0],
            None => [0.0, 1.0],
        }
    }

    /// Y bounds over all populations with 10% padding.
    fn y_bounds(&self) -> [f64; 2] {
        match population_range(self.series) {
            Some((min, max)) => {
                let (min, max) = (min as f64, max as f64);
                // Flat data still needs a visible band.
                let padding = ((max - min) * 0.1).max(max * 0.05).max(1.0);
                [(min - padding).max(0.0), max + padding]
            }
            None => [0.0, 1.0],
        }
    }

    fn line_style(&self, index: usize) -> Style {
        let style = Style::default().fg(series_color(index));
        match self.selected {
            Some(s) if s == index => style.add_modifier(Modifier::BOLD),
            Some(_) => style.add_modifier(Modifier::DIM),
            None => style,
        }
    }

    fn title(&self) -> String {
        let selected = self.selected.and_then(|i| self.series.get(i));
        match selected.and_then(|s| s.latest().map(|p| (s, p))) {
            Some((s, p)) => format!(
                "Population Trends - {} {}: {} (GDP/capita {:.0})",
                s.country,
                p.year,
                compact(p.population as f64),
                p.gdp_per_capita
            ),
            None => "Population Trends".to_string(),
        }
    }
}

impl Widget for PopulationChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Datasets borrow their points, so the points must outlive the chart.
        let points: Vec<Vec<(f64, f64)>> = self.series.iter().map(|s| s.coordinates()).collect();

        let datasets: Vec<Dataset> = self
            .series
            .iter()
            .zip(&points)
            .enumerate()
            .map(|(i, (s, data))| {
                Dataset::default()
                    .name(s.country.clone())
                    .marker(Marker::Braille)
                    .graph_type(GraphType::Line)
                    .style(self.line_style(i))
                    .data(data)
            })
            .collect();

        let [x_min, x_max] = self.x_bounds();
        let [y_min, y_max] = self.y_bounds();

        let x_labels: Vec<Line> = vec![
            Line::from(format!("{:.0}", x_min)),
            Line::from(format!("{:.0}", (x_min + x_max) / 2.0)),
            Line::from(format!("{:.0}", x_max)),
        ];
        let y_labels: Vec<Line> = vec![
            Line::from(compact(y_min)),
            Line::from(compact((y_min + y_max) / 2.0)),
            Line::from(compact(y_max)),
        ];

        let chart = Chart::new(datasets)
            .block(
                Block::default()
                    .title(self.title())
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::White)),
            )
            .x_axis(
                Axis::default()
                    .title("Year")
                    .style(Style::default().fg(Color::Gray))
                    .bounds([x_min, x_max])
                    .labels(x_labels),
            )
            .y_axis(
                Axis::default()
                    .title("Population")
                    .style(Style::default().fg(Color::Gray))
                    .bounds([y_min, y_max])
                    .labels(y_labels),
            )
            .legend_position(Some(LegendPosition::TopLeft));

        chart.render(area, buf);
    }
}
