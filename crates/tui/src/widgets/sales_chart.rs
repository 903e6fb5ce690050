//! Sales chart widget - monthly sales as grouped bars, one colour per product.

use client::transform::SalesGrid;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Widget},
};

use super::{compact, series_color};

/// Grouped bar chart over a [`SalesGrid`].
pub struct SalesChart<'a> {
    grid: &'a SalesGrid,
    /// Highlighted product index.
    selected: Option<usize>,
}

impl<'a> SalesChart<'a> {
    pub fn new(grid: &'a SalesGrid) -> Self {
        Self {
            grid,
            selected: None,
        }
    }

    /// Highlight the product at `index`.
    pub fn selected(mut self, index: Option<usize>) -> Self {
        self.selected = index;
        self
    }

    /// Bar width that fits every group in `width` columns.
    fn bar_width(&self, width: u16) -> u16 {
        let months = self.grid.months.len().max(1) as u16;
        let products = self.grid.products.len().max(1) as u16;
        // One column of gap per group.
        let per_group = width / months;
        (per_group.saturating_sub(1) / products).clamp(1, 9)
    }

    fn bar_style(&self, product: usize) -> Style {
        let style = Style::default().fg(series_color(product));
        match self.selected {
            Some(s) if s == product => style.add_modifier(Modifier::BOLD | Modifier::REVERSED),
            Some(_) => style.add_modifier(Modifier::DIM),
            None => style,
        }
    }

    fn legend(&self) -> Line<'static> {
        let totals = self.grid.product_totals();
        let mut spans = vec![Span::raw(" ")];
        for (i, product) in self.grid.products.iter().enumerate() {
            spans.push(Span::styled("■ ", Style::default().fg(series_color(i))));
            spans.push(Span::styled(
                format!("{} ({})", product, compact(totals[i])),
                self.bar_style(i).remove_modifier(Modifier::REVERSED),
            ));
            spans.push(Span::raw("   "));
        }
        Line::from(spans)
    }

    fn groups(&self) -> Vec<BarGroup<'static>> {
        self.grid
            .months
            .iter()
            .enumerate()
            .map(|(m, month)| {
                let bars: Vec<Bar> = (0..self.grid.products.len())
                    .map(|p| {
                        let value = self.grid.value(m, p);
                        Bar::default()
                            .value(value.map_or(0, |v| v.max(0.0).round() as u64))
                            .text_value(value.map(compact).unwrap_or_default())
                            .style(self.bar_style(p))
                            .value_style(Style::default().fg(Color::Black).bg(series_color(p)))
                    })
                    .collect();
                BarGroup::default()
                    .label(Line::from(month.clone()))
                    .bars(&bars)
            })
            .collect()
    }
}

impl Widget for SalesChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Monthly Sales")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White));
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Legend
                Constraint::Min(0),    // Bars
            ])
            .split(inner);

        Paragraph::new(self.legend()).render(chunks[0], buf);

        let mut chart = BarChart::default()
            .bar_width(self.bar_width(chunks[1].width))
            .bar_gap(0)
            .group_gap(1)
            .max(self.grid.max_value().round().max(1.0) as u64);
        for group in self.groups() {
            chart = chart.data(group);
        }
        chart.render(chunks[1], buf);
    }
}
