//! Stock table widget - lists stock quotes in file order.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, StatefulWidget, Table, TableState, Widget},
};
use types::StockPrice;

/// Stock listing table widget.
pub struct StockTable<'a> {
    /// Quotes to display.
    prices: &'a [StockPrice],
    /// Highlighted row.
    selected: Option<usize>,
}

impl<'a> StockTable<'a> {
    /// Create a new stock table widget.
    pub fn new(prices: &'a [StockPrice]) -> Self {
        Self {
            prices,
            selected: None,
        }
    }

    /// Highlight the row at `index`.
    pub fn selected(mut self, index: Option<usize>) -> Self {
        self.selected = index;
        self
    }
}

fn change_style(change: f64) -> Style {
    if change > 0.0 {
        Style::default().fg(Color::Green)
    } else if change < 0.0 {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Gray)
    }
}

impl Widget for StockTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let header_cells = [
            "Symbol", "Date", "Open", "High", "Low", "Close", "Change", "Volume",
        ]
        .iter()
        .map(|h| Cell::from(*h).style(Style::default().add_modifier(Modifier::BOLD)));
        let header = Row::new(header_cells)
            .style(Style::default().fg(Color::Yellow))
            .height(1);

        let rows = self.prices.iter().map(|quote| {
            let change = quote.change();
            Row::new(vec![
                Cell::from(quote.symbol.clone()),
                Cell::from(quote.date.clone()),
                Cell::from(format!("{:>10.2}", quote.open)),
                Cell::from(format!("{:>10.2}", quote.high)),
                Cell::from(format!("{:>10.2}", quote.low)),
                Cell::from(format!("{:>10.2}", quote.close)),
                Cell::from(format!("{:>+8.2}", change)).style(change_style(change)),
                Cell::from(format!("{:>12}", quote.volume)),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Min(8),     // Symbol
                Constraint::Length(12), // Date
                Constraint::Length(11), // Open
                Constraint::Length(11), // High
                Constraint::Length(11), // Low
                Constraint::Length(11), // Close
                Constraint::Length(9),  // Change
                Constraint::Length(13), // Volume
            ],
        )
        .header(header)
        .block(
            Block::default()
                .title(format!("Stock Prices ({} rows)", self.prices.len()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White)),
        )
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        let mut state = TableState::default().with_selected(self.selected);
        StatefulWidget::render(table, area, buf, &mut state);
    }
}
