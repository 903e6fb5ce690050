//! Status panel widget - loading, error and "No data" states.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

#[derive(Debug, Clone, PartialEq)]
enum Status {
    Loading,
    Failed(String),
    Empty,
}

/// Placeholder drawn in place of a view that has nothing to show.
pub struct StatusPanel<'a> {
    title: &'a str,
    status: Status,
}

impl<'a> StatusPanel<'a> {
    /// Fetch in flight.
    pub fn loading(title: &'a str) -> Self {
        Self {
            title,
            status: Status::Loading,
        }
    }

    /// Fetch failed with `message`.
    pub fn failed(title: &'a str, message: impl Into<String>) -> Self {
        Self {
            title,
            status: Status::Failed(message.into()),
        }
    }

    /// Fetch succeeded with zero rows.
    pub fn empty(title: &'a str) -> Self {
        Self {
            title,
            status: Status::Empty,
        }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        match &self.status {
            Status::Loading => vec![Line::from(Span::styled(
                "Loading...",
                Style::default().fg(Color::Yellow),
            ))],
            Status::Failed(message) => vec![
                Line::from(Span::styled(
                    "Failed to load data",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(message.clone()),
                Line::from(""),
                Line::from(vec![
                    Span::raw("Press "),
                    Span::styled("r", Style::default().fg(Color::Yellow)),
                    Span::raw(" to retry"),
                ]),
            ],
            Status::Empty => vec![Line::from(Span::styled(
                "No data",
                Style::default().fg(Color::DarkGray),
            ))],
        }
    }
}

impl Widget for StatusPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = match self.status {
            Status::Failed(_) => Color::Red,
            _ => Color::DarkGray,
        };
        let block = Block::default()
            .title(self.title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = self.lines();
        // Vertically centre the message.
        let top = inner.height.saturating_sub(lines.len() as u16) / 2;
        let text_area = Rect {
            y: inner.y + top,
            height: inner.height - top,
            ..inner
        };

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(text_area, buf);
    }
}
