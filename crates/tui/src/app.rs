//! Main dashboard - owns the active view and runs the render loop.
//!
//! # Navigation
//!
//! - `Tab`/`→`: Next view
//! - `Shift+Tab`/`←`: Previous view
//! - `1`-`5`: Jump to view by number
//! - `↑`/`↓`: Move the selection (city, product, country or row)
//! - `r`: Retry a failed fetch
//! - `q`/`Esc`: Quit
//!
//! Switching views throws the current view away and mounts a fresh one in
//! `Idle`, which immediately begins its fetch.

use std::io::{self, Stdout};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use client::transform::{ArcConfig, ScaleConfig};
use client::{
    DataClient, MapView, OverlayView, Phase, PopulationView, SalesView, StockView, View,
    ViewState,
};
use crossbeam_channel::{Receiver, unbounded};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use tokio::runtime::Handle;

use crate::fetch::{FetchOutcome, Fetcher};
use crate::panel::{ActiveView, Panel};
use crate::widgets::{
    ArcOverlay, CityMap, PopulationChart, SalesChart, StatusPanel, StockTable,
};

/// Seconds since the Unix epoch; drives the arc animation.
fn wall_clock_secs() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0)
}

/// Top-level dashboard controller.
pub struct Dashboard {
    /// Results from fetch tasks.
    receiver: Receiver<FetchOutcome>,
    /// Spawns fetch tasks; `None` when detached from any server.
    fetcher: Option<Fetcher>,
    /// View on screen.
    active: ActiveView,
    /// State of the view on screen.
    panel: Panel,
    /// Bumped on every view switch. Outcomes from older generations are dropped.
    generation: u64,
    /// Selected row in the active view.
    selected: usize,
    /// Target frame rate.
    frame_rate: u64,
    map: MapView,
    overlay: OverlayView,
}

impl Dashboard {
    /// Create a dashboard that fetches through `client` on `runtime`.
    ///
    /// Starts on the map view.
    pub fn new(client: DataClient, runtime: Handle) -> Self {
        let (sender, receiver) = unbounded();
        Self::with_parts(receiver, Some(Fetcher::new(client, runtime, sender)))
    }

    fn with_parts(receiver: Receiver<FetchOutcome>, fetcher: Option<Fetcher>) -> Self {
        Self {
            receiver,
            fetcher,
            active: ActiveView::Map,
            panel: Panel::mount(ActiveView::Map),
            generation: 0,
            selected: 0,
            frame_rate: 30,
            map: MapView::default(),
            overlay: OverlayView::default(),
        }
    }

    /// Set the target frame rate (frames per second).
    pub fn frame_rate(mut self, fps: u64) -> Self {
        self.frame_rate = fps.max(1);
        self
    }

    /// Set the marker scale used by the map and overlay views.
    pub fn scale(mut self, scale: ScaleConfig) -> Self {
        self.map.scale = scale;
        self.overlay.scale = scale;
        self
    }

    /// Set the arc animation parameters.
    pub fn arcs(mut self, arcs: ArcConfig) -> Self {
        self.overlay.arcs = arcs;
        self
    }

    /// Start on `view` instead of the map.
    pub fn start_on(mut self, view: ActiveView) -> Self {
        self.active = view;
        self.panel = Panel::mount(view);
        self
    }

    pub fn active(&self) -> ActiveView {
        self.active
    }

    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    /// Run the TUI event loop.
    ///
    /// Blocks until the user presses 'q'.
    pub fn run(mut self) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.run_loop(&mut terminal);

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    /// Main event loop.
    fn run_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
        let tick_rate = Duration::from_millis(1000 / self.frame_rate);
        let mut last_tick = Instant::now();

        self.mount();

        loop {
            terminal.draw(|f| self.draw(f))?;

            let timeout = tick_rate
                .checked_sub(last_tick.elapsed())
                .unwrap_or_else(|| Duration::from_secs(0));

            if event::poll(timeout)?
                && let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
                && self.handle_key_event(key.code, key.modifiers)
            {
                return Ok(());
            }

            if last_tick.elapsed() >= tick_rate {
                self.poll_outcomes();
                last_tick = Instant::now();
            }
        }
    }

    // =========================================================================
    // View lifecycle
    // =========================================================================

    /// Begin the mounted view's fetch if it is still idle.
    fn mount(&mut self) {
        if self.panel.begin() {
            self.request();
        }
    }

    fn request(&self) {
        if let Some(ref fetcher) = self.fetcher {
            fetcher.request(self.active, self.generation, self.map, self.overlay);
        }
    }

    /// Discard the current view and mount `view`.
    fn switch_to(&mut self, view: ActiveView) {
        if view == self.active {
            return;
        }
        self.generation += 1;
        self.active = view;
        self.panel = Panel::mount(view);
        self.selected = 0;
        tracing::info!(view = view.title(), generation = self.generation, "switched view");
        self.mount();
    }

    /// Re-fetch after a failure. Ignored in any other phase.
    fn retry(&mut self) {
        if self.panel.retry() {
            tracing::info!(view = self.active.title(), "retrying fetch");
            self.request();
        }
    }

    /// Drain fetch results (non-blocking), dropping stale ones.
    fn poll_outcomes(&mut self) {
        for outcome in self.receiver.try_iter() {
            if outcome.generation != self.generation {
                tracing::debug!(
                    generation = outcome.generation,
                    current = self.generation,
                    "dropping stale fetch result"
                );
                continue;
            }
            if self.panel.apply(outcome.payload) {
                tracing::debug!(view = self.active.title(), phase = ?self.panel.phase(), "view resolved");
            }
        }
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Handle keyboard input. Returns true if should quit.
    fn handle_key_event(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,

            // View navigation: Tab/Right = next, Shift+Tab/Left = previous
            KeyCode::BackTab => self.switch_to(self.active.prev()),
            KeyCode::Tab if modifiers.contains(KeyModifiers::SHIFT) => {
                self.switch_to(self.active.prev());
            }
            KeyCode::Tab | KeyCode::Right => self.switch_to(self.active.next()),
            KeyCode::Left => self.switch_to(self.active.prev()),

            // Number keys jump to a view
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(view) = c.to_digit(10).and_then(|n| ActiveView::from_number(n as usize))
                {
                    self.switch_to(view);
                }
            }

            KeyCode::Char('r') | KeyCode::Char('R') => self.retry(),

            KeyCode::Down => self.select_next(),
            KeyCode::Up => self.select_previous(),

            _ => {}
        }
        false
    }

    /// Select the next row (wraps around).
    fn select_next(&mut self) {
        let count = self.panel.selectable();
        if count > 0 {
            self.selected = (self.selected + 1) % count;
        }
    }

    /// Select the previous row (wraps around).
    fn select_previous(&mut self) {
        let count = self.panel.selectable();
        if count > 0 {
            self.selected = if self.selected == 0 {
                count - 1
            } else {
                (self.selected - 1).min(count - 1)
            };
        }
    }

    /// Selected row, clamped to the model.
    fn selection(&self) -> Option<usize> {
        let count = self.panel.selectable();
        (count > 0).then(|| self.selected.min(count - 1))
    }

    // =========================================================================
    // Drawing
    // =========================================================================

    fn draw(&self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Length(1), // View tabs
                Constraint::Min(0),    // Content
                Constraint::Length(1), // Footer
            ])
            .split(area);

        self.draw_header(frame, chunks[0]);
        self.draw_tabs(frame, chunks[1]);
        self.draw_content(frame, chunks[2]);
        self.draw_footer(frame, chunks[3]);
    }

    fn draw_header(&self, frame: &mut Frame, area: Rect) {
        let (label, bg) = match self.panel.phase() {
            Phase::Idle => (" IDLE ", Color::Gray),
            Phase::Loading => (" LOADING ", Color::Yellow),
            Phase::Ready => (" READY ", Color::Green),
            Phase::Failed => (" FAILED ", Color::Red),
        };
        let status = Span::styled(
            label,
            Style::default()
                .fg(Color::Black)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        );
        let server = self
            .fetcher
            .as_ref()
            .map(|f| f.client().config().base_url.clone())
            .unwrap_or_else(|| "no server".to_string());

        let title = Line::from(vec![
            Span::styled(
                "Vizora",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" │ "),
            status,
            Span::raw(" │ "),
            Span::styled(server, Style::default().fg(Color::Gray)),
        ]);

        let header = Paragraph::new(title).style(Style::default().bg(Color::DarkGray));
        frame.render_widget(header, area);
    }

    fn draw_tabs(&self, frame: &mut Frame, area: Rect) {
        let mut spans: Vec<Span> = vec![Span::raw(" ")];
        for (i, view) in ActiveView::ALL.iter().enumerate() {
            let style = if *view == self.active {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(format!("[{}:{}]", i + 1, view.title()), style));
            spans.push(Span::raw(" "));
        }

        let tabs = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
        frame.render_widget(tabs, area);
    }

    fn draw_content(&self, frame: &mut Frame, area: Rect) {
        let selected = self.selection();
        match &self.panel {
            Panel::Map(ViewState::Ready(markers)) if !self.map.is_empty(markers) => {
                frame.render_widget(CityMap::new(markers).selected(selected), area);
            }
            Panel::Sales(ViewState::Ready(grid)) if !SalesView.is_empty(grid) => {
                frame.render_widget(SalesChart::new(grid).selected(selected), area);
            }
            Panel::Population(ViewState::Ready(series)) if !PopulationView.is_empty(series) => {
                frame.render_widget(PopulationChart::new(series).selected(selected), area);
            }
            Panel::Overlay(ViewState::Ready(model)) if !self.overlay.is_empty(model) => {
                let overlay = ArcOverlay::new(model, self.overlay.arcs)
                    .time(wall_clock_secs())
                    .selected(selected);
                frame.render_widget(overlay, area);
            }
            Panel::Stocks(ViewState::Ready(prices)) if !StockView.is_empty(prices) => {
                frame.render_widget(StockTable::new(prices).selected(selected), area);
            }
            panel => {
                let title = self.active.title();
                let status = match panel.phase() {
                    Phase::Idle | Phase::Loading => StatusPanel::loading(title),
                    Phase::Failed => {
                        StatusPanel::failed(title, panel.error_message().unwrap_or_default())
                    }
                    Phase::Ready => StatusPanel::empty(title),
                };
                frame.render_widget(status, area);
            }
        }
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled(" q", Style::default().fg(Color::Yellow)),
            Span::raw(" Quit  │ "),
            Span::styled("Tab/←→", Style::default().fg(Color::Cyan)),
            Span::raw(" View  │ "),
            Span::styled("1-5", Style::default().fg(Color::Cyan)),
            Span::raw(" Jump  │ "),
            Span::styled("↑↓", Style::default().fg(Color::Cyan)),
            Span::raw(" Select"),
        ];
        if self.panel.phase() == Phase::Failed {
            spans.push(Span::raw("  │ "));
            spans.push(Span::styled("r", Style::default().fg(Color::Green)));
            spans.push(Span::raw(" Retry"));
        }

        let footer = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
        frame.render_widget(footer, area);
    }
}
