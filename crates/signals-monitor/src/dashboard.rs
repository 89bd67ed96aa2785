//! TUI Dashboard using ratatui.

use chrono::{DateTime, Utc};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame, Terminal,
};
use signals_core::types::{Action, Signal, SignalsPage};
use std::io;
use std::time::Duration;

const MAX_MESSAGES: usize = 50;

/// Dashboard state.
#[derive(Debug, Clone)]
pub struct DashboardState {
    pub email: String,
    pub signals: Vec<Signal>,
    pub is_paid: bool,
    pub total: usize,
    pub upsell: Option<String>,
    pub refreshed_at: Option<DateTime<Utc>>,
    pub refreshing: bool,
    pub messages: Vec<String>,
}

impl DashboardState {
    /// Create an empty state for the given account.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            signals: Vec::new(),
            is_paid: false,
            total: 0,
            upsell: None,
            refreshed_at: None,
            refreshing: false,
            messages: Vec::new(),
        }
    }

    /// Replace signal data with a freshly fetched page.
    pub fn apply_page(&mut self, page: SignalsPage) {
        self.upsell = page.upsell().map(str::to_string);
        self.is_paid = page.is_paid;
        self.total = page.total;
        self.signals = page.signals;
        self.refreshed_at = Some(Utc::now());
        self.refreshing = false;
    }

    /// Record a failed refresh. Previously fetched signals stay on screen.
    pub fn apply_error(&mut self, message: impl Into<String>) {
        self.push_message(message);
        self.refreshing = false;
    }

    /// Append to the rolling message log.
    pub fn push_message(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
        if self.messages.len() > MAX_MESSAGES {
            let drop = self.messages.len() - MAX_MESSAGES;
            self.messages.drain(..drop);
        }
    }
}

/// TUI Dashboard.
pub struct Dashboard {
    refresh_ms: u64,
}

impl Dashboard {
    /// Create a new dashboard.
    pub fn new(refresh_ms: u64) -> Self {
        Self { refresh_ms }
    }

    /// Run the dashboard.
    ///
    /// `get_state` is polled every frame; `request_refresh` fires when the
    /// user presses 'r' and no refresh is already outstanding, so each key
    /// press maps to at most one in-flight request.
    pub fn run<F, R>(&self, mut get_state: F, mut request_refresh: R) -> io::Result<()>
    where
        F: FnMut() -> DashboardState,
        R: FnMut(),
    {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let res = self.run_loop(&mut terminal, &mut get_state, &mut request_refresh);

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        res
    }

    fn run_loop<F, R>(
        &self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        get_state: &mut F,
        request_refresh: &mut R,
    ) -> io::Result<()>
    where
        F: FnMut() -> DashboardState,
        R: FnMut(),
    {
        loop {
            let state = get_state();
            terminal.draw(|f| self.ui(f, &state))?;

            if event::poll(Duration::from_millis(self.refresh_ms))? {
                if let Event::Key(key) = event::read()? {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                        KeyCode::Char('r') if !state.refreshing => request_refresh(),
                        _ => {}
                    }
                }
            }
        }
    }

    fn ui(&self, frame: &mut Frame, state: &DashboardState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(4), // Status
                Constraint::Min(8),    // Signals
                Constraint::Length(4), // Banner
                Constraint::Length(6), // Messages
            ])
            .split(frame.area());

        self.render_header(frame, chunks[0], state);
        self.render_status(frame, chunks[1], state);
        self.render_signals(frame, chunks[2], state);
        self.render_banner(frame, chunks[3], state);
        self.render_messages(frame, chunks[4], state);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, state: &DashboardState) {
        let header = Paragraph::new(vec![Line::from(vec![
            Span::styled(
                "Trading Signals Dashboard",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            Span::styled(&state.email, Style::default().fg(Color::Cyan)),
            Span::raw(" | Press 'r' to refresh, 'q' to quit"),
        ])])
        .block(Block::default().borders(Borders::ALL).title("System"));
        frame.render_widget(header, area);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect, state: &DashboardState) {
        let (tier, tier_color) = if state.is_paid {
            ("Premium", Color::Green)
        } else {
            ("Free", Color::Yellow)
        };

        let refreshed = state
            .refreshed_at
            .map(|t| t.format("%H:%M:%S UTC").to_string())
            .unwrap_or_else(|| "--".to_string());

        let status = Paragraph::new(vec![
            Line::from(vec![
                Span::raw("Access: "),
                Span::styled(tier, Style::default().fg(tier_color).add_modifier(Modifier::BOLD)),
                Span::raw("  |  Signals: "),
                Span::styled(
                    format!("{} of {}", state.signals.len(), state.total),
                    Style::default(),
                ),
            ]),
            Line::from(vec![
                Span::raw("Last refresh: "),
                Span::styled(refreshed, Style::default()),
                Span::raw(if state.refreshing {
                    "  |  Refreshing..."
                } else {
                    ""
                }),
            ]),
        ])
        .block(Block::default().borders(Borders::ALL).title("Status"));
        frame.render_widget(status, area);
    }

    fn render_signals(&self, frame: &mut Frame, area: Rect, state: &DashboardState) {
        let block = Block::default().borders(Borders::ALL).title("Signals");

        if state.signals.is_empty() {
            let empty = Paragraph::new("No signals available").block(block);
            frame.render_widget(empty, area);
            return;
        }

        let header_cells = ["#", "Symbol", "Action", "Price", "Target", "Stop Loss", "Time"]
            .iter()
            .map(|h| Cell::from(*h).style(Style::default().add_modifier(Modifier::BOLD)));
        let header = Row::new(header_cells).height(1);

        let rows = state.signals.iter().enumerate().map(|(i, signal)| {
            let action_color = match signal.action {
                Action::Buy => Color::Green,
                Action::Sell => Color::Red,
            };

            Row::new(vec![
                Cell::from(format!("{}", i + 1)),
                Cell::from(Span::styled(
                    signal.symbol.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Cell::from(signal.action.to_string())
                    .style(Style::default().fg(action_color).add_modifier(Modifier::BOLD)),
                Cell::from(format!("{:.2}", signal.price)),
                Cell::from(format!("{:.2}", signal.target)).style(Style::default().fg(Color::Green)),
                Cell::from(format!("{:.2}", signal.stoploss)).style(Style::default().fg(Color::Red)),
                Cell::from(signal.timestamp.clone()),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(4),
                Constraint::Percentage(18),
                Constraint::Length(8),
                Constraint::Percentage(15),
                Constraint::Percentage(15),
                Constraint::Percentage(15),
                Constraint::Percentage(22),
            ],
        )
        .header(header)
        .block(block);

        frame.render_widget(table, area);
    }

    fn render_banner(&self, frame: &mut Frame, area: Rect, state: &DashboardState) {
        let banner = if let Some(upsell) = &state.upsell {
            Paragraph::new(vec![
                Line::from(Span::styled(
                    upsell.as_str(),
                    Style::default().fg(Color::Yellow),
                )),
                Line::from("Run `signals subscribe` to unlock all signals."),
            ])
            .block(Block::default().borders(Borders::ALL).title("Upgrade"))
        } else if state.is_paid {
            Paragraph::new(Line::from(Span::styled(
                format!("You have access to all {} premium signals!", state.total),
                Style::default().fg(Color::Green),
            )))
            .block(Block::default().borders(Borders::ALL).title("Subscription"))
        } else {
            Paragraph::new("").block(Block::default().borders(Borders::ALL).title("Subscription"))
        };

        frame.render_widget(banner, area);
    }

    fn render_messages(&self, frame: &mut Frame, area: Rect, state: &DashboardState) {
        let messages: Vec<Line> = state
            .messages
            .iter()
            .rev()
            .take(4)
            .map(|m| Line::from(m.as_str()))
            .collect();

        let paragraph =
            Paragraph::new(messages).block(Block::default().borders(Borders::ALL).title("Log"));
        frame.render_widget(paragraph, area);
    }
}
