//! Full-screen terminal chart viewer.
//!
//! Each chart takes over the alternate screen until the user dismisses it, then
//! control returns to the caller for the next file.

mod charts;
mod help;

use crate::chart::{GroupedBarChart, LineChart};
use crate::render::ChartRenderer;
use anyhow::{bail, Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Paragraph,
    Frame, Terminal,
};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::debug;

/// What a key press does while a chart is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ViewerAction {
    Dismiss,
    Abort,
}

fn action_for(modifiers: KeyModifiers, code: KeyCode) -> Option<ViewerAction> {
    match (modifiers, code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(ViewerAction::Abort),
        (_, KeyCode::Char('q')) | (_, KeyCode::Esc) | (_, KeyCode::Enter) => {
            Some(ViewerAction::Dismiss)
        }
        _ => None,
    }
}

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Takes over the terminal when the first chart is shown, so a run that fails
/// before rendering leaves the shell untouched.
#[derive(Default)]
pub struct TerminalRenderer {
    terminal: Option<CrosstermTerminal>,
    charts_shown: usize,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// True once raw mode and the alternate screen have been entered.
    pub fn is_active(&self) -> bool {
        self.terminal.is_some()
    }

    /// Enter raw mode and the alternate screen on first use. Both are undone on drop.
    fn terminal(&mut self) -> Result<&mut CrosstermTerminal> {
        if self.terminal.is_none() {
            self.terminal = Some(enter_terminal()?);
            debug!("entered alternate screen");
        }
        self.terminal.as_mut().context("terminal not initialised")
    }

    /// Redraw until a dismiss key arrives. Resizes just trigger the next redraw.
    fn show(&mut self, draw_chart: impl Fn(Rect, &mut Frame)) -> Result<()> {
        self.charts_shown += 1;
        let chart_number = self.charts_shown;
        let terminal = self.terminal()?;

        loop {
            terminal
                .draw(|f| draw(f, chart_number, &draw_chart))
                .context("draw chart")?;

            if !event::poll(Duration::from_millis(250)).context("poll terminal events")? {
                continue;
            }
            if let Event::Key(k) = event::read().context("read terminal event")? {
                if k.kind != KeyEventKind::Press {
                    continue;
                }
                match action_for(k.modifiers, k.code) {
                    Some(ViewerAction::Dismiss) => {
                        debug!(chart = chart_number, "chart dismissed");
                        return Ok(());
                    }
                    Some(ViewerAction::Abort) => bail!("interrupted by user"),
                    None => {}
                }
            }
        }
    }
}

impl ChartRenderer for TerminalRenderer {
    fn render_grouped_bar_chart(&mut self, chart: &GroupedBarChart) -> Result<()> {
        self.show(|area, f| charts::draw_grouped_bar_chart(area, f, chart))
    }

    fn render_line_series(&mut self, chart: &LineChart) -> Result<()> {
        self.show(|area, f| charts::draw_line_chart(area, f, chart))
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        if let Some(terminal) = self.terminal.as_mut() {
            terminal.show_cursor().ok();
            restore_terminal();
        }
    }
}

fn enter_terminal() -> Result<CrosstermTerminal> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        restore_terminal();
        return Err(e).context("enter alternate screen");
    }

    let mut terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
        Ok(t) => t,
        Err(e) => {
            restore_terminal();
            return Err(e).context("create terminal");
        }
    };
    terminal.clear().ok();
    Ok(terminal)
}

fn restore_terminal() {
    disable_raw_mode().ok();
    let mut stdout = io::stdout();
    execute!(stdout, LeaveAlternateScreen).ok();
}

fn draw(f: &mut Frame, chart_number: usize, draw_chart: &impl Fn(Rect, &mut Frame)) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());
    draw_chart(chunks[0], f);
    f.render_widget(Paragraph::new(help::footer_line(chart_number)), chunks[1]);
}
