pub mod app;
pub mod ui;

use std::io;
use std::time::Duration;

use anyhow::Result;
use chrono::{NaiveDate, Weekday};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tracing::info;
use trading_calendar_core::{CalendarMonth, DayRecordSource};

use crate::tui::app::App;

pub fn run<S: DayRecordSource>(source: S, week_start: Weekday, month: CalendarMonth, today: NaiveDate) -> Result<()> {
    let mut app = App::new(source, week_start, month, today);
    info!(month = %month, ?week_start, "Starting calendar TUI");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: Backend, S: DayRecordSource>(terminal: &mut Terminal<B>, app: &mut App<S>) -> Result<()> {
    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .map_err(|e| io::Error::other(e.to_string()))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Esc => app.clear_selection(),
                    KeyCode::Char('n') | KeyCode::Char(']') | KeyCode::PageDown => app.next_month(),
                    KeyCode::Char('p') | KeyCode::Char('[') | KeyCode::PageUp => app.previous_month(),
                    KeyCode::Char('t') => app.go_to_today(),
                    KeyCode::Left | KeyCode::Char('h') => app.move_selection(-1),
                    KeyCode::Right | KeyCode::Char('l') => app.move_selection(1),
                    KeyCode::Up | KeyCode::Char('k') => app.move_selection(-7),
                    KeyCode::Down | KeyCode::Char('j') => app.move_selection(7),
                    _ => {}
                }
            }
        }
    }
}
