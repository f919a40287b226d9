//! Interactive calculator session.
//!
//! The terminal form equivalent of the original calculator page: services
//! with editable quantities on the left, project settings and the live cost
//! breakdown on the right. The quote updates on every keystroke.

mod app;
mod ui;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use app::App;

pub async fn run() -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    let result = event_loop(&mut terminal, &mut app).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            handle_key(app, key).await;
        }
        if app.should_quit {
            return Ok(());
        }
    }
}

async fn handle_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    if app.is_editing() {
        match key.code {
            KeyCode::Enter => app.commit_quantity_edit(),
            KeyCode::Esc => app.cancel_quantity_edit(),
            KeyCode::Backspace => app.pop_input(),
            KeyCode::Char(c) => app.push_input(c),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('j') | KeyCode::Down => app.next_row(),
        KeyCode::Char('k') | KeyCode::Up => app.previous_row(),
        KeyCode::Tab => app.next_tab(),
        KeyCode::BackTab => app.previous_tab(),
        KeyCode::Char('+') | KeyCode::Char('l') | KeyCode::Right => app.adjust_quantity(1),
        KeyCode::Char('-') | KeyCode::Char('h') | KeyCode::Left => app.adjust_quantity(-1),
        KeyCode::Enter | KeyCode::Char('i') => app.begin_quantity_edit(),
        KeyCode::Char('c') => app.cycle_competition(),
        KeyCode::Char('b') => app.cycle_business_size(),
        KeyCode::Char('[') => app.adjust_duration(-1),
        KeyCode::Char(']') => app.adjust_duration(1),
        KeyCode::Char('{') => app.adjust_geographies(-1),
        KeyCode::Char('}') => app.adjust_geographies(1),
        KeyCode::Char('m') => app.toggle_retainer(),
        KeyCode::Char('e') => app.export().await,
        KeyCode::Char('r') => app.reset(),
        _ => {}
    }
}
