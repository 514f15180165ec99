use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::ui::app::{App, FormField, InputMode};
use crate::ui::util::{scroll_down, scroll_up};

pub(crate) fn as_tui(app: &mut App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            // List body height: total minus header, cards, status, borders
            let content_height = f.area().height.saturating_sub(11) as usize;
            app.visible_rows = content_height.max(1);
            crate::ui::render::render(f, app);
        })?;

        if let Event::Key(key) = event::read()? {
            if app.show_help {
                app.show_help = false;
                continue;
            }
            match app.input_mode {
                InputMode::Normal => handle_normal_input(key, app),
                InputMode::Adding => handle_form_input(key, app),
            }
        }
    }
    Ok(())
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(key: event::KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
        }
        KeyCode::Char('a') => app.open_form(),
        KeyCode::Char('?') => {
            app.show_help = true;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            scroll_down(&mut app.txn_scroll, app.ledger.len(), app.visible_rows);
        }
        KeyCode::Char('k') | KeyCode::Up => scroll_up(&mut app.txn_scroll),
        KeyCode::Char('g') => {
            app.txn_scroll = 0;
        }
        _ => {}
    }
}

fn handle_form_input(key: event::KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Esc => {
            app.close_form();
            app.set_status("Cancelled");
        }
        KeyCode::Enter => app.submit_form(),
        KeyCode::Tab => app.field = app.field.next(),
        KeyCode::BackTab => app.field = app.field.prev(),
        KeyCode::Up if app.field == FormField::Category => app.category_up(),
        KeyCode::Down if app.field == FormField::Category => app.category_down(),
        KeyCode::Backspace => app.pop_char(),
        KeyCode::Char(c) => app.push_char(c),
        _ => {}
    }
}
