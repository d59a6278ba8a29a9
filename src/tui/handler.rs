//! Event handler for the TUI
//!
//! Routes keyboard events to the open dialog or the dashboard.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::event::Event;

/// Rows moved by PageUp/PageDown
const PAGE_ROWS: usize = 10;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => app.tick(),
        Event::Resize(_, _) => {}
    }
    Ok(())
}

fn handle_key_event(app: &mut App, key: KeyEvent) {
    match app.active_dialog {
        ActiveDialog::AddExpense => dialogs::expense::handle_key(app, key),
        ActiveDialog::Help => app.close_dialog(),
        ActiveDialog::None => handle_dashboard_key(app, key),
    }
}

fn handle_dashboard_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),
        KeyCode::Char('a') | KeyCode::Char('n') => app.open_dialog(ActiveDialog::AddExpense),
        KeyCode::Char('r') => app.refresh(),

        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::PageDown => app.page_down(PAGE_ROWS),
        KeyCode::PageUp => app.page_up(PAGE_ROWS),
        KeyCode::Char('g') | KeyCode::Home => app.select_first(),
        KeyCode::Char('G') | KeyCode::End => app.select_last(),

        _ => {}
    }
}
