//! TUI Views module
//!
//! The dashboard is one screen; each panel lives in its own module.

pub mod charts;
pub mod expense_table;
pub mod header;
pub mod status_bar;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::DashboardLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = DashboardLayout::new(frame.area());

    header::render(frame, app, layout.header);
    expense_table::render(frame, app, layout.expenses);
    charts::render_balance_charts(frame, app, layout.account_chart, layout.savings_chart);
    charts::render_breakdown(frame, app, layout.breakdown);
    status_bar::render(frame, app, layout.status_bar);

    match app.active_dialog {
        ActiveDialog::AddExpense => dialogs::expense::render(frame, app),
        ActiveDialog::Help => dialogs::help::render(frame),
        ActiveDialog::None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SampleSettings, Settings};
    use crate::storage::Storage;
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_full_dashboard() {
        let storage = Storage::in_memory();
        storage.load_all(&SampleSettings::default()).unwrap();
        let settings = Settings::default();
        let app = App::new(&storage, &settings).unwrap();

        let mut terminal = Terminal::new(TestBackend::new(140, 45)).unwrap();
        terminal.draw(|frame| render(frame, &app)).unwrap();
        let text = buffer_text(&terminal);

        assert!(text.contains("Budget Tracker"));
        assert!(text.contains("Account Balance"));
        assert!(text.contains("Savings Balance"));
        assert!(text.contains("Spending by Category for"));
        assert!(text.contains("Amount Spent"));
    }

    #[test]
    fn test_renders_form_dialog() {
        let storage = Storage::in_memory();
        storage.load_all(&SampleSettings::default()).unwrap();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings).unwrap();
        app.open_dialog(ActiveDialog::AddExpense);

        let mut terminal = Terminal::new(TestBackend::new(140, 45)).unwrap();
        terminal.draw(|frame| render(frame, &app)).unwrap();
        let text = buffer_text(&terminal);

        assert!(text.contains("Add Expense"));
        assert!(text.contains("Spending Category"));
    }

    #[test]
    fn test_renders_in_a_narrow_terminal() {
        let storage = Storage::in_memory();
        storage.load_all(&SampleSettings::default()).unwrap();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings).unwrap();
        app.set_status("a status message that is much longer than the terminal is wide");

        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal.draw(|frame| render(frame, &app)).unwrap();
    }
}
