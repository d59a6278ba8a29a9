//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.

use crate::config::settings::Settings;
use crate::error::BudgetResult;
use crate::services::{DashboardService, DashboardState};
use crate::storage::Storage;

use super::dialogs::expense::ExpenseFormState;

/// Ticks (250ms each) a status message stays visible
const STATUS_TICKS: u8 = 24;

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    AddExpense,
    Help,
}

/// Main application state
pub struct App<'a> {
    /// The storage layer
    pub storage: &'a Storage,

    /// Application settings
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Everything on screen; replaced wholesale after each submit
    pub dashboard: DashboardState,

    /// Selected row in the expense table
    pub selected_expense_index: usize,

    /// Status message to display
    pub status_message: Option<String>,

    /// Whether the status message reports an error
    pub status_is_error: bool,

    status_ticks: u8,

    /// Expense form state
    pub expense_form: ExpenseFormState,
}

impl<'a> App<'a> {
    /// Create a new App with the dashboard loaded from storage
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> BudgetResult<Self> {
        let dashboard = DashboardService::new(storage).state()?;
        let selected_expense_index = dashboard.expenses.len().saturating_sub(1);

        Ok(Self {
            storage,
            settings,
            should_quit: false,
            active_dialog: ActiveDialog::default(),
            dashboard,
            selected_expense_index,
            status_message: None,
            status_is_error: false,
            status_ticks: 0,
            expense_form: ExpenseFormState::new(settings.form_year()),
        })
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_is_error = false;
        self.status_ticks = STATUS_TICKS;
    }

    /// Set an error status message
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.set_status(message);
        self.status_is_error = true;
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
        self.status_is_error = false;
        self.status_ticks = 0;
    }

    /// Advance timers; status messages expire after a few seconds
    pub fn tick(&mut self) {
        if self.status_ticks > 0 {
            self.status_ticks -= 1;
            if self.status_ticks == 0 {
                self.clear_status();
            }
        }
    }

    /// Replace the dashboard and select the newest expense
    pub fn apply_state(&mut self, dashboard: DashboardState) {
        self.dashboard = dashboard;
        self.select_last();
    }

    /// Reload the dashboard from storage
    pub fn refresh(&mut self) {
        match DashboardService::new(self.storage).state() {
            Ok(dashboard) => {
                self.dashboard = dashboard;
                self.clamp_selection();
                self.set_status("Refreshed");
            }
            Err(e) => self.set_error(e.to_string()),
        }
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        if dialog == ActiveDialog::AddExpense {
            self.expense_form = ExpenseFormState::new(self.settings.form_year());
        }
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    fn expense_count(&self) -> usize {
        self.dashboard.expenses.len()
    }

    pub fn move_up(&mut self) {
        self.selected_expense_index = self.selected_expense_index.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected_expense_index + 1 < self.expense_count() {
            self.selected_expense_index += 1;
        }
    }

    pub fn page_up(&mut self, rows: usize) {
        self.selected_expense_index = self.selected_expense_index.saturating_sub(rows);
    }

    pub fn page_down(&mut self, rows: usize) {
        self.selected_expense_index =
            (self.selected_expense_index + rows).min(self.expense_count().saturating_sub(1));
    }

    pub fn select_first(&mut self) {
        self.selected_expense_index = 0;
    }

    pub fn select_last(&mut self) {
        self.selected_expense_index = self.expense_count().saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        self.selected_expense_index = self
            .selected_expense_index
            .min(self.expense_count().saturating_sub(1));
    }
}
