//! Expense entry dialog
//!
//! Modal form for adding an expense: Year, Date, Spending Category and
//! Amount Spent, with tab navigation and inline validation errors.

use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::error::BudgetResult;
use crate::models::{Expense, SpendingCategory};
use crate::services::{parse_expense, DashboardService};
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::input::TextInput;

/// Which field is currently focused in the expense form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpenseField {
    Year,
    #[default]
    Date,
    Category,
    Amount,
}

impl ExpenseField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Year => Self::Date,
            Self::Date => Self::Category,
            Self::Category => Self::Amount,
            Self::Amount => Self::Year,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Year => Self::Amount,
            Self::Date => Self::Year,
            Self::Category => Self::Date,
            Self::Amount => Self::Category,
        }
    }
}

/// State for the expense form dialog
#[derive(Debug, Clone)]
pub struct ExpenseFormState {
    /// Currently focused field
    pub focused_field: ExpenseField,

    pub year_input: TextInput,

    pub date_input: TextInput,

    /// Chosen by cycling, not typed
    pub category: SpendingCategory,

    pub amount_input: TextInput,

    /// Error message to display
    pub error_message: Option<String>,
}

impl ExpenseFormState {
    /// A fresh form: the given year, today's date, Food, 0.00
    pub fn new(default_year: i32) -> Self {
        let today = Local::now().date_naive();
        let mut state = Self {
            focused_field: ExpenseField::default(),
            year_input: TextInput::new()
                .label("Year")
                .placeholder("YYYY")
                .content(default_year.to_string()),
            date_input: TextInput::new()
                .label("Date")
                .placeholder("YYYY-MM-DD")
                .content(today.format("%Y-%m-%d").to_string()),
            category: SpendingCategory::default(),
            amount_input: TextInput::new()
                .label("Amount Spent")
                .placeholder("0.00")
                .content("0.00"),
            error_message: None,
        };
        state.update_focus();
        state
    }

    /// Move to the next field
    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
        self.update_focus();
    }

    /// Move to the previous field
    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
        self.update_focus();
    }

    fn update_focus(&mut self) {
        self.year_input.focused = self.focused_field == ExpenseField::Year;
        self.date_input.focused = self.focused_field == ExpenseField::Date;
        self.amount_input.focused = self.focused_field == ExpenseField::Amount;
    }

    /// Set focus to a specific field
    pub fn set_focus(&mut self, field: ExpenseField) {
        self.focused_field = field;
        self.update_focus();
    }

    /// The focused text input; `None` while the category is focused
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            ExpenseField::Year => Some(&mut self.year_input),
            ExpenseField::Date => Some(&mut self.date_input),
            ExpenseField::Category => None,
            ExpenseField::Amount => Some(&mut self.amount_input),
        }
    }

    /// Parse and validate the form into an expense
    pub fn build_expense(&self) -> BudgetResult<Expense> {
        parse_expense(
            self.year_input.value(),
            self.date_input.value(),
            self.category.name(),
            self.amount_input.value(),
        )
    }

    /// Clear any error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Set an error message
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }
}

/// Render the expense dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(60, 12, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Add Expense ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(1)
        .constraints([
            Constraint::Length(1), // Year
            Constraint::Length(1), // Date
            Constraint::Length(1), // Category
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Spacer
            Constraint::Length(2), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    let form = &app.expense_form;
    frame.render_widget(form.year_input.clone(), chunks[0]);
    frame.render_widget(form.date_input.clone(), chunks[1]);
    render_category_field(frame, form, chunks[2]);
    frame.render_widget(form.amount_input.clone(), chunks[3]);

    if let Some(ref error) = form.error_message {
        let error_line = Paragraph::new(Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(Color::Red),
        )))
        .wrap(ratatui::widgets::Wrap { trim: true });
        frame.render_widget(error_line, chunks[5]);
    }

    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Next  "),
        Span::styled("[←/→]", Style::default().fg(Color::Yellow)),
        Span::raw(" Category  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[6]);
}

fn render_category_field(frame: &mut Frame, form: &ExpenseFormState, area: Rect) {
    let focused = form.focused_field == ExpenseField::Category;
    let label_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };
    let value_style = if focused {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    } else {
        Style::default().fg(Color::Yellow)
    };

    let mut spans = vec![
        Span::styled(format!("{:>17}: ", "Spending Category"), label_style),
        Span::styled(if focused { "◀ " } else { "" }, label_style),
        Span::styled(form.category.name(), value_style),
        Span::styled(if focused { " ▶" } else { "" }, label_style),
    ];
    spans.retain(|s| !s.content.is_empty());

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Handle key input for the expense dialog
pub fn handle_key(app: &mut App, key: KeyEvent) {
    let form = &mut app.expense_form;

    match key.code {
        KeyCode::Esc => app.close_dialog(),

        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => form.prev_field(),
        KeyCode::Tab | KeyCode::Down => form.next_field(),
        KeyCode::BackTab | KeyCode::Up => form.prev_field(),

        KeyCode::Enter => submit(app),

        KeyCode::Left | KeyCode::Right | KeyCode::Char(' ')
            if form.focused_field == ExpenseField::Category =>
        {
            form.clear_error();
            form.category = if key.code == KeyCode::Left {
                form.category.prev()
            } else {
                form.category.next()
            };
        }

        KeyCode::Backspace => {
            form.clear_error();
            if let Some(input) = form.focused_input() {
                input.backspace();
            }
        }
        KeyCode::Delete => {
            form.clear_error();
            if let Some(input) = form.focused_input() {
                input.delete();
            }
        }
        KeyCode::Left => {
            if let Some(input) = form.focused_input() {
                input.move_left();
            }
        }
        KeyCode::Right => {
            if let Some(input) = form.focused_input() {
                input.move_right();
            }
        }
        KeyCode::Home => {
            if let Some(input) = form.focused_input() {
                input.move_start();
            }
        }
        KeyCode::End => {
            if let Some(input) = form.focused_input() {
                input.move_end();
            }
        }

        KeyCode::Char(c) => {
            form.clear_error();
            if let Some(input) = form.focused_input() {
                input.insert(c);
            }
        }

        _ => {}
    }
}

/// Submit the form, then refresh the whole dashboard from the result
fn submit(app: &mut App) {
    let result = app
        .expense_form
        .build_expense()
        .and_then(|expense| {
            let category = expense.category;
            DashboardService::new(app.storage)
                .submit(expense)
                .map(|state| (category, state))
        });

    match result {
        Ok((category, state)) => {
            app.apply_state(state);
            app.close_dialog();
            app.set_status(format!("Expense for '{}' added successfully!", category));
        }
        Err(e) => app.expense_form.set_error(e.to_string()),
    }
}
