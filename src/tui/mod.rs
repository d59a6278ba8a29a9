//! Terminal User Interface module
//!
//! A single-screen dashboard built on ratatui: balances header, the expense
//! table, balance history charts, this month's category breakdown, and a
//! form dialog for adding expenses.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
