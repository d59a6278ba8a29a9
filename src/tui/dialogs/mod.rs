//! Dialog windows for the TUI

pub mod expense;
pub mod help;
