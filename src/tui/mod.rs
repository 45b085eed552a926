//! Terminal User Interface module
//!
//! A read-only dashboard built on ratatui. It shows the summary, credit
//! cards and the cost lists, and can export the month's CSV.

pub mod app;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;
pub mod views;

pub use app::App;
pub use terminal::run_tui;
