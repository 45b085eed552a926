//! Layout definitions for the TUI
//!
//! Title bar on top, summary and credit cards below it, the two cost lists
//! side by side, the extras list, and the status bar at the bottom.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the dashboard
pub struct DashboardLayout {
    pub title: Rect,
    pub summary: Rect,
    pub cards: Rect,
    pub recurring: Rect,
    pub pending: Rect,
    pub extras: Rect,
    pub status_bar: Rect,
}

impl DashboardLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),      // Title
                Constraint::Length(8),      // Summary + cards
                Constraint::Min(6),         // Recurring + pending
                Constraint::Percentage(30), // Extras
                Constraint::Length(1),      // Status bar
            ])
            .split(area);

        let top = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(vertical[1]);

        let middle = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(vertical[2]);

        Self {
            title: vertical[0],
            summary: top[0],
            cards: top[1],
            recurring: middle[0],
            pending: middle[1],
            extras: vertical[3],
            status_bar: vertical[4],
        }
    }
}
