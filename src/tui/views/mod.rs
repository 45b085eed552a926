//! TUI Views module
//!
//! The dashboard is a single screen: summary, credit cards, the cost lists,
//! the extras list and a status bar.

pub mod panels;
pub mod status_bar;
pub mod summary;

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::app::{App, Panel};
use super::layout::DashboardLayout;

/// Render the entire dashboard
pub fn render(frame: &mut Frame, app: &App) {
    let layout = DashboardLayout::new(frame.area());

    let title = Line::from(vec![Span::styled(
        " Budget Dashboard ",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )]);
    frame.render_widget(Paragraph::new(title), layout.title);

    summary::render(frame, app, layout.summary);
    panels::render(frame, app, Panel::Cards, layout.cards);
    panels::render(frame, app, Panel::Recurring, layout.recurring);
    panels::render(frame, app, Panel::Pending, layout.pending);
    panels::render(frame, app, Panel::Extras, layout.extras);
    status_bar::render(frame, app, layout.status_bar);
}
