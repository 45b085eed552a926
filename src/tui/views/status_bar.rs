//! Status bar view
//!
//! Shows the remaining amount, key hints and the last status message

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let remaining = app.summary.discretionary_remaining;
    let remaining_color = if remaining.is_negative() {
        Color::Red
    } else {
        Color::Green
    };

    let mut spans = vec![
        Span::styled(" Left: ", Style::default().fg(Color::White)),
        Span::styled(
            remaining.format_with_symbol(&app.settings.currency_symbol),
            Style::default()
                .fg(remaining_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" │ "),
        Span::styled(
            "Tab: panel  ↑↓: move  x: export CSV  q: quit",
            Style::default().fg(Color::DarkGray),
        ),
    ];

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
