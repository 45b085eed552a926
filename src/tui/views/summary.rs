//! Summary panel
//!
//! Income, the three totals and the discretionary remaining amount.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::Money;
use crate::tui::app::App;

fn row(label: &str, amount: Money, symbol: &str, style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<22}", label), Style::default().fg(Color::White)),
        Span::styled(format!("{:>14}", amount.format_with_symbol(symbol)), style),
    ])
}

/// Render the summary panel
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let symbol = app.settings.currency_symbol.as_str();
    let summary = &app.summary;
    let plain = Style::default();

    let remaining_color = if summary.is_overspent() {
        Color::Red
    } else {
        Color::Green
    };

    let lines = vec![
        row("Income", summary.income, symbol, plain),
        row("Recurring", summary.total_recurring, symbol, plain),
        row(
            "Pending",
            summary.total_pending,
            symbol,
            Style::default().fg(Color::DarkGray),
        ),
        row("Discretionary Spent", summary.total_extras, symbol, plain),
        row(
            "Remaining",
            summary.discretionary_remaining,
            symbol,
            Style::default()
                .fg(remaining_color)
                .add_modifier(Modifier::BOLD),
        ),
        row("Checking Balance", app.state.checking_balance, symbol, plain),
    ];

    let block = Block::default().borders(Borders::ALL).title(" Summary ");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
