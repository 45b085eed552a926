//! List panels
//!
//! Recurring costs, pending costs, credit cards and extras. The focused panel
//! gets a highlighted border and a selection marker.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::tui::app::{App, Panel};

fn items(app: &App, panel: Panel) -> Vec<String> {
    let symbol = app.settings.currency_symbol.as_str();
    let state = app.state;

    match panel {
        Panel::Recurring => state
            .recurring
            .iter()
            .map(|(label, amount)| format!("{:<28} {:>12}", label, amount.format_with_symbol(symbol)))
            .collect(),
        Panel::Pending => state
            .pending
            .iter()
            .map(|(label, amount)| format!("{:<28} {:>12}", label, amount.format_with_symbol(symbol)))
            .collect(),
        Panel::Cards => state
            .credit_cards
            .iter()
            .map(|(name, card)| {
                format!(
                    "{:<20} {:>12}  due {}",
                    name,
                    card.balance.format_with_symbol(symbol),
                    card.due_date
                )
            })
            .collect(),
        Panel::Extras => state
            .extras
            .iter()
            .map(|extra| {
                format!(
                    "{}  {:<30} {:>12}",
                    extra.date,
                    extra.description,
                    extra.amount.format_with_symbol(symbol)
                )
            })
            .collect(),
    }
}

/// Render one list panel
pub fn render(frame: &mut Frame, app: &App, panel: Panel, area: Rect) {
    let focused = app.focused_panel == panel;

    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(" {} ", panel.title()));

    let rows = items(app, panel);
    if rows.is_empty() {
        let empty = List::new(vec![ListItem::new("(none)")])
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, area);
        return;
    }

    let list = List::new(rows.into_iter().map(ListItem::new).collect::<Vec<_>>())
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    if focused {
        list_state.select(Some(app.selected_index));
    }

    frame.render_stateful_widget(list, area, &mut list_state);
}
