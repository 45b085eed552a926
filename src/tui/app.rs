//! Application state for the TUI
//!
//! The dashboard is read-only: it shows one budget state and can export it.

use std::path::PathBuf;

use chrono::{Local, NaiveDate};

use crate::config::settings::Settings;
use crate::export::{export_csv, DirectorySink};
use crate::models::BudgetState;
use crate::reports::BudgetSummary;

/// The list panels that can hold focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    Recurring,
    Pending,
    Cards,
    Extras,
}

impl Panel {
    pub const ALL: [Panel; 4] = [Panel::Recurring, Panel::Pending, Panel::Cards, Panel::Extras];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Recurring => "Recurring Costs",
            Self::Pending => "Pending Costs",
            Self::Cards => "Credit Cards",
            Self::Extras => "Discretionary Spending",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Recurring => Self::Pending,
            Self::Pending => Self::Cards,
            Self::Cards => Self::Extras,
            Self::Extras => Self::Recurring,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Recurring => Self::Extras,
            Self::Pending => Self::Recurring,
            Self::Cards => Self::Pending,
            Self::Extras => Self::Cards,
        }
    }
}

/// Main application state
pub struct App<'a> {
    /// The budget being shown
    pub state: &'a BudgetState,

    /// Totals for `state`, computed once
    pub summary: BudgetSummary,

    pub settings: &'a Settings,

    /// Where `x` writes the CSV export
    pub export_dir: PathBuf,

    pub should_quit: bool,

    pub focused_panel: Panel,

    /// Highlighted row in the focused panel
    pub selected_index: usize,

    /// Status message to display
    pub status_message: Option<String>,
}

impl<'a> App<'a> {
    pub fn new(state: &'a BudgetState, settings: &'a Settings, export_dir: PathBuf) -> Self {
        Self {
            state,
            summary: BudgetSummary::generate(state),
            settings,
            export_dir,
            should_quit: false,
            focused_panel: Panel::default(),
            selected_index: 0,
            status_message: None,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Number of rows in a panel
    pub fn panel_len(&self, panel: Panel) -> usize {
        match panel {
            Panel::Recurring => self.state.recurring.len(),
            Panel::Pending => self.state.pending.len(),
            Panel::Cards => self.state.credit_cards.len(),
            Panel::Extras => self.state.extras.len(),
        }
    }

    pub fn focus_next(&mut self) {
        self.focused_panel = self.focused_panel.next();
        self.selected_index = 0;
    }

    pub fn focus_prev(&mut self) {
        self.focused_panel = self.focused_panel.prev();
        self.selected_index = 0;
    }

    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        let len = self.panel_len(self.focused_panel);
        if self.selected_index + 1 < len {
            self.selected_index += 1;
        }
    }

    /// Export the CSV dated today and report the outcome in the status bar
    pub fn export(&mut self) {
        self.export_on(Local::now().date_naive());
    }

    pub fn export_on(&mut self, today: NaiveDate) {
        let sink = DirectorySink::new(&self.export_dir);
        match export_csv(self.state, today, &sink) {
            Ok(path) => self.set_status(format!("Exported to {}", path.display())),
            Err(e) => self.set_status(format!("Export failed: {}", e)),
        }
    }
}
