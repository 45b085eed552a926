//! CSV Export functionality
//!
//! Flattens the budget into `(date-or-kind, description, amount)` rows and
//! writes them comma-separated. Fields are never quoted: a description that
//! contains a comma shifts the remaining columns of its row.

use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDate};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use tracing::info;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{BudgetState, Money};
use crate::storage::write_text_atomic;

/// One exported line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow {
    /// A date for extras, otherwise the kind of entry ("Monthly", "Bank", ...)
    pub date: String,
    pub description: String,
    pub amount: String,
}

impl ExportRow {
    fn new(date: impl Into<String>, description: impl Into<String>, amount: Money) -> Self {
        Self {
            date: date.into(),
            description: description.into(),
            amount: amount.to_plain_string(),
        }
    }

    /// The fixed header row
    pub fn header() -> Self {
        Self {
            date: "Date".to_string(),
            description: "Description".to_string(),
            amount: "Amount".to_string(),
        }
    }

    fn fields(&self) -> [&str; 3] {
        [self.date.as_str(), self.description.as_str(), self.amount.as_str()]
    }
}

/// Build every export row, header first
///
/// Order: recurring, pending, credit cards, the checking balance, then the
/// extras in the order they were added.
pub fn build_export_rows(state: &BudgetState) -> Vec<ExportRow> {
    let mut rows = Vec::with_capacity(
        3 + state.recurring.len()
            + state.pending.len()
            + state.credit_cards.len()
            + state.extras.len(),
    );

    rows.push(ExportRow::header());

    for (label, amount) in &state.recurring {
        rows.push(ExportRow::new("Monthly", label, *amount));
    }

    for (label, amount) in &state.pending {
        rows.push(ExportRow::new("Pending", label, *amount));
    }

    for (name, card) in &state.credit_cards {
        rows.push(ExportRow::new(
            "CreditCard",
            format!("{} (due {})", name, card.due_date),
            card.balance,
        ));
    }

    rows.push(ExportRow::new(
        "Bank",
        "Checking Balance",
        state.checking_balance,
    ));

    for extra in &state.extras {
        rows.push(ExportRow::new(
            extra.date.to_string(),
            &extra.description,
            extra.amount,
        ));
    }

    rows
}

/// Write rows as unquoted, newline-terminated CSV
///
/// Unlike a plain comma join of the raw numbers, amounts always carry two
/// decimals (`12.00`, `4.50`, never `12` or `4.5`) and the last row ends with
/// `\n`.
pub fn write_csv<W: Write>(rows: &[ExportRow], writer: W) -> BudgetResult<()> {
    let mut csv_writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    for row in rows {
        csv_writer.write_record(row.fields())?;
    }

    csv_writer
        .flush()
        .map_err(|e| BudgetError::Export(e.to_string()))?;

    Ok(())
}

/// Render rows to a CSV string
pub fn render_csv(rows: &[ExportRow]) -> BudgetResult<String> {
    let mut buffer = Vec::new();
    write_csv(rows, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| BudgetError::Export(e.to_string()))
}

/// File name for an export made on `today`: `budget_YYYY-MM.csv`
pub fn export_filename(today: NaiveDate) -> String {
    format!("budget_{:04}-{:02}.csv", today.year(), today.month())
}

/// Receives finished CSV files
pub trait CsvSink {
    /// Store `contents` under `filename`, returning where it ended up
    fn deliver(&self, filename: &str, contents: &str) -> BudgetResult<PathBuf>;
}

/// Writes exports into a directory, replacing any file of the same name
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl CsvSink for DirectorySink {
    fn deliver(&self, filename: &str, contents: &str) -> BudgetResult<PathBuf> {
        let path = self.dir.join(filename);
        write_text_atomic(&path, contents)
            .map_err(|e| BudgetError::Export(format!("{}: {}", path.display(), e)))?;
        Ok(path)
    }
}

/// Build, render and hand the export for `state` to `sink`
pub fn export_csv<K: CsvSink + ?Sized>(
    state: &BudgetState,
    today: NaiveDate,
    sink: &K,
) -> BudgetResult<PathBuf> {
    let rows = build_export_rows(state);
    let contents = render_csv(&rows)?;
    let path = sink.deliver(&export_filename(today), &contents)?;

    info!(path = %path.display(), rows = rows.len(), "exported budget CSV");
    Ok(path)
}
