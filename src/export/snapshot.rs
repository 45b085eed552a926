//! Snapshot export
//!
//! Writes the complete budget together with its summary as JSON or YAML,
//! stamped with schema and application versions.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{BudgetError, BudgetResult};
use crate::models::BudgetState;
use crate::reports::BudgetSummary;

/// Current snapshot schema version
pub const SNAPSHOT_SCHEMA_VERSION: &str = "1.0.0";

/// Full budget snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the snapshot
    pub app_version: String,

    pub state: BudgetState,

    /// Totals at export time, for readers that don't recompute them
    pub summary: BudgetSummary,
}

impl Snapshot {
    pub fn new(state: &BudgetState) -> Self {
        Self {
            schema_version: SNAPSHOT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            state: state.clone(),
            summary: BudgetSummary::generate(state),
        }
    }
}

/// Write a snapshot as JSON
pub fn export_snapshot_json<W: Write>(
    state: &BudgetState,
    writer: &mut W,
    pretty: bool,
) -> BudgetResult<()> {
    let snapshot = Snapshot::new(state);

    if pretty {
        serde_json::to_writer_pretty(&mut *writer, &snapshot)
    } else {
        serde_json::to_writer(&mut *writer, &snapshot)
    }
    .map_err(|e| BudgetError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| BudgetError::Export(e.to_string()))?;
    Ok(())
}

/// Write a snapshot as YAML with a short comment header
pub fn export_snapshot_yaml<W: Write>(state: &BudgetState, writer: &mut W) -> BudgetResult<()> {
    let snapshot = Snapshot::new(state);

    writeln!(writer, "# Budget Dashboard Snapshot")
        .map_err(|e| BudgetError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", snapshot.exported_at)
        .map_err(|e| BudgetError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| BudgetError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &snapshot).map_err(|e| BudgetError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_json_snapshot_round_trip() {
        let state = BudgetState::bootstrap().set_income(2500.0).unwrap();
        let mut output = Vec::new();
        export_snapshot_json(&state, &mut output, true).unwrap();

        let snapshot: Snapshot = serde_json::from_slice(&output).unwrap();
        assert_eq!(snapshot.schema_version, SNAPSHOT_SCHEMA_VERSION);
        assert_eq!(snapshot.state, state);
        assert_eq!(
            snapshot.summary.discretionary_remaining,
            Money::from_cents(250_000 - 152_597)
        );
    }

    #[test]
    fn test_yaml_snapshot_round_trip() {
        let state = BudgetState::bootstrap();
        let mut output = Vec::new();
        export_snapshot_yaml(&state, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.starts_with("# Budget Dashboard Snapshot"));

        let snapshot: Snapshot = serde_yaml::from_str(&text).unwrap();
        assert_eq!(snapshot.state, state);
        assert_eq!(snapshot.summary, BudgetSummary::generate(&state));
    }
}
