//! Export module for the budget dashboard
//!
//! - CSV: the flat row export, handed to a [`CsvSink`]
//! - Snapshot: the full budget plus summary as JSON or YAML

pub mod csv;
pub mod snapshot;

pub use self::csv::{
    build_export_rows, export_csv, export_filename, render_csv, write_csv, CsvSink,
    DirectorySink, ExportRow,
};
pub use self::snapshot::{export_snapshot_json, export_snapshot_yaml, Snapshot, SNAPSHOT_SCHEMA_VERSION};
