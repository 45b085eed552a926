//! CLI commands for data export
//!
//! The monthly CSV and full-state snapshots in JSON or YAML.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use chrono::Local;
use clap::{Subcommand, ValueEnum};

use crate::config::{paths::BudgetPaths, settings::Settings};
use crate::error::{BudgetError, BudgetResult};
use crate::export::{
    build_export_rows, export_csv, export_snapshot_json, export_snapshot_yaml, render_csv,
    DirectorySink,
};
use crate::services::BudgetService;
use crate::storage::{write_text_atomic, KeyValueStore};

/// Snapshot format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SnapshotFormat {
    /// JSON format
    Json,
    /// YAML format (human-readable)
    Yaml,
}

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export the budget as a flat CSV (budget_YYYY-MM.csv)
    Csv {
        /// Write to this file instead of the export directory
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export the full budget and its summary
    Snapshot {
        /// Output file path
        output: PathBuf,

        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: SnapshotFormat,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },
}

/// Handle export commands
pub fn handle_export_command<S: KeyValueStore>(
    service: &BudgetService<S>,
    settings: &Settings,
    paths: &BudgetPaths,
    cmd: ExportCommands,
) -> BudgetResult<()> {
    match cmd {
        ExportCommands::Csv { output } => handle_export_csv(service, settings, paths, output),
        ExportCommands::Snapshot {
            output,
            format,
            pretty,
        } => handle_export_snapshot(service, output, format, pretty),
    }
}

fn handle_export_csv<S: KeyValueStore>(
    service: &BudgetService<S>,
    settings: &Settings,
    paths: &BudgetPaths,
    output: Option<PathBuf>,
) -> BudgetResult<()> {
    let state = service.state();

    let path = match output {
        Some(path) => {
            let contents = render_csv(&build_export_rows(state))?;
            write_text_atomic(&path, &contents)
                .map_err(|e| BudgetError::Export(format!("{}: {}", path.display(), e)))?;
            path
        }
        None => {
            let sink = DirectorySink::new(settings.export_dir(paths));
            export_csv(state, Local::now().date_naive(), &sink)?
        }
    };

    println!("Budget exported to: {}", path.display());
    Ok(())
}

fn handle_export_snapshot<S: KeyValueStore>(
    service: &BudgetService<S>,
    output: PathBuf,
    format: SnapshotFormat,
    pretty: bool,
) -> BudgetResult<()> {
    let file = File::create(&output).map_err(|e| {
        BudgetError::Export(format!(
            "Failed to create file {}: {}",
            output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    match format {
        SnapshotFormat::Json => export_snapshot_json(service.state(), &mut writer, pretty)?,
        SnapshotFormat::Yaml => export_snapshot_yaml(service.state(), &mut writer)?,
    }
    writer
        .flush()
        .map_err(|e| BudgetError::Export(e.to_string()))?;

    println!("Snapshot exported to: {}", output.display());
    Ok(())
}
