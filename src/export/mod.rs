// src/export/mod.rs

mod csv;
mod json;

use crate::errors::{AppError, AppResult};
use crate::models::RecordTable;
use crate::ui::messages::{info, success};
use crate::utils::path::ensure_parent_dir;
use clap::ValueEnum;
use std::path::Path;

/// Common message printed once an output table is on disk.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} written: {}", path.display()));
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Write `table` to `path`, creating the parent folder when missing.
///
/// Any failure here is final for the job: the table is only written once.
pub fn write_table(
    table: &RecordTable,
    path: &Path,
    format: ExportFormat,
    label: &str,
) -> AppResult<()> {
    info(format!(
        "Writing {label} ({}) to {}",
        format.as_str().to_uppercase(),
        path.display()
    ));

    ensure_parent_dir(path)?;

    let written = match format {
        ExportFormat::Csv => csv::write_csv(path, table),
        ExportFormat::Json => json::write_json(path, table),
    };
    written.map_err(|e| AppError::Export(format!("{}: {e}", path.display())))?;

    notify_export_success(label, path);
    Ok(())
}
