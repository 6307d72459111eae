// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::CheckinExport;
use crate::export::xlsx::export_xlsx;
use crate::models::CheckinRecord;
use crate::ui::messages::warning;
use std::path::Path;

/// Export Adapter: writes exactly the records it is given.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `records` to `path` in `format`.
    ///
    /// `path` must be absolute. An existing file is only replaced with
    /// `force` or after confirmation. Every failure is reported as
    /// `AppError::Export`; nothing is retried.
    pub fn export(
        records: &[CheckinRecord],
        format: ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<()> {
        Self::run(records, format, path, force).map_err(|e| match e {
            AppError::Export(msg) => AppError::Export(msg),
            other => AppError::Export(other.to_string()),
        })
    }

    fn run(
        records: &[CheckinRecord],
        format: ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<()> {
        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {}",
                path.display()
            )));
        }

        ensure_writable(path, force)?;

        if records.is_empty() {
            warning("No check-in records match the current filters: writing headers only.");
        }

        let rows: Vec<CheckinExport> = records.iter().map(CheckinExport::from).collect();

        match format {
            ExportFormat::Xlsx => export_xlsx(&rows, path),
            ExportFormat::Csv => export_csv(&rows, path),
            ExportFormat::Json => export_json(&rows, path),
        }
    }
}
