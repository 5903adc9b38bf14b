use crate::core::search::{SearchLogic, SearchQuery};
use crate::core::store::DriverStore;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::write_rows;
use crate::export::model::DriverExport;
use crate::ui::messages::warning;
use chrono::{DateTime, Utc};
use std::path::Path;

/// High-level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// Export a driver selection.
    ///
    /// - `ids`: explicit selection; when empty, every driver matching `query` is exported
    /// - `file`: absolute path of the output file
    ///
    /// Returns the number of rows written; 0 means nothing matched and no file was created.
    pub fn export(
        store: &DriverStore,
        format: ExportFormat,
        file: &str,
        ids: &[String],
        query: &SearchQuery,
        force: bool,
        now: DateTime<Utc>,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        let drivers = store.all()?;
        let selected = if ids.is_empty() {
            SearchLogic::run(&drivers, query)
        } else {
            SearchLogic::select(&drivers, ids)
        };

        if selected.is_empty() {
            warning("No drivers selected; nothing exported.");
            return Ok(0);
        }

        ensure_writable(path, force)?;

        let rows: Vec<DriverExport> = selected
            .iter()
            .map(|d| DriverExport::from_record(d, now))
            .collect();

        write_rows(format, &rows, path)?;

        Ok(rows.len())
    }
}
