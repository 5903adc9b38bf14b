use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::errors::{AppError, AppResult};
use crate::export::{DriverExport, ExportFormat, notify_export_success};

/// Write `rows` to `path` in `format` and report the row count.
pub(crate) fn write_rows(
    format: ExportFormat,
    rows: &[DriverExport],
    path: &Path,
) -> AppResult<()> {
    match format {
        ExportFormat::Csv => write_csv(rows, path)?,
        ExportFormat::Json => write_json(rows, path)?,
    }
    notify_export_success(&format.as_str().to_uppercase(), rows.len(), path);
    Ok(())
}

fn write_json(rows: &[DriverExport], path: &Path) -> AppResult<()> {
    let mut out = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut out, rows)
        .map_err(|e| AppError::Export(format!("{}: {e}", path.display())))?;
    out.flush()?;
    Ok(())
}

// Header row comes from the serde field names of DriverExport.
fn write_csv(rows: &[DriverExport], path: &Path) -> AppResult<()> {
    let mut out = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("{}: {e}", path.display())))?;
    for row in rows {
        out.serialize(row)
            .map_err(|e| AppError::Export(format!("{}: {e}", path.display())))?;
    }
    out.flush()?;
    Ok(())
}
