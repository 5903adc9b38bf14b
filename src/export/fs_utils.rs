use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, BufRead, Write};
use std::path::Path;

fn is_yes(reply: &str) -> bool {
    matches!(reply.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Ask on stdin before replacing `path`.
fn confirm_overwrite(path: &Path) -> AppResult<bool> {
    warning(format!("{} exists.", path.display()));
    print!("Replace it? [y/N]: ");
    io::stdout().flush().ok();

    let mut reply = String::new();
    io::stdin().lock().read_line(&mut reply)?;
    Ok(is_yes(&reply))
}

/// A missing target, or `force`, needs no confirmation.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if force || !path.exists() {
        return Ok(());
    }
    if confirm_overwrite(path)? {
        info(format!("Replacing {}", path.display()));
        return Ok(());
    }
    Err(AppError::Export(format!(
        "{} left untouched; pass --force to replace it",
        path.display()
    )))
}
