use crate::app::App;
use crate::cli::parser::Commands;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use crate::utils::time::format_instant;

/// Move a pinned clock forward. Only commands move time; no accrual happens here.
pub fn handle(cmd: &Commands, app: &mut App) -> AppResult<()> {
    if let Commands::Advance { minutes } = cmd {
        let clock = app.clock.as_manual().ok_or_else(|| {
            AppError::Clock("advance needs a pinned clock (start with --clock)".into())
        })?;
        clock.advance_minutes(i64::from(*minutes));
        info(format!("Clock is now {}", format_instant(app.now())));
    }
    Ok(())
}
