use std::time::Duration;

use crate::app::App;
use crate::cli::commands::driver::live_line;
use crate::cli::parser::Commands;
use crate::core::watch::WatchLogic;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, app: &mut App) -> AppResult<()> {
    if let Commands::Watch {
        id,
        interval_ms,
        ticks,
    } = cmd
    {
        let period = match interval_ms {
            Some(ms) => Duration::from_millis(*ms),
            None => Duration::from_secs(app.cfg.refresh_interval_secs),
        };

        info(format!(
            "Watching {id} every {} ms (Ctrl-C to stop)",
            period.as_millis()
        ));

        let shown = WatchLogic::run(&app.store, &app.clock, id, period, *ticks, |d, live| {
            println!("{}", live_line(&d.id, &live));
        })?;

        info(format!("Stopped watching {id} after {shown} refresh(es)"));
    }
    Ok(())
}
