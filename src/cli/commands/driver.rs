use crate::app::App;
use crate::cli::parser::Commands;
use crate::core::tracker::LiveMinutes;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::utils::mins2readable;

pub(crate) fn live_line(id: &str, live: &LiveMinutes) -> String {
    format!(
        "{id} live: today {} min ({}) | month {} min ({}) | session {} min",
        live.today,
        mins2readable(live.today),
        live.monthly,
        mins2readable(live.monthly),
        live.current_session
    )
}

pub fn handle(cmd: &Commands, app: &mut App) -> AppResult<()> {
    let now = app.now();

    match cmd {
        Commands::Toggle { id } => {
            let before = app.store.require(id)?;
            let after = app
                .store
                .toggle(id, now)?
                .ok_or_else(|| AppError::UnknownDriver(id.clone()))?;

            if after == before {
                warning(format!(
                    "{id} left unchanged: driving status and start time disagree"
                ));
                return Ok(());
            }

            let accrued = after.today_minutes - before.today_minutes;
            success(format!(
                "{} {}: {} → {}",
                after.id,
                after.name,
                before.driving_status.to_db_str(),
                after.driving_status.to_db_str()
            ));
            if !after.driving_status.is_driving() {
                println!("Accrued {accrued} min");
            }
            println!(
                "Stored: today {} min | month {} min",
                after.today_minutes, after.monthly_minutes
            );
        }

        Commands::Live { id } => {
            let live = app
                .store
                .live(id, now)?
                .ok_or_else(|| AppError::UnknownDriver(id.clone()))?;
            println!("{}", live_line(id, &live));
        }

        Commands::Update {
            id,
            status,
            risk_type,
            risk_level,
            location,
            vehicle_type,
        } => {
            let mut record = app.store.require(id)?;

            if let Some(level) = risk_level {
                if *level > 100 {
                    return Err(AppError::InvalidRiskLevel(*level));
                }
                record.risk_level = *level as u8;
            }
            if let Some(s) = status {
                record.status = *s;
            }
            if let Some(r) = risk_type {
                record.risk_type = *r;
            }
            if let Some(l) = location {
                record.location = l.clone();
            }
            if let Some(v) = vehicle_type {
                record.vehicle_type = v.clone();
            }

            if !app.store.replace(&record, now)? {
                return Err(AppError::UnknownDriver(id.clone()));
            }
            success(format!("{} updated", record.id));
        }

        _ => {}
    }

    Ok(())
}
