use chrono::{DateTime, Utc};

use crate::app::App;
use crate::cli::parser::Commands;
use crate::core::search::{SearchLogic, SearchQuery};
use crate::core::tracker::live_minutes;
use crate::errors::AppResult;
use crate::models::driver::DriverRecord;
use crate::ui::messages::{header, warning};
use crate::utils::colors::{color_for_driving, color_for_risk_level, color_for_status, paint};
use crate::utils::formatting::ago;
use crate::utils::mins2readable;
use crate::utils::table::{Column, Table};
use crate::utils::time::format_instant;

pub fn handle(cmd: &Commands, app: &mut App) -> AppResult<()> {
    let now = app.now();

    match cmd {
        Commands::List {
            sort,
            status,
            limit,
        } => {
            let query = SearchQuery {
                status: *status,
                sort: *sort,
                ..Default::default()
            };
            let mut found = SearchLogic::run(&app.store.all()?, &query);
            let total = found.len();
            if let Some(n) = limit {
                found.truncate(*n);
            }

            header(format!("Drivers ({total})"), &app.cfg.separator_char);
            print!("{}", driver_table(&found, now, &app.cfg.separator_char).render());
        }

        Commands::Search {
            term,
            status,
            risk_type,
            sort,
        } => {
            let query = SearchQuery {
                term: term.clone(),
                status: *status,
                risk_type: *risk_type,
                sort: *sort,
            };
            let found = SearchLogic::run(&app.store.all()?, &query);

            if found.is_empty() {
                warning("No drivers match the search.");
                return Ok(());
            }

            header(format!("Search results ({})", found.len()), &app.cfg.separator_char);
            print!("{}", driver_table(&found, now, &app.cfg.separator_char).render());
        }

        Commands::Show { id } => {
            let d = app.store.require(id)?;
            print_details(&d, now, &app.cfg.separator_char);
        }

        _ => {}
    }

    Ok(())
}

pub(crate) fn driver_table(drivers: &[DriverRecord], now: DateTime<Utc>, sep: &str) -> Table {
    let mut table = Table::new(
        vec![
            Column::new("ID"),
            Column::new("NAME"),
            Column::new("STATUS"),
            Column::new("RISK"),
            Column::new("LEVEL"),
            Column::new("LOCATION"),
            Column::new("SEEN"),
            Column::new("DRIVING"),
        ],
        sep,
    );

    for d in drivers {
        table.add_row(vec![
            d.id.clone(),
            d.name.clone(),
            paint(d.status.to_db_str(), color_for_status(d.status)),
            d.risk_type.to_db_str().to_string(),
            paint(&d.risk_level.to_string(), color_for_risk_level(d.risk_level)),
            d.location.clone(),
            ago(d.minutes_since_event(now)),
            paint(d.driving_status.to_db_str(), color_for_driving(d.driving_status)),
        ]);
    }

    table
}

/// Detail view: profile, risk, and driving time including the running session.
pub(crate) fn print_details(d: &DriverRecord, now: DateTime<Utc>, sep: &str) {
    let live = live_minutes(d, now);

    header(format!("{} ({})", d.name, d.id), sep);
    println!("Vehicle        : {}", d.vehicle_type);
    println!("Location       : {}", d.location);
    println!(
        "Status         : {}",
        paint(d.status.to_db_str(), color_for_status(d.status))
    );
    println!("Risk type      : {}", d.risk_type.to_db_str());
    println!(
        "Risk level     : {}",
        paint(&d.risk_level.to_string(), color_for_risk_level(d.risk_level))
    );
    println!("Average score  : {}", d.average_score);
    println!("Last detection : {}", ago(d.minutes_since_event(now)));
    println!(
        "Driving status : {}",
        paint(d.driving_status.to_db_str(), color_for_driving(d.driving_status))
    );
    if let Some(started) = d.driving_started_at {
        println!("Driving since  : {}", format_instant(started));
    }
    println!(
        "Today          : {} ({} min)",
        mins2readable(live.today),
        live.today
    );
    println!(
        "This month     : {} ({} min)",
        mins2readable(live.monthly),
        live.monthly
    );
    println!(
        "Current session: {} ({} min)",
        mins2readable(live.current_session),
        live.current_session
    );
}
