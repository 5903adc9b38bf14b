use crate::app::App;
use crate::cli::parser::Commands;
use crate::core::analytics::AnalyticsLogic;
use crate::errors::AppResult;
use crate::ui::messages::{header, warning};
use crate::utils::colors::{color_for_status, paint};
use crate::utils::formatting::pad_right;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, app: &mut App) -> AppResult<()> {
    let drivers = app.store.all()?;
    let sep = app.cfg.separator_char.clone();

    match cmd {
        Commands::Stats => {
            let stats = AnalyticsLogic::stats(&drivers, app.cfg.alert_threshold);

            header("Fleet statistics", &sep);
            println!("Drivers        : {}", stats.total);
            println!("Driving now    : {}", stats.driving_now);
            println!("Average risk   : {}", stats.average_risk);
            println!(
                "High risk      : {} (level >= {})",
                stats.high_risk, app.cfg.alert_threshold
            );

            println!("\nBy status:");
            for (status, count) in &stats.by_status {
                let label = paint(status.to_db_str(), color_for_status(*status));
                println!("  {} {}", pad_right(&label, 10), count);
            }

            println!("\nBy risk type:");
            for (risk, count) in &stats.by_risk_type {
                println!("  {:<13} {}", risk.to_db_str(), count);
            }
        }

        Commands::Top { limit } => {
            let limit = limit.unwrap_or(app.cfg.top_drivers);
            let top = AnalyticsLogic::top_drivers(&drivers, limit);

            if top.is_empty() {
                warning("No driver qualifies for the ranking.");
                return Ok(());
            }

            header(format!("Top {} drivers", top.len()), &sep);
            let mut table = Table::new(
                vec![
                    Column::new("RANK"),
                    Column::new("ID"),
                    Column::new("NAME"),
                    Column::new("SCORE"),
                    Column::new("SAFE DAYS"),
                    Column::new("TRIPS"),
                    Column::new("CLEAN TRIPS"),
                ],
                &sep,
            );
            for t in &top {
                table.add_row(vec![
                    t.rank.to_string(),
                    t.id.clone(),
                    t.name.clone(),
                    t.score.to_string(),
                    t.safety_days.to_string(),
                    t.total_trips.to_string(),
                    t.no_violations.to_string(),
                ]);
            }
            print!("{}", table.render());
        }

        _ => {}
    }

    Ok(())
}
