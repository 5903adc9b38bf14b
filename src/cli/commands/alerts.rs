use crate::app::App;
use crate::cli::parser::{AlertAction, Commands};
use crate::core::alerts::AlertLogic;
use crate::errors::AppResult;
use crate::models::alert::Alert;
use crate::ui::messages::{header, info, success, warning};
use crate::utils::table::{Column, Table};
use crate::utils::time::format_instant;

fn print_alerts(alerts: &[Alert], sep: &str) {
    let mut table = Table::new(
        vec![
            Column::new("ID"),
            Column::new("DRIVER"),
            Column::new("SENT"),
            Column::new("STATUS"),
            Column::new("RESOLVED"),
            Column::new("MESSAGE"),
        ],
        sep,
    );
    for a in alerts {
        table.add_row(vec![
            a.id.clone(),
            a.driver_id.clone(),
            format_instant(a.sent_at),
            a.status.to_db_str().to_string(),
            a.resolved_at.map(format_instant).unwrap_or_else(|| "--".into()),
            a.message.clone(),
        ]);
    }
    print!("{}", table.render());
}

pub fn handle(cmd: &Commands, app: &mut App) -> AppResult<()> {
    let Commands::Alerts { action } = cmd else {
        return Ok(());
    };
    let now = app.now();
    let sep = app.cfg.separator_char.clone();

    match action {
        AlertAction::List => {
            let history = AlertLogic::history(&app.store)?;
            header(format!("Alert history ({})", history.len()), &sep);
            print_alerts(&history, &sep);
        }

        AlertAction::Send {
            ids,
            template,
            message,
        } => {
            let sent = AlertLogic::send(&mut app.store, ids, *template, message.as_deref(), now)?;
            for a in &sent {
                success(format!("{} sent to {}: {}", a.id, a.driver_id, a.message));
            }
        }

        AlertAction::Ack { id } => {
            let a = AlertLogic::acknowledge(&mut app.store, id, now)?;
            success(format!("{} is {}", a.id, a.status.to_db_str()));
        }

        AlertAction::Resolve { id } => {
            let a = AlertLogic::resolve(&mut app.store, id, now)?;
            success(format!("{} is {}", a.id, a.status.to_db_str()));
        }

        AlertAction::Auto => {
            if !app.cfg.auto_alert {
                warning("Automatic alerts are disabled in the configuration.");
                return Ok(());
            }
            let sent =
                AlertLogic::auto_send(&mut app.store, true, app.cfg.alert_threshold, now)?;
            if sent.is_empty() {
                info("No driver needs a new alert.");
            } else {
                header(format!("Automatic alerts sent ({})", sent.len()), &sep);
                print_alerts(&sent, &sep);
            }
        }

        AlertAction::HighRisk { threshold } => {
            let threshold = threshold.unwrap_or(app.cfg.alert_threshold);
            let drivers = AlertLogic::high_risk(&app.store.all()?, threshold);
            info(format!(
                "{} driver(s) at or above risk level {threshold}.",
                drivers.len()
            ));
            if app.cfg.auto_alert {
                info("Automatic alerts are enabled for these drivers.");
            }
            if !drivers.is_empty() {
                print!(
                    "{}",
                    crate::cli::commands::list::driver_table(&drivers, now, &sep).render()
                );
            }
        }
    }

    Ok(())
}
