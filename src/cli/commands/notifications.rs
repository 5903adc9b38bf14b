use crate::app::App;
use crate::cli::parser::Commands;
use crate::core::notifications::NotificationLogic;
use crate::errors::AppResult;
use crate::models::notification::NotificationKind;
use crate::ui::messages::{header, success};
use crate::utils::colors::{BLUE, GREY, RED, YELLOW, paint};
use crate::utils::formatting::ago;
use crate::utils::table::{Column, Table};

fn kind_color(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Critical => RED,
        NotificationKind::Warning => YELLOW,
        NotificationKind::Info => BLUE,
    }
}

pub fn handle(cmd: &Commands, app: &mut App) -> AppResult<()> {
    let Commands::Notifications { read, read_all } = cmd else {
        return Ok(());
    };

    if let Some(id) = read {
        NotificationLogic::mark_read(&mut app.store, id)?;
        success(format!("{id} marked as read"));
    }
    if *read_all {
        let n = NotificationLogic::mark_all_read(&mut app.store)?;
        success(format!("{n} notification(s) marked as read"));
    }

    let now = app.now();
    let list = NotificationLogic::list(&app.store)?;
    let unread = NotificationLogic::unread_count(&app.store)?;

    header(
        format!("Notifications ({unread} unread)"),
        &app.cfg.separator_char,
    );

    let mut table = Table::new(
        vec![
            Column::fixed("", 1),
            Column::new("ID"),
            Column::new("KIND"),
            Column::new("DRIVER"),
            Column::new("MESSAGE"),
            Column::new("LOCATION"),
            Column::new("WHEN"),
        ],
        &app.cfg.separator_char,
    );
    for n in &list {
        let marker = if n.read { paint("·", GREY) } else { paint("●", RED) };
        table.add_row(vec![
            marker,
            n.id.clone(),
            paint(n.kind.to_db_str(), kind_color(n.kind)),
            n.driver_name.clone(),
            n.message.clone(),
            n.location.clone(),
            ago((now - n.at).num_minutes().max(0)),
        ]);
    }
    print!("{}", table.render());

    Ok(())
}
