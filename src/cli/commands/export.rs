use crate::app::App;
use crate::cli::parser::Commands;
use crate::core::search::SearchQuery;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, app: &mut App) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        ids,
        term,
        status,
        risk_type,
        sort,
        force,
    } = cmd
    {
        let query = SearchQuery {
            term: term.clone(),
            status: *status,
            risk_type: *risk_type,
            sort: *sort,
        };
        let path = expand_tilde(file);

        ExportLogic::export(
            &app.store,
            *format,
            &path.to_string_lossy(),
            ids,
            &query,
            *force,
            app.now(),
        )?;
    }
    Ok(())
}
