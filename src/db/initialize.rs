use crate::db::migrate::create_schema;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the store.
/// All tables are created by the schema module; nothing else issues DDL.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    create_schema(conn)?;
    Ok(())
}
