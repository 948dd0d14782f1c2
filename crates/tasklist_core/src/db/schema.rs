//! Schema bootstrap for the `kv_entries` table.

use crate::db::{DbError, DbResult};
use log::info;
use rusqlite::Connection;

/// Schema version written by this build.
pub const SCHEMA_VERSION: u32 = 1;

const KV_SCHEMA_SQL: &str = include_str!("kv_schema.sql");

/// Creates `kv_entries` on fresh files and stamps [`SCHEMA_VERSION`].
pub fn ensure_kv_schema(conn: &mut Connection) -> DbResult<()> {
    let found = stored_version(conn)?;
    if found > SCHEMA_VERSION {
        return Err(DbError::SchemaTooNew {
            found,
            supported: SCHEMA_VERSION,
        });
    }
    if found == SCHEMA_VERSION {
        return Ok(());
    }

    let tx = conn.transaction().map_err(DbError::Schema)?;
    tx.execute_batch(KV_SCHEMA_SQL).map_err(DbError::Schema)?;
    tx.pragma_update(None, "user_version", SCHEMA_VERSION)
        .map_err(DbError::Schema)?;
    tx.commit().map_err(DbError::Schema)?;

    info!("event=db_schema module=db status=ok from_version={found} to_version={SCHEMA_VERSION}");
    Ok(())
}

/// Version stamped in `PRAGMA user_version`; `0` for fresh files.
pub fn stored_version(conn: &Connection) -> DbResult<u32> {
    conn.pragma_query_value(None, "user_version", |row| row.get::<_, u32>(0))
        .map_err(DbError::Schema)
}
