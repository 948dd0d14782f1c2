//! SQLite backing for the key-value store.
//!
//! # Responsibility
//! - Open file or in-memory connections with the `kv_entries` table in place.
//! - Attach the failing stage (connect, schema, query) to every SQLite error.
//!
//! # Invariants
//! - The schema version is mirrored to `PRAGMA user_version`.
//! - Files stamped by a newer build are refused, never downgraded.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod open;
pub mod schema;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    /// The connection could not be opened or configured.
    Connect(rusqlite::Error),
    /// Creating or inspecting the `kv_entries` schema failed.
    Schema(rusqlite::Error),
    /// A read or write against `kv_entries` failed.
    Query(rusqlite::Error),
    /// The file was stamped by a newer build.
    SchemaTooNew { found: u32, supported: u32 },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Connect(err) => write!(f, "cannot open task database: {err}"),
            Self::Schema(err) => write!(f, "cannot prepare kv_entries schema: {err}"),
            Self::Query(err) => write!(f, "kv_entries query failed: {err}"),
            Self::SchemaTooNew { found, supported } => write!(
                f,
                "task database schema {found} is newer than supported {supported}"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Connect(err) | Self::Schema(err) | Self::Query(err) => Some(err),
            Self::SchemaTooNew { .. } => None,
        }
    }
}
