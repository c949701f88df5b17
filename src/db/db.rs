use std::path::Path;

use rusqlite::Connection;

use crate::db::{clients, projects, report_filters, tags, timers, users};
use crate::libs::data_storage::DataStorage;
use crate::libs::error::AppError;

pub const DB_FILE_NAME: &str = "tempus.db";

/// A handle to the SQLite database. Entity stores own their connection;
/// this type centralizes opening, connection setup, and schema bootstrap.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database at the default platform data path.
    pub fn new() -> Result<Db, AppError> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        Self::open(&db_file_path)
    }

    /// Opens the database at an explicit path. Tests pass a temporary
    /// location here instead of touching the shared data directory.
    pub fn open(path: &Path) -> Result<Db, AppError> {
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        Self::ensure_schema(&conn)?;
        Ok(Db { conn })
    }

    // Tables are created in dependency order so the timer store's joins
    // always have their targets, whichever store opens the database first.
    fn ensure_schema(conn: &Connection) -> Result<(), AppError> {
        for schema in [
            users::SCHEMA_USERS,
            clients::SCHEMA_CLIENTS,
            projects::SCHEMA_PROJECTS,
            tags::SCHEMA_TAGS,
            timers::SCHEMA_TIMERS,
            report_filters::SCHEMA_REPORT_FILTERS,
        ] {
            conn.execute(schema, [])?;
        }
        Ok(())
    }
}
