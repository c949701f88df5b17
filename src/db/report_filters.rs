use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};

use crate::db::db::Db;
use crate::libs::error::AppError;
use crate::libs::messages::Message;
use crate::libs::query::ReportFilter;

pub(crate) const SCHEMA_REPORT_FILTERS: &str = "CREATE TABLE IF NOT EXISTS report_filters (
    id INTEGER PRIMARY KEY,
    user_id INTEGER NOT NULL,
    name TEXT NOT NULL,
    from_date TEXT,
    to_date TEXT,
    project_ids TEXT NOT NULL DEFAULT '[]',
    tag_ids TEXT NOT NULL DEFAULT '[]',
    client_ids TEXT NOT NULL DEFAULT '[]',
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    UNIQUE (user_id, name),
    FOREIGN KEY (user_id) REFERENCES users(id) ON DELETE CASCADE
)";
const INSERT_FILTER: &str = "INSERT INTO report_filters (user_id, name, from_date, to_date, project_ids, tag_ids, client_ids)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const DELETE_FILTER: &str = "DELETE FROM report_filters WHERE id = ?1 AND user_id = ?2";
const SELECT_FILTER_COLUMNS: &str = "SELECT id, user_id, name, from_date, to_date, project_ids, tag_ids, client_ids,
    created_at, updated_at FROM report_filters";

/// A named, reusable report filter preset.
///
/// The id sets persist as JSON arrays, keeping the schema flat while the
/// filter shape stays structured in code.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedReportFilter {
    pub id: Option<i64>,
    pub user_id: i64,
    pub name: String,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
    pub project_ids: Vec<i64>,
    pub tag_ids: Vec<i64>,
    pub client_ids: Vec<i64>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl SavedReportFilter {
    pub fn new(user_id: i64, name: String, filter: &ReportFilter) -> Self {
        Self {
            id: None,
            user_id,
            name,
            from_date: filter.from_date,
            to_date: filter.to_date,
            project_ids: filter.project_ids.clone(),
            tag_ids: filter.tag_ids.clone(),
            client_ids: filter.client_ids.clone(),
            created_at: None,
            updated_at: None,
        }
    }

    /// The filter shape consumed by the store and the report engine.
    pub fn to_filter(&self) -> ReportFilter {
        ReportFilter {
            from_date: self.from_date,
            to_date: self.to_date,
            project_ids: self.project_ids.clone(),
            tag_ids: self.tag_ids.clone(),
            client_ids: self.client_ids.clone(),
        }
    }
}

pub struct ReportFilters {
    conn: Connection,
}

impl ReportFilters {
    pub fn new() -> Result<Self, AppError> {
        Self::with_db(Db::new()?)
    }

    pub fn open(path: &Path) -> Result<Self, AppError> {
        Self::with_db(Db::open(path)?)
    }

    fn with_db(db: Db) -> Result<Self, AppError> {
        Ok(Self { conn: db.conn })
    }

    /// Save a new filter preset and return its id
    pub fn create(&mut self, filter: &SavedReportFilter) -> Result<i64, AppError> {
        self.conn.execute(
            INSERT_FILTER,
            params![
                filter.user_id,
                filter.name,
                filter.from_date.map(|d| d.to_string()),
                filter.to_date.map(|d| d.to_string()),
                serde_json::to_string(&filter.project_ids).unwrap_or_else(|_| "[]".to_string()),
                serde_json::to_string(&filter.tag_ids).unwrap_or_else(|_| "[]".to_string()),
                serde_json::to_string(&filter.client_ids).unwrap_or_else(|_| "[]".to_string()),
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// List a user's saved filters
    pub fn list(&mut self, user_id: i64) -> Result<Vec<SavedReportFilter>, AppError> {
        let sql = format!("{} WHERE user_id = ?1 ORDER BY name", SELECT_FILTER_COLUMNS);
        let mut stmt = self.conn.prepare(&sql)?;
        let filter_iter = stmt.query_map(params![user_id], map_filter)?;

        let mut filters = Vec::new();
        for filter in filter_iter {
            filters.push(filter?);
        }
        Ok(filters)
    }

    /// Get a saved filter by name
    pub fn get_by_name(&mut self, user_id: i64, name: &str) -> Result<Option<SavedReportFilter>, AppError> {
        let sql = format!("{} WHERE user_id = ?1 AND name = ?2", SELECT_FILTER_COLUMNS);
        self.conn.query_row(&sql, params![user_id, name], map_filter).optional().map_err(Into::into)
    }

    /// Delete a saved filter, raising an identifiable not-found error when
    /// the id does not exist or belongs to another user
    pub fn delete(&mut self, user_id: i64, id: i64) -> Result<(), AppError> {
        let affected = self.conn.execute(DELETE_FILTER, params![id, user_id])?;
        if affected == 0 {
            return Err(AppError::not_found(Message::ReportFilterNotFound(id.to_string())));
        }
        Ok(())
    }
}

fn map_filter(row: &rusqlite::Row) -> rusqlite::Result<SavedReportFilter> {
    Ok(SavedReportFilter {
        id: row.get(0)?,
        user_id: row.get(1)?,
        name: row.get(2)?,
        from_date: row.get::<_, Option<String>>(3)?.map(|s| parse_date(3, &s)).transpose()?,
        to_date: row.get::<_, Option<String>>(4)?.map(|s| parse_date(4, &s)).transpose()?,
        project_ids: parse_ids(5, &row.get::<_, String>(5)?)?,
        tag_ids: parse_ids(6, &row.get::<_, String>(6)?)?,
        client_ids: parse_ids(7, &row.get::<_, String>(7)?)?,
        created_at: row.get(8)?,
        updated_at: row.get(9)?,
    })
}

fn parse_date(index: usize, value: &str) -> rusqlite::Result<NaiveDate> {
    value
        .parse::<NaiveDate>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e)))
}

fn parse_ids(index: usize, value: &str) -> rusqlite::Result<Vec<i64>> {
    serde_json::from_str(value).map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e)))
}
