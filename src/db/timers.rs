//! Timer store: CRUD, the running-timer lookup, and the filtered queries
//! feeding the report engine and the exporters.
//!
//! List and report queries are assembled from an enumerated set of typed
//! filters (see [`crate::libs::query`]); nothing user-supplied is ever
//! interpolated into SQL except through placeholders. The paged fetch reads
//! its row page and total count inside one transaction so the pair stays
//! consistent under concurrent writes.

use std::path::Path;

use rusqlite::types::ToSql;
use rusqlite::{params, Connection, OptionalExtension};

use crate::db::db::Db;
use crate::libs::error::AppError;
use crate::libs::messages::Message;
use crate::libs::query::{Page, ReportFilter, TimerQuery};
use crate::libs::timer::{ClientRef, ProjectRef, TagRef, Timer, TimerRecord};

pub(crate) const SCHEMA_TIMERS: &str = "CREATE TABLE IF NOT EXISTS timers (
    id INTEGER PRIMARY KEY,
    user_id INTEGER NOT NULL,
    project_id INTEGER,
    tag_id INTEGER,
    description TEXT,
    start_time TIMESTAMP NOT NULL,
    end_time TIMESTAMP,
    hourly_rate REAL,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    FOREIGN KEY (user_id) REFERENCES users(id) ON DELETE CASCADE,
    FOREIGN KEY (project_id) REFERENCES projects(id) ON DELETE SET NULL,
    FOREIGN KEY (tag_id) REFERENCES tags(id) ON DELETE SET NULL
)";
const INSERT_TIMER: &str = "INSERT INTO timers (user_id, project_id, tag_id, description, start_time, end_time, hourly_rate)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const UPDATE_TIMER: &str = "UPDATE timers SET project_id = ?3, tag_id = ?4, description = ?5, start_time = ?6,
    end_time = ?7, hourly_rate = ?8, updated_at = CURRENT_TIMESTAMP WHERE id = ?1 AND user_id = ?2";
const DELETE_TIMER: &str = "DELETE FROM timers WHERE id = ?1 AND user_id = ?2";
const SELECT_TIMER_COLUMNS: &str = "SELECT id, user_id, project_id, tag_id, description, start_time, end_time,
    hourly_rate, created_at, updated_at FROM timers";
const SELECT_RUNNING: &str = "SELECT id, user_id, project_id, tag_id, description, start_time, end_time,
    hourly_rate, created_at, updated_at FROM timers
    WHERE user_id = ?1 AND end_time IS NULL ORDER BY start_time DESC LIMIT 1";

// Joined projection with user, project, client, and tag expanded; consumed
// by the aggregation engine and the exporters.
const SELECT_RECORDS: &str = "SELECT t.id, t.description, t.start_time, t.end_time, t.hourly_rate,
    t.created_at, t.updated_at, u.email, p.id, p.name, c.id, c.name, g.id, g.name
    FROM timers t
    LEFT JOIN users u ON u.id = t.user_id
    LEFT JOIN projects p ON p.id = t.project_id
    LEFT JOIN clients c ON c.id = p.client_id
    LEFT JOIN tags g ON g.id = t.tag_id";

pub struct Timers {
    conn: Connection,
}

impl Timers {
    pub fn new() -> Result<Self, AppError> {
        Self::with_db(Db::new()?)
    }

    pub fn open(path: &Path) -> Result<Self, AppError> {
        Self::with_db(Db::open(path)?)
    }

    fn with_db(db: Db) -> Result<Self, AppError> {
        Ok(Self { conn: db.conn })
    }

    /// Insert a new timer and return its id
    pub fn insert(&mut self, timer: &Timer) -> Result<i64, AppError> {
        self.conn.execute(
            INSERT_TIMER,
            params![
                timer.user_id,
                timer.project_id,
                timer.tag_id,
                timer.description,
                timer.start_time,
                timer.end_time,
                timer.hourly_rate
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Update an existing timer owned by `user_id`
    pub fn update(&mut self, user_id: i64, timer: &Timer) -> Result<(), AppError> {
        let id = timer.id.ok_or_else(|| AppError::Validation("Timer id is required for update".to_string()))?;
        let affected = self.conn.execute(
            UPDATE_TIMER,
            params![
                id,
                user_id,
                timer.project_id,
                timer.tag_id,
                timer.description,
                timer.start_time,
                timer.end_time,
                timer.hourly_rate
            ],
        )?;
        if affected == 0 {
            return Err(AppError::not_found(Message::TimerNotFound(id)));
        }
        Ok(())
    }

    /// Delete a timer owned by `user_id`
    pub fn delete(&mut self, user_id: i64, id: i64) -> Result<(), AppError> {
        let affected = self.conn.execute(DELETE_TIMER, params![id, user_id])?;
        if affected == 0 {
            return Err(AppError::not_found(Message::TimerNotFound(id)));
        }
        Ok(())
    }

    /// Get a timer by ID, scoped to its owner
    pub fn get_by_id(&mut self, user_id: i64, id: i64) -> Result<Option<Timer>, AppError> {
        let sql = format!("{} WHERE id = ?1 AND user_id = ?2", SELECT_TIMER_COLUMNS);
        self.conn.query_row(&sql, params![id, user_id], map_timer).optional().map_err(Into::into)
    }

    /// Get a timer by ID, raising an identifiable not-found error
    pub fn require(&mut self, user_id: i64, id: i64) -> Result<Timer, AppError> {
        self.get_by_id(user_id, id)?.ok_or_else(|| AppError::not_found(Message::TimerNotFound(id)))
    }

    /// The user's currently running timer, if any
    pub fn running(&mut self, user_id: i64) -> Result<Option<Timer>, AppError> {
        self.conn.query_row(SELECT_RUNNING, params![user_id], map_timer).optional().map_err(Into::into)
    }

    /// Duplicate a timer as a new row, copying everything but identity and
    /// audit timestamps
    pub fn duplicate(&mut self, user_id: i64, id: i64) -> Result<i64, AppError> {
        let source = self.require(user_id, id)?;
        let copy = Timer {
            id: None,
            created_at: None,
            updated_at: None,
            ..source
        };
        self.insert(&copy)
    }

    /// One page of joined timer records plus the total match count, read in
    /// a single transaction.
    pub fn fetch_page(&mut self, user_id: i64, query: &TimerQuery) -> Result<Page<TimerRecord>, AppError> {
        let page = query.page.unwrap_or_default();
        let (sort_column, sort_order) = match query.sort {
            Some((field, order)) => (field.column(), order.as_sql()),
            None => ("t.start_time", "DESC"),
        };

        let mut where_sql = String::from("t.user_id = ?1");
        let pattern;
        let mut params: Vec<&dyn ToSql> = vec![&user_id];
        if let Some(search) = &query.search {
            pattern = format!("%{}%", search);
            where_sql.push_str(" AND t.description LIKE ?2");
            params.push(&pattern);
        }

        let tx = self.conn.transaction()?;
        let count_sql = format!("SELECT COUNT(*) FROM timers t WHERE {}", where_sql);
        let total: u32 = tx.query_row(&count_sql, &params[..], |row| row.get(0))?;

        let mut items = Vec::new();
        {
            let rows_sql = format!(
                "{} WHERE {} ORDER BY {} {} LIMIT {} OFFSET {}",
                SELECT_RECORDS,
                where_sql,
                sort_column,
                sort_order,
                page.page_size,
                page.offset()
            );
            let mut stmt = tx.prepare(&rows_sql)?;
            for record in stmt.query_map(&params[..], map_record)? {
                items.push(record?);
            }
        }
        tx.commit()?;

        Ok(Page {
            items,
            total,
            page: page.page,
            page_size: page.page_size,
        })
    }

    /// All of a user's timers matching a report filter, with relations
    /// expanded, ordered by start time. The returned snapshot is exactly
    /// what the aggregation engine and exporters consume.
    pub fn fetch_for_report(&mut self, user_id: i64, filter: &ReportFilter) -> Result<Vec<TimerRecord>, AppError> {
        filter.validate()?;

        let mut clauses = vec!["t.user_id = ?".to_string()];
        let mut owned: Vec<Box<dyn ToSql>> = vec![Box::new(user_id)];
        if let Some(from) = filter.from_date {
            clauses.push("DATE(t.start_time) >= ?".to_string());
            owned.push(Box::new(from.to_string()));
        }
        if let Some(to) = filter.to_date {
            clauses.push("DATE(t.start_time) <= ?".to_string());
            owned.push(Box::new(to.to_string()));
        }
        for (column, ids) in [
            ("t.project_id", &filter.project_ids),
            ("t.tag_id", &filter.tag_ids),
            ("p.client_id", &filter.client_ids),
        ] {
            if !ids.is_empty() {
                clauses.push(format!("{} IN ({})", column, vec!["?"; ids.len()].join(", ")));
                owned.extend(ids.iter().map(|id| Box::new(*id) as Box<dyn ToSql>));
            }
        }

        let sql = format!("{} WHERE {} ORDER BY t.start_time", SELECT_RECORDS, clauses.join(" AND "));
        let params: Vec<&dyn ToSql> = owned.iter().map(|boxed| boxed.as_ref()).collect();

        let mut stmt = self.conn.prepare(&sql)?;
        let mut records = Vec::new();
        for record in stmt.query_map(&params[..], map_record)? {
            records.push(record?);
        }
        Ok(records)
    }
}

fn map_timer(row: &rusqlite::Row) -> rusqlite::Result<Timer> {
    Ok(Timer {
        id: row.get(0)?,
        user_id: row.get(1)?,
        project_id: row.get(2)?,
        tag_id: row.get(3)?,
        description: row.get(4)?,
        start_time: row.get(5)?,
        end_time: row.get(6)?,
        hourly_rate: row.get(7)?,
        created_at: row.get(8)?,
        updated_at: row.get(9)?,
    })
}

fn map_record(row: &rusqlite::Row) -> rusqlite::Result<TimerRecord> {
    let project = match row.get::<_, Option<i64>>(8)? {
        Some(id) => Some(ProjectRef {
            id,
            name: row.get(9)?,
            client: match row.get::<_, Option<i64>>(10)? {
                Some(client_id) => Some(ClientRef {
                    id: client_id,
                    name: row.get(11)?,
                }),
                None => None,
            },
        }),
        None => None,
    };
    let tag = match row.get::<_, Option<i64>>(12)? {
        Some(id) => Some(TagRef { id, name: row.get(13)? }),
        None => None,
    };

    Ok(TimerRecord {
        id: row.get(0)?,
        description: row.get(1)?,
        start_time: row.get(2)?,
        end_time: row.get(3)?,
        hourly_rate: row.get(4)?,
        created_at: row.get(5)?,
        updated_at: row.get(6)?,
        user_email: row.get(7)?,
        project,
        tag,
    })
}
