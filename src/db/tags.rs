use std::path::Path;

use chrono::NaiveDateTime;
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};

use crate::db::db::Db;
use crate::libs::error::AppError;
use crate::libs::messages::Message;
use crate::libs::query::{Page, PageRequest};

pub(crate) const SCHEMA_TAGS: &str = "CREATE TABLE IF NOT EXISTS tags (
    id INTEGER PRIMARY KEY,
    user_id INTEGER NOT NULL,
    name TEXT NOT NULL,
    color TEXT,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    UNIQUE (user_id, name),
    FOREIGN KEY (user_id) REFERENCES users(id) ON DELETE CASCADE
)";
const INSERT_TAG: &str = "INSERT INTO tags (user_id, name, color) VALUES (?1, ?2, ?3)";
const UPDATE_TAG: &str = "UPDATE tags SET name = ?3, color = ?4 WHERE id = ?1 AND user_id = ?2";
const DELETE_TAG: &str = "DELETE FROM tags WHERE id = ?1 AND user_id = ?2";
const SELECT_ALL_TAGS: &str = "SELECT id, user_id, name, color, created_at FROM tags WHERE user_id = ?1 ORDER BY name";
const SELECT_TAG_BY_NAME: &str = "SELECT id, user_id, name, color, created_at FROM tags WHERE user_id = ?1 AND name = ?2";
const SELECT_TAG_BY_ID: &str = "SELECT id, user_id, name, color, created_at FROM tags WHERE id = ?1 AND user_id = ?2";
const COUNT_TAGS_SEARCH: &str = "SELECT COUNT(*) FROM tags WHERE user_id = ?1 AND name LIKE ?2";
const SELECT_TAGS_SEARCH_PAGE: &str = "SELECT id, user_id, name, color, created_at FROM tags
    WHERE user_id = ?1 AND name LIKE ?2 ORDER BY name LIMIT ?3 OFFSET ?4";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    pub id: Option<i64>,
    pub user_id: i64,
    pub name: String,
    pub color: Option<String>,
    pub created_at: Option<NaiveDateTime>,
}

impl Tag {
    pub fn new(user_id: i64, name: String, color: Option<String>) -> Self {
        Self {
            id: None,
            user_id,
            name,
            color,
            created_at: None,
        }
    }
}

pub struct Tags {
    conn: Connection,
}

impl Tags {
    pub fn new() -> Result<Self, AppError> {
        Self::with_db(Db::new()?)
    }

    pub fn open(path: &Path) -> Result<Self, AppError> {
        Self::with_db(Db::open(path)?)
    }

    fn with_db(db: Db) -> Result<Self, AppError> {
        Ok(Self { conn: db.conn })
    }

    /// Create a new tag
    pub fn create(&mut self, tag: &Tag) -> Result<i64, AppError> {
        self.conn.execute(INSERT_TAG, params![tag.user_id, tag.name, tag.color])?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Update an existing tag
    pub fn update(&mut self, user_id: i64, id: i64, name: &str, color: Option<&str>) -> Result<(), AppError> {
        let affected = self.conn.execute(UPDATE_TAG, params![id, user_id, name, color])?;
        if affected == 0 {
            return Err(AppError::not_found(Message::TagNotFound(id.to_string())));
        }
        Ok(())
    }

    /// Delete a tag
    pub fn delete(&mut self, user_id: i64, id: i64) -> Result<(), AppError> {
        let affected = self.conn.execute(DELETE_TAG, params![id, user_id])?;
        if affected == 0 {
            return Err(AppError::not_found(Message::TagNotFound(id.to_string())));
        }
        Ok(())
    }

    /// Get all of a user's tags
    pub fn list(&mut self, user_id: i64) -> Result<Vec<Tag>, AppError> {
        let mut stmt = self.conn.prepare(SELECT_ALL_TAGS)?;
        let tag_iter = stmt.query_map(params![user_id], map_tag)?;

        let mut tags = Vec::new();
        for tag in tag_iter {
            tags.push(tag?);
        }
        Ok(tags)
    }

    /// Get a tag by name
    pub fn get_by_name(&mut self, user_id: i64, name: &str) -> Result<Option<Tag>, AppError> {
        self.conn.query_row(SELECT_TAG_BY_NAME, params![user_id, name], map_tag).optional().map_err(Into::into)
    }

    /// Get a tag by ID, scoped to its owner
    pub fn get_by_id(&mut self, user_id: i64, id: i64) -> Result<Option<Tag>, AppError> {
        self.conn.query_row(SELECT_TAG_BY_ID, params![id, user_id], map_tag).optional().map_err(Into::into)
    }

    /// One page of tags plus the total match count. Count and page are read
    /// in the same transaction so a concurrent insert cannot skew the total
    /// against the returned rows.
    pub fn fetch_page(&mut self, user_id: i64, search: Option<&str>, page: PageRequest) -> Result<Page<Tag>, AppError> {
        let pattern = format!("%{}%", search.unwrap_or(""));
        let tx = self.conn.transaction()?;
        let total: u32 = tx.query_row(COUNT_TAGS_SEARCH, params![user_id, pattern], |row| row.get(0))?;

        let mut items = Vec::new();
        {
            let mut stmt = tx.prepare(SELECT_TAGS_SEARCH_PAGE)?;
            for tag in stmt.query_map(params![user_id, pattern, page.page_size, page.offset()], map_tag)? {
                items.push(tag?);
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
}

fn map_tag(row: &rusqlite::Row) -> rusqlite::Result<Tag> {
    Ok(Tag {
        id: row.get(0)?,
        user_id: row.get(1)?,
        name: row.get(2)?,
        color: row.get(3)?,
        created_at: row.get(4)?,
    })
}
