use std::path::Path;

use chrono::NaiveDateTime;
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};

use crate::db::db::Db;
use crate::libs::error::AppError;
use crate::libs::messages::Message;

pub(crate) const SCHEMA_USERS: &str = "CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";
const INSERT_USER: &str = "INSERT INTO users (name, email) VALUES (?1, ?2)";
const SELECT_ALL_USERS: &str = "SELECT id, name, email, created_at FROM users ORDER BY email";
const SELECT_USER_BY_EMAIL: &str = "SELECT id, name, email, created_at FROM users WHERE email = ?1";
const SELECT_USER_BY_ID: &str = "SELECT id, name, email, created_at FROM users WHERE id = ?1";

/// The multi-tenancy anchor: every client, project, tag, and timer row is
/// owned by exactly one user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    pub created_at: Option<NaiveDateTime>,
}

impl User {
    pub fn new(name: String, email: String) -> Self {
        Self {
            id: None,
            name,
            email,
            created_at: None,
        }
    }
}

pub struct Users {
    conn: Connection,
}

impl Users {
    pub fn new() -> Result<Self, AppError> {
        Self::with_db(Db::new()?)
    }

    pub fn open(path: &Path) -> Result<Self, AppError> {
        Self::with_db(Db::open(path)?)
    }

    fn with_db(db: Db) -> Result<Self, AppError> {
        Ok(Self { conn: db.conn })
    }

    /// Create a new user
    pub fn create(&mut self, user: &User) -> Result<i64, AppError> {
        self.conn.execute(INSERT_USER, params![user.name, user.email])?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Get all users
    pub fn list(&mut self) -> Result<Vec<User>, AppError> {
        let mut stmt = self.conn.prepare(SELECT_ALL_USERS)?;
        let user_iter = stmt.query_map([], map_user)?;

        let mut users = Vec::new();
        for user in user_iter {
            users.push(user?);
        }
        Ok(users)
    }

    /// Get a user by email
    pub fn get_by_email(&mut self, email: &str) -> Result<Option<User>, AppError> {
        self.conn.query_row(SELECT_USER_BY_EMAIL, params![email], map_user).optional().map_err(Into::into)
    }

    /// Get a user by ID
    pub fn get_by_id(&mut self, id: i64) -> Result<Option<User>, AppError> {
        self.conn.query_row(SELECT_USER_BY_ID, params![id], map_user).optional().map_err(Into::into)
    }

    /// Resolve an email to a user, raising an identifiable not-found error.
    pub fn require_by_email(&mut self, email: &str) -> Result<User, AppError> {
        self.get_by_email(email)?.ok_or_else(|| AppError::not_found(Message::UserNotFound(email.to_string())))
    }
}

fn map_user(row: &rusqlite::Row) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        created_at: row.get(3)?,
    })
}
