use std::path::Path;

use chrono::NaiveDateTime;
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};

use crate::db::db::Db;
use crate::libs::error::AppError;
use crate::libs::messages::Message;

pub(crate) const SCHEMA_CLIENTS: &str = "CREATE TABLE IF NOT EXISTS clients (
    id INTEGER PRIMARY KEY,
    user_id INTEGER NOT NULL,
    name TEXT NOT NULL,
    email TEXT,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    FOREIGN KEY (user_id) REFERENCES users(id) ON DELETE CASCADE
)";
const INSERT_CLIENT: &str = "INSERT INTO clients (user_id, name, email) VALUES (?1, ?2, ?3)";
const UPDATE_CLIENT: &str = "UPDATE clients SET name = ?3, email = ?4 WHERE id = ?1 AND user_id = ?2";
const DELETE_CLIENT: &str = "DELETE FROM clients WHERE id = ?1 AND user_id = ?2";
const SELECT_CLIENT_BY_ID: &str = "SELECT id, user_id, name, email, created_at FROM clients WHERE id = ?1 AND user_id = ?2";
const SELECT_CLIENTS: &str = "SELECT id, user_id, name, email, created_at FROM clients WHERE user_id = ?1 ORDER BY name";
const SELECT_CLIENTS_SEARCH: &str = "SELECT id, user_id, name, email, created_at FROM clients
    WHERE user_id = ?1 AND (name LIKE ?2 OR email LIKE ?2) ORDER BY name";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub id: Option<i64>,
    pub user_id: i64,
    pub name: String,
    pub email: Option<String>,
    pub created_at: Option<NaiveDateTime>,
}

impl Client {
    pub fn new(user_id: i64, name: String, email: Option<String>) -> Self {
        Self {
            id: None,
            user_id,
            name,
            email,
            created_at: None,
        }
    }
}

pub struct Clients {
    conn: Connection,
}

impl Clients {
    pub fn new() -> Result<Self, AppError> {
        Self::with_db(Db::new()?)
    }

    pub fn open(path: &Path) -> Result<Self, AppError> {
        Self::with_db(Db::open(path)?)
    }

    fn with_db(db: Db) -> Result<Self, AppError> {
        Ok(Self { conn: db.conn })
    }

    /// Create a new client
    pub fn create(&mut self, client: &Client) -> Result<i64, AppError> {
        self.conn.execute(INSERT_CLIENT, params![client.user_id, client.name, client.email])?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Update an existing client
    pub fn update(&mut self, user_id: i64, id: i64, name: &str, email: Option<&str>) -> Result<(), AppError> {
        let affected = self.conn.execute(UPDATE_CLIENT, params![id, user_id, name, email])?;
        if affected == 0 {
            return Err(AppError::not_found(Message::ClientNotFound(id.to_string())));
        }
        Ok(())
    }

    /// Delete a client
    pub fn delete(&mut self, user_id: i64, id: i64) -> Result<(), AppError> {
        let affected = self.conn.execute(DELETE_CLIENT, params![id, user_id])?;
        if affected == 0 {
            return Err(AppError::not_found(Message::ClientNotFound(id.to_string())));
        }
        Ok(())
    }

    /// Get a client by ID, scoped to its owner
    pub fn get_by_id(&mut self, user_id: i64, id: i64) -> Result<Option<Client>, AppError> {
        self.conn.query_row(SELECT_CLIENT_BY_ID, params![id, user_id], map_client).optional().map_err(Into::into)
    }

    /// List a user's clients, optionally filtered by a name/email substring
    pub fn list(&mut self, user_id: i64, search: Option<&str>) -> Result<Vec<Client>, AppError> {
        let mut clients = Vec::new();
        match search {
            Some(query) => {
                let pattern = format!("%{}%", query);
                let mut stmt = self.conn.prepare(SELECT_CLIENTS_SEARCH)?;
                for client in stmt.query_map(params![user_id, pattern], map_client)? {
                    clients.push(client?);
                }
            }
            None => {
                let mut stmt = self.conn.prepare(SELECT_CLIENTS)?;
                for client in stmt.query_map(params![user_id], map_client)? {
                    clients.push(client?);
                }
            }
        }
        Ok(clients)
    }
}

fn map_client(row: &rusqlite::Row) -> rusqlite::Result<Client> {
    Ok(Client {
        id: row.get(0)?,
        user_id: row.get(1)?,
        name: row.get(2)?,
        email: row.get(3)?,
        created_at: row.get(4)?,
    })
}
