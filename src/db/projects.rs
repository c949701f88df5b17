use std::path::Path;

use chrono::NaiveDateTime;
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};

use crate::db::db::Db;
use crate::libs::error::AppError;
use crate::libs::messages::Message;

pub(crate) const SCHEMA_PROJECTS: &str = "CREATE TABLE IF NOT EXISTS projects (
    id INTEGER PRIMARY KEY,
    user_id INTEGER NOT NULL,
    client_id INTEGER,
    name TEXT NOT NULL,
    description TEXT,
    hourly_rate REAL,
    currency TEXT,
    color TEXT,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    FOREIGN KEY (user_id) REFERENCES users(id) ON DELETE CASCADE,
    FOREIGN KEY (client_id) REFERENCES clients(id) ON DELETE SET NULL
)";
const INSERT_PROJECT: &str = "INSERT INTO projects (user_id, client_id, name, description, hourly_rate, currency, color)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const UPDATE_PROJECT: &str = "UPDATE projects SET client_id = ?3, name = ?4, description = ?5, hourly_rate = ?6,
    currency = ?7, color = ?8 WHERE id = ?1 AND user_id = ?2";
const DELETE_PROJECT: &str = "DELETE FROM projects WHERE id = ?1 AND user_id = ?2";
const SELECT_PROJECT_COLUMNS: &str = "SELECT id, user_id, client_id, name, description, hourly_rate, currency, color, created_at FROM projects";

/// A billable project. The hourly rate here is the project's *current*
/// rate; timers capture their own copy at creation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: Option<i64>,
    pub user_id: i64,
    pub client_id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    pub hourly_rate: Option<f64>,
    pub currency: Option<String>,
    pub color: Option<String>,
    pub created_at: Option<NaiveDateTime>,
}

impl Project {
    pub fn new(user_id: i64, name: String) -> Self {
        Self {
            id: None,
            user_id,
            client_id: None,
            name,
            description: None,
            hourly_rate: None,
            currency: None,
            color: None,
            created_at: None,
        }
    }
}

pub struct Projects {
    conn: Connection,
}

impl Projects {
    pub fn new() -> Result<Self, AppError> {
        Self::with_db(Db::new()?)
    }

    pub fn open(path: &Path) -> Result<Self, AppError> {
        Self::with_db(Db::open(path)?)
    }

    fn with_db(db: Db) -> Result<Self, AppError> {
        Ok(Self { conn: db.conn })
    }

    /// Create a new project
    pub fn create(&mut self, project: &Project) -> Result<i64, AppError> {
        self.conn.execute(
            INSERT_PROJECT,
            params![
                project.user_id,
                project.client_id,
                project.name,
                project.description,
                project.hourly_rate,
                project.currency,
                project.color
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Update an existing project
    pub fn update(&mut self, user_id: i64, project: &Project) -> Result<(), AppError> {
        let id = project.id.ok_or_else(|| AppError::Validation("Project id is required for update".to_string()))?;
        let affected = self.conn.execute(
            UPDATE_PROJECT,
            params![
                id,
                user_id,
                project.client_id,
                project.name,
                project.description,
                project.hourly_rate,
                project.currency,
                project.color
            ],
        )?;
        if affected == 0 {
            return Err(AppError::not_found(Message::ProjectNotFound(id.to_string())));
        }
        Ok(())
    }

    /// Delete a project
    pub fn delete(&mut self, user_id: i64, id: i64) -> Result<(), AppError> {
        let affected = self.conn.execute(DELETE_PROJECT, params![id, user_id])?;
        if affected == 0 {
            return Err(AppError::not_found(Message::ProjectNotFound(id.to_string())));
        }
        Ok(())
    }

    /// Get a project by ID, scoped to its owner
    pub fn get_by_id(&mut self, user_id: i64, id: i64) -> Result<Option<Project>, AppError> {
        let sql = format!("{} WHERE id = ?1 AND user_id = ?2", SELECT_PROJECT_COLUMNS);
        self.conn.query_row(&sql, params![id, user_id], map_project).optional().map_err(Into::into)
    }

    /// List a user's projects, optionally filtered by a name/description substring
    pub fn list(&mut self, user_id: i64, search: Option<&str>) -> Result<Vec<Project>, AppError> {
        let mut projects = Vec::new();
        match search {
            Some(query) => {
                let sql = format!(
                    "{} WHERE user_id = ?1 AND (name LIKE ?2 OR description LIKE ?2) ORDER BY name",
                    SELECT_PROJECT_COLUMNS
                );
                let pattern = format!("%{}%", query);
                let mut stmt = self.conn.prepare(&sql)?;
                for project in stmt.query_map(params![user_id, pattern], map_project)? {
                    projects.push(project?);
                }
            }
            None => {
                let sql = format!("{} WHERE user_id = ?1 ORDER BY name", SELECT_PROJECT_COLUMNS);
                let mut stmt = self.conn.prepare(&sql)?;
                for project in stmt.query_map(params![user_id], map_project)? {
                    projects.push(project?);
                }
            }
        }
        Ok(projects)
    }
}

fn map_project(row: &rusqlite::Row) -> rusqlite::Result<Project> {
    Ok(Project {
        id: row.get(0)?,
        user_id: row.get(1)?,
        client_id: row.get(2)?,
        name: row.get(3)?,
        description: row.get(4)?,
        hourly_rate: row.get(5)?,
        currency: row.get(6)?,
        color: row.get(7)?,
        created_at: row.get(8)?,
    })
}
