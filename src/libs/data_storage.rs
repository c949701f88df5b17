use std::env::consts::OS;
use std::env::var;
use std::fs;
use std::path::{Path, PathBuf};

use crate::libs::error::AppError;

pub const VENDOR_NAME: &str = "lacodda";
pub const APP_NAME: &str = "tempus";

/// Resolves platform-specific storage locations for the database,
/// configuration file, and generated report artifacts.
#[derive(Clone)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl DataStorage {
    pub fn new() -> Self {
        let base_path = match OS {
            "windows" => var("LOCALAPPDATA").unwrap_or_else(|_| ".".into()),
            "macos" => var("HOME").unwrap_or_else(|_| ".".into()) + "/Library/Application Support",
            _ => var("HOME").unwrap_or_else(|_| ".".into()) + "/.local/share",
        };
        let base_path = Path::new(&base_path).join(VENDOR_NAME).join(APP_NAME);

        Self { base_path }
    }

    pub fn get_path(&self, file_name: &str) -> Result<PathBuf, AppError> {
        if !self.base_path.exists() {
            fs::create_dir_all(&self.base_path)?;
        }
        Ok(self.base_path.join(file_name))
    }

    /// Directory for generated report artifacts. Created on demand so
    /// concurrent exports only race on the (idempotent) mkdir.
    pub fn reports_dir(&self) -> Result<PathBuf, AppError> {
        let dir = self.base_path.join("reports");
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }
        Ok(dir)
    }
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}
