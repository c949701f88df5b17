//! Configuration management for the tempus application.
//!
//! Settings live in a JSON file in the platform application-data directory
//! (see [`DataStorage`]). The configuration is intentionally small: which
//! user the CLI acts as, and the flat billing rate applied by the Excel
//! export when no explicit rate is passed. An interactive wizard fills both
//! during `tempus init`.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tempus::libs::config::Config;
//!
//! let config = Config::read()?;
//! if let Some(email) = &config.active_user {
//!     println!("acting as {}", email);
//! }
//! # anyhow::Ok(())
//! ```

use std::fs::{self, File};

use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};

use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default flat rate for Excel amounts when nothing is configured.
pub const DEFAULT_HOURLY_RATE: f64 = 0.0;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Email of the user the CLI acts as. All store queries are scoped to
    /// this user's records.
    pub active_user: Option<String>,
    /// Flat hourly rate used for the Excel export amount column.
    pub default_hourly_rate: Option<f64>,
}

impl Config {
    /// Reads the configuration file, falling back to defaults when the file
    /// does not exist yet.
    pub fn read() -> Result<Self> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !path.exists() {
            return Ok(Config::default());
        }
        let contents = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Persists the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let file = File::create(&path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Interactive setup: prompts for the acting user and the default
    /// billing rate, starting from current values.
    pub fn init(&self) -> Result<Self> {
        let active_user: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptUserEmail.to_string())
            .with_initial_text(self.active_user.clone().unwrap_or_default())
            .interact_text()?;

        let default_hourly_rate: f64 = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDefaultRate.to_string())
            .default(self.default_hourly_rate.unwrap_or(DEFAULT_HOURLY_RATE))
            .interact_text()?;

        Ok(Config {
            active_user: Some(active_user),
            default_hourly_rate: Some(default_hourly_rate),
        })
    }
}
