//! Display implementation for tempus application messages.
//!
//! Converts structured `Message` variants into the human-readable text used
//! for terminal output. Keeping every user-facing string in one place keeps
//! wording consistent and makes the parameters type-checked at compile time.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === USER MESSAGES ===
            Message::UserCreated(email) => format!("User '{}' created successfully", email),
            Message::UserAlreadyExists(email) => format!("User '{}' already exists", email),
            Message::UserNotFound(email) => format!("User '{}' not found", email),
            Message::NoUsersFound => "No users found. Create one with 'tempus user add'.".to_string(),
            Message::NoActiveUser => "No active user configured. Run 'tempus init' or 'tempus user switch'.".to_string(),
            Message::ActiveUserSet(email) => format!("Active user set to '{}'", email),
            Message::UserListHeader => "Users:".to_string(),

            // === CLIENT MESSAGES ===
            Message::ClientCreated(name) => format!("Client '{}' created successfully", name),
            Message::ClientUpdated(name) => format!("Client '{}' updated successfully", name),
            Message::ClientDeleted(name) => format!("Client '{}' deleted", name),
            Message::ClientNotFound(id) => format!("Client '{}' not found", id),
            Message::NoClientsFound => "No clients found.".to_string(),
            Message::ClientListHeader => "Clients:".to_string(),

            // === PROJECT MESSAGES ===
            Message::ProjectCreated(name) => format!("Project '{}' created successfully", name),
            Message::ProjectUpdated(name) => format!("Project '{}' updated successfully", name),
            Message::ProjectDeleted(name) => format!("Project '{}' deleted", name),
            Message::ProjectNotFound(id) => format!("Project '{}' not found", id),
            Message::NoProjectsFound => "No projects found.".to_string(),
            Message::ProjectListHeader => "Projects:".to_string(),

            // === TAG MESSAGES ===
            Message::TagCreated(name) => format!("Tag '{}' created successfully", name),
            Message::TagUpdated(name) => format!("Tag '{}' updated successfully", name),
            Message::TagDeleted(name) => format!("Tag '{}' deleted", name),
            Message::TagNotFound(id) => format!("Tag '{}' not found", id),
            Message::TagAlreadyExists(name) => format!("Tag '{}' already exists", name),
            Message::NoTagsFound => "No tags found.".to_string(),
            Message::TagListHeader => "Tags:".to_string(),

            // === TIMER MESSAGES ===
            Message::TimerStarted(desc) => format!("Timer started: {}", desc),
            Message::TimerStopped(duration) => format!("Timer stopped after {}", duration),
            Message::TimerCreated(id) => format!("Timer {} created successfully", id),
            Message::TimerUpdated(id) => format!("Timer {} updated successfully", id),
            Message::TimerDeleted(id) => format!("Timer {} deleted", id),
            Message::TimerDuplicated(id) => format!("Timer duplicated as {}", id),
            Message::TimerNotFound(id) => format!("Timer {} not found", id),
            Message::TimerAlreadyRunning(id) => format!("Timer {} is already running. Stop it first.", id),
            Message::NoRunningTimer => "No timer is currently running.".to_string(),
            Message::RunningTimerHeader => "Running timer:".to_string(),
            Message::NoTimersFound => "No timers found.".to_string(),
            Message::TimerListHeader => "Timers:".to_string(),
            Message::WeeklyHeader => "Timers by week:".to_string(),
            Message::ConfirmDeleteTimer(id) => format!("Delete timer {}? This cannot be undone.", id),

            // === REPORT MESSAGES ===
            Message::ReportHeader(range) => format!("Time report {}", range),
            Message::NoTimersForReport => "No timers match the report filter.".to_string(),
            Message::ReportFilterSaved(name) => format!("Report filter '{}' saved", name),
            Message::ReportFilterDeleted(name) => format!("Report filter '{}' deleted", name),
            Message::ReportFilterNotFound(name) => format!("Report filter '{}' not found", name),
            Message::NoSavedFilters => "No saved report filters.".to_string(),
            Message::SavedFiltersHeader => "Saved report filters:".to_string(),
            Message::InvalidDateRange(from, to) => format!("Invalid date range: '{}' is after '{}'", from, to),

            // === EXPORT MESSAGES ===
            Message::ExportingReport(format) => format!("Exporting report as {}...", format),
            Message::ExportCompleted(path) => format!("Report written to {}", path),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigFileNotFound => "Configuration file not found".to_string(),
            Message::ConfigParseError => "Failed to parse configuration".to_string(),
            Message::PromptUserName => "Your name".to_string(),
            Message::PromptUserEmail => "Your email".to_string(),
            Message::PromptDefaultRate => "Default hourly rate for exports".to_string(),
        };
        write!(f, "{}", text)
    }
}
