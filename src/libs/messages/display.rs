//! Display implementation for horizons application messages.
//!
//! The `Display` impl below is the single place where structured message
//! data becomes user-facing text. Keeping every string here keeps wording
//! consistent across commands and makes the text trivially auditable.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === BOARD MESSAGES ===
            Message::BoardsInitialized => "Goal boards are ready".to_string(),
            Message::BoardNotFound(timeframe) => format!("No board found for timeframe '{}'", timeframe),
            Message::BoardDateChanged(timeframe, date) => format!("{} board is now showing {}", timeframe, date),
            Message::BoardEmpty => "No tasks to show for this date.".to_string(),
            Message::NavigationNeedsTimeframe => "Date navigation requires a timeframe argument.".to_string(),
            Message::UnknownTimeframe(value) => format!("Unknown timeframe '{}' in database", value),

            // === TASK MESSAGES ===
            Message::TaskCreated => "Task created successfully".to_string(),
            Message::TaskUpdated => "Task updated successfully".to_string(),
            Message::TaskDeleted => "Task deleted successfully".to_string(),
            Message::TaskMoved(id, position) => format!("Task {} moved to position {}", id, position),
            Message::TaskNotFoundWithId(id) => format!("Task with ID {} not found.", id),
            Message::NoTasksOnBoard(timeframe) => format!("No tasks on the {} board.", timeframe),
            Message::NoChangesDetected => "No changes detected.".to_string(),
            Message::ConfirmDeleteTask => "Are you sure you want to delete this task?".to_string(),
            Message::PromptTaskText => "Task text".to_string(),

            // === ROLLOVER MESSAGES ===
            Message::RolloverCompleted(date) => format!("Unfinished tasks rolled forward to {}", date),
            Message::RolloverNothingToDo => "No overdue tasks to roll forward.".to_string(),
            Message::RolloverAlreadyRan(date) => format!("Rollover already ran on {}", date),
            Message::RolloverFailed(error) => format!("Rollover failed: {}", error),

            // === SCHEDULER MESSAGES ===
            Message::SchedulerStarted(next) => format!("Rollover scheduler armed, next run at {}", next),
            Message::SchedulerStopped => "Rollover scheduler stopped".to_string(),
            Message::WatchStarting => "Watching for midnight rollovers... Press Ctrl+C to exit.".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigParseError => "Failed to parse configuration".to_string(),
            Message::ConfigModuleCloud => "Cloud sync settings".to_string(),
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptCloudApiUrl => "Enter the cloud API URL".to_string(),
            Message::PromptCloudLogin => "Enter your account email".to_string(),
            Message::PromptCloudPassword => "Enter your account password".to_string(),

            // === SYNC MESSAGES ===
            Message::SyncPushed(count) => format!("Pushed {} board(s) to the cloud", count),
            Message::SyncPulled(count) => format!("Pulled {} board(s) from the cloud", count),
            Message::SyncCompleted => "Synchronization completed".to_string(),
            Message::SyncFailed(status) => format!("Synchronization failed. Status: {}", status),
            Message::CloudConfigNotFound => "Cloud sync is not configured. Run 'horizons init' first.".to_string(),

            // === AUTHENTICATION MESSAGES ===
            Message::LoggedIn => "Signed in successfully".to_string(),
            Message::LoggedOut => "Signed out, session cleared".to_string(),
            Message::NotLoggedIn => "Not signed in. Run 'horizons login' first.".to_string(),
            Message::WrongPassword(count) => format!("You entered the wrong password {} times!", count),
            Message::LoginFailed => "Login failed".to_string(),
            Message::SessionExpired => "Session expired".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportingData(format) => format!("Exporting boards in {} format...", format),
            Message::ExportCompleted(path) => format!("Export completed successfully: {}", path),
            Message::ExportFailed(error) => format!("Export failed: {}", error),

            // === DATABASE MESSAGES ===
            Message::DbConnectionFailed => "Failed to connect to database".to_string(),
            Message::NoIdSet => "No ID set".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending database migrations", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("✓ Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("✗ Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All database migrations completed successfully".to_string(),
            Message::DatabaseVersion(version) => format!("Current database version: {}", version),
            Message::DatabaseUpToDate => "Database schema is up to date".to_string(),
            Message::DatabaseNeedsUpdate => "Database schema needs to be updated".to_string(),
            Message::MigrationHistory => "Migration history:".to_string(),
            Message::NothingToRollback => "Nothing to rollback".to_string(),
            Message::RollingBack(from, to) => format!("Rolling back from v{} to v{}", from, to),
            Message::RollbackCompleted(version) => format!("Rollback to v{} completed", version),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
            Message::InvalidDate(value) => format!("Invalid date '{}', expected YYYY-MM-DD", value),
        };

        write!(f, "{}", text)
    }
}
