//! Core library modules for the horizons application.
//!
//! Serves as the main entry point for all horizons library components,
//! providing a centralized access point to the application's core
//! functionality.
//!
//! ## Features
//!
//! - **Core Infrastructure**: Configuration, data storage, messaging
//! - **Daily Policy**: Date-scoped visibility and rollover rules
//! - **Scheduling**: Cancelable midnight rollover timer
//! - **User Interface**: Console rendering, data export, label formatting
//! - **Security**: Encrypted credential storage
//!
//! ## Usage
//!
//! ```rust,no_run
//! use horizons::libs::task::Task;
//! use horizons::db::tasks::Tasks;
//!
//! let task = Task::new(1, "Water the plants", 0, None);
//! let mut tasks_db = Tasks::new()?;
//! tasks_db.create(&task)?;
//! # anyhow::Ok(())
//! ```

pub mod board;
pub mod config;
pub mod daily;
pub mod data_storage;
pub mod export;
pub mod formatter;
pub mod messages;
pub mod rollover;
pub mod scheduler;
pub mod secret;
pub mod task;
pub mod view;
