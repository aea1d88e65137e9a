//! Database layer for the horizons application.
//!
//! Provides the data persistence layer built on SQLite: connection
//! management, a versioned migration system, and a repository module per
//! entity. Database files live in the platform application-data directory.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use horizons::db::{boards::Boards, tasks::Tasks};
//! use horizons::libs::task::Task;
//! use chrono::Local;
//!
//! let today = Local::now().date_naive();
//! let mut boards = Boards::new()?;
//! boards.ensure_defaults(today)?;
//!
//! let board = boards.ensure(horizons::libs::board::Timeframe::Daily, today)?;
//! let mut tasks = Tasks::new()?;
//! tasks.create(&Task::new(board.id, "Water the plants", 0, Some(today)))?;
//! # anyhow::Ok(())
//! ```

/// Goal board repository: one board per timeframe, idempotent creation.
pub mod boards;

/// Core database connection and initialization module.
pub mod db;

/// Database schema migration system.
pub mod migrations;

/// Single-row application state (last rollover marker).
pub mod state;

/// Task repository: CRUD, manual ordering, rollover persistence.
pub mod tasks;
