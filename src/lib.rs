//! # Horizons - personal goal dashboard
//!
//! A command-line dashboard for tracking goals across six timeframes,
//! from daily task boards to lifelong ambitions.
//!
//! ## Features
//!
//! - **Six Timeframes**: Daily, weekly, monthly, quarterly, yearly, and
//!   lifelong boards with per-timeframe date navigation
//! - **Daily Rollover**: Unfinished daily tasks migrate forward at local
//!   midnight, with catch-up after missed days
//! - **Task Management**: Create, edit, complete, delete, and manually
//!   reorder tasks
//! - **Cloud Sync**: Optional snapshot push/pull against a hosted backend
//! - **Data Export**: Export boards to CSV, JSON, and Excel formats
//!
//! ## Usage
//!
//! ```rust,no_run
//! use horizons::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod db;
pub mod libs;
