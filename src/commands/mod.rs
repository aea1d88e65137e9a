pub mod board;
pub mod export;
pub mod init;
pub mod login;
pub mod logout;
#[cfg(debug_assertions)]
pub mod migrations;
pub mod rollover;
pub mod sync;
pub mod task;
pub mod watch;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Show goal boards and navigate their dates")]
    Board(board::BoardArgs),
    #[command(about = "Manage tasks on a board")]
    Task(task::TaskArgs),
    #[command(about = "Migrate overdue daily tasks to today")]
    Rollover(rollover::RolloverArgs),
    #[command(about = "Run the midnight rollover scheduler in the foreground")]
    Watch,
    #[command(about = "Synchronize boards with the cloud")]
    Sync(sync::SyncArgs),
    #[command(about = "Sign in to the cloud account")]
    Login,
    #[command(about = "Sign out and clear the cached session")]
    Logout,
    #[command(about = "Export boards to CSV, JSON, or Excel")]
    Export(export::ExportArgs),
    #[cfg(debug_assertions)]
    #[command(about = "Database migration utilities")]
    Migrations(migrations::MigrationsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Board(args) => board::cmd(args),
            Commands::Task(args) => task::cmd(args),
            Commands::Rollover(args) => rollover::cmd(args),
            Commands::Watch => watch::cmd().await,
            Commands::Sync(args) => sync::cmd(args).await,
            Commands::Login => login::cmd().await,
            Commands::Logout => logout::cmd(),
            Commands::Export(args) => export::cmd(args),
            #[cfg(debug_assertions)]
            Commands::Migrations(args) => migrations::cmd(args),
        }
    }
}
