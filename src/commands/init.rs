//! Application configuration initialization command.
//!
//! Provides an interactive setup wizard that guides users through
//! configuring horizons for first-time use, currently the cloud sync
//! backend settings.

use crate::{
    libs::{config::Config, messages::Message},
    msg_success,
};
use anyhow::Result;
use clap::Args;

/// Command-line arguments for the initialization command.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remove existing configuration instead of creating a new one
    #[arg(short, long)]
    delete: bool,
}

/// Executes the initialization command.
///
/// Runs the interactive configuration wizard, or removes the stored
/// configuration when `--delete` is used.
pub fn cmd(init_args: InitArgs) -> Result<()> {
    // Handle deletion mode - reset to defaults and exit early
    if init_args.delete {
        Config::default().save()?;
        msg_success!(Message::ConfigSaved);
        return Ok(());
    }

    // Run interactive configuration wizard
    Config::init()?.save()?;

    msg_success!(Message::ConfigSaved);
    Ok(())
}
