//! Manual rollover command.
//!
//! Runs the same migration the midnight scheduler performs: every
//! incomplete daily task targeting a past day moves to today. Normally the
//! marker skips the scan when the rollover already ran today; `--force`
//! scans regardless, which is harmless because the migration is idempotent.

use crate::libs::messages::Message;
use crate::libs::rollover;
use crate::{msg_print, msg_success};
use anyhow::Result;
use chrono::Local;
use clap::Args;

#[derive(Debug, Args)]
pub struct RolloverArgs {
    /// Run the scan even if the rollover already ran today
    #[arg(long, short)]
    force: bool,
}

pub fn cmd(args: RolloverArgs) -> Result<()> {
    let today = Local::now().date_naive();

    if rollover::run(today, args.force)? {
        msg_success!(Message::RolloverCompleted(today.to_string()));
    } else {
        msg_print!(Message::RolloverNothingToDo);
    }

    Ok(())
}
