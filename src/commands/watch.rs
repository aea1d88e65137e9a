//! Foreground scheduler session.
//!
//! Keeps the midnight rollover timer alive until interrupted. A catch-up
//! rollover runs immediately on startup so that days missed while the
//! watcher was not running are migrated before the timer arms.

use crate::libs::messages::Message;
use crate::libs::rollover;
use crate::libs::scheduler::{self, RolloverScheduler};
use crate::{msg_info, msg_print};
use anyhow::Result;
use chrono::Local;

pub async fn cmd() -> Result<()> {
    let today = Local::now().date_naive();
    rollover::catch_up(today)?;

    let mut watcher = RolloverScheduler::start();
    msg_info!(Message::SchedulerStarted(
        scheduler::next_midnight(Local::now().naive_local()).format("%Y-%m-%d %H:%M").to_string()
    ));
    msg_print!(Message::WatchStarting);

    tokio::signal::ctrl_c().await?;

    watcher.stop();
    msg_print!(Message::SchedulerStopped);
    Ok(())
}
