//! Rollover execution: loads the daily board, applies the pure migration
//! policy, and persists the outcome.
//!
//! The pure rules live in [`crate::libs::daily`]; this module owns the
//! storage round-trip and the `last_rollover` marker. Every daily board
//! render calls [`catch_up`] first, which keeps the required ordering: a
//! rollover completes and persists before any visibility computation reads
//! the collection. The marker also catches midnights missed while the
//! application was closed: on the next start the pending migration runs
//! before the first render.

use crate::db::boards::Boards;
use crate::db::state::AppState;
use crate::db::tasks::Tasks;
use crate::libs::board::Timeframe;
use crate::libs::daily;
use crate::libs::task::TaskFilter;
use anyhow::Result;
use chrono::NaiveDate;

/// Runs the daily rollover for `today` unless the marker shows it already
/// ran. Returns whether any task was migrated.
pub fn catch_up(today: NaiveDate) -> Result<bool> {
    run(today, false)
}

/// Runs the daily rollover.
///
/// With `force` the marker is ignored and the scan runs unconditionally;
/// the migration itself stays idempotent either way.
pub fn run(today: NaiveDate, force: bool) -> Result<bool> {
    let mut state = AppState::new()?;
    if !force {
        if let Some(marker) = state.last_rollover()? {
            if marker >= today {
                return Ok(false);
            }
        }
    }

    let mut boards = Boards::new()?;
    let board = boards.ensure(Timeframe::Daily, today)?;

    let mut tasks = Tasks::new()?;
    let collection = tasks.fetch(TaskFilter::Board(board.id))?;
    let (migrated, changed) = daily::roll_forward(&collection, today);
    if changed {
        tasks.apply_target_dates(&migrated)?;
    }

    state.set_last_rollover(today)?;
    Ok(changed)
}
