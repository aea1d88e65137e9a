//! Midnight rollover scheduler.
//!
//! Owns a single background task that sleeps until the next local midnight,
//! runs the daily rollover, and repeats. The delay is recomputed from the
//! wall clock on every iteration, so DST shifts and coarse timer drift
//! cannot accumulate.
//!
//! The scheduler is an owned resource with an explicit cancellation handle:
//! it is created when a watch session starts and stopped (or dropped) when
//! the session tears down. Only one timer task exists per scheduler, so
//! rollovers never overlap.

use crate::libs::messages::Message;
use crate::libs::rollover;
use crate::{msg_debug, msg_error};
use chrono::{Local, NaiveDateTime};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time;

/// Cancelable handle to the midnight rollover timer.
pub struct RolloverScheduler {
    handle: Option<JoinHandle<()>>,
}

impl RolloverScheduler {
    /// Spawns the timer task and returns its handle.
    pub fn start() -> Self {
        let handle = tokio::spawn(async move {
            loop {
                let delay = delay_until_midnight(Local::now().naive_local());
                msg_debug!(format!("Next rollover in {}s", delay.as_secs()));
                time::sleep(delay).await;

                let today = Local::now().date_naive();
                if let Err(e) = rollover::run(today, false) {
                    msg_error!(Message::RolloverFailed(e.to_string()));
                }
            }
        });

        Self { handle: Some(handle) }
    }

    /// Cancels the timer task. Safe to call more than once.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

impl Drop for RolloverScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Duration from `now` until the next local midnight.
pub fn delay_until_midnight(now: NaiveDateTime) -> Duration {
    let next = now.date().succ_opt().and_then(|date| date.and_hms_opt(0, 0, 0)).unwrap_or(now);
    (next - now).to_std().unwrap_or(Duration::ZERO)
}

/// Local timestamp of the next midnight, for status output.
pub fn next_midnight(now: NaiveDateTime) -> NaiveDateTime {
    now.date().succ_opt().and_then(|date| date.and_hms_opt(0, 0, 0)).unwrap_or(now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_delay_until_midnight() {
        let now = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap().and_hms_opt(23, 0, 0).unwrap();
        assert_eq!(delay_until_midnight(now), Duration::from_secs(3600));
    }

    #[test]
    fn test_delay_at_start_of_day_is_full_day() {
        let now = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap().and_hms_opt(0, 0, 0).unwrap();
        assert_eq!(delay_until_midnight(now), Duration::from_secs(24 * 60 * 60));
    }

    #[test]
    fn test_next_midnight_lands_on_next_day() {
        let now = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap().and_hms_opt(15, 30, 45).unwrap();
        let next = next_midnight(now);
        assert_eq!(next.date(), NaiveDate::from_ymd_opt(2024, 1, 4).unwrap());
        assert_eq!(next.time(), chrono::NaiveTime::from_hms_opt(0, 0, 0).unwrap());
    }
}
