//! Daily board visibility and rollover policy.
//!
//! The daily board is the only board whose task list depends on dates: the
//! user can navigate to any calendar day, and what they see is a function of
//! the full task collection, the viewing date, and the real current date.
//! Incomplete tasks that miss their day migrate forward at midnight instead
//! of disappearing, so the backlog accumulates on "today".
//!
//! ## Visibility rules
//!
//! All comparisons happen at day granularity. Exactly one of three cases
//! applies:
//!
//! - **Viewing today**: every incomplete task targeting today or earlier
//!   (the backlog plus today's own tasks), plus every task completed today.
//!   Tasks with no target date always surface here.
//! - **Viewing a past day**: only tasks completed on exactly that day.
//!   Incomplete tasks never appear in the past; they either completed or
//!   rolled forward.
//! - **Viewing a future day**: only incomplete tasks targeting exactly that
//!   day. Tasks with no target date are not scheduled for anything and stay
//!   hidden.
//!
//! ## Rollover
//!
//! [`roll_forward`] retargets every incomplete task with a target date
//! before today onto today. Running it twice on the same day is a no-op:
//! after the first pass no task targets a day before today.
//!
//! Both operations are pure; they never mutate their input and carry no
//! side effects. Persistence belongs to the caller (see
//! `crate::libs::rollover`).

use crate::libs::task::Task;
use chrono::NaiveDate;

/// Computes the tasks visible on the daily board for a given viewing date.
///
/// Returns a derived list ordered for display: incomplete tasks first in
/// manual order, then completed tasks. The input collection is left
/// untouched.
///
/// # Arguments
///
/// * `tasks` - Every task ever added to the daily board, in any order
/// * `viewing` - The date the user has navigated to
/// * `today` - The real calendar date at evaluation time
pub fn visible_tasks(tasks: &[Task], viewing: NaiveDate, today: NaiveDate) -> Vec<Task> {
    let mut visible: Vec<Task> = tasks.iter().filter(|task| is_visible(task, viewing, today)).cloned().collect();

    // Incomplete before completed, manual order within each group.
    visible.sort_by_key(|task| (task.completed, task.position));
    visible
}

/// Decides whether a single task belongs to the view for `viewing`.
fn is_visible(task: &Task, viewing: NaiveDate, today: NaiveDate) -> bool {
    if viewing == today {
        if task.completed {
            completed_on(task, today)
        } else {
            match task.target_date {
                Some(target) => target <= today,
                // Legacy tasks predate the target date column and always
                // surface on today's board.
                None => true,
            }
        }
    } else if viewing < today {
        task.completed && completed_on(task, viewing)
    } else {
        !task.completed && task.target_date == Some(viewing)
    }
}

fn completed_on(task: &Task, day: NaiveDate) -> bool {
    task.completed_at.map(|at| at.date()) == Some(day)
}

/// Migrates stale incomplete tasks forward onto `today`.
///
/// Every task that is incomplete and targets a day before `today` is
/// retargeted to `today`; completed tasks and tasks already targeting today
/// or later are untouched, as are legacy tasks with no target date.
/// Creation timestamps are preserved.
///
/// Returns the updated collection and whether anything changed, so the
/// caller can decide whether to persist. Idempotent per calendar day.
pub fn roll_forward(tasks: &[Task], today: NaiveDate) -> (Vec<Task>, bool) {
    let mut changed = false;
    let migrated = tasks
        .iter()
        .cloned()
        .map(|mut task| {
            if !task.completed && task.target_date.is_some_and(|target| target < today) {
                task.target_date = Some(today);
                changed = true;
            }
            task
        })
        .collect();

    (migrated, changed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn task(text: &str, position: i64, target: Option<NaiveDate>) -> Task {
        Task::new(1, text, position, target)
    }

    fn completed_task(text: &str, position: i64, completed_on: NaiveDate) -> Task {
        let mut task = task(text, position, Some(completed_on));
        task.toggle_completion(completed_on.and_hms_opt(14, 30, 0).unwrap());
        task
    }

    #[test]
    fn test_today_includes_backlog_and_todays_tasks() {
        let today = date(2024, 1, 3);
        let tasks = vec![
            task("overdue", 0, Some(date(2024, 1, 1))),
            task("scheduled today", 1, Some(today)),
            task("tomorrow", 2, Some(date(2024, 1, 4))),
        ];

        let visible = visible_tasks(&tasks, today, today);
        let texts: Vec<&str> = visible.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["overdue", "scheduled today"]);
    }

    #[test]
    fn test_today_includes_tasks_completed_today_only() {
        let today = date(2024, 1, 3);
        let tasks = vec![completed_task("done today", 0, today), completed_task("done yesterday", 1, date(2024, 1, 2))];

        let visible = visible_tasks(&tasks, today, today);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].text, "done today");
    }

    #[test]
    fn test_legacy_task_always_visible_today() {
        // Scenario D: no target date, incomplete.
        let today = date(2024, 1, 3);
        let tasks = vec![task("legacy", 0, None)];

        assert_eq!(visible_tasks(&tasks, today, today).len(), 1);
    }

    #[test]
    fn test_past_view_shows_only_that_days_completions() {
        // Scenario B.
        let today = date(2024, 1, 3);
        let viewing = date(2024, 1, 2);
        let tasks = vec![
            completed_task("completed on viewed day", 0, viewing),
            completed_task("completed earlier", 1, date(2024, 1, 1)),
            task("incomplete", 2, Some(viewing)),
            task("legacy", 3, None),
        ];

        let visible = visible_tasks(&tasks, viewing, today);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].text, "completed on viewed day");
    }

    #[test]
    fn test_future_view_shows_exact_target_only() {
        // Scenario C: exact target date required, legacy excluded.
        let today = date(2024, 1, 3);
        let viewing = date(2024, 1, 5);
        let tasks = vec![
            task("scheduled for viewed day", 0, Some(viewing)),
            task("scheduled for another day", 1, Some(date(2024, 1, 6))),
            task("legacy", 2, None),
            completed_task("completed", 3, viewing),
        ];

        let visible = visible_tasks(&tasks, viewing, today);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].text, "scheduled for viewed day");
    }

    #[test]
    fn test_visible_tasks_orders_incomplete_first_by_position() {
        let today = date(2024, 1, 3);
        let tasks = vec![
            completed_task("done", 0, today),
            task("second", 2, Some(today)),
            task("first", 1, Some(today)),
        ];

        let visible = visible_tasks(&tasks, today, today);
        let texts: Vec<&str> = visible.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "done"]);
    }

    #[test]
    fn test_visible_tasks_does_not_mutate_input() {
        let today = date(2024, 1, 3);
        let tasks = vec![task("a", 0, Some(date(2024, 1, 1)))];
        let before = tasks.clone();

        let _ = visible_tasks(&tasks, today, today);
        assert_eq!(tasks, before);
    }

    #[test]
    fn test_roll_forward_migrates_overdue_incomplete() {
        // Scenario A: target 2024-01-01, today 2024-01-03.
        let today = date(2024, 1, 3);
        let tasks = vec![task("overdue", 0, Some(date(2024, 1, 1)))];

        let (migrated, changed) = roll_forward(&tasks, today);
        assert!(changed);
        assert_eq!(migrated[0].target_date, Some(today));
    }

    #[test]
    fn test_roll_forward_skips_completed_future_and_legacy() {
        let today = date(2024, 1, 3);
        let tasks = vec![
            completed_task("completed long ago", 0, date(2024, 1, 1)),
            task("future", 1, Some(date(2024, 1, 5))),
            task("legacy", 2, None),
            task("already today", 3, Some(today)),
        ];

        let (migrated, changed) = roll_forward(&tasks, today);
        assert!(!changed);
        assert_eq!(migrated, tasks);
    }

    #[test]
    fn test_roll_forward_is_idempotent() {
        let today = date(2024, 1, 3);
        let tasks = vec![task("overdue", 0, Some(date(2024, 1, 1))), task("legacy", 1, None)];

        let (once, first_changed) = roll_forward(&tasks, today);
        let (twice, second_changed) = roll_forward(&once, today);
        assert!(first_changed);
        assert!(!second_changed);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_roll_forward_preserves_created_at() {
        let today = date(2024, 1, 3);
        let mut stale = task("overdue", 0, Some(date(2024, 1, 1)));
        stale.created_at = date(2023, 12, 20).and_hms_opt(9, 0, 0);

        let (migrated, _) = roll_forward(&[stale.clone()], today);
        assert_eq!(migrated[0].created_at, stale.created_at);
    }

    #[test]
    fn test_toggle_completion_round_trip() {
        let now = date(2024, 1, 3).and_hms_opt(10, 0, 0).unwrap();
        let original = task("toggle me", 0, Some(date(2024, 1, 3)));

        let mut toggled = original.clone();
        toggled.toggle_completion(now);
        assert!(toggled.completed);
        assert_eq!(toggled.completed_at, Some(now));

        toggled.toggle_completion(now);
        assert_eq!(toggled, original);
    }
}
