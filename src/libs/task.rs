use chrono::{NaiveDate, NaiveDateTime};

/// A single task on a goal board.
///
/// `completed` and `completed_at` move together: a completed task always
/// carries the timestamp it was completed at, and clearing the flag clears
/// the timestamp. `target_date` is set only for daily-board tasks; tasks
/// created before the column existed carry `None` and fall back to the
/// legacy visibility rule.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: Option<i64>,
    pub board_id: i64,
    pub text: String,
    pub completed: bool,
    pub position: i64,
    pub created_at: Option<NaiveDateTime>,
    pub completed_at: Option<NaiveDateTime>,
    pub target_date: Option<NaiveDate>,
}

impl Task {
    pub fn new(board_id: i64, text: &str, position: i64, target_date: Option<NaiveDate>) -> Self {
        Task {
            id: None,
            board_id,
            text: text.to_string(),
            completed: false,
            position,
            created_at: None,
            completed_at: None,
            target_date,
        }
    }

    /// Flips the completion flag. Completion is stamped with the real
    /// current time, never the viewing date, so navigating to a past day
    /// cannot backdate a completion.
    pub fn toggle_completion(&mut self, now: NaiveDateTime) {
        self.completed = !self.completed;
        self.completed_at = if self.completed { Some(now) } else { None };
    }
}

#[derive(Debug, Clone)]
pub enum TaskFilter {
    All,
    Board(i64),
    ByIds(Vec<i64>),
}
