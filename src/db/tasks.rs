use super::db::Db;
use crate::libs::messages::Message;
use crate::libs::task::{Task, TaskFilter};
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{params, params_from_iter, Connection, OptionalExtension};

const INSERT_TASK: &str = "INSERT INTO tasks (board_id, text, completed, position, created_at, completed_at, target_date)
    VALUES (?1, ?2, ?3, ?4, datetime(CURRENT_TIMESTAMP, 'localtime'), ?5, ?6)";
const INSERT_TASK_FULL: &str = "INSERT INTO tasks (board_id, text, completed, position, created_at, completed_at, target_date)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const SELECT_TASKS: &str = "SELECT id, board_id, text, completed, position, created_at, completed_at, target_date FROM tasks";
const WHERE_BOARD: &str = "WHERE board_id = ?1 ORDER BY position, id";
const WHERE_ID_IN: &str = "WHERE id IN";
const SELECT_BY_ID: &str = "SELECT id, board_id, text, completed, position, created_at, completed_at, target_date FROM tasks WHERE id = ?1";
const UPDATE_TASK: &str = "UPDATE tasks SET text = ?2, completed = ?3, position = ?4, completed_at = ?5, target_date = ?6 WHERE id = ?1";
const UPDATE_TARGET_DATE: &str = "UPDATE tasks SET target_date = ?2 WHERE id = ?1";
const UPDATE_POSITION: &str = "UPDATE tasks SET position = ?2 WHERE id = ?1";
const SELECT_BOARD_ORDER: &str = "SELECT id FROM tasks WHERE board_id = ?1 ORDER BY position, id";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";
const DELETE_FOR_BOARD: &str = "DELETE FROM tasks WHERE board_id = ?1";
const COUNT_FOR_BOARD: &str = "SELECT COUNT(*) FROM tasks WHERE board_id = ?1";

/// Task repository over the application database.
pub struct Tasks {
    conn: Connection,
}

impl Tasks {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(Tasks { conn: db.conn })
    }

    /// Inserts a new task; creation time is stamped by the database.
    /// Returns the assigned row ID.
    pub fn create(&mut self, task: &Task) -> Result<i64> {
        self.conn.execute(
            INSERT_TASK,
            params![
                task.board_id,
                task.text,
                task.completed,
                task.position,
                format_datetime(task.completed_at),
                format_date(task.target_date)
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn fetch(&mut self, filter: TaskFilter) -> Result<Vec<Task>> {
        let (mut stmt, params) = match filter {
            TaskFilter::All => (self.conn.prepare(SELECT_TASKS)?, vec![]),
            TaskFilter::Board(board_id) => (self.conn.prepare(&format!("{} {}", SELECT_TASKS, WHERE_BOARD))?, vec![board_id]),
            TaskFilter::ByIds(ids) => (
                self.conn
                    .prepare(&format!("{} {} ({})", SELECT_TASKS, WHERE_ID_IN, vec!["?"; ids.len()].join(", ")))?,
                ids,
            ),
        };

        let task_iter = stmt.query_map(params_from_iter(params.iter()), map_task)?;
        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }

        Ok(tasks)
    }

    pub fn get_by_id(&mut self, id: i64) -> Result<Option<Task>> {
        self.conn.query_row(SELECT_BY_ID, params![id], map_task).optional().map_err(Into::into)
    }

    /// Persists every mutable field of an existing task.
    pub fn update(&mut self, task: &Task) -> Result<()> {
        let id = task.id.ok_or_else(|| msg_error_anyhow!(Message::NoIdSet))?;
        let affected = self.conn.execute(
            UPDATE_TASK,
            params![
                id,
                task.text,
                task.completed,
                task.position,
                format_datetime(task.completed_at),
                format_date(task.target_date)
            ],
        )?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::TaskNotFoundWithId(id)));
        }
        Ok(())
    }

    pub fn delete(&mut self, id: i64) -> Result<usize> {
        Ok(self.conn.execute(DELETE_TASK, params![id])?)
    }

    pub fn count_for_board(&mut self, board_id: i64) -> Result<i64> {
        Ok(self.conn.query_row(COUNT_FOR_BOARD, params![board_id], |row| row.get(0))?)
    }

    /// Writes back the target dates of a migrated collection in one
    /// transaction. Used by the rollover, which must persist before the
    /// next board render reads the collection.
    pub fn apply_target_dates(&mut self, tasks: &[Task]) -> Result<()> {
        let tx = self.conn.transaction()?;
        for task in tasks {
            if let Some(id) = task.id {
                tx.execute(UPDATE_TARGET_DATE, params![id, format_date(task.target_date)])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    /// Moves a task to a new position on its board and renumbers the rest
    /// contiguously.
    pub fn move_task(&mut self, board_id: i64, task_id: i64, new_position: i64) -> Result<()> {
        let mut ids: Vec<i64> = {
            let mut stmt = self.conn.prepare(SELECT_BOARD_ORDER)?;
            let iter = stmt.query_map(params![board_id], |row| row.get(0))?;
            iter.collect::<Result<Vec<_>, _>>()?
        };

        let index = ids
            .iter()
            .position(|&id| id == task_id)
            .ok_or_else(|| msg_error_anyhow!(Message::TaskNotFoundWithId(task_id)))?;
        ids.remove(index);
        let clamped = new_position.clamp(0, ids.len() as i64) as usize;
        ids.insert(clamped, task_id);

        let tx = self.conn.transaction()?;
        for (position, id) in ids.iter().enumerate() {
            tx.execute(UPDATE_POSITION, params![id, position as i64])?;
        }
        tx.commit()?;
        Ok(())
    }

    /// Replaces a board's tasks with an imported collection, preserving the
    /// imported timestamps. Used by the sync pull, which is a full reload.
    pub fn replace_for_board(&mut self, board_id: i64, tasks: &[Task]) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute(DELETE_FOR_BOARD, params![board_id])?;
        for task in tasks {
            tx.execute(
                INSERT_TASK_FULL,
                params![
                    board_id,
                    task.text,
                    task.completed,
                    task.position,
                    format_datetime(task.created_at),
                    format_datetime(task.completed_at),
                    format_date(task.target_date)
                ],
            )?;
        }
        tx.commit()?;
        Ok(())
    }
}

fn map_task(row: &rusqlite::Row<'_>) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        board_id: row.get(1)?,
        text: row.get(2)?,
        completed: row.get(3)?,
        position: row.get(4)?,
        created_at: parse_datetime(row.get(5)?),
        completed_at: parse_datetime(row.get(6)?),
        target_date: parse_date(row.get(7)?),
    })
}

// Stored dates that fail to parse are treated as absent so that old or
// hand-edited rows degrade to the legacy fallback instead of erroring.
fn parse_date(value: Option<String>) -> Option<NaiveDate> {
    value.and_then(|s| NaiveDate::parse_from_str(&s, "%Y-%m-%d").ok())
}

fn parse_datetime(value: Option<String>) -> Option<NaiveDateTime> {
    value.and_then(|s| NaiveDateTime::parse_from_str(&s, "%Y-%m-%d %H:%M:%S").ok())
}

fn format_date(value: Option<NaiveDate>) -> Option<String> {
    value.map(|date| date.format("%Y-%m-%d").to_string())
}

fn format_datetime(value: Option<NaiveDateTime>) -> Option<String> {
    value.map(|datetime| datetime.format("%Y-%m-%d %H:%M:%S").to_string())
}
