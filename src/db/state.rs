use super::db::Db;
use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension};

const SELECT_VALUE: &str = "SELECT value FROM app_state WHERE key = ?1";
const UPSERT_VALUE: &str = "INSERT INTO app_state (key, value) VALUES (?1, ?2)
    ON CONFLICT(key) DO UPDATE SET value = excluded.value";

const KEY_LAST_ROLLOVER: &str = "last_rollover";

/// Single-row application state, currently just the last rollover day.
///
/// The marker is an optimization: correctness does not depend on it since
/// the rollover itself is idempotent per day, but it lets startup skip a
/// full task scan when the rollover already ran today.
pub struct AppState {
    conn: Connection,
}

impl AppState {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(AppState { conn: db.conn })
    }

    /// The last day a rollover completed, if any. An unparseable marker is
    /// treated as absent, which just means the next rollover scan runs.
    pub fn last_rollover(&mut self) -> Result<Option<NaiveDate>> {
        let value: Option<String> = self.conn.query_row(SELECT_VALUE, params![KEY_LAST_ROLLOVER], |row| row.get(0)).optional()?;
        Ok(value.and_then(|s| NaiveDate::parse_from_str(&s, "%Y-%m-%d").ok()))
    }

    pub fn set_last_rollover(&mut self, date: NaiveDate) -> Result<()> {
        self.conn
            .execute(UPSERT_VALUE, params![KEY_LAST_ROLLOVER, date.format("%Y-%m-%d").to_string()])?;
        Ok(())
    }
}
