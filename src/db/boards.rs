use super::db::Db;
use crate::libs::board::{Board, Timeframe};
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{params, Connection, OptionalExtension};

const INSERT_BOARD: &str = "INSERT OR IGNORE INTO boards (timeframe, view_date) VALUES (?1, ?2)";
const SELECT_BOARD: &str = "SELECT id, timeframe, view_date, created_at, updated_at FROM boards WHERE timeframe = ?1";
const SELECT_ALL_BOARDS: &str = "SELECT id, timeframe, view_date, created_at, updated_at FROM boards";
const UPDATE_VIEW_DATE: &str = "UPDATE boards SET view_date = ?2, updated_at = datetime(CURRENT_TIMESTAMP, 'localtime') WHERE timeframe = ?1";
const TOUCH_BOARD: &str = "UPDATE boards SET updated_at = datetime(CURRENT_TIMESTAMP, 'localtime') WHERE id = ?1";

/// Board repository over the application database.
///
/// Boards are keyed by their timeframe (unique per database), so creation
/// is naturally idempotent.
pub struct Boards {
    conn: Connection,
}

impl Boards {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(Boards { conn: db.conn })
    }

    /// Creates any missing boards, one per timeframe, viewing `today`.
    /// Existing boards are left untouched.
    pub fn ensure_defaults(&mut self, today: NaiveDate) -> Result<()> {
        for timeframe in Timeframe::ALL {
            self.conn
                .execute(INSERT_BOARD, params![timeframe.as_str(), today.format("%Y-%m-%d").to_string()])?;
        }
        Ok(())
    }

    /// Fetches the board for a timeframe, creating it first if needed.
    pub fn ensure(&mut self, timeframe: Timeframe, today: NaiveDate) -> Result<Board> {
        self.conn
            .execute(INSERT_BOARD, params![timeframe.as_str(), today.format("%Y-%m-%d").to_string()])?;
        self.fetch(timeframe)?
            .ok_or_else(|| msg_error_anyhow!(Message::BoardNotFound(timeframe.to_string())))
    }

    pub fn fetch(&mut self, timeframe: Timeframe) -> Result<Option<Board>> {
        self.conn
            .query_row(SELECT_BOARD, params![timeframe.as_str()], map_board)
            .optional()?
            .transpose()
    }

    pub fn fetch_all(&mut self) -> Result<Vec<Board>> {
        let mut stmt = self.conn.prepare(SELECT_ALL_BOARDS)?;
        let board_iter = stmt.query_map([], map_board)?;
        let mut boards = Vec::new();
        for board in board_iter {
            boards.push(board??);
        }
        Ok(boards)
    }

    /// Moves the viewing date; the stored task collection is not touched.
    pub fn set_view_date(&mut self, timeframe: Timeframe, date: NaiveDate) -> Result<()> {
        self.conn
            .execute(UPDATE_VIEW_DATE, params![timeframe.as_str(), date.format("%Y-%m-%d").to_string()])?;
        Ok(())
    }

    pub fn touch(&mut self, board_id: i64) -> Result<()> {
        self.conn.execute(TOUCH_BOARD, params![board_id])?;
        Ok(())
    }
}

// Row mapping is two-stage: rusqlite errors surface first, then an unknown
// timeframe value becomes an application error.
fn map_board(row: &rusqlite::Row<'_>) -> rusqlite::Result<Result<Board>> {
    let timeframe_raw: String = row.get(1)?;
    let view_date: String = row.get(2)?;
    let created_at: Option<String> = row.get(3)?;
    let updated_at: Option<String> = row.get(4)?;
    let id: i64 = row.get(0)?;

    Ok(match Timeframe::parse(&timeframe_raw) {
        Some(timeframe) => Ok(Board {
            id,
            timeframe,
            view_date: NaiveDate::parse_from_str(&view_date, "%Y-%m-%d").unwrap_or_default(),
            created_at: created_at.and_then(|s| NaiveDateTime::parse_from_str(&s, "%Y-%m-%d %H:%M:%S").ok()),
            updated_at: updated_at.and_then(|s| NaiveDateTime::parse_from_str(&s, "%Y-%m-%d %H:%M:%S").ok()),
        }),
        None => Err(msg_error_anyhow!(Message::UnknownTimeframe(timeframe_raw))),
    })
}
