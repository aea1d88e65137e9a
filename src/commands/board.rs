//! Board display and date navigation command.
//!
//! Shows the whole dashboard or a single timeframe board. The daily board
//! is rendered through the visibility policy against the real current date;
//! every other timeframe shows its full task list. A catch-up rollover runs
//! before the first render so that a missed midnight can never show a stale
//! daily board.

use crate::db::boards::Boards;
use crate::db::tasks::Tasks;
use crate::libs::board::{Board, Timeframe};
use crate::libs::messages::Message;
use crate::libs::task::TaskFilter;
use crate::libs::view::View;
use crate::libs::{daily, rollover};
use crate::{msg_bail_anyhow, msg_print};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;

#[derive(Debug, Args)]
pub struct BoardArgs {
    /// Timeframe to display; omit to show the whole dashboard
    #[arg(value_enum)]
    timeframe: Option<Timeframe>,

    /// Jump the board to a specific date (YYYY-MM-DD)
    #[arg(long, short)]
    date: Option<String>,

    /// Step the board one period back
    #[arg(long, conflicts_with = "date")]
    prev: bool,

    /// Step the board one period forward
    #[arg(long, conflicts_with_all = ["date", "prev"])]
    next: bool,
}

pub fn cmd(args: BoardArgs) -> Result<()> {
    let today = Local::now().date_naive();

    // Rollover must land before any daily visibility read
    rollover::catch_up(today)?;

    let mut boards = Boards::new()?;
    boards.ensure_defaults(today)?;

    match args.timeframe {
        Some(timeframe) => {
            let mut board = boards.ensure(timeframe, today)?;

            if let Some(view_date) = navigation_target(&args, &board)? {
                boards.set_view_date(timeframe, view_date)?;
                board.view_date = view_date;
                msg_print!(Message::BoardDateChanged(timeframe.to_string(), view_date.to_string()));
            }

            show_board(&board, today)
        }
        None => {
            if args.date.is_some() || args.prev || args.next {
                msg_bail_anyhow!(Message::NavigationNeedsTimeframe);
            }
            for timeframe in Timeframe::ALL {
                let board = boards.ensure(timeframe, today)?;
                show_board(&board, today)?;
            }
            Ok(())
        }
    }
}

// Resolves --date/--prev/--next into a new viewing date, if any.
fn navigation_target(args: &BoardArgs, board: &Board) -> Result<Option<NaiveDate>> {
    if let Some(raw) = &args.date {
        let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d");
        return match date {
            Ok(date) => Ok(Some(date)),
            Err(_) => msg_bail_anyhow!(Message::InvalidDate(raw.clone())),
        };
    }
    if args.prev {
        return Ok(Some(board.timeframe.previous_date(board.view_date)));
    }
    if args.next {
        return Ok(Some(board.timeframe.next_date(board.view_date)));
    }
    Ok(None)
}

fn show_board(board: &Board, today: NaiveDate) -> Result<()> {
    let mut tasks = Tasks::new()?;
    let collection = tasks.fetch(TaskFilter::Board(board.id))?;

    let visible = match board.timeframe {
        Timeframe::Daily => daily::visible_tasks(&collection, board.view_date, today),
        _ => collection,
    };

    View::board(board, &visible)
}
