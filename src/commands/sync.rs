//! Cloud synchronization command.
//!
//! Pushes the local dashboard to the backend as one snapshot, then pulls
//! the remote snapshot and replaces local state with it. The storage layer
//! is last-write-wins; there is no merging of concurrent edits. Requires a
//! signed-in session (`horizons login`).

use crate::api::cloud::{Cloud, Snapshot, SnapshotBoard, SnapshotTask};
use crate::api::Session;
use crate::db::boards::Boards;
use crate::db::tasks::Tasks;
use crate::libs::board::Timeframe;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::task::{Task, TaskFilter};
use crate::{msg_bail_anyhow, msg_info, msg_success};
use anyhow::Result;
use chrono::{Local, NaiveDate, NaiveDateTime};
use clap::Args;
use reqwest::StatusCode;

#[derive(Debug, Args)]
pub struct SyncArgs {
    /// Only push the local snapshot, skip the pull
    #[arg(long, conflicts_with = "pull_only")]
    push_only: bool,

    /// Only pull the remote snapshot, skip the push
    #[arg(long)]
    pull_only: bool,
}

pub async fn cmd(args: SyncArgs) -> Result<()> {
    let config = Config::read()?;
    let Some(cloud_config) = config.cloud else {
        msg_bail_anyhow!(Message::CloudConfigNotFound);
    };

    let mut client = Cloud::new(&cloud_config);
    if !client.is_signed_in()? {
        msg_bail_anyhow!(Message::NotLoggedIn);
    }

    if !args.pull_only {
        let snapshot = build_snapshot()?;
        let board_count = snapshot.boards.len();

        let status = client.push_snapshot(&snapshot).await?;
        if status != StatusCode::OK {
            msg_bail_anyhow!(Message::SyncFailed(status.to_string()));
        }
        msg_info!(Message::SyncPushed(board_count));
    }

    if !args.push_only {
        let remote = client.fetch_snapshot().await?;
        let board_count = remote.boards.len();

        import_snapshot(remote)?;
        msg_info!(Message::SyncPulled(board_count));
    }

    msg_success!(Message::SyncCompleted);
    Ok(())
}

/// Serializes the full local dashboard into the wire format.
fn build_snapshot() -> Result<Snapshot> {
    let mut boards = Boards::new()?;
    let mut tasks = Tasks::new()?;

    let mut snapshot_boards = Vec::new();
    for board in boards.fetch_all()? {
        let snapshot_tasks = tasks
            .fetch(TaskFilter::Board(board.id))?
            .into_iter()
            .map(|task| SnapshotTask {
                text: task.text,
                completed: task.completed,
                position: task.position,
                created_at: task.created_at.map(|at| at.format("%Y-%m-%d %H:%M:%S").to_string()),
                completed_at: task.completed_at.map(|at| at.format("%Y-%m-%d %H:%M:%S").to_string()),
                target_date: task.target_date.map(|date| date.format("%Y-%m-%d").to_string()),
            })
            .collect();

        snapshot_boards.push(SnapshotBoard {
            timeframe: board.timeframe.to_string(),
            view_date: board.view_date.format("%Y-%m-%d").to_string(),
            tasks: snapshot_tasks,
        });
    }

    Ok(Snapshot { boards: snapshot_boards })
}

/// Replaces local state with a remote snapshot (full reload).
///
/// Boards with an unrecognized timeframe are skipped rather than failing
/// the whole import; unparseable wire dates degrade to absent values.
fn import_snapshot(snapshot: Snapshot) -> Result<()> {
    let today = Local::now().date_naive();
    let mut boards = Boards::new()?;
    let mut tasks = Tasks::new()?;

    for remote_board in snapshot.boards {
        let Some(timeframe) = Timeframe::parse(&remote_board.timeframe) else {
            continue;
        };
        let board = boards.ensure(timeframe, today)?;

        if let Ok(view_date) = NaiveDate::parse_from_str(&remote_board.view_date, "%Y-%m-%d") {
            boards.set_view_date(timeframe, view_date)?;
        }

        let imported: Vec<Task> = remote_board
            .tasks
            .into_iter()
            .enumerate()
            .map(|(index, remote)| Task {
                id: None,
                board_id: board.id,
                text: remote.text,
                completed: remote.completed,
                position: if remote.position >= 0 { remote.position } else { index as i64 },
                created_at: parse_wire_datetime(remote.created_at),
                completed_at: parse_wire_datetime(remote.completed_at),
                target_date: parse_wire_date(remote.target_date),
            })
            .collect();

        tasks.replace_for_board(board.id, &imported)?;
    }

    Ok(())
}

fn parse_wire_date(value: Option<String>) -> Option<NaiveDate> {
    value.and_then(|s| NaiveDate::parse_from_str(&s, "%Y-%m-%d").ok())
}

fn parse_wire_datetime(value: Option<String>) -> Option<NaiveDateTime> {
    value.and_then(|s| NaiveDateTime::parse_from_str(&s, "%Y-%m-%d %H:%M:%S").ok())
}
