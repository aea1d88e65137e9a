//! Task management command: create, edit, complete, delete, reorder, list.
//!
//! New daily tasks are scheduled for the date the board is currently
//! showing, so adding a task while viewing tomorrow plans it for tomorrow.
//! Completion is always stamped with the real current date regardless of
//! the viewing date.

use crate::db::boards::Boards;
use crate::db::tasks::Tasks;
use crate::libs::board::Timeframe;
use crate::libs::messages::Message;
use crate::libs::task::{Task, TaskFilter};
use crate::libs::view::View;
use crate::{msg_error_anyhow, msg_print, msg_success};
use anyhow::Result;
use chrono::Local;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};

#[derive(Debug, Args)]
pub struct TaskArgs {
    /// Task text; prompts interactively when omitted
    text: Option<String>,

    /// Board the task belongs to
    #[arg(long, short, value_enum, default_value_t = Timeframe::Daily)]
    timeframe: Timeframe,

    /// Toggle completion for the task with this ID
    #[arg(long)]
    done: Option<i64>,

    /// Edit the text of the task with this ID
    #[arg(long)]
    edit: Option<i64>,

    /// Delete the task with this ID
    #[arg(long)]
    delete: Option<i64>,

    /// Move a task to a new position on its board
    #[arg(long = "move", num_args = 2, value_names = ["ID", "POSITION"])]
    move_task: Option<Vec<i64>>,

    /// List tasks on the board
    #[arg(long, short)]
    list: bool,
}

pub fn cmd(args: TaskArgs) -> Result<()> {
    let mut tasks = Tasks::new()?;

    if let Some(id) = args.done {
        return toggle(&mut tasks, id);
    }
    if let Some(id) = args.edit {
        return edit(&mut tasks, id);
    }
    if let Some(id) = args.delete {
        return delete(&mut tasks, id);
    }
    if let Some(move_args) = &args.move_task {
        return move_to(&mut tasks, args.timeframe, move_args[0], move_args[1]);
    }
    if args.list {
        return list(&mut tasks, args.timeframe);
    }

    add(&mut tasks, args)
}

fn add(tasks: &mut Tasks, args: TaskArgs) -> Result<()> {
    let today = Local::now().date_naive();
    let mut boards = Boards::new()?;
    let board = boards.ensure(args.timeframe, today)?;

    let text = match args.text {
        Some(text) => text,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskText.to_string())
            .interact_text()?,
    };

    // Daily tasks are pinned to the date the board is showing
    let target_date = args.timeframe.requires_schedule().then_some(board.view_date);
    let position = tasks.count_for_board(board.id)?;

    tasks.create(&Task::new(board.id, &text, position, target_date))?;
    boards.touch(board.id)?;

    msg_success!(Message::TaskCreated);
    Ok(())
}

fn toggle(tasks: &mut Tasks, id: i64) -> Result<()> {
    let mut task = tasks.get_by_id(id)?.ok_or_else(|| msg_error_anyhow!(Message::TaskNotFoundWithId(id)))?;

    task.toggle_completion(Local::now().naive_local());
    tasks.update(&task)?;

    msg_success!(Message::TaskUpdated);
    Ok(())
}

fn edit(tasks: &mut Tasks, id: i64) -> Result<()> {
    let mut task = tasks.get_by_id(id)?.ok_or_else(|| msg_error_anyhow!(Message::TaskNotFoundWithId(id)))?;

    let text: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskText.to_string())
        .default(task.text.clone())
        .interact_text()?;

    if text == task.text {
        msg_print!(Message::NoChangesDetected);
        return Ok(());
    }

    task.text = text;
    tasks.update(&task)?;

    msg_success!(Message::TaskUpdated);
    Ok(())
}

fn delete(tasks: &mut Tasks, id: i64) -> Result<()> {
    if tasks.get_by_id(id)?.is_none() {
        return Err(msg_error_anyhow!(Message::TaskNotFoundWithId(id)));
    }

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmDeleteTask.to_string())
        .default(false)
        .interact()?;
    if !confirmed {
        msg_print!(Message::OperationCancelled);
        return Ok(());
    }

    tasks.delete(id)?;
    msg_success!(Message::TaskDeleted);
    Ok(())
}

fn move_to(tasks: &mut Tasks, timeframe: Timeframe, id: i64, position: i64) -> Result<()> {
    let today = Local::now().date_naive();
    let board = Boards::new()?.ensure(timeframe, today)?;

    tasks.move_task(board.id, id, position)?;
    msg_success!(Message::TaskMoved(id, position));
    Ok(())
}

fn list(tasks: &mut Tasks, timeframe: Timeframe) -> Result<()> {
    let today = Local::now().date_naive();
    let board = Boards::new()?.ensure(timeframe, today)?;

    let collection = tasks.fetch(TaskFilter::Board(board.id))?;
    if collection.is_empty() {
        msg_print!(Message::NoTasksOnBoard(timeframe.to_string()));
        return Ok(());
    }

    View::tasks(&collection)
}
