use super::board::Board;
use super::task::Task;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    // Board header plus its task table.
    pub fn board(board: &Board, tasks: &[Task]) -> Result<()> {
        println!("\n[{}] {}", board.timeframe, board.title());
        if tasks.is_empty() {
            println!("  (no tasks)");
            return Ok(());
        }
        Self::tasks(tasks)
    }

    pub fn tasks(tasks: &[Task]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "TASK", "DONE", "TARGET DATE", "COMPLETED AT"]);
        for task in tasks {
            table.add_row(row![
                task.id.unwrap_or(0),
                task.text,
                if task.completed { "x" } else { "" },
                task.target_date.map(|date| date.to_string()).unwrap_or_default(),
                task.completed_at.map(|at| at.format("%Y-%m-%d %H:%M").to_string()).unwrap_or_default()
            ]);
        }
        table.printstd();

        Ok(())
    }
}
