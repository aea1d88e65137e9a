//! Data export functionality for external analysis and backup.
//!
//! Extracts the full dashboard (every board with its tasks) into CSV,
//! JSON, or Excel files. Exports are read-only snapshots: they never touch
//! the stored data and can be re-run at any time.
//!
//! ## Features
//!
//! - **Export Formats**: CSV for spreadsheets, JSON for backups and
//!   programmatic use, Excel with formatted headers
//! - **File Naming**: date-stamped defaults, explicit path override
//!
//! ## Usage
//!
//! ```rust,no_run
//! use horizons::libs::export::{Exporter, ExportFormat};
//!
//! let exporter = Exporter::new(ExportFormat::Json, None);
//! let path = exporter.export_boards()?;
//! # anyhow::Ok(())
//! ```

use crate::db::{boards::Boards, tasks::Tasks};
use crate::libs::task::TaskFilter;
use anyhow::Result;
use chrono::Local;
use rust_xlsxwriter::{Format, Workbook};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Supported export output formats.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values, one row per task.
    Csv,
    /// Pretty-printed JSON, boards nested with their tasks.
    Json,
    /// Excel workbook with a formatted header row.
    Excel,
}

impl ExportFormat {
    fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        }
    }
}

/// Serializable board with its tasks, as written to JSON exports.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportBoard {
    pub timeframe: String,
    pub title: String,
    pub view_date: String,
    pub tasks: Vec<ExportTask>,
}

/// Serializable task record. All dates are strings for format
/// compatibility.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportTask {
    pub id: i64,
    pub text: String,
    pub completed: bool,
    pub position: i64,
    pub created_at: String,
    pub completed_at: String,
    pub target_date: String,
}

/// Writes dashboard exports in the selected format.
pub struct Exporter {
    format: ExportFormat,
    output: Option<PathBuf>,
}

impl Exporter {
    pub fn new(format: ExportFormat, output: Option<PathBuf>) -> Self {
        Self { format, output }
    }

    /// Exports every board with its tasks. Returns the written path.
    pub fn export_boards(&self) -> Result<PathBuf> {
        let boards = self.collect()?;
        let path = self.output_path();

        match self.format {
            ExportFormat::Csv => self.write_csv(&boards, &path)?,
            ExportFormat::Json => self.write_json(&boards, &path)?,
            ExportFormat::Excel => self.write_excel(&boards, &path)?,
        }

        Ok(path)
    }

    fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            PathBuf::from(format!(
                "horizons_boards_{}.{}",
                Local::now().format("%Y-%m-%d"),
                self.format.extension()
            ))
        })
    }

    fn collect(&self) -> Result<Vec<ExportBoard>> {
        let mut boards = Boards::new()?;
        let mut tasks = Tasks::new()?;

        let mut export = Vec::new();
        for board in boards.fetch_all()? {
            let board_tasks = tasks
                .fetch(TaskFilter::Board(board.id))?
                .into_iter()
                .map(|task| ExportTask {
                    id: task.id.unwrap_or(0),
                    text: task.text,
                    completed: task.completed,
                    position: task.position,
                    created_at: task.created_at.map(|at| at.format("%Y-%m-%d %H:%M:%S").to_string()).unwrap_or_default(),
                    completed_at: task.completed_at.map(|at| at.format("%Y-%m-%d %H:%M:%S").to_string()).unwrap_or_default(),
                    target_date: task.target_date.map(|date| date.to_string()).unwrap_or_default(),
                })
                .collect();

            export.push(ExportBoard {
                timeframe: board.timeframe.to_string(),
                title: board.title(),
                view_date: board.view_date.to_string(),
                tasks: board_tasks,
            });
        }

        Ok(export)
    }

    fn write_csv(&self, boards: &[ExportBoard], path: &PathBuf) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(["timeframe", "task_id", "text", "completed", "position", "created_at", "completed_at", "target_date"])?;

        for board in boards {
            for task in &board.tasks {
                let id = task.id.to_string();
                let completed = task.completed.to_string();
                let position = task.position.to_string();
                writer.write_record([
                    board.timeframe.as_str(),
                    id.as_str(),
                    task.text.as_str(),
                    completed.as_str(),
                    position.as_str(),
                    task.created_at.as_str(),
                    task.completed_at.as_str(),
                    task.target_date.as_str(),
                ])?;
            }
        }

        writer.flush()?;
        Ok(())
    }

    fn write_json(&self, boards: &[ExportBoard], path: &PathBuf) -> Result<()> {
        let mut file = File::create(path)?;
        let json = serde_json::to_string_pretty(boards)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }

    fn write_excel(&self, boards: &[ExportBoard], path: &PathBuf) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        let bold = Format::new().set_bold();

        let headers = ["Timeframe", "ID", "Task", "Completed", "Position", "Created", "Completed at", "Target date"];
        for (col, header) in headers.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *header, &bold)?;
        }

        let mut row = 1u32;
        for board in boards {
            for task in &board.tasks {
                worksheet.write_string(row, 0, &board.timeframe)?;
                worksheet.write_number(row, 1, task.id as f64)?;
                worksheet.write_string(row, 2, &task.text)?;
                worksheet.write_boolean(row, 3, task.completed)?;
                worksheet.write_number(row, 4, task.position as f64)?;
                worksheet.write_string(row, 5, &task.created_at)?;
                worksheet.write_string(row, 6, &task.completed_at)?;
                worksheet.write_string(row, 7, &task.target_date)?;
                row += 1;
            }
        }

        workbook.save(path)?;
        Ok(())
    }
}
