//! Data export command for external analysis and backup.
//!
//! Writes the full dashboard to CSV, JSON, or Excel. See
//! [`crate::libs::export`] for the format details.

use crate::{
    libs::{
        export::{ExportFormat, Exporter},
        messages::Message,
    },
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Command-line arguments for the export command.
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output format for the exported data
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Output file path; defaults to a date-stamped name in the current
    /// directory
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    msg_info!(Message::ExportingData(format!("{:?}", args.format).to_lowercase()));

    let exporter = Exporter::new(args.format, args.output);
    let path = exporter.export_boards()?;

    msg_success!(Message::ExportCompleted(path.display().to_string()));
    Ok(())
}
