//! `parse` command: run the Excel intake checks on a local file

mod handler;

use std::path::PathBuf;

use clap::{Args, ValueEnum};

pub use handler::handle_parse_command;

#[derive(Args)]
pub struct ParseCommands {
    /// Excel file to read (.xlsx, .xls, .xlsb, .ods)
    pub file: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Table,
    /// Pretty-printed JSON
    Json,
}
