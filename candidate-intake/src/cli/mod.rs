//! Command-line interface

pub mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Config;
use commands::parse::ParseCommands;

#[derive(Parser)]
#[command(name = "candidate-intake", version, about = "Candidate management API and Excel intake tools")]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run database migrations and start the HTTP server
    Serve {
        /// Override the configured listen port
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Apply database migrations and exit
    Migrate,
    /// Extract candidate fields from a local Excel file
    Parse(ParseCommands),
    /// Write an example upload workbook
    Template {
        /// Output path
        #[arg(default_value = "candidate-template.xlsx")]
        output: PathBuf,
    },
}

pub async fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve { port } => {
            if let Some(port) = port {
                config.port = port;
            }
            commands::serve::handle_serve_command(&config).await
        }
        Commands::Migrate => commands::serve::handle_migrate_command(&config).await,
        Commands::Parse(args) => commands::parse::handle_parse_command(args),
        Commands::Template { output } => commands::template::handle_template_command(&output),
    }
}
