//! Parse command handler

use anyhow::{Context, Result};
use colored::*;
use std::fs;

use super::{OutputFormat, ParseCommands};
use crate::candidates::{ParsedCandidateFields, TabularRecordParser};

pub fn handle_parse_command(args: ParseCommands) -> Result<()> {
    if args.no_color {
        colored::control::set_override(false);
    }

    if !args.file.exists() {
        anyhow::bail!("File does not exist: {}", args.file.display());
    }

    let bytes = fs::read(&args.file)
        .with_context(|| format!("Failed to read Excel file: {}", args.file.display()))?;

    let fields = TabularRecordParser::new()
        .parse(&bytes)
        .with_context(|| format!("Rejected {}", args.file.display()))?;

    println!("{}", format_output(&fields, args.format)?);
    Ok(())
}

fn format_output(fields: &ParsedCandidateFields, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(fields).context("Failed to format JSON output")
        }
        OutputFormat::Table => {
            let availability = if fields.availability {
                "available".bright_green()
            } else {
                "not available".yellow()
            };
            Ok(format!(
                "{:<22}{}\n{:<22}{}\n{:<22}{}",
                "Seniority:".dimmed(),
                fields.seniority.to_string().cyan().bold(),
                "Years of experience:".dimmed(),
                fields.years_of_experience,
                "Availability:".dimmed(),
                availability
            ))
        }
    }
}
