use anyhow::Result;
use colored::*;

use crate::config::Config;
use crate::server;

pub async fn handle_serve_command(config: &Config) -> Result<()> {
    server::listen(config).await
}

pub async fn handle_migrate_command(config: &Config) -> Result<()> {
    config.connect().await?;
    println!(
        "{} Migrations applied to {}",
        "✓".bright_green(),
        config.database_name.cyan()
    );
    Ok(())
}
