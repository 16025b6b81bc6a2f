//! Runtime configuration and database setup
//!
//! Values come from (lowest to highest precedence): built-in defaults, an
//! optional TOML file, then environment variables (`.env` is honoured).

pub mod repository;

use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::Deserialize;
use sqlx::SqlitePool;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Service configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP listen port
    pub port: u16,
    /// SQLite database file
    pub database_name: String,
    /// Origins allowed by CORS
    pub cors_origins: Vec<String>,
    /// Maximum accepted upload size in bytes
    pub max_upload_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            database_name: "database.sqlite".to_string(),
            cors_origins: vec![
                "http://localhost:4200".to_string(),
                "http://localhost:3000".to_string(),
            ],
            max_upload_bytes: 5 * 1024 * 1024,
        }
    }
}

impl Config {
    /// Load configuration from an optional TOML file and the process environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenvy::dotenv().ok();

        let file_contents = match path {
            Some(path) => Some(
                std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config file: {}", path.display()))?,
            ),
            None => None,
        };

        Self::from_sources(file_contents.as_deref(), |key| std::env::var(key).ok())
    }

    /// Build configuration from TOML text and an environment lookup
    pub fn from_sources<F>(toml_text: Option<&str>, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config: Config = match toml_text {
            Some(text) => toml::from_str(text).context("Failed to parse config file")?,
            None => Config::default(),
        };

        if let Some(port) = env("PORT") {
            config.port = parse_env("PORT", &port)?;
        }
        if let Some(name) = env("DATABASE_NAME") {
            config.database_name = name;
        }
        if let Some(origins) = env("CORS_ORIGINS") {
            config.cors_origins = origins
                .split(',')
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect();
        }
        if let Some(bytes) = env("MAX_UPLOAD_BYTES") {
            config.max_upload_bytes = parse_env("MAX_UPLOAD_BYTES", &bytes)?;
        }

        Ok(config)
    }

    /// Open (creating if needed) the SQLite database and apply migrations
    pub async fn connect(&self) -> Result<SqlitePool> {
        let options = SqliteConnectOptions::from_str(&format!("sqlite:{}", self.database_name))
            .with_context(|| format!("Invalid database name: {}", self.database_name))?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .with_context(|| format!("Failed to open database: {}", self.database_name))?;

        run_migrations(&pool).await?;
        log::debug!("Connected to database {}", self.database_name);
        Ok(pool)
    }
}

fn parse_env<T: FromStr>(key: &str, value: &str) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .trim()
        .parse()
        .with_context(|| format!("Invalid value for {}: {}", key, value))
}

/// Apply pending migrations
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    MIGRATOR
        .run(pool)
        .await
        .context("Failed to apply database migrations")?;
    Ok(())
}

/// Single-connection in-memory database with migrations applied
#[cfg(test)]
pub async fn connect_in_memory() -> Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .context("Failed to open in-memory database")?;
    run_migrations(&pool).await?;
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_sources(None, env_from(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.port, 3000);
        assert_eq!(config.database_name, "database.sqlite");
        assert_eq!(config.max_upload_bytes, 5 * 1024 * 1024);
    }

    #[test]
    fn test_file_then_env_overrides() {
        let toml_text = r#"
            port = 8080
            database_name = "candidates.db"
        "#;

        let config = Config::from_sources(
            Some(toml_text),
            env_from(&[("PORT", "9000"), ("CORS_ORIGINS", "http://a.test, http://b.test,")]),
        )
        .unwrap();

        assert_eq!(config.port, 9000);
        assert_eq!(config.database_name, "candidates.db");
        assert_eq!(config.cors_origins, vec!["http://a.test", "http://b.test"]);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = Config::from_sources(Some("max_upload_bytes = 1024"), env_from(&[])).unwrap();
        assert_eq!(config.max_upload_bytes, 1024);
        assert_eq!(config.port, 3000);
        assert_eq!(config.cors_origins, Config::default().cors_origins);
    }

    #[test]
    fn test_invalid_env_value() {
        let err = Config::from_sources(None, env_from(&[("PORT", "abc")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}
