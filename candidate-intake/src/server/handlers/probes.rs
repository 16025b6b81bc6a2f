use anyhow::Context;
use axum::{Json, extract::State};
use chrono::Utc;
use serde_json::{Value, json};

use crate::server::{error::Result, state::AppState};

pub const SERVICE_NAME: &str = "Candidate Management API";

pub async fn home() -> &'static str {
    "Candidate Management API is running!"
}

pub async fn health(State(state): State<AppState>) -> Result<Json<Value>> {
    sqlx::query("select 1")
        .execute(&state.db_pool)
        .await
        .context("Database health check failed")?;
    log::debug!("service is healthy");
    Ok(Json(json!({
        "status": "OK",
        "service": SERVICE_NAME,
        "timestamp": Utc::now().to_rfc3339(),
    })))
}
