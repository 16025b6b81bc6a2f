//! Repository for candidate records

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{Row, SqlitePool, sqlite::SqliteRow};

use crate::candidates::{Candidate, CandidateStore, NewCandidate, Seniority};

/// Insert a candidate, stamping `created_at` with the current time
pub async fn insert_candidate(pool: &SqlitePool, candidate: &NewCandidate) -> Result<Candidate> {
    let created_at = Utc::now();

    let result = sqlx::query(
        r#"
        INSERT INTO candidates (name, surname, seniority, years_of_experience, availability, created_at)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&candidate.name)
    .bind(&candidate.surname)
    .bind(candidate.seniority.as_str())
    .bind(candidate.years_of_experience as i64)
    .bind(if candidate.availability { 1i64 } else { 0i64 })
    .bind(created_at)
    .execute(pool)
    .await
    .context("Failed to insert candidate")?;

    Ok(Candidate {
        id: result.last_insert_rowid(),
        name: candidate.name.clone(),
        surname: candidate.surname.clone(),
        seniority: candidate.seniority,
        years_of_experience: candidate.years_of_experience,
        availability: candidate.availability,
        created_at,
    })
}

/// List all candidates, newest first
pub async fn list_candidates(pool: &SqlitePool) -> Result<Vec<Candidate>> {
    let rows = sqlx::query(
        r#"
        SELECT id, name, surname, seniority, years_of_experience, availability, created_at
        FROM candidates
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .fetch_all(pool)
    .await
    .context("Failed to list candidates")?;

    rows.iter().map(row_to_candidate).collect()
}

/// Get a candidate by id
pub async fn get_candidate(pool: &SqlitePool, id: i64) -> Result<Option<Candidate>> {
    let row = sqlx::query(
        r#"
        SELECT id, name, surname, seniority, years_of_experience, availability, created_at
        FROM candidates
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
    .context("Failed to get candidate")?;

    row.as_ref().map(row_to_candidate).transpose()
}

/// Delete a candidate by id, returning the affected row count
pub async fn delete_candidate(pool: &SqlitePool, id: i64) -> Result<u64> {
    let result = sqlx::query("DELETE FROM candidates WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await
        .context("Failed to delete candidate")?;

    Ok(result.rows_affected())
}

fn row_to_candidate(row: &SqliteRow) -> Result<Candidate> {
    let seniority_str: String = row.try_get("seniority")?;
    let seniority = Seniority::from_normalized(&seniority_str)
        .with_context(|| format!("Invalid seniority stored: {}", seniority_str))?;

    let years: i64 = row.try_get("years_of_experience")?;
    let created_at: DateTime<Utc> = row.try_get("created_at")?;

    Ok(Candidate {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        surname: row.try_get("surname")?,
        seniority,
        years_of_experience: u32::try_from(years)
            .with_context(|| format!("Invalid years_of_experience stored: {}", years))?,
        availability: row.try_get::<i64, _>("availability")? != 0,
        created_at,
    })
}

/// [`CandidateStore`] backed by SQLite
#[derive(Debug, Clone)]
pub struct SqliteCandidateStore {
    pool: SqlitePool,
}

impl SqliteCandidateStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CandidateStore for SqliteCandidateStore {
    async fn create(&self, candidate: NewCandidate) -> Result<Candidate> {
        insert_candidate(&self.pool, &candidate).await
    }

    async fn find_all(&self) -> Result<Vec<Candidate>> {
        list_candidates(&self.pool).await
    }

    async fn find_one(&self, id: i64) -> Result<Option<Candidate>> {
        get_candidate(&self.pool, id).await
    }

    async fn delete(&self, id: i64) -> Result<u64> {
        delete_candidate(&self.pool, id).await
    }
}
