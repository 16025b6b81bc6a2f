//! Storage interface for candidate records

use anyhow::Result;
use async_trait::async_trait;

use super::{Candidate, NewCandidate};

/// Persistence collaborator for candidates
///
/// Implementations assign `id` and `created_at` on create.
#[async_trait]
pub trait CandidateStore: Send + Sync {
    /// Insert a candidate and return the stored record
    async fn create(&self, candidate: NewCandidate) -> Result<Candidate>;

    /// All candidates, newest first
    async fn find_all(&self) -> Result<Vec<Candidate>>;

    async fn find_one(&self, id: i64) -> Result<Option<Candidate>>;

    /// Delete by id, returning the number of affected rows (0 when absent)
    async fn delete(&self, id: i64) -> Result<u64>;
}
