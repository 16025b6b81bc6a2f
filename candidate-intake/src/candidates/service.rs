//! Candidate creation and lookup on top of a [`CandidateStore`]

use std::sync::Arc;

use super::{
    Candidate, CandidateStore, NewCandidate, ServiceError, TabularRecordParser,
};

/// Input for creating a candidate
///
/// `name` and `surname` are expected to be validated by the caller.
#[derive(Debug, Clone)]
pub struct CreateCandidate {
    pub name: String,
    pub surname: String,
    pub document: Vec<u8>,
}

/// Orchestrates parsing and persistence of candidates
#[derive(Clone)]
pub struct CandidateService {
    store: Arc<dyn CandidateStore>,
    parser: TabularRecordParser,
}

impl CandidateService {
    pub fn new(store: Arc<dyn CandidateStore>) -> Self {
        Self {
            store,
            parser: TabularRecordParser::new(),
        }
    }

    /// Parse the uploaded workbook and persist the merged record
    ///
    /// Nothing is written when the workbook fails validation.
    pub async fn create(&self, request: CreateCandidate) -> Result<Candidate, ServiceError> {
        let fields = self.parser.parse(&request.document).inspect_err(|e| {
            log::warn!(
                "Rejected workbook for {} {}: {}",
                request.name,
                request.surname,
                e
            );
        })?;

        let candidate = self
            .store
            .create(NewCandidate::from_parsed(&request.name, &request.surname, fields))
            .await?;

        log::info!(
            "Created candidate {} ({} {}, {}, {} years)",
            candidate.id,
            candidate.name,
            candidate.surname,
            candidate.seniority,
            candidate.years_of_experience
        );
        Ok(candidate)
    }

    pub async fn list(&self) -> Result<Vec<Candidate>, ServiceError> {
        Ok(self.store.find_all().await?)
    }

    pub async fn get(&self, id: i64) -> Result<Candidate, ServiceError> {
        self.store
            .find_one(id)
            .await?
            .ok_or(ServiceError::NotFound(id))
    }

    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        let affected = self.store.delete(id).await?;
        if affected == 0 {
            return Err(ServiceError::NotFound(id));
        }
        log::info!("Deleted candidate {}", id);
        Ok(())
    }
}
