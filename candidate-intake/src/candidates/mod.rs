//! Candidate records: Excel ingestion, storage interface and orchestration

pub mod excel;
mod error;
mod service;
mod store;
mod types;

pub use error::{ServiceError, ValidationError};
pub use excel::TabularRecordParser;
pub use service::{CandidateService, CreateCandidate};
pub use store::CandidateStore;
pub use types::{Candidate, NewCandidate, ParsedCandidateFields, Seniority};
