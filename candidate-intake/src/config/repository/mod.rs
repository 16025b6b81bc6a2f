//! Repository layer for database operations

pub mod candidates;

pub use candidates::SqliteCandidateStore;
