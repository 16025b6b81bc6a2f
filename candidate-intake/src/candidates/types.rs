//! Candidate record types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Experience level of a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Seniority {
    Junior,
    Senior,
}

impl Seniority {
    /// Stored/serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            Seniority::Junior => "junior",
            Seniority::Senior => "senior",
        }
    }

    /// Parse an already normalized value ("junior" / "senior")
    pub fn from_normalized(s: &str) -> Option<Self> {
        match s {
            "junior" => Some(Seniority::Junior),
            "senior" => Some(Seniority::Senior),
            _ => None,
        }
    }
}

impl std::fmt::Display for Seniority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Fields extracted from an uploaded workbook
///
/// Either all three fields are present and valid, or the parse fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedCandidateFields {
    pub seniority: Seniority,
    pub years_of_experience: u32,
    pub availability: bool,
}

/// Everything the store needs to create a candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCandidate {
    pub name: String,
    pub surname: String,
    pub seniority: Seniority,
    pub years_of_experience: u32,
    pub availability: bool,
}

impl NewCandidate {
    /// Merge request-level identity with the parsed workbook fields
    pub fn from_parsed(name: &str, surname: &str, fields: ParsedCandidateFields) -> Self {
        Self {
            name: name.to_string(),
            surname: surname.to_string(),
            seniority: fields.seniority,
            years_of_experience: fields.years_of_experience,
            availability: fields.availability,
        }
    }
}

/// A persisted candidate
///
/// `id` and `created_at` are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub seniority: Seniority,
    pub years_of_experience: u32,
    pub availability: bool,
    pub created_at: DateTime<Utc>,
}
