use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{ApplicationSubmission, QuerySubmission, SubmissionReference};

/// Archived copy of an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub reference: SubmissionReference,
    pub received_at: DateTime<Utc>,
    pub details: SubmissionDetails,
}

/// Which form produced the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SubmissionDetails {
    Application(ApplicationSubmission),
    Query(QuerySubmission),
}

impl SubmissionDetails {
    pub const fn kind(&self) -> &'static str {
        match self {
            SubmissionDetails::Application(_) => "application",
            SubmissionDetails::Query(_) => "query",
        }
    }
}

/// Storage abstraction standing in for the not-yet-durable database path.
/// The binary wires an in-memory adapter; swapping in a real store is an
/// adapter change, not a service change.
pub trait SubmissionArchive: Send + Sync {
    fn record(&self, record: SubmissionRecord) -> Result<(), ArchiveError>;
    fn recent(&self, limit: usize) -> Result<Vec<SubmissionRecord>, ArchiveError>;
}

/// Error enumeration for archive failures.
#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    #[error("archive unavailable: {0}")]
    Unavailable(String),
}
