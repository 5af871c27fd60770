//! Error types for the search engine core.

use crate::DocId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Rating requested for an id that was never added
    #[error("unknown document id {0}")]
    UnknownDocument(DocId),
    /// Document ids are never reused
    #[error("document id {0} has already been added")]
    DuplicateDocument(DocId),
    /// Stop words must be set before the first document is indexed
    #[error("stop words cannot change after documents have been added")]
    StopWordsAfterIngestion,
    /// No unused `DocId` is left to number an ingested document
    #[error("document ids exhausted")]
    IdSpaceExhausted,
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
