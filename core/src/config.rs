use crate::error::SearchError;
use serde::{Deserialize, Serialize};

pub const MAX_RESULT_DOCUMENT_COUNT: usize = 5;

/// Engine settings, fixed when the `SearchServer` is built.
///
/// Only obtainable through [`SearchConfig::new`], `Default` or deserialization,
/// all of which reject a zero result cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSearchConfig")]
pub struct SearchConfig {
    max_result_document_count: usize,
}

#[derive(Deserialize)]
struct RawSearchConfig {
    #[serde(default = "default_max_results")]
    max_result_document_count: usize,
}

fn default_max_results() -> usize { MAX_RESULT_DOCUMENT_COUNT }

impl TryFrom<RawSearchConfig> for SearchConfig {
    type Error = SearchError;

    fn try_from(raw: RawSearchConfig) -> Result<Self, Self::Error> {
        SearchConfig::new(raw.max_result_document_count)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { max_result_document_count: MAX_RESULT_DOCUMENT_COUNT }
    }
}

impl SearchConfig {
    pub fn new(max_result_document_count: usize) -> Result<Self, SearchError> {
        if max_result_document_count == 0 {
            return Err(SearchError::InvalidConfig("max_result_document_count must be at least 1".into()));
        }
        Ok(Self { max_result_document_count })
    }

    /// Always at least 1.
    pub fn max_result_document_count(&self) -> usize { self.max_result_document_count }
}
