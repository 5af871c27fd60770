use crate::error::SearchError;
use crate::DocId;
use std::collections::{BTreeMap, HashMap};

/// Posting list of a single term: document id -> term frequency in that document.
pub type Postings = BTreeMap<DocId, f64>;

static NO_POSTINGS: Postings = BTreeMap::new();

#[derive(Debug, Default)]
pub struct InvertedIndex {
    word_to_document_freqs: HashMap<String, Postings>,
    ratings: BTreeMap<DocId, i32>,
}

impl InvertedIndex {
    pub fn new() -> Self { Self::default() }

    /// Record a document from its already filtered words.
    ///
    /// Each occurrence adds `1 / words.len()` to the word's posting for `id`, so
    /// the frequencies of one document sum to 1. A document without words adds
    /// no postings but is still counted and rated.
    pub fn insert(&mut self, id: DocId, words: &[&str], ratings: &[i32]) -> Result<(), SearchError> {
        if self.ratings.contains_key(&id) {
            return Err(SearchError::DuplicateDocument(id));
        }
        if !words.is_empty() {
            let inv_word_count = 1.0 / words.len() as f64;
            for word in words {
                *self
                    .word_to_document_freqs
                    .entry((*word).to_string())
                    .or_default()
                    .entry(id)
                    .or_insert(0.0) += inv_word_count;
            }
        }
        self.ratings.insert(id, compute_average_rating(ratings));
        Ok(())
    }

    /// Postings for `word`, empty when the word was never indexed. Indexed
    /// words always have at least one posting.
    pub fn document_frequency_for(&self, word: &str) -> &Postings {
        self.word_to_document_freqs.get(word).unwrap_or(&NO_POSTINGS)
    }

    pub fn document_count(&self) -> usize { self.ratings.len() }

    pub fn contains_document(&self, id: DocId) -> bool { self.ratings.contains_key(&id) }

    pub fn rating_for(&self, id: DocId) -> Result<i32, SearchError> {
        self.ratings.get(&id).copied().ok_or(SearchError::UnknownDocument(id))
    }
}

/// Integer mean, truncated toward zero; 0 for no ratings.
pub fn compute_average_rating(ratings: &[i32]) -> i32 {
    if ratings.is_empty() {
        return 0;
    }
    let sum: i64 = ratings.iter().map(|&r| i64::from(r)).sum();
    (sum / ratings.len() as i64) as i32
}
