use crate::stop_words::StopWords;
use std::collections::BTreeSet;

/// Prefix that turns a query word into an exclusion.
pub const MINUS_MARKER: char = '-';

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub plus_words: BTreeSet<String>,
    pub minus_words: BTreeSet<String>,
}

impl Query {
    /// Parse a raw query. Stop words are removed before the minus marker is
    /// looked at, and a bare `-` carries no word so it is dropped.
    pub fn parse(text: &str, stop_words: &StopWords) -> Self {
        let mut query = Query::default();
        for word in stop_words.split_into_words_no_stop(text) {
            match word.strip_prefix(MINUS_MARKER) {
                Some("") => tracing::trace!("ignoring bare minus marker"),
                Some(rest) => { query.minus_words.insert(rest.to_string()); }
                None => { query.plus_words.insert(word.to_string()); }
            }
        }
        query
    }

    /// Nothing can match such a query, whatever its minus words are.
    pub fn has_no_plus_words(&self) -> bool { self.plus_words.is_empty() }
}
