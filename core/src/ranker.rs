use crate::error::SearchError;
use crate::index::InvertedIndex;
use crate::query::Query;
use crate::{DocId, Document};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// `ln(N / df)`. Callers only ask for words that are in the index, so `df > 0`.
pub fn inverse_document_frequency(document_count: usize, document_freq: usize) -> f64 {
    (document_count as f64 / document_freq as f64).ln()
}

/// Every document matching at least one plus word and no minus word, unordered.
pub fn find_all_documents(index: &InvertedIndex, query: &Query) -> Result<Vec<Document>, SearchError> {
    if query.has_no_plus_words() {
        return Ok(Vec::new());
    }
    let mut relevance: BTreeMap<DocId, f64> = BTreeMap::new();
    for word in &query.plus_words {
        let postings = index.document_frequency_for(word);
        if postings.is_empty() {
            tracing::trace!(word = %word, "plus word not indexed");
            continue;
        }
        let idf = inverse_document_frequency(index.document_count(), postings.len());
        for (&doc_id, &tf) in postings {
            *relevance.entry(doc_id).or_insert(0.0) += idf * tf;
        }
    }

    for word in &query.minus_words {
        for doc_id in index.document_frequency_for(word).keys() {
            relevance.remove(doc_id);
        }
    }

    relevance
        .into_iter()
        .map(|(id, relevance)| Ok(Document { id, relevance, rating: index.rating_for(id)? }))
        .collect()
}

/// Highest relevance first; equal relevance falls back to ascending id.
pub fn sort_by_relevance(documents: &mut [Document]) {
    documents.sort_by(|a, b| {
        b.relevance
            .partial_cmp(&a.relevance)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.id.cmp(&b.id))
    });
}

pub fn find_top_documents(index: &InvertedIndex, query: &Query, limit: usize) -> Result<Vec<Document>, SearchError> {
    let mut matched = find_all_documents(index, query)?;
    sort_by_relevance(&mut matched);
    matched.truncate(limit);
    Ok(matched)
}
