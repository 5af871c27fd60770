use crate::config::SearchConfig;
use crate::corpus::CorpusDocument;
use crate::error::SearchError;
use crate::index::{InvertedIndex, Postings};
use crate::query::Query;
use crate::ranker;
use crate::stop_words::StopWords;
use crate::{DocId, Document};

/// Owns the stop words, the inverted index and the result cap.
///
/// All documents are expected to be added before the first query.
#[derive(Debug, Default)]
pub struct SearchServer {
    config: SearchConfig,
    stop_words: StopWords,
    index: InvertedIndex,
}

impl SearchServer {
    pub fn new(stop_words: &str) -> Self {
        Self::with_config(stop_words, SearchConfig::default())
    }

    pub fn with_config(stop_words: &str, config: SearchConfig) -> Self {
        Self { config, stop_words: StopWords::parse(stop_words), index: InvertedIndex::new() }
    }

    pub fn config(&self) -> &SearchConfig { &self.config }

    pub fn stop_words(&self) -> &StopWords { &self.stop_words }

    /// Replace the stop words. Only allowed while the index is still empty,
    /// documents already tokenized would not be revisited otherwise.
    pub fn set_stop_words(&mut self, text: &str) -> Result<(), SearchError> {
        if self.index.document_count() > 0 {
            return Err(SearchError::StopWordsAfterIngestion);
        }
        self.stop_words = StopWords::parse(text);
        Ok(())
    }

    pub fn add_document(&mut self, id: DocId, text: &str, ratings: &[i32]) -> Result<(), SearchError> {
        let words = self.stop_words.split_into_words_no_stop(text);
        if words.is_empty() {
            tracing::debug!(doc_id = id, "document has no indexable words");
        }
        self.index.insert(id, &words, ratings)?;
        tracing::debug!(doc_id = id, words = words.len(), "document added");
        Ok(())
    }

    /// Add documents in order, numbering them from the current document count
    /// and skipping ids a caller already used.
    pub fn ingest<I>(&mut self, documents: I) -> Result<usize, SearchError>
    where
        I: IntoIterator<Item = CorpusDocument>,
    {
        let mut added = 0;
        for doc in documents {
            let id = first_free_id(self.index.document_count(), |id| self.index.contains_document(id))?;
            self.add_document(id, &doc.text, &doc.ratings)?;
            added += 1;
        }
        Ok(added)
    }

    pub fn find_top_documents(&self, raw_query: &str) -> Result<Vec<Document>, SearchError> {
        let query = Query::parse(raw_query, &self.stop_words);
        let found = ranker::find_top_documents(&self.index, &query, self.config.max_result_document_count())?;
        tracing::debug!(
            plus = query.plus_words.len(),
            minus = query.minus_words.len(),
            hits = found.len(),
            "query ranked"
        );
        Ok(found)
    }

    pub fn document_frequency_for(&self, word: &str) -> &Postings {
        self.index.document_frequency_for(word)
    }

    pub fn document_count(&self) -> usize { self.index.document_count() }

    pub fn rating_for(&self, id: DocId) -> Result<i32, SearchError> { self.index.rating_for(id) }
}

/// Smallest id at or after `start` that `taken` rejects.
fn first_free_id(start: usize, taken: impl Fn(DocId) -> bool) -> Result<DocId, SearchError> {
    let mut id = DocId::try_from(start).map_err(|_| SearchError::IdSpaceExhausted)?;
    while taken(id) {
        id = id.checked_add(1).ok_or(SearchError::IdSpaceExhausted)?;
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_id_search_stops_at_the_id_limit() {
        assert_eq!(first_free_id(3, |id| id < 5), Ok(5));
        assert_eq!(first_free_id(DocId::MAX as usize, |_| false), Ok(DocId::MAX));
        assert_eq!(first_free_id(DocId::MAX as usize, |_| true), Err(SearchError::IdSpaceExhausted));
        assert_eq!(first_free_id(DocId::MAX as usize + 1, |_| false), Err(SearchError::IdSpaceExhausted));
    }

    #[test]
    fn ingest_after_max_id_uses_low_ids() {
        let mut server = SearchServer::new("");
        server.add_document(DocId::MAX, "cat", &[]).unwrap();
        server.ingest(vec![CorpusDocument { text: "dog".into(), ratings: vec![] }]).unwrap();
        assert!(server.document_frequency_for("dog").contains_key(&1));
    }

    #[test]
    fn stop_words_are_locked_after_first_document() {
        let mut server = SearchServer::new("");
        server.set_stop_words("the").unwrap();
        server.add_document(0, "the cat", &[]).unwrap();
        assert_eq!(server.set_stop_words("a"), Err(SearchError::StopWordsAfterIngestion));
        assert!(server.document_frequency_for("the").is_empty());
    }

    #[test]
    fn ingest_numbers_documents_in_order() {
        let mut server = SearchServer::new("");
        let docs = vec![
            CorpusDocument { text: "cat".into(), ratings: vec![2] },
            CorpusDocument { text: "dog".into(), ratings: vec![] },
        ];
        assert_eq!(server.ingest(docs).unwrap(), 2);
        assert_eq!(server.rating_for(0), Ok(2));
        assert_eq!(server.rating_for(1), Ok(0));
        assert!(server.document_frequency_for("dog").contains_key(&1));
    }

    #[test]
    fn ingest_skips_ids_taken_by_caller() {
        let mut server = SearchServer::new("");
        server.add_document(1, "cat", &[]).unwrap();
        server.ingest(vec![
            CorpusDocument { text: "dog".into(), ratings: vec![] },
            CorpusDocument { text: "bird".into(), ratings: vec![] },
        ]).unwrap();
        assert!(server.document_frequency_for("dog").contains_key(&2));
        assert!(server.document_frequency_for("bird").contains_key(&3));
    }

    #[test]
    fn custom_cap_applies() {
        let mut server = SearchServer::with_config("", SearchConfig::new(1).unwrap());
        server.add_document(0, "cat", &[]).unwrap();
        server.add_document(1, "cat dog", &[]).unwrap();
        server.add_document(2, "bird", &[]).unwrap();
        let found = server.find_top_documents("cat").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 0);
    }
}
