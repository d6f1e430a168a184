use crate::config::SearchConfig;
use crate::error::Result;
use crate::index::{AddOutcome, DocId, InvertedIndex};
use crate::query::Query;
use crate::ranker::{Ranker, ScoredDocument};
use crate::stopwords::StopWords;
use std::collections::HashSet;

/// In-memory search engine: stop words, inverted index and ranker behind one API.
#[derive(Debug, Clone)]
pub struct SearchServer {
    stop_words: StopWords,
    index: InvertedIndex,
    ranker: Ranker,
    seen_ids: HashSet<DocId>,
}

impl Default for SearchServer {
    fn default() -> Self {
        Self {
            stop_words: StopWords::new(),
            index: InvertedIndex::new(),
            ranker: Ranker::new(&SearchConfig::default()),
            seen_ids: HashSet::new(),
        }
    }
}

impl SearchServer {
    pub fn new(config: SearchConfig) -> Result<Self> {
        config.validate()?;
        let ranker = Ranker::new(&config);
        Ok(Self { ranker, ..Self::default() })
    }

    /// Add stop words. Documents already indexed keep the terms they were indexed with.
    pub fn set_stop_words(&mut self, text: &str) {
        if self.index.document_count() > 0 {
            tracing::warn!(
                documents = self.index.document_count(),
                "stop words configured after indexing; existing documents are unaffected"
            );
        }
        self.stop_words.configure(text);
    }

    pub fn add_document(&mut self, doc_id: DocId, text: &str) -> AddOutcome {
        if !self.seen_ids.insert(doc_id) {
            tracing::warn!(doc_id, "document id reused; frequencies will accumulate");
        }
        let words = self.stop_words.split_no_stop(text);
        let outcome = self.index.add_document(doc_id, &words);
        match outcome {
            AddOutcome::Indexed { words } => tracing::debug!(doc_id, words, "indexed document"),
            AddOutcome::Empty => tracing::debug!(doc_id, "document has no indexable words"),
        }
        outcome
    }

    pub fn find_top_documents(&self, raw_query: &str) -> Vec<ScoredDocument> {
        let query = self.parse_query(raw_query);
        self.ranker.find_top_documents(&self.index, &query)
    }

    pub fn parse_query(&self, raw_query: &str) -> Query {
        Query::parse(raw_query, &self.stop_words)
    }

    pub fn document_count(&self) -> usize { self.index.document_count() }

    pub fn index(&self) -> &InvertedIndex { &self.index }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SearchError;

    #[test]
    fn rejects_zero_cap() {
        let err = SearchServer::new(SearchConfig::with_max_results(0)).unwrap_err();
        assert!(matches!(err, SearchError::InvalidConfig(_)));
    }

    #[test]
    fn late_stop_words_are_not_retroactive() {
        let mut server = SearchServer::default();
        server.add_document(0, "the cat");
        server.set_stop_words("the");
        assert!(server.index().contains_term("the"));
        server.add_document(1, "the dog");
        assert_eq!(server.index().frequency_map("the").unwrap().len(), 1);
        // the query side does see the new stop word
        assert!(server.find_top_documents("the").is_empty());
    }

    #[test]
    fn reused_id_accumulates() {
        let mut server = SearchServer::default();
        server.add_document(0, "cat");
        server.add_document(0, "cat dog");
        assert_eq!(server.document_count(), 2);
        assert_eq!(server.index().frequency_map("cat").unwrap()[&0], 1.5);
    }

    #[test]
    fn custom_cap_is_used() {
        let mut server = SearchServer::new(SearchConfig::with_max_results(2)).unwrap();
        for id in 0..4 {
            server.add_document(id, "cat");
        }
        server.add_document(4, "dog");
        assert_eq!(server.find_top_documents("cat").len(), 2);
    }
}
