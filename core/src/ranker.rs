use crate::config::SearchConfig;
use crate::index::{DocId, InvertedIndex};
use crate::query::Query;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredDocument {
    pub id: DocId,
    pub relevance: f64,
}

/// Scores documents with TF-IDF and keeps the best `max_results`.
#[derive(Debug, Clone)]
pub struct Ranker {
    max_results: usize,
}

impl Ranker {
    pub fn new(config: &SearchConfig) -> Self {
        Self { max_results: config.max_results }
    }

    /// Every document that matches a plus term and contains no minus term, unsorted.
    pub fn find_all_documents(&self, index: &InvertedIndex, query: &Query) -> Vec<ScoredDocument> {
        let mut scores: HashMap<DocId, f64> = HashMap::new();
        for term in &query.plus {
            let Some(postings) = index.postings(term) else { continue };
            let idf = postings.idf();
            for (doc_id, tf) in postings.iter() {
                *scores.entry(doc_id).or_insert(0.0) += tf * idf;
            }
        }
        for term in &query.minus {
            let Some(postings) = index.postings(term) else { continue };
            for (doc_id, _) in postings.iter() {
                scores.remove(&doc_id);
            }
        }
        scores
            .into_iter()
            .map(|(id, relevance)| ScoredDocument { id, relevance })
            .collect()
    }

    /// Highest relevance first; equal scores ordered by ascending document id.
    pub fn find_top_documents(&self, index: &InvertedIndex, query: &Query) -> Vec<ScoredDocument> {
        let mut matched = self.find_all_documents(index, query);
        let total_hits = matched.len();
        matched.sort_by(by_relevance);
        matched.truncate(self.max_results);
        tracing::debug!(
            plus = query.plus.len(),
            minus = query.minus.len(),
            total_hits,
            returned = matched.len(),
            "ranked query"
        );
        matched
    }
}

fn by_relevance(a: &ScoredDocument, b: &ScoredDocument) -> Ordering {
    b.relevance.total_cmp(&a.relevance).then(a.id.cmp(&b.id))
}
