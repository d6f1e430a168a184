use crate::error::{Result, SearchError};
use std::collections::HashMap;

pub type DocId = u32;

/// What a call to [`InvertedIndex::add_document`] contributed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The document had `words` non-stop tokens, all folded into the index.
    Indexed { words: usize },
    /// Nothing survived stop-word filtering; the document is counted but has no terms.
    Empty,
}

/// Presence-checked view of one term's postings. Only obtainable for terms in the index,
/// so its IDF is always finite.
#[derive(Debug, Clone, Copy)]
pub struct TermPostings<'a> {
    frequencies: &'a HashMap<DocId, f64>,
    document_count: usize,
}

impl<'a> TermPostings<'a> {
    pub fn idf(&self) -> f64 {
        (self.document_count as f64 / self.frequencies.len() as f64).ln()
    }

    pub fn iter(&self) -> impl Iterator<Item = (DocId, f64)> + 'a {
        let frequencies: &'a HashMap<DocId, f64> = self.frequencies;
        frequencies.iter().map(|(&doc_id, &tf)| (doc_id, tf))
    }
}

#[derive(Debug, Default, Clone)]
pub struct InvertedIndex {
    terms: HashMap<String, HashMap<DocId, f64>>, // term -> doc -> tf
    document_count: usize,
}

impl InvertedIndex {
    pub fn new() -> Self { Self::default() }

    /// Fold an already stop-word-filtered document into the index.
    ///
    /// Every occurrence adds `1 / words.len()` to the term's frequency for `doc_id`, so
    /// the frequencies of one document sum to 1. The document count grows even when
    /// `words` is empty.
    pub fn add_document(&mut self, doc_id: DocId, words: &[&str]) -> AddOutcome {
        self.document_count += 1;
        if words.is_empty() {
            return AddOutcome::Empty;
        }
        let tf = 1.0 / words.len() as f64;
        for &word in words {
            *self
                .terms
                .entry(word.to_string())
                .or_default()
                .entry(doc_id)
                .or_insert(0.0) += tf;
        }
        AddOutcome::Indexed { words: words.len() }
    }

    pub fn document_count(&self) -> usize { self.document_count }

    /// Number of distinct terms indexed.
    pub fn term_count(&self) -> usize { self.terms.len() }

    pub fn contains_term(&self, term: &str) -> bool { self.terms.contains_key(term) }

    pub fn frequency_map(&self, term: &str) -> Option<&HashMap<DocId, f64>> {
        self.terms.get(term)
    }

    pub fn postings(&self, term: &str) -> Option<TermPostings<'_>> {
        self.terms.get(term).map(|frequencies| TermPostings {
            frequencies,
            document_count: self.document_count,
        })
    }

    /// `ln(N / df)` for a term in the index. Unknown terms are an error rather than a
    /// non-finite value.
    pub fn inverse_document_frequency(&self, term: &str) -> Result<f64> {
        self.postings(term)
            .map(|p| p.idf())
            .ok_or_else(|| SearchError::UnknownTerm(term.to_string()))
    }

    /// Sum of the frequencies recorded for `doc_id` across all terms.
    pub fn total_frequency(&self, doc_id: DocId) -> f64 {
        self.terms.values().filter_map(|docs| docs.get(&doc_id)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_word_accumulates_tf() {
        let mut idx = InvertedIndex::new();
        let outcome = idx.add_document(3, &["cat", "dog", "cat", "bird"]);
        assert_eq!(outcome, AddOutcome::Indexed { words: 4 });
        assert_eq!(idx.frequency_map("cat").unwrap()[&3], 0.5);
        assert_eq!(idx.frequency_map("dog").unwrap()[&3], 0.25);
        assert!((idx.total_frequency(3) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn empty_document_is_counted_but_adds_no_terms() {
        let mut idx = InvertedIndex::new();
        assert_eq!(idx.add_document(0, &[]), AddOutcome::Empty);
        assert_eq!(idx.document_count(), 1);
        assert_eq!(idx.term_count(), 0);
        assert_eq!(idx.total_frequency(0), 0.0);
    }

    #[test]
    fn idf_uses_natural_log() {
        let mut idx = InvertedIndex::new();
        idx.add_document(0, &["cat"]);
        idx.add_document(1, &["dog"]);
        idx.add_document(2, &["dog", "cat"]);
        idx.add_document(3, &["fish"]);
        let idf = idx.inverse_document_frequency("cat").unwrap();
        assert!((idf - 2.0f64.ln()).abs() < 1e-12);
        let idf = idx.inverse_document_frequency("fish").unwrap();
        assert!((idf - 4.0f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn idf_of_unknown_term_is_an_error() {
        let mut idx = InvertedIndex::new();
        idx.add_document(0, &["cat"]);
        let err = idx.inverse_document_frequency("dog").unwrap_err();
        assert!(matches!(err, SearchError::UnknownTerm(t) if t == "dog"));
        assert!(idx.postings("dog").is_none());
        assert!(idx.frequency_map("dog").is_none());
    }

    #[test]
    fn postings_list_each_document_once() {
        let mut idx = InvertedIndex::new();
        idx.add_document(0, &["cat", "cat"]);
        idx.add_document(7, &["cat"]);
        let p = idx.postings("cat").unwrap();
        let mut docs: Vec<(DocId, f64)> = p.iter().collect();
        docs.sort_by_key(|&(doc_id, _)| doc_id);
        assert_eq!(docs, vec![(0, 1.0), (7, 1.0)]);
        assert_eq!(p.idf(), 0.0);
    }
}
