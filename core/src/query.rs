use crate::stopwords::StopWords;
use std::collections::BTreeSet;

/// A parsed query: terms that add to relevance and terms that exclude documents.
///
/// The sets are ordered so that scores are always accumulated in the same order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Query {
    pub plus: BTreeSet<String>,
    pub minus: BTreeSet<String>,
}

impl Query {
    /// Tokenize `raw`, drop stop words, then sort the rest into plus and minus terms.
    ///
    /// A leading `-` marks a minus term and is stripped once. A bare `-` is dropped.
    /// A term that is both plus and minus is kept as minus only.
    pub fn parse(raw: &str, stop_words: &StopWords) -> Self {
        let mut query = Query::default();
        for word in stop_words.split_no_stop(raw) {
            match word.strip_prefix('-') {
                Some("") => tracing::trace!("ignoring bare minus in query"),
                Some(term) => {
                    query.minus.insert(term.to_string());
                }
                None => {
                    query.plus.insert(word.to_string());
                }
            }
        }
        let minus = &query.minus;
        query.plus.retain(|term| !minus.contains(term));
        query
    }

    pub fn is_empty(&self) -> bool { self.plus.is_empty() && self.minus.is_empty() }
}
