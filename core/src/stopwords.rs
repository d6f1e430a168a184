use crate::tokenizer::tokenize;
use std::collections::HashSet;

/// Words ignored both when indexing documents and when parsing queries.
#[derive(Debug, Default, Clone)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    pub fn new() -> Self { Self::default() }

    /// Add every word of `text` to the set. Already known words are ignored.
    pub fn configure(&mut self, text: &str) {
        for word in tokenize(text) {
            self.words.insert(word.to_string());
        }
    }

    pub fn contains(&self, word: &str) -> bool { self.words.contains(word) }

    /// Keep the tokens that are not stop words, in their original order.
    pub fn filter<'a, I>(&self, tokens: I) -> Vec<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        tokens.into_iter().filter(|t| !self.contains(t)).collect()
    }

    /// Tokenize `text` and drop stop words in one pass.
    pub fn split_no_stop<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.filter(tokenize(text))
    }
}
