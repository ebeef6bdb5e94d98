use crate::tokenizer::split_into_words;
use std::collections::HashSet;

/// Words discarded from documents at indexing time and from queries at parse time.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    pub fn new() -> Self { Self::default() }

    pub fn from_text(text: &str) -> Self {
        let mut stop_words = Self::new();
        stop_words.configure(text);
        stop_words
    }

    /// Add every word of `text` to the set. Re-adding a word is a no-op.
    pub fn configure(&mut self, text: &str) {
        for word in split_into_words(text) {
            self.words.insert(word.to_string());
        }
    }

    pub fn is_stop(&self, word: &str) -> bool { self.words.contains(word) }

    pub fn len(&self) -> usize { self.words.len() }

    pub fn is_empty(&self) -> bool { self.words.is_empty() }

    /// Words of `text` that are neither empty nor stop words, in order.
    pub fn filter<'a>(&self, text: &'a str) -> Vec<&'a str> {
        split_into_words(text)
            .into_iter()
            .filter(|w| !w.is_empty() && !self.is_stop(w))
            .collect()
    }
}
