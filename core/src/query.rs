use crate::error::EngineError;
use crate::stopwords::StopWords;
use crate::tokenizer::split_into_words;
use std::collections::BTreeSet;

/// A parsed query: words that score documents and words that exclude them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub plus: BTreeSet<String>,
    pub minus: BTreeSet<String>,
}

impl Query {
    /// Parse raw query text.
    ///
    /// A word prefixed with `-` is a minus word (one dash is stripped). Empty
    /// words and stop words are dropped; a lone `-` is rejected.
    pub fn parse(text: &str, stop_words: &StopWords) -> Result<Self, EngineError> {
        let mut query = Query::default();
        for word in split_into_words(text) {
            if word.is_empty() { continue; }
            let (term, is_minus) = match word.strip_prefix('-') {
                Some("") => return Err(EngineError::MalformedQueryToken(word.to_string())),
                Some(rest) => (rest, true),
                None => (word, false),
            };
            if stop_words.is_stop(term) { continue; }
            if is_minus {
                query.minus.insert(term.to_string());
            } else {
                query.plus.insert(term.to_string());
            }
        }
        Ok(query)
    }

    pub fn is_empty(&self) -> bool { self.plus.is_empty() && self.minus.is_empty() }
}
