use crate::error::EngineError;
use crate::stopwords::StopWords;
use crate::DocId;
use std::collections::{BTreeMap, HashMap};

/// Document id -> term frequency for one term.
pub type PostingList = BTreeMap<DocId, f64>;

#[derive(Debug, Default)]
pub struct InvertedIndex {
    postings: HashMap<String, PostingList>,
    num_docs: u32,
}

impl InvertedIndex {
    pub fn new() -> Self { Self::default() }

    /// Index `text` under `doc_id`.
    ///
    /// Each non-stop word adds `1 / n` to its posting, where `n` is the number of
    /// non-stop words in the document, so a word seen `k` times ends up with
    /// TF `k / n`. The id is not checked: indexing the same id twice merges
    /// the postings. Fails once `u32::MAX` documents have been counted.
    pub fn add_document(&mut self, doc_id: DocId, text: &str, stop_words: &StopWords) -> Result<(), EngineError> {
        self.num_docs = self.num_docs.checked_add(1).ok_or(EngineError::TooManyDocuments)?;
        let words = stop_words.filter(text);
        if words.is_empty() {
            tracing::debug!(doc_id, "document has no indexable words");
            return Ok(());
        }
        let inv_len = 1.0 / words.len() as f64;
        for word in &words {
            *self
                .postings
                .entry((*word).to_string())
                .or_default()
                .entry(doc_id)
                .or_insert(0.0) += inv_len;
        }
        tracing::debug!(doc_id, num_words = words.len(), num_terms = self.postings.len(), "indexed document");
        Ok(())
    }

    pub fn postings_for(&self, term: &str) -> Option<&PostingList> { self.postings.get(term) }

    /// ln(N / df), or `None` for a term that is not indexed.
    pub fn idf(&self, term: &str) -> Option<f64> {
        let postings = self.postings.get(term)?;
        Some((self.num_docs as f64 / postings.len() as f64).ln())
    }

    pub fn document_count(&self) -> u32 { self.num_docs }

    pub fn term_count(&self) -> usize { self.postings.len() }
}
