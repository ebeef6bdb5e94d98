use crate::error::EngineError;
use crate::index::InvertedIndex;
use crate::query::Query;
use crate::ranker::{rank, top_k, Document};
use crate::stopwords::StopWords;
use crate::{DocId, MAX_RESULT_DOCUMENT_COUNT};

#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Upper bound on results returned by `search`. Zero is treated as one.
    pub max_results: usize,
}

impl Default for EngineConfig {
    fn default() -> Self { Self { max_results: MAX_RESULT_DOCUMENT_COUNT } }
}

/// Owns the stop words and the inverted index; documents are appended with
/// sequential ids and then queried.
#[derive(Debug, Default)]
pub struct SearchEngine {
    config: EngineConfig,
    stop_words: StopWords,
    index: InvertedIndex,
}

impl SearchEngine {
    pub fn new() -> Self { Self::default() }

    pub fn with_config(config: EngineConfig) -> Self {
        Self { config, ..Self::default() }
    }

    /// Build an engine from stop-word text and documents numbered from 0.
    pub fn from_corpus<I, S>(stop_words: &str, documents: I) -> Result<Self, EngineError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut engine = Self::new();
        engine.configure_stop_words(stop_words);
        for text in documents {
            engine.push_document(text.as_ref())?;
        }
        Ok(engine)
    }

    /// Stop words added here apply to documents indexed afterwards and to every query.
    pub fn configure_stop_words(&mut self, text: &str) {
        if self.index.document_count() > 0 {
            tracing::warn!(num_docs = self.index.document_count(), "stop words changed after indexing; existing postings keep old stop words");
        }
        self.stop_words.configure(text);
    }

    /// Index `text` as document `doc_id`, which must be the next sequential id.
    pub fn add_document(&mut self, doc_id: DocId, text: &str) -> Result<(), EngineError> {
        let expected = self.index.document_count();
        if doc_id != expected {
            return Err(EngineError::InvalidDocumentId { expected, got: doc_id });
        }
        self.index.add_document(doc_id, text, &self.stop_words)
    }

    /// Index `text` under the next id and return that id.
    pub fn push_document(&mut self, text: &str) -> Result<DocId, EngineError> {
        let doc_id = self.index.document_count();
        self.index.add_document(doc_id, text, &self.stop_words)?;
        Ok(doc_id)
    }

    /// Every matching document with its relevance, in ascending id order.
    pub fn find_all_documents(&self, raw_query: &str) -> Result<Vec<Document>, EngineError> {
        let query = Query::parse(raw_query, &self.stop_words)?;
        Ok(rank(&query, &self.index))
    }

    /// The most relevant documents, best first, ties by ascending id.
    pub fn search(&self, raw_query: &str) -> Result<Vec<Document>, EngineError> {
        let matched = self.find_all_documents(raw_query)?;
        let total_hits = matched.len();
        let results = top_k(matched, self.config.max_results.max(1));
        tracing::debug!(query = raw_query, total_hits, returned = results.len(), "search");
        Ok(results)
    }

    pub fn document_count(&self) -> u32 { self.index.document_count() }

    pub fn index(&self) -> &InvertedIndex { &self.index }
}
