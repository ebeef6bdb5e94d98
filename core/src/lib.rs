pub mod engine;
pub mod error;
pub mod index;
pub mod query;
pub mod ranker;
pub mod stopwords;
pub mod tokenizer;

pub use engine::{EngineConfig, SearchEngine};
pub use error::EngineError;
pub use index::{InvertedIndex, PostingList};
pub use query::Query;
pub use ranker::Document;
pub use stopwords::StopWords;

pub type DocId = u32;

/// Number of results returned by [`SearchEngine::search`] unless configured otherwise.
pub const MAX_RESULT_DOCUMENT_COUNT: usize = 5;
