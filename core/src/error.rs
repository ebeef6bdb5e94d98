use crate::DocId;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Documents must be added with ids 0, 1, 2, ... in order.
    #[error("invalid document id {got}: expected {expected}")]
    InvalidDocumentId { expected: DocId, got: DocId },
    /// A query token that is left empty once its `-` prefix is removed.
    #[error("malformed query token {0:?}")]
    MalformedQueryToken(String),
    /// The document counter would overflow `DocId`.
    #[error("too many documents: at most {} can be indexed", DocId::MAX)]
    TooManyDocuments,
}
