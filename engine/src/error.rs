use thiserror::Error;

pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors surfaced by the engine.
///
/// Tokenization and scoring are pure; every failure originates at an
/// ingestion or store boundary. A query term absent from the index is not an
/// error, and neither is building from an empty corpus.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The backing store failed a read or write.
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),

    /// A store entry could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Document or query content rejected at the ingestion boundary.
    #[error("malformed input: {0}")]
    MalformedInput(String),
}

impl From<sled::Error> for EngineError {
    fn from(e: sled::Error) -> Self {
        EngineError::StoreUnavailable(e.to_string())
    }
}

impl From<bincode::Error> for EngineError {
    fn from(e: bincode::Error) -> Self {
        EngineError::Serialization(e.to_string())
    }
}

impl From<serde_json::Error> for EngineError {
    fn from(e: serde_json::Error) -> Self {
        EngineError::Serialization(e.to_string())
    }
}
