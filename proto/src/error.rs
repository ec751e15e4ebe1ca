use thiserror::Error;

/// Failure to read or write a graph document.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid graph document: {0}")]
    Json(#[from] serde_json::Error),
}
