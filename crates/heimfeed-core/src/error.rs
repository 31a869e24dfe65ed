use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Event decoding failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid dashboard host pattern: {0}")]
    Pattern(#[from] regex::Error),
    #[error("Invalid field path: {0:?}")]
    FieldPath(String),
}

pub type Result<T> = std::result::Result<T, FeedError>;
