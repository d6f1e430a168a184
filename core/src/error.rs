use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    /// IDF was requested for a term that never made it into the index.
    #[error("term `{0}` is not present in the index")]
    UnknownTerm(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SearchError>;
