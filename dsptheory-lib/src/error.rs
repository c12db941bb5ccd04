use std::io;
use thiserror::Error;

pub type ChainResult<T> = Result<T, ChainError>;

#[derive(Error, Debug)]
pub enum ChainError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("cache index is not valid JSON: {0}")]
    BadCache(serde_json::Error),

    #[error("failed to serialize item for caching: {0}")]
    CacheWrite(serde_json::Error),

    #[error("item `{name}` could not be resolved from cache or fetch source")]
    Lookup {
        name: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("item listing could not be fetched")]
    Listing(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("item `{0}` has no category, cannot decide whether it is basic")]
    Unclassified(String),
}
