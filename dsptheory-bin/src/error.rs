use dsptheory_lib::error::ChainError;
use dsptheory_wiki::FetchError;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Chain(#[from] ChainError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("failed to serialize item listing: {0}")]
    Json(#[from] serde_json::Error),
    #[error("could not determine a home directory for the item cache")]
    NoHome,
}
