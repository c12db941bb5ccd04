use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("page is missing expected element `{0}`")]
    MissingElement(&'static str),

    #[error("could not parse `{0}` as an output quantity")]
    BadQuantity(String),
}
