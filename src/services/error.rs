use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("credential file '{path}' is missing or empty")]
    MissingCredential { path: String },

    #[error("no price available for {ticker}")]
    PriceUnavailable { ticker: String },
}
