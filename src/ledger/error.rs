use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("quantity must be a positive number of shares, got {quantity}")]
    InvalidQuantity { quantity: i64 },

    #[error("cannot sell {requested} shares of {ticker}, only {held} held")]
    InsufficientShares {
        ticker: String,
        requested: i64,
        held: i64,
    },

    #[error("no open position for {ticker}")]
    NoSuchPosition { ticker: String },

    #[error("position store not found at '{path}'")]
    StoreNotFound { path: String },

    #[error("invalid position row {row}: {reason}")]
    InvalidRow { row: usize, reason: String },

    #[error("failed to access position store")]
    Csv(#[from] csv::Error),

    #[error("failed to access ledger storage")]
    Io(#[from] std::io::Error),
}
