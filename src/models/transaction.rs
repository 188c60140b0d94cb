use anyhow::Result;
use chrono::{DateTime, Local};
use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;

#[derive(Clone, Debug, Getters, new)]
pub struct TransactionRecord {
    timestamp: DateTime<Local>,
    transaction_type: TransactionType,
    ticker: String,
    quantity: i64,
    price: Decimal,
}

impl TransactionRecord {
    pub fn to_log_line(&self) -> String {
        format!(
            "{} - {} {} of {} at {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.transaction_type.to_str(),
            self.quantity,
            self.ticker,
            self.price
        )
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TransactionType {
    Buy,
    Sell,
}

impl TransactionType {
    pub fn parse_str(s: &str) -> Result<TransactionType> {
        match s {
            "Buy" => Ok(TransactionType::Buy),
            "Sell" => Ok(TransactionType::Sell),
            _ => Err(anyhow::anyhow!("Unknown transaction type")),
        }
    }

    pub fn to_str(&self) -> &str {
        match self {
            TransactionType::Buy => "Buy",
            TransactionType::Sell => "Sell",
        }
    }
}
