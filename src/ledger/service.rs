use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;

use crate::models::{Position, TransactionRecord, TransactionType};

use super::{error::LedgerError, log::TransactionLog, store::PositionStore};

pub struct LedgerService {
    store: PositionStore,
    log: TransactionLog,
}

impl LedgerService {
    pub fn new(store_path: impl Into<PathBuf>, log_path: impl Into<PathBuf>) -> Self {
        Self {
            store: PositionStore::new(store_path),
            log: TransactionLog::new(log_path),
        }
    }

    pub fn buy(
        &self,
        ticker: &str,
        quantity: i64,
        execution_price: Decimal,
        today: NaiveDate,
    ) -> Result<Position, LedgerError> {
        if quantity <= 0 {
            return Err(LedgerError::InvalidQuantity { quantity });
        }

        // Missing store reads as an empty ledger on the buy side
        let mut positions = match self.store.load() {
            Ok(positions) => positions,
            Err(LedgerError::StoreNotFound { .. }) => Vec::new(),
            Err(err) => return Err(err),
        };

        let updated = match positions.iter_mut().find(|p| p.ticker() == ticker) {
            Some(position) => {
                // Keep the original acquisition date
                position.add_shares(quantity);
                position.clone()
            }
            None => {
                let position = Position::new(ticker.to_string(), quantity, today);
                positions.push(position.clone());
                position
            }
        };

        self.store.save(&positions)?;
        self.record(TransactionType::Buy, ticker, quantity, execution_price);

        Ok(updated)
    }

    /// Selling the full held quantity drops the row and returns `None`.
    pub fn sell(
        &self,
        ticker: &str,
        quantity: i64,
        execution_price: Decimal,
    ) -> Result<Option<Position>, LedgerError> {
        if quantity <= 0 {
            return Err(LedgerError::InvalidQuantity { quantity });
        }

        let mut positions = match self.store.load() {
            Ok(positions) => positions,
            Err(LedgerError::StoreNotFound { .. }) => {
                return Err(LedgerError::NoSuchPosition {
                    ticker: ticker.to_string(),
                });
            }
            Err(err) => return Err(err),
        };

        let held = positions
            .iter()
            .find(|p| p.ticker() == ticker)
            .map(|p| *p.quantity())
            .unwrap_or(0);

        if held < quantity {
            return Err(LedgerError::InsufficientShares {
                ticker: ticker.to_string(),
                requested: quantity,
                held,
            });
        }

        let mut remaining = None;
        for position in positions.iter_mut() {
            if position.ticker() == ticker {
                position.remove_shares(quantity);
                if !position.is_closed() {
                    remaining = Some(position.clone());
                }
            }
        }
        positions.retain(|p| !(p.ticker() == ticker && p.is_closed()));

        self.store.save(&positions)?;
        self.record(TransactionType::Sell, ticker, quantity, execution_price);

        Ok(remaining)
    }

    /// Positions with a non-zero quantity, in file order.
    pub fn open_positions(&self) -> Result<impl Iterator<Item = Position>, LedgerError> {
        let positions = self.store.load()?;
        Ok(positions.into_iter().filter(|p| !p.is_closed()))
    }

    pub fn open_gain(
        position: &Position,
        purchase_price: Option<Decimal>,
        current_price: Option<Decimal>,
    ) -> Option<Decimal> {
        let purchase = purchase_price?;
        let current = current_price?;
        Some((current - purchase) * Decimal::from(*position.quantity()))
    }

    // Log append failures never fail the trade that produced them.
    fn record(&self, transaction_type: TransactionType, ticker: &str, quantity: i64, price: Decimal) {
        let record = TransactionRecord::new(
            Local::now(),
            transaction_type,
            ticker.to_string(),
            quantity,
            price,
        );

        if let Err(err) = self.log.append(&record) {
            eprintln!("Warning: Failed to write transaction log: {}", err);
        }
    }
}
