use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use csv::{ReaderBuilder, WriterBuilder};

use crate::models::Position;

use super::error::LedgerError;

const HEADER: [&str; 3] = ["ticker", "quantity", "acquisition_date"];
const DATE_FORMAT: &str = "%Y-%m-%d";

pub struct PositionStore {
    path: PathBuf,
}

impl PositionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Vec<Position>, LedgerError> {
        if !self.path.exists() {
            return Err(LedgerError::StoreNotFound {
                path: self.path.display().to_string(),
            });
        }

        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .from_path(&self.path)?;

        let mut positions = Vec::new();
        for (row_idx, record) in reader.records().enumerate() {
            let rec = record?;

            // Header row is optional
            if row_idx == 0 && rec.get(0) == Some(HEADER[0]) {
                continue;
            }

            if rec.len() < 3 {
                return Err(LedgerError::InvalidRow {
                    row: row_idx + 1,
                    reason: format!("expected 3 columns, found {}", rec.len()),
                });
            }

            let ticker = rec[0].to_string();

            let quantity = rec[1].parse::<i64>().map_err(|_| LedgerError::InvalidRow {
                row: row_idx + 1,
                reason: format!("failed to parse quantity '{}'", &rec[1]),
            })?;

            let acquisition_date = NaiveDate::parse_from_str(&rec[2], DATE_FORMAT).map_err(
                |_| LedgerError::InvalidRow {
                    row: row_idx + 1,
                    reason: format!("failed to parse date '{}'", &rec[2]),
                },
            )?;

            positions.push(Position::new(ticker, quantity, acquisition_date));
        }

        Ok(positions)
    }

    // Full rewrite; not atomic, concurrent writers are not supported.
    pub fn save(&self, positions: &[Position]) -> Result<(), LedgerError> {
        let mut writer = WriterBuilder::new().from_path(&self.path)?;

        writer.write_record(HEADER)?;
        for position in positions {
            writer.write_record([
                position.ticker().clone(),
                position.quantity().to_string(),
                position.acquisition_date().format(DATE_FORMAT).to_string(),
            ])?;
        }
        writer.flush()?;

        Ok(())
    }
}
