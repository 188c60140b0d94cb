use anyhow::{Context, Result};
use chrono::NaiveDate;
use reqwest::Client;
use rust_decimal::{Decimal, prelude::FromPrimitive};

use crate::api::{ApiProvider, finnhub, polygon, yahoo};

// Lookup failures collapse to a warning plus `None`, so a batch valuation
// never aborts on a single ticker.
pub struct PriceService {
    client: Client,
    provider: ApiProvider,
    api_key: Option<String>,
}

impl PriceService {
    pub fn new(provider: ApiProvider, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            provider,
            api_key,
        }
    }

    pub fn provider(&self) -> ApiProvider {
        self.provider
    }

    pub fn set_provider(&mut self, provider: ApiProvider) {
        self.provider = provider;
    }

    pub async fn latest_close(&self, symbol: &str) -> Option<Decimal> {
        match self.fetch_latest(symbol).await {
            Ok(price) => Some(price),
            Err(err) => {
                eprintln!(
                    "Warning: Failed to fetch latest price for '{}': {:#}",
                    symbol, err
                );
                None
            }
        }
    }

    pub async fn close_on_date(&self, symbol: &str, date: NaiveDate) -> Option<Decimal> {
        match self.fetch_on_date(symbol, date).await {
            Ok(price) => Some(price),
            Err(err) => {
                eprintln!(
                    "Warning: Failed to fetch price for '{}' on {}: {:#}",
                    symbol, date, err
                );
                None
            }
        }
    }

    async fn fetch_latest(&self, symbol: &str) -> Result<Decimal> {
        match self.provider {
            ApiProvider::Yahoo => {
                let chart = yahoo::get_chart(symbol, &self.client).await?;
                let close = chart
                    .first_entry()
                    .and_then(|entry| entry.last_close())
                    .with_context(|| format!("No chart data for {}", symbol))?;
                to_decimal(close, symbol)
            }
            ApiProvider::Finnhub => {
                let quote = finnhub::get_quote(symbol, &self.client, self.key()?).await?;
                if *quote.current() == 0.0 {
                    anyhow::bail!("No quote data for {}", symbol);
                }
                to_decimal(*quote.current(), symbol)
            }
            ApiProvider::Polygon => {
                let trade = polygon::get_last_trade(symbol, &self.client, self.key()?).await?;
                to_decimal(*trade.last().price(), symbol)
            }
        }
    }

    async fn fetch_on_date(&self, symbol: &str, date: NaiveDate) -> Result<Decimal> {
        match self.provider {
            ApiProvider::Yahoo => {
                let chart = yahoo::get_chart_on_date(symbol, date, &self.client).await?;
                let close = match chart.first_entry().and_then(|entry| entry.first_close()) {
                    Some(close) => close,
                    None => {
                        // No bar on that date; fall back to the nearest
                        // recent trading day.
                        let recent = yahoo::get_recent_chart(symbol, &self.client).await?;
                        recent
                            .first_entry()
                            .and_then(|entry| entry.last_close())
                            .with_context(|| format!("No chart data for {}", symbol))?
                    }
                };
                to_decimal(close, symbol)
            }
            ApiProvider::Finnhub => {
                let candle = finnhub::get_candle(symbol, date, &self.client, self.key()?).await?;
                if !candle.is_ok() {
                    anyhow::bail!("No candle data for {} on {}", symbol, date);
                }
                let close = candle
                    .close()
                    .first()
                    .with_context(|| format!("No candle data for {} on {}", symbol, date))?;
                to_decimal(*close, symbol)
            }
            ApiProvider::Polygon => {
                let daily = polygon::get_daily_close(symbol, date, &self.client, self.key()?).await?;
                to_decimal(*daily.close(), symbol)
            }
        }
    }

    fn key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .with_context(|| format!("{} requires an API credential", self.provider.to_str()))
    }
}

fn to_decimal(price: f64, symbol: &str) -> Result<Decimal> {
    Decimal::from_f64(price).with_context(|| format!("Failed to convert price for {}", symbol))
}
