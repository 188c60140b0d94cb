use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};
use reqwest::Client;

use super::{
    finnhub_dto::{FinnhubCandleDto, FinnhubQuoteDto},
    utils::{make_request, parse_response_object},
};

const BASE_URL: &str = "https://finnhub.io/api/v1";

pub async fn get_quote(symbol: &str, client: &Client, api_key: &str) -> Result<FinnhubQuoteDto> {
    let params = format!("symbol={}&token={}", symbol, api_key);
    let res = make_request(client, BASE_URL, "quote", &params).await?;
    parse_response_object::<FinnhubQuoteDto>(
        res,
        &format!("Failed to parse Finnhub quote for {}", symbol),
    )
    .await
}

pub async fn get_candle(
    symbol: &str,
    date: NaiveDate,
    client: &Client,
    api_key: &str,
) -> Result<FinnhubCandleDto> {
    let from = date.and_time(NaiveTime::MIN).and_utc().timestamp();
    let to = from + 86_400;
    let params = format!(
        "symbol={}&resolution=D&from={}&to={}&token={}",
        symbol, from, to, api_key
    );
    let res = make_request(client, BASE_URL, "stock/candle", &params).await?;
    parse_response_object::<FinnhubCandleDto>(
        res,
        &format!("Failed to parse Finnhub candle for {} on {}", symbol, date),
    )
    .await
}
