use anyhow::Result;
use chrono::NaiveDate;
use reqwest::Client;

use super::{
    polygon_dto::{PolygonDailyCloseDto, PolygonLastTradeDto},
    utils::{make_request, parse_response_object},
};

const BASE_URL: &str = "https://api.polygon.io/v1";

pub async fn get_last_trade(
    symbol: &str,
    client: &Client,
    api_key: &str,
) -> Result<PolygonLastTradeDto> {
    let params = format!("apiKey={}", api_key);
    let endpoint = format!("last/stocks/{}", symbol);
    let res = make_request(client, BASE_URL, &endpoint, &params).await?;
    parse_response_object::<PolygonLastTradeDto>(
        res,
        &format!("Failed to parse Polygon last trade for {}", symbol),
    )
    .await
}

pub async fn get_daily_close(
    symbol: &str,
    date: NaiveDate,
    client: &Client,
    api_key: &str,
) -> Result<PolygonDailyCloseDto> {
    let params = format!("apiKey={}", api_key);
    let endpoint = format!("open-close/{}/{}", symbol, date.format("%Y-%m-%d"));
    let res = make_request(client, BASE_URL, &endpoint, &params).await?;
    parse_response_object::<PolygonDailyCloseDto>(
        res,
        &format!("Failed to parse Polygon daily close for {} on {}", symbol, date),
    )
    .await
}
