use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};
use reqwest::Client;

use super::{
    utils::{make_request, parse_response_object},
    yahoo_dto::YahooChartDto,
};

const BASE_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";

pub async fn get_chart(symbol: &str, client: &Client) -> Result<YahooChartDto> {
    let params = String::from("interval=1d&range=1d");
    let res = make_request(client, BASE_URL, symbol, &params).await?;
    parse_response_object::<YahooChartDto>(
        res,
        &format!("Failed to parse Yahoo chart for {}", symbol),
    )
    .await
}

pub async fn get_chart_on_date(
    symbol: &str,
    date: NaiveDate,
    client: &Client,
) -> Result<YahooChartDto> {
    let period1 = date.and_time(NaiveTime::MIN).and_utc().timestamp();
    let period2 = period1 + 86_400;
    let params = format!("interval=1d&period1={}&period2={}", period1, period2);
    let res = make_request(client, BASE_URL, symbol, &params).await?;
    parse_response_object::<YahooChartDto>(
        res,
        &format!("Failed to parse Yahoo chart for {} on {}", symbol, date),
    )
    .await
}

// Fallback when the requested date has no bar (weekend, holiday)
pub async fn get_recent_chart(symbol: &str, client: &Client) -> Result<YahooChartDto> {
    let params = String::from("interval=1d&range=5d");
    let res = make_request(client, BASE_URL, symbol, &params).await?;
    parse_response_object::<YahooChartDto>(
        res,
        &format!("Failed to parse Yahoo chart for {}", symbol),
    )
    .await
}
