use derive_getters::Getters;
use derive_new::new;
use serde::Deserialize;

#[derive(Debug, Deserialize, Getters, new)]
pub struct PolygonLastTradeDto {
    status: String,
    symbol: String,
    last: PolygonLastDto,
}

#[derive(Debug, Deserialize, Getters, new)]
pub struct PolygonLastDto {
    price: f64,
    size: Option<i64>,
    timestamp: Option<i64>,
}

#[derive(Debug, Deserialize, Getters, new)]
#[serde(rename_all = "camelCase")]
pub struct PolygonDailyCloseDto {
    status: String,
    symbol: String,
    from: String,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: Option<f64>,
}
