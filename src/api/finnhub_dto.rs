use derive_getters::Getters;
use derive_new::new;
use serde::Deserialize;

#[derive(Debug, Deserialize, Getters, new)]
pub struct FinnhubQuoteDto {
    #[serde(rename = "c")]
    current: f64,
    #[serde(rename = "h")]
    high: f64,
    #[serde(rename = "l")]
    low: f64,
    #[serde(rename = "o")]
    open: f64,
    #[serde(rename = "pc")]
    previous_close: f64,
    #[serde(rename = "t")]
    timestamp: i64,
}

#[derive(Debug, Deserialize, Getters, new)]
pub struct FinnhubCandleDto {
    #[serde(rename = "c", default)]
    close: Vec<f64>,
    #[serde(rename = "t", default)]
    timestamp: Vec<i64>,
    #[serde(rename = "s")]
    status: String,
}

impl FinnhubCandleDto {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
