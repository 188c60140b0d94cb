use derive_getters::Getters;
use derive_new::new;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize, Getters, new)]
pub struct YahooChartDto {
    chart: YahooChartBodyDto,
}

impl YahooChartDto {
    pub fn first_entry(&self) -> Option<&YahooChartEntryDto> {
        self.chart.result.as_ref()?.first()
    }
}

#[derive(Debug, Deserialize, Getters, new)]
pub struct YahooChartBodyDto {
    result: Option<Vec<YahooChartEntryDto>>,
    error: Option<Value>,
}

#[derive(Debug, Deserialize, Getters, new)]
pub struct YahooChartEntryDto {
    meta: YahooMetaDto,
    indicators: YahooIndicatorsDto,
}

impl YahooChartEntryDto {
    pub fn last_close(&self) -> Option<f64> {
        self.closes()
            .and_then(|closes| closes.iter().rev().find_map(|c| *c))
            .or(self.meta.regular_market_price)
    }

    pub fn first_close(&self) -> Option<f64> {
        self.closes()?.iter().find_map(|c| *c)
    }

    fn closes(&self) -> Option<&Vec<Option<f64>>> {
        self.indicators.quote.first()?.close.as_ref()
    }
}

#[derive(Debug, Deserialize, Getters, new)]
#[serde(rename_all = "camelCase")]
pub struct YahooMetaDto {
    symbol: String,
    currency: Option<String>,
    regular_market_price: Option<f64>,
}

#[derive(Debug, Deserialize, Getters, new)]
pub struct YahooIndicatorsDto {
    quote: Vec<YahooQuoteDto>,
}

#[derive(Debug, Deserialize, Getters, new)]
pub struct YahooQuoteDto {
    close: Option<Vec<Option<f64>>>,
}
