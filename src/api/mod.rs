pub mod finnhub;
pub mod finnhub_dto;
pub mod polygon;
pub mod polygon_dto;
pub mod utils;
pub mod yahoo;
pub mod yahoo_dto;

use clap::ValueEnum;
use strum_macros::EnumIter;

#[derive(Clone, Copy, Debug, Eq, PartialEq, EnumIter, ValueEnum)]
pub enum ApiProvider {
    Yahoo,
    Finnhub,
    Polygon,
}

impl ApiProvider {
    pub fn to_str(&self) -> &str {
        match self {
            ApiProvider::Yahoo => "Yahoo Finance",
            ApiProvider::Finnhub => "Finnhub",
            ApiProvider::Polygon => "Polygon.io",
        }
    }

    pub fn requires_api_key(&self) -> bool {
        !matches!(self, ApiProvider::Yahoo)
    }
}
