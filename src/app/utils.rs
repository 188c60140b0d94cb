use anyhow::{Context, Result};
use regex::Regex;
use rust_decimal::Decimal;

pub fn is_valid_ticker(symbol: &str) -> bool {
    let pattern = Regex::new(r"^[A-Z][A-Z0-9.\-]{0,9}$").expect("Invalid ticker pattern");
    pattern.is_match(symbol)
}

pub fn parse_amount(field: &str) -> Result<i64> {
    field
        .trim()
        .parse::<i64>()
        .with_context(|| format!("Failed to parse amount '{}'", field.trim()))
}

pub fn format_price(price: &Option<Decimal>) -> String {
    match price {
        Some(price) => format!("{:.2}", price),
        None => String::from("n/a"),
    }
}
