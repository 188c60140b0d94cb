use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;

use super::Position;

#[derive(Clone, Debug, Getters, new)]
pub struct Valuation {
    position: Position,
    purchase_price: Option<Decimal>,
    current_price: Option<Decimal>,
    open_gain: Option<Decimal>,
}
