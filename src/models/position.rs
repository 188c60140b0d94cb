use chrono::NaiveDate;
use derive_getters::Getters;
use derive_new::new;

#[derive(Clone, Debug, Eq, Getters, PartialEq, new)]
pub struct Position {
    ticker: String,
    quantity: i64,
    acquisition_date: NaiveDate,
}

impl Position {
    pub fn add_shares(&mut self, quantity: i64) {
        self.quantity += quantity;
    }

    pub fn remove_shares(&mut self, quantity: i64) {
        self.quantity -= quantity;
    }

    pub fn is_closed(&self) -> bool {
        self.quantity == 0
    }
}
