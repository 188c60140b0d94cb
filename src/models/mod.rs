pub mod position;
pub mod transaction;
pub mod valuation;

pub use position::Position;
pub use transaction::{TransactionRecord, TransactionType};
pub use valuation::Valuation;
