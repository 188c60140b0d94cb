pub mod error;
pub mod log;
pub mod service;
pub mod store;

pub use error::LedgerError;
pub use log::TransactionLog;
pub use service::LedgerService;
pub use store::PositionStore;
