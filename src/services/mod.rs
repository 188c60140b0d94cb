pub mod credentials;
pub mod error;
pub mod price_service;

pub use error::ServiceError;
pub use price_service::PriceService;
