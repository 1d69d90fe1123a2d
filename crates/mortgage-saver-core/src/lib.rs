pub mod currency;
pub mod error;
pub mod mortgage;
pub mod time_value;
pub mod types;

#[cfg(feature = "refinance")]
pub mod refinance;

pub use error::MortgageError;
pub use types::*;

/// Standard result type for all mortgage-saver operations
pub type MortgageResult<T> = Result<T, MortgageError>;
