pub mod calculator;
pub mod error;
pub mod history;
pub mod payment;
pub mod types;

#[cfg(feature = "form")]
pub mod display;

#[cfg(feature = "form")]
pub mod form;

#[cfg(feature = "form")]
pub mod session;

pub use calculator::PaymentCalculator;
pub use error::LoanCalcError;
pub use history::History;
pub use types::*;

/// Standard result type for host-layer loan-calc operations
pub type LoanCalcResult<T> = Result<T, LoanCalcError>;
