use serde::{Deserialize, Serialize};

use crate::LoanCalcResult;

/// Monetary amounts. Plain IEEE-754 so that degenerate inputs surface as
/// NaN / Infinity instead of errors.
pub type Money = f64;

/// Nominal annual rate expressed as a percentage (4.5 = 4.5%).
pub type PercentRate = f64;

/// Loan term in (possibly fractional) years.
pub type Years = f64;

/// The three inputs of a payment computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanParams {
    pub amount: Money,
    pub years: Years,
    pub rate: PercentRate,
}

impl LoanParams {
    pub fn new(amount: Money, years: Years, rate: PercentRate) -> Self {
        Self {
            amount,
            years,
            rate,
        }
    }

    /// Parse `{"amount": .., "years": .., "rate": ..}`.
    pub fn from_json(json: &str) -> LoanCalcResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// One completed computation: the params verbatim plus the payment they
/// produced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanResult {
    pub amount: Money,
    pub years: Years,
    pub rate: PercentRate,
    pub payment: Money,
}

impl LoanResult {
    pub fn new(params: LoanParams, payment: Money) -> Self {
        Self {
            amount: params.amount,
            years: params.years,
            rate: params.rate,
            payment,
        }
    }

    pub fn params(&self) -> LoanParams {
        LoanParams::new(self.amount, self.years, self.rate)
    }
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "ieee754_f64".to_string(),
        },
    }
}
