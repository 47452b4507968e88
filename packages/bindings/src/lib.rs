use napi::Result as NapiResult;
use napi_derive::napi;

use loan_calc_core::display;
use loan_calc_core::payment;
use loan_calc_core::session::LoanSession;
use loan_calc_core::{LoanParams, PaymentCalculator};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Stateless functions
// ---------------------------------------------------------------------------

/// Monthly payment for one loan. Zero rate gives NaN, a term under one
/// month gives Infinity.
#[napi]
pub fn calc_monthly_payment(amount: f64, years: f64, rate: f64) -> f64 {
    payment::calc_monthly_payment(&LoanParams::new(amount, years, rate))
}

/// `$` plus two decimals, e.g. `$103.64`, `$NaN`.
#[napi]
pub fn format_payment(payment: f64) -> String {
    display::format_payment(payment)
}

#[napi]
pub fn compute_payment(input_json: String) -> NapiResult<String> {
    let params = LoanParams::from_json(&input_json).map_err(to_napi_error)?;
    let output = PaymentCalculator::new().compute_with_metadata(&params);
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Form session
// ---------------------------------------------------------------------------

/// A loan form bound to a page: field text in, rendered payment out, with
/// the history of every submission kept for the lifetime of the object.
#[napi]
pub struct LoanCalculatorSession {
    inner: LoanSession,
}

#[napi]
impl LoanCalculatorSession {
    #[napi(constructor)]
    pub fn new() -> Self {
        LoanCalculatorSession {
            inner: LoanSession::new(),
        }
    }

    /// Fill in the default values and render the first result.
    #[napi]
    pub fn start(&mut self) -> String {
        self.inner.start().to_string()
    }

    /// Set the raw text of `amount`, `years` or `rate`.
    #[napi]
    pub fn set_field(&mut self, name: String, value: String) -> NapiResult<()> {
        self.inner
            .form_mut()
            .set_named(&name, value)
            .map_err(to_napi_error)
    }

    #[napi]
    pub fn submit(&mut self) -> String {
        self.inner.submit().to_string()
    }

    #[napi]
    pub fn result_text(&self) -> String {
        self.inner.result_text().to_string()
    }

    #[napi]
    pub fn history_length(&self) -> u32 {
        self.inner.history().len() as u32
    }

    #[napi]
    pub fn history_json(&self) -> NapiResult<String> {
        serde_json::to_string(self.inner.history()).map_err(to_napi_error)
    }
}
