use std::time::Instant;

use crate::history::History;
use crate::payment::{calc_monthly_payment, installments};
use crate::types::*;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Compute the monthly payment for `params` and record it in `history`.
///
/// This is the only path that appends to a `History`.
pub fn compute_monthly_payment(params: &LoanParams, history: &mut History) -> Money {
    let payment = calc_monthly_payment(params);
    history.record(LoanResult::new(*params, payment));
    payment
}

/// Payment calculator owning the history of everything it has computed.
#[derive(Debug, Clone, Default)]
pub struct PaymentCalculator {
    history: History,
}

impl PaymentCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn compute_monthly_payment(&mut self, params: &LoanParams) -> Money {
        compute_monthly_payment(params, &mut self.history)
    }

    /// Compute, record and wrap the result in the standard output envelope.
    ///
    /// Degenerate inputs are reported as warnings; the payment itself is
    /// returned exactly as the formula produced it.
    pub fn compute_with_metadata(&mut self, params: &LoanParams) -> ComputationOutput<LoanResult> {
        let start = Instant::now();
        let payment = self.compute_monthly_payment(params);
        let warnings = payment_warnings(params, payment);
        let elapsed = start.elapsed().as_micros() as u64;

        with_metadata(
            "Fixed-payment amortization: r*P / (1 - (1+r)^-n), r = rate/100/12, n = floor(years*12)",
            params,
            warnings,
            elapsed,
            LoanResult::new(*params, payment),
        )
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn into_history(self) -> History {
        self.history
    }
}

fn payment_warnings(params: &LoanParams, payment: Money) -> Vec<String> {
    let mut warnings = Vec::new();
    if params.rate == 0.0 {
        warnings.push("Zero interest rate: the amortization formula is 0/0".into());
    }
    if installments(params.years) == 0.0 {
        warnings.push(format!(
            "Term of {} years truncates to zero monthly installments",
            params.years
        ));
    }
    if !payment.is_finite() {
        warnings.push(format!("Payment is not finite ({payment})"));
    }
    warnings
}
