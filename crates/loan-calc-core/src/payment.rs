use crate::types::{LoanParams, Money, PercentRate, Years};

pub const MONTHS_IN_YEAR: f64 = 12.0;

// ---------------------------------------------------------------------------
// Payment kernel
// ---------------------------------------------------------------------------

/// Periodic (monthly) rate as a decimal fraction: `(rate / 100) / 12`.
pub fn monthly_rate(rate: PercentRate) -> f64 {
    (rate / 100.0) / MONTHS_IN_YEAR
}

/// Number of monthly installments, truncated to whole months.
pub fn installments(years: Years) -> f64 {
    (years * MONTHS_IN_YEAR).floor()
}

/// Fixed monthly payment of an amortizing loan.
///
/// `payment = r * P / (1 - (1 + r)^-n)` with `r` the monthly rate and `n`
/// the whole number of months. Every input is accepted: a zero rate yields
/// `0/0` (NaN) and a term shorter than one month divides by zero
/// (±Infinity or NaN). Callers see those values unchanged.
pub fn calc_monthly_payment(params: &LoanParams) -> Money {
    let r = monthly_rate(params.rate);
    let n = installments(params.years);
    (r * params.amount) / (1.0 - (1.0 + r).powf(-n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pay(amount: f64, years: f64, rate: f64) -> f64 {
        calc_monthly_payment(&LoanParams::new(amount, years, rate))
    }

    fn round2(x: f64) -> f64 {
        (x * 100.0).round() / 100.0
    }

    #[test]
    fn test_known_value_default_form() {
        assert_eq!(round2(pay(10_000.0, 10.0, 4.5)), 103.64);
    }

    #[test]
    fn test_known_value_thirty_year_mortgage() {
        assert_eq!(round2(pay(200_000.0, 30.0, 6.0)), 1199.10);
    }

    #[test]
    fn test_positive_inputs_give_finite_positive_payment() {
        for &(amount, years, rate) in &[
            (1.0, 1.0, 0.01),
            (500.0, 0.5, 25.0),
            (10_000.0, 10.0, 4.5),
            (1_000_000.0, 40.0, 12.0),
            (250_000.0, 15.25, 3.125),
        ] {
            let p = pay(amount, years, rate);
            assert!(p.is_finite() && p > 0.0, "{amount} {years} {rate} -> {p}");
        }
    }

    #[test]
    fn test_payment_increases_with_amount() {
        let mut prev = 0.0;
        for amount in [1_000.0, 5_000.0, 10_000.0, 50_000.0, 250_000.0] {
            let p = pay(amount, 10.0, 4.5);
            assert!(p > prev);
            prev = p;
        }
    }

    #[test]
    fn test_payment_increases_with_rate() {
        let mut prev = 0.0;
        for rate in [0.5, 1.0, 2.5, 4.5, 8.0, 15.0] {
            let p = pay(10_000.0, 10.0, rate);
            assert!(p > prev);
            prev = p;
        }
    }

    #[test]
    fn test_fractional_years_truncate_to_whole_months() {
        // 10.85 * 12 = 130.2 and 10.9 * 12 = 130.8, both 130 months.
        assert_eq!(installments(10.85), 130.0);
        assert_eq!(installments(10.9), 130.0);
        assert_eq!(pay(10_000.0, 10.85, 4.5), pay(10_000.0, 10.9, 4.5));
        assert_ne!(pay(10_000.0, 10.9, 4.5), pay(10_000.0, 11.0, 4.5));
    }

    #[test]
    fn test_zero_rate_is_not_finite() {
        assert!(pay(10_000.0, 10.0, 0.0).is_nan());
    }

    #[test]
    fn test_zero_installments_divides_by_zero() {
        // 0.05 years = 0.6 months, truncated to 0.
        assert_eq!(installments(0.05), 0.0);
        assert_eq!(pay(10_000.0, 0.05, 4.5), f64::INFINITY);
    }

    #[test]
    fn test_negative_rate_is_evaluated() {
        let p = pay(10_000.0, 10.0, -1.0);
        assert!(p.is_finite());
        assert!(p < 10_000.0 / 120.0);
    }

    #[test]
    fn test_nan_input_propagates() {
        assert!(pay(f64::NAN, 10.0, 4.5).is_nan());
        assert!(pay(10_000.0, f64::NAN, 4.5).is_nan());
    }

    #[test]
    fn test_monthly_rate() {
        assert!((monthly_rate(12.0) - 0.01).abs() < 1e-15);
        assert_eq!(monthly_rate(0.0), 0.0);
    }
}
