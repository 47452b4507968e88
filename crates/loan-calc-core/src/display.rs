use rust_decimal::{Decimal, RoundingStrategy};

use crate::types::Money;

pub const CURRENCY_SYMBOL: &str = "$";

/// Values at or above this magnitude are printed in exponent form.
const EXPONENT_THRESHOLD: f64 = 1e21;

/// Render a payment for the result area: `$` followed by the amount with
/// exactly two decimals.
pub fn format_payment(payment: Money) -> String {
    format!("{CURRENCY_SYMBOL}{}", to_fixed_2(payment))
}

/// Two-decimal rendering with browser `toFixed(2)` semantics.
///
/// Rounding is half away from zero on the exact binary value, so `0.125`
/// becomes `0.13` while `1.005` (stored just below the tie) becomes `1.00`.
pub fn to_fixed_2(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();

    if magnitude >= EXPONENT_THRESHOLD {
        return format!("{sign}{}", exponent_form(magnitude));
    }

    // Below 1e21 the binary value fits a 96-bit decimal mantissa closely
    // enough that rounding at the second place is exact.
    match Decimal::from_f64_retain(magnitude) {
        Some(d) => {
            let rounded = d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            format!("{sign}{rounded:.2}")
        }
        None => format!("{sign}{magnitude:.2}"),
    }
}

fn exponent_form(magnitude: f64) -> String {
    let s = format!("{magnitude:e}");
    match s.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => s,
    }
}
