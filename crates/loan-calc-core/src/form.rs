use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LoanCalcError;
use crate::types::LoanParams;

pub const DEFAULT_AMOUNT: &str = "10000";
pub const DEFAULT_YEARS: &str = "10";
pub const DEFAULT_RATE: &str = "4.5";

// ---------------------------------------------------------------------------
// Fields
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Amount,
    Years,
    Rate,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::Amount, FormField::Years, FormField::Rate];

    pub fn name(self) -> &'static str {
        match self {
            FormField::Amount => "amount",
            FormField::Years => "years",
            FormField::Rate => "rate",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FormField {
    type Err = LoanCalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "amount" | "loan-amount" => Ok(FormField::Amount),
            "years" | "loan-years" => Ok(FormField::Years),
            "rate" | "loan-rate" => Ok(FormField::Rate),
            other => Err(LoanCalcError::InvalidInput {
                field: other.to_string(),
                reason: "expected one of amount, years, rate".into(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Form
// ---------------------------------------------------------------------------

/// Text contents of the loan form's three inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanForm {
    pub amount: String,
    pub years: String,
    pub rate: String,
}

impl LoanForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// A form already filled with the start-up defaults.
    pub fn with_defaults() -> Self {
        let mut form = Self::new();
        form.set_defaults();
        form
    }

    pub fn set_defaults(&mut self) {
        self.amount = DEFAULT_AMOUNT.to_string();
        self.years = DEFAULT_YEARS.to_string();
        self.rate = DEFAULT_RATE.to_string();
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Amount => &self.amount,
            FormField::Years => &self.years,
            FormField::Rate => &self.rate,
        }
    }

    pub fn set(&mut self, field: FormField, text: impl Into<String>) {
        let text = text.into();
        match field {
            FormField::Amount => self.amount = text,
            FormField::Years => self.years = text,
            FormField::Rate => self.rate = text,
        }
    }

    /// Set a field addressed by its name (`amount`, `loan-years`, ...).
    pub fn set_named(&mut self, name: &str, text: impl Into<String>) -> Result<(), LoanCalcError> {
        let field: FormField = name.parse()?;
        self.set(field, text);
        Ok(())
    }

    /// Numeric values of the three fields. Never fails: text that is not a
    /// number becomes NaN.
    pub fn values(&self) -> LoanParams {
        LoanParams::new(
            to_number(&self.amount),
            to_number(&self.years),
            to_number(&self.rate),
        )
    }
}

// ---------------------------------------------------------------------------
// Text -> number
// ---------------------------------------------------------------------------

/// Convert form text to a number the way a browser's `Number(text)` does.
///
/// - surrounding whitespace is ignored and empty text is `0`
/// - `Infinity`, `+Infinity`, `-Infinity`
/// - unsigned `0x` / `0o` / `0b` integer literals
/// - decimal literals: optional sign, digits with optional fraction, optional exponent
///
/// Anything else is NaN.
pub fn to_number(text: &str) -> f64 {
    let s = text.trim_matches(is_js_whitespace);
    if s.is_empty() {
        return 0.0;
    }

    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if let Some(value) = parse_radix_literal(s) {
        return value;
    }

    if is_decimal_literal(s) {
        return s.parse::<f64>().unwrap_or(f64::NAN);
    }

    f64::NAN
}

fn is_js_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

fn parse_radix_literal(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    if bytes.len() < 3 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };

    let mut value = 0.0_f64;
    for c in s[2..].chars() {
        match c.to_digit(radix) {
            Some(d) => value = value * radix as f64 + d as f64,
            None => return Some(f64::NAN),
        }
    }
    Some(value)
}

/// `[+-]? (digits ('.' digits?)? | '.' digits) ([eE] [+-]? digits)?`
fn is_decimal_literal(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut mantissa_digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        mantissa_digits += i - frac_start;
    }

    if mantissa_digits == 0 {
        return false;
    }

    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        i += 1;
        if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
            i += 1;
        }
        let exp_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }

    i == bytes.len()
}
