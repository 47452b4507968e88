pub mod payment;
pub mod session;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use loan_calc_core::display::format_payment;
use loan_calc_core::form::{FormField, LoanForm};
use loan_calc_core::LoanResult;

/// One form submission read from JSON. Fields that are absent keep the
/// text already in the form; numbers and strings are both accepted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Submission {
    #[serde(default, alias = "loan-amount")]
    pub amount: Option<Value>,
    #[serde(default, alias = "loan-years")]
    pub years: Option<Value>,
    #[serde(default, alias = "loan-rate")]
    pub rate: Option<Value>,
}

impl Submission {
    pub fn apply(&self, form: &mut LoanForm) -> Result<(), Box<dyn std::error::Error>> {
        for (field, value) in [
            (FormField::Amount, &self.amount),
            (FormField::Years, &self.years),
            (FormField::Rate, &self.rate),
        ] {
            if let Some(v) = value {
                form.set(field, field_text(field, v)?);
            }
        }
        Ok(())
    }
}

fn field_text(field: FormField, value: &Value) -> Result<String, Box<dyn std::error::Error>> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(format!("'{}' must be a number or string, got {}", field, other).into()),
    }
}

/// A history entry as shown to the user, with its rendered result text.
#[derive(Debug, Clone, Serialize)]
pub struct LoanReport {
    pub amount: f64,
    pub years: f64,
    pub rate: f64,
    pub payment: f64,
    pub display: String,
}

impl From<&LoanResult> for LoanReport {
    fn from(r: &LoanResult) -> Self {
        LoanReport {
            amount: r.amount,
            years: r.years,
            rate: r.rate,
            payment: r.payment,
            display: format_payment(r.payment),
        }
    }
}
