use clap::Args;
use serde_json::Value;

use loan_calc_core::form::{FormField, LoanForm};
use loan_calc_core::{ComputationOutput, PaymentCalculator};

use super::{LoanReport, Submission};
use crate::input;

/// Arguments for a single payment calculation
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct PaymentArgs {
    /// Principal borrowed (default 10000)
    #[arg(long)]
    pub amount: Option<String>,

    /// Term in years; fractional terms are truncated to whole months (default 10)
    #[arg(long)]
    pub years: Option<String>,

    /// Nominal annual rate as a percentage, e.g. 4.5 (default 4.5)
    #[arg(long)]
    pub rate: Option<String>,

    /// Path to JSON input file with amount / years / rate
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_payment(args: PaymentArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let mut form = LoanForm::with_defaults();

    if let Some(data) = input::file::read_input(args.input.as_deref())? {
        let submission: Submission = serde_json::from_value(data)?;
        submission.apply(&mut form)?;
    }

    for (field, text) in [
        (FormField::Amount, args.amount),
        (FormField::Years, args.years),
        (FormField::Rate, args.rate),
    ] {
        if let Some(t) = text {
            form.set(field, t);
        }
    }

    let params = form.values();
    let mut calculator = PaymentCalculator::new();
    let out = calculator.compute_with_metadata(&params);

    let report = ComputationOutput {
        result: LoanReport::from(&out.result),
        methodology: out.methodology,
        assumptions: out.assumptions,
        warnings: out.warnings,
        metadata: out.metadata,
    };
    Ok(serde_json::to_value(report)?)
}
