use clap::Args;
use serde_json::{json, Value};

use loan_calc_core::session::LoanSession;

use super::{LoanReport, Submission};
use crate::input;

/// Arguments for replaying a sequence of form submissions
#[derive(Args)]
pub struct SessionArgs {
    /// Path to a JSON array of submissions; each object overrides the
    /// fields it names before the form is submitted
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_session(args: SessionArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let submissions: Vec<Submission> = match input::file::read_input(args.input.as_deref())? {
        Some(data) => serde_json::from_value(data)
            .map_err(|e| format!("Expected a JSON array of submissions: {}", e))?,
        None => Vec::new(),
    };

    let mut session = LoanSession::new();
    session.start();

    for (i, submission) in submissions.iter().enumerate() {
        submission
            .apply(session.form_mut())
            .map_err(|e| format!("submission {}: {}", i + 1, e))?;
        session.submit();
    }

    let results: Vec<LoanReport> = session.history().iter().map(LoanReport::from).collect();
    Ok(json!({
        "display": session.result_text(),
        "count": results.len(),
        "results": results,
    }))
}
