use crate::calculator::PaymentCalculator;
use crate::display::format_payment;
use crate::form::LoanForm;
use crate::history::History;
use crate::types::{LoanResult, Money};

/// Application context for one running form: the input fields, the
/// calculator with its history, and the rendered result area.
#[derive(Debug, Clone, Default)]
pub struct LoanSession {
    form: LoanForm,
    calculator: PaymentCalculator,
    result_text: String,
}

impl LoanSession {
    /// A session with blank fields and nothing computed yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate the form defaults and show the first result.
    pub fn start(&mut self) -> &str {
        self.form.set_defaults();
        self.submit()
    }

    /// Handle one submission: read the fields, compute once, render.
    pub fn submit(&mut self) -> &str {
        let params = self.form.values();
        let payment = self.calculator.compute_monthly_payment(&params);
        self.render(payment);
        &self.result_text
    }

    fn render(&mut self, payment: Money) {
        self.result_text = format_payment(payment);
        log::info!("rendered {} (history size {})", self.result_text, self.history().len());
    }

    pub fn result_text(&self) -> &str {
        &self.result_text
    }

    pub fn form(&self) -> &LoanForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut LoanForm {
        &mut self.form
    }

    pub fn history(&self) -> &History {
        self.calculator.history()
    }

    pub fn last_result(&self) -> Option<&LoanResult> {
        self.history().last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormField;
    use crate::types::LoanParams;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_start_renders_default_loan() {
        let mut session = LoanSession::new();
        assert_eq!(session.start(), "$103.64");
        assert_eq!(session.history().len(), 1);
        assert_eq!(
            session.last_result().unwrap().params(),
            LoanParams::new(10_000.0, 10.0, 4.5)
        );
    }

    #[test]
    fn test_new_session_has_no_history() {
        let session = LoanSession::new();
        assert!(session.history().is_empty());
        assert_eq!(session.result_text(), "");
    }

    #[test]
    fn test_each_submit_records_exactly_once() {
        let mut session = LoanSession::new();
        session.start();

        session.form_mut().set(FormField::Amount, "200000");
        session.form_mut().set(FormField::Years, "30");
        session.form_mut().set(FormField::Rate, "6");
        assert_eq!(session.submit(), "$1199.10");

        session.form_mut().set(FormField::Rate, "0");
        assert_eq!(session.submit(), "$NaN");

        let amounts: Vec<f64> = session.history().iter().map(|r| r.amount).collect();
        assert_eq!(amounts, vec![10_000.0, 200_000.0, 200_000.0]);
        assert_eq!(session.result_text(), "$NaN");
    }

    #[test]
    fn test_resubmitting_unchanged_form_appends_again() {
        let mut session = LoanSession::new();
        session.start();
        session.submit();
        assert_eq!(session.history().len(), 2);
        assert_eq!(session.history().entries()[0], session.history().entries()[1]);
    }

    #[test]
    fn test_non_numeric_text_renders_nan() {
        let mut session = LoanSession::new();
        session.start();
        session.form_mut().set(FormField::Amount, "lots");
        assert_eq!(session.submit(), "$NaN");
        assert!(session.last_result().unwrap().amount.is_nan());
    }

    #[test]
    fn test_short_term_renders_infinity() {
        let mut session = LoanSession::new();
        session.start();
        session.form_mut().set(FormField::Years, "0.05");
        assert_eq!(session.submit(), "$Infinity");
    }
}
