use serde::Serialize;

use crate::types::LoanResult;

/// Append-only log of completed computations, oldest first.
///
/// Entries are only added through `PaymentCalculator`; none is ever edited
/// or removed.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct History {
    entries: Vec<LoanResult>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, result: LoanResult) {
        log::debug!(
            "history[{}]: amount={} years={} rate={} payment={}",
            self.entries.len(),
            result.amount,
            result.years,
            result.rate,
            result.payment
        );
        self.entries.push(result);
    }

    pub fn entries(&self) -> &[LoanResult] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LoanResult> {
        self.entries.iter()
    }

    pub fn last(&self) -> Option<&LoanResult> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a LoanResult;
    type IntoIter = std::slice::Iter<'a, LoanResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LoanParams;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_history_is_empty() {
        let history = History::new();
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
        assert!(history.last().is_none());
    }

    #[test]
    fn test_record_preserves_insertion_order() {
        let mut history = History::new();
        for i in 1..=3 {
            let params = LoanParams::new(i as f64 * 1000.0, 10.0, 4.5);
            history.record(LoanResult::new(params, i as f64));
        }
        let payments: Vec<f64> = history.iter().map(|r| r.payment).collect();
        assert_eq!(payments, vec![1.0, 2.0, 3.0]);
        assert_eq!(history.last().map(|r| r.amount), Some(3000.0));
    }

    #[test]
    fn test_serializes_as_array() {
        let mut history = History::new();
        history.record(LoanResult::new(LoanParams::new(1.0, 2.0, 3.0), 4.0));
        let value = serde_json::to_value(&history).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{ "amount": 1.0, "years": 2.0, "rate": 3.0, "payment": 4.0 }])
        );
    }
}
