//! Per-target outcomes and the per-run report.

use serde::{Deserialize, Serialize};

use crate::target::ValidationTarget;

/// Outcome of validating a single target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Ok,
    Fail,
}

/// The result of validating one target.
///
/// `messages` is empty exactly when `status` is `Ok`. Message granularity
/// is a per-validator contract: the script validator may attach several
/// diagnostics, the JSON and manifest validators attach exactly one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    target: ValidationTarget,
    status: Status,
    messages: Vec<String>,
}

impl ValidationResult {
    /// A passing result. Carries no messages.
    pub fn ok(target: ValidationTarget) -> Self {
        Self {
            target,
            status: Status::Ok,
            messages: Vec::new(),
        }
    }

    /// A failing result with at least one human-readable message.
    pub fn fail(target: ValidationTarget, messages: Vec<String>) -> Self {
        debug_assert!(!messages.is_empty(), "Fail result without messages");
        Self {
            target,
            status: Status::Fail,
            messages,
        }
    }

    pub fn target(&self) -> &ValidationTarget {
        &self.target
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_ok(&self) -> bool {
        self.status == Status::Ok
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

/// The ordered, immutable collection of all per-target outcomes for one
/// run, plus the derived failure count.
///
/// Result order equals discovery order (lexicographic by path); the report
/// never reorders or filters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    results: Vec<ValidationResult>,
    fail_count: usize,
}

impl ValidationReport {
    pub(crate) fn from_results(results: Vec<ValidationResult>) -> Self {
        let fail_count = results.iter().filter(|r| !r.is_ok()).count();
        Self {
            results,
            fail_count,
        }
    }

    pub fn results(&self) -> &[ValidationResult] {
        &self.results
    }

    pub fn fail_count(&self) -> usize {
        self.fail_count
    }

    pub fn is_success(&self) -> bool {
        self.fail_count == 0
    }
}

/// Collects per-target results in arrival order and finalizes them into a
/// `ValidationReport`.
///
/// The pipeline validates targets sequentially, so arrival order equals
/// discovery order. The aggregator is the only mutable accumulation point
/// in a run; once `finalize` is called the report is immutable.
#[derive(Debug, Default)]
pub struct ResultAggregator {
    results: Vec<ValidationResult>,
}

impl ResultAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a result. Order of `add` calls is preserved verbatim.
    pub fn add(&mut self, result: ValidationResult) {
        self.results.push(result);
    }

    /// Consume the aggregator, computing the failure count.
    pub fn finalize(self) -> ValidationReport {
        ValidationReport::from_results(self.results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::TargetKind;

    fn target(path: &str) -> ValidationTarget {
        ValidationTarget::new(path, TargetKind::Json)
    }

    #[test]
    fn ok_result_has_no_messages() {
        let result = ValidationResult::ok(target("a.json"));
        assert!(result.is_ok());
        assert!(result.messages().is_empty());
    }

    #[test]
    fn empty_report_is_success() {
        let report = ResultAggregator::new().finalize();
        assert!(report.is_success());
        assert_eq!(report.fail_count(), 0);
        assert!(report.results().is_empty());
    }

    #[test]
    fn fail_count_matches_failing_results() {
        let mut agg = ResultAggregator::new();
        agg.add(ValidationResult::ok(target("a.json")));
        agg.add(ValidationResult::fail(
            target("b.json"),
            vec!["bad".to_string()],
        ));
        agg.add(ValidationResult::fail(
            target("c.json"),
            vec!["worse".to_string()],
        ));

        let report = agg.finalize();
        assert!(!report.is_success());
        assert_eq!(report.fail_count(), 2);
        assert_eq!(report.results().len(), 3);
    }

    #[test]
    fn aggregator_preserves_arrival_order() {
        let mut agg = ResultAggregator::new();
        for path in ["z.json", "a.json", "m.json"] {
            agg.add(ValidationResult::ok(target(path)));
        }

        let report = agg.finalize();
        let paths: Vec<_> = report
            .results()
            .iter()
            .map(|r| r.target().path().to_string_lossy().into_owned())
            .collect();
        assert_eq!(paths, ["z.json", "a.json", "m.json"]);
    }

    #[test]
    fn report_round_trips_through_serde() {
        let mut agg = ResultAggregator::new();
        agg.add(ValidationResult::fail(
            target("b.json"),
            vec!["expected value at line 1 column 1".to_string()],
        ));
        let report = agg.finalize();

        let json = serde_json::to_string(&report).expect("serialize");
        let back: ValidationReport = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, report);
    }
}
