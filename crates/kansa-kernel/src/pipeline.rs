//! The validation pipeline: a single linear pass.
//!
//! `Discover → validate each target in order → aggregate`. Strictly
//! sequential and single-threaded; determinism comes entirely from
//! discovery's explicit sort, so there are no ordering races to resolve.
//! A fatal error aborts the pass before any report exists.

use std::path::Path;

use tracing::{debug, info};

use kansa_types::{FatalError, ResultAggregator, TargetKind, ValidationReport};

use crate::discovery::discover;
use crate::validators::ValidatorSet;

/// Run the pipeline over `root` for the requested target kinds.
///
/// Every discovered target is visited exactly once, in lexicographic path
/// order; a `Fail` outcome never short-circuits the pass. Only a
/// `FatalError` (missing root, unreadable file, walker fault) stops it.
pub fn run(root: &Path, kinds: &[TargetKind]) -> Result<ValidationReport, FatalError> {
    let targets = discover(root, kinds)?;
    let validators = ValidatorSet::new();
    let mut aggregator = ResultAggregator::new();

    for target in &targets {
        let result = validators.dispatch(target)?;
        debug!(
            path = %target.path().display(),
            kind = %target.kind(),
            ok = result.is_ok(),
            "validated target"
        );
        aggregator.add(result);
    }

    let report = aggregator.finalize();
    info!(
        root = %root.display(),
        targets = report.results().len(),
        failures = report.fail_count(),
        "run complete"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_root_aborts_before_any_report() {
        let err = run(Path::new("/no/such/repo"), &[TargetKind::Json])
            .expect_err("should abort");
        assert!(matches!(err, FatalError::RootNotFound { .. }));
    }

    #[test]
    fn empty_tree_yields_empty_successful_report() {
        let dir = tempfile::tempdir().expect("tempdir");
        let report = run(dir.path(), &[TargetKind::Script, TargetKind::Json])
            .expect("run");
        assert!(report.is_success());
        assert!(report.results().is_empty());
    }
}
