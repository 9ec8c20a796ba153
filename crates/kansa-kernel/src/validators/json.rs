//! JSON syntax validation.

use std::fs;

use kansa_types::{FatalError, TargetKind, ValidationResult, ValidationTarget};

/// Validates that a file parses as JSON text.
///
/// On failure the result carries exactly one message: serde_json stops at
/// the first error, unlike the script parser which may report several.
/// That asymmetry is contractual, not an accident to smooth over.
#[derive(Debug, Default)]
pub struct JsonSyntaxValidator;

impl super::Validate for JsonSyntaxValidator {
    fn kind(&self) -> TargetKind {
        TargetKind::Json
    }

    fn validate(&self, target: &ValidationTarget) -> Result<ValidationResult, FatalError> {
        let bytes = fs::read(target.path()).map_err(|e| FatalError::io(target.path(), e))?;

        match serde_json::from_slice::<serde_json::Value>(&bytes) {
            Ok(_) => Ok(ValidationResult::ok(target.clone())),
            Err(err) => Ok(ValidationResult::fail(target.clone(), vec![err.to_string()])),
        }
    }
}
