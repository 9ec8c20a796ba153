//! Script syntax validation for `.kai` files.

use std::fs;

use tracing::debug;

use kansa_types::{FatalError, TargetKind, ValidationResult, ValidationTarget};

use crate::parser;

/// Validates that a script file parses under the kai grammar.
///
/// On failure the result carries one message per diagnostic the lexer or
/// parser emitted, in reported order. A single broken file can therefore
/// produce several messages; callers must not assume one.
#[derive(Debug, Default)]
pub struct ScriptSyntaxValidator;

impl super::Validate for ScriptSyntaxValidator {
    fn kind(&self) -> TargetKind {
        TargetKind::Script
    }

    fn validate(&self, target: &ValidationTarget) -> Result<ValidationResult, FatalError> {
        let bytes = fs::read(target.path()).map_err(|e| FatalError::io(target.path(), e))?;

        let source = match String::from_utf8(bytes) {
            Ok(source) => source,
            Err(_) => {
                return Ok(ValidationResult::fail(
                    target.clone(),
                    vec!["script is not valid UTF-8".to_string()],
                ));
            }
        };

        match parser::parse(&source) {
            Ok(_) => Ok(ValidationResult::ok(target.clone())),
            Err(diagnostics) => {
                debug!(
                    path = %target.path().display(),
                    count = diagnostics.len(),
                    "script parse failed"
                );
                let messages = diagnostics.iter().map(|d| d.to_string()).collect();
                Ok(ValidationResult::fail(target.clone(), messages))
            }
        }
    }
}
