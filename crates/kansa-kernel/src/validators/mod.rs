//! The validator set: one validator per target kind.
//!
//! Every validator implements the same contract: read the target once,
//! produce exactly one `ValidationResult`, never retry. Expected problems
//! (syntax errors, missing manifests) become `Fail` results; only
//! environment failures cross the boundary as `FatalError`.
//!
//! Message granularity is deliberately per-validator: the script parser
//! reports every diagnostic it produced, the JSON parser reports its
//! single first error, the manifest check reports one fixed-form message.
//! These contracts are asserted by tests and must not be unified.

mod json;
mod manifest;
mod script;

pub use json::JsonSyntaxValidator;
pub use manifest::{MANIFEST_NAME, PluginManifestValidator};
pub use script::ScriptSyntaxValidator;

use kansa_types::{FatalError, TargetKind, ValidationResult, ValidationTarget};

/// The validate-one-target contract.
pub trait Validate {
    /// The kind this validator handles.
    fn kind(&self) -> TargetKind;

    /// Validate a single target against the filesystem snapshot at call
    /// time. The file handle, if any, never outlives this call.
    fn validate(&self, target: &ValidationTarget) -> Result<ValidationResult, FatalError>;
}

/// The closed kind → validator mapping, built once at startup.
///
/// Dispatch is a static `match`; there is no runtime registration and no
/// type inspection.
#[derive(Debug, Default)]
pub struct ValidatorSet {
    script: ScriptSyntaxValidator,
    json: JsonSyntaxValidator,
    manifest: PluginManifestValidator,
}

impl ValidatorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route a target to the validator matching its kind.
    pub fn dispatch(
        &self,
        target: &ValidationTarget,
    ) -> Result<ValidationResult, FatalError> {
        match target.kind() {
            TargetKind::Script => self.script.validate(target),
            TargetKind::Json => self.json.validate(target),
            TargetKind::PluginManifest => self.manifest.validate(target),
        }
    }
}
