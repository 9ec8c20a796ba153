//! Plugin manifest presence checks.

use kansa_types::{FatalError, TargetKind, ValidationResult, ValidationTarget};

/// Fixed name of the descriptor every plugin directory must contain.
pub const MANIFEST_NAME: &str = "plugin.json";

/// Validates that a plugin directory contains its manifest file.
///
/// Presence only: the manifest's content is not parsed here. Running the
/// JSON pass over the tree covers `plugins/*/plugin.json` like any other
/// `.json` file.
#[derive(Debug, Default)]
pub struct PluginManifestValidator;

impl super::Validate for PluginManifestValidator {
    fn kind(&self) -> TargetKind {
        TargetKind::PluginManifest
    }

    fn validate(&self, target: &ValidationTarget) -> Result<ValidationResult, FatalError> {
        if target.path().join(MANIFEST_NAME).is_file() {
            return Ok(ValidationResult::ok(target.clone()));
        }

        let dirname = target
            .path()
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| target.path().display().to_string());

        Ok(ValidationResult::fail(
            target.clone(),
            vec![format!("Missing {MANIFEST_NAME} in {dirname}")],
        ))
    }
}
