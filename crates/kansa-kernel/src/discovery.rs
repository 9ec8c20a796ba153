//! Deterministic target discovery.
//!
//! Walks the repository root and classifies candidates by path pattern:
//! `.kai` files are script targets, `.json` files are JSON targets, and
//! each immediate subdirectory of `<root>/plugins` is one plugin-manifest
//! target. Discovery never reads file contents.
//!
//! Ordering is part of the contract: the returned targets are sorted
//! lexicographically by path after collection, so two runs over an
//! unchanged tree yield identical sequences regardless of how the
//! filesystem enumerates entries.

use std::fs;
use std::path::Path;

use ignore::WalkBuilder;
use tracing::debug;

use kansa_types::{FatalError, TargetKind, ValidationTarget};

/// Extension for script targets.
pub const SCRIPT_EXT: &str = "kai";
/// Extension for JSON targets.
pub const JSON_EXT: &str = "json";
/// Directory under the root whose immediate subdirectories are plugins.
pub const PLUGINS_DIR: &str = "plugins";

/// Enumerate validation targets for the requested kinds under `root`.
///
/// A missing root is a fatal error, never an empty result: a CI gate that
/// silently validates nothing would defeat its purpose. A missing
/// `plugins/` directory under an existing root, by contrast, just means
/// zero plugin targets.
pub fn discover(
    root: &Path,
    kinds: &[TargetKind],
) -> Result<Vec<ValidationTarget>, FatalError> {
    if !root.exists() {
        return Err(FatalError::RootNotFound {
            path: root.to_path_buf(),
        });
    }

    let want = |kind: TargetKind| kinds.contains(&kind);
    let mut targets = Vec::new();

    if want(TargetKind::Script) || want(TargetKind::Json) {
        // Standard filters off: hidden files are candidates and gitignore
        // rules do not apply. What gets validated must not depend on the
        // checkout's ignore configuration.
        for entry in WalkBuilder::new(root).standard_filters(false).build() {
            let entry = entry.map_err(|e| FatalError::Walk(e.to_string()))?;
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }
            match entry.path().extension().and_then(|e| e.to_str()) {
                Some(SCRIPT_EXT) if want(TargetKind::Script) => {
                    targets.push(ValidationTarget::new(entry.path(), TargetKind::Script));
                }
                Some(JSON_EXT) if want(TargetKind::Json) => {
                    targets.push(ValidationTarget::new(entry.path(), TargetKind::Json));
                }
                _ => {}
            }
        }
    }

    if want(TargetKind::PluginManifest) {
        let plugins_root = root.join(PLUGINS_DIR);
        if plugins_root.is_dir() {
            for entry in
                fs::read_dir(&plugins_root).map_err(|e| FatalError::io(&plugins_root, e))?
            {
                let entry = entry.map_err(|e| FatalError::io(&plugins_root, e))?;
                let file_type = entry.file_type().map_err(|e| FatalError::io(entry.path(), e))?;
                if file_type.is_dir() {
                    targets.push(ValidationTarget::new(
                        entry.path(),
                        TargetKind::PluginManifest,
                    ));
                }
            }
        }
    }

    // The explicit sort is the sole source of determinism; neither the
    // walker order nor read_dir order is trusted.
    targets.sort_by(|a, b| a.path().cmp(b.path()));

    debug!(root = %root.display(), count = targets.len(), "discovery complete");
    Ok(targets)
}
