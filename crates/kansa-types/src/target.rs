//! Validation targets — one file or directory selected for validation.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// The kind of a validation target.
///
/// This is a closed set: dispatch from kind to validator is a static
/// `match`, never runtime inspection of the path or its contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetKind {
    /// A `.kai` script file, checked for syntax validity.
    Script,
    /// A `.json` file, checked for syntax validity.
    Json,
    /// A plugin directory, checked for the presence of its manifest.
    PluginManifest,
}

impl std::fmt::Display for TargetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TargetKind::Script => write!(f, "script"),
            TargetKind::Json => write!(f, "json"),
            TargetKind::PluginManifest => write!(f, "plugin-manifest"),
        }
    }
}

/// One unit of validation work: a path plus the kind that selects the
/// validator. Created during discovery, immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationTarget {
    path: PathBuf,
    kind: TargetKind,
}

impl ValidationTarget {
    pub fn new(path: impl Into<PathBuf>, kind: TargetKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> TargetKind {
        self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_display_names() {
        assert_eq!(TargetKind::Script.to_string(), "script");
        assert_eq!(TargetKind::Json.to_string(), "json");
        assert_eq!(TargetKind::PluginManifest.to_string(), "plugin-manifest");
    }

    #[test]
    fn target_accessors() {
        let target = ValidationTarget::new("plugins/foo", TargetKind::PluginManifest);
        assert_eq!(target.path(), Path::new("plugins/foo"));
        assert_eq!(target.kind(), TargetKind::PluginManifest);
    }
}
