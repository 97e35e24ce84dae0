//! Run configuration - filesystem layout and pipeline options.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::source::SourceMode;
use crate::validation::FailureMode;
use crate::{DEFAULT_APPICONSET_DIR, SOURCE_FILENAME};

/// Where the icon set lives relative to a project root.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Layout {
    pub root: PathBuf,
    pub appiconset_dir: PathBuf,
}

impl Layout {
    /// Layout with the default icon-set location under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_appiconset(root, DEFAULT_APPICONSET_DIR)
    }

    /// Layout with a custom icon-set directory. A relative `appiconset` is
    /// resolved against `root`; an absolute one is used as is.
    pub fn with_appiconset(root: impl Into<PathBuf>, appiconset: impl AsRef<Path>) -> Self {
        let root = root.into();
        let appiconset_dir = root.join(appiconset);
        Self { root, appiconset_dir }
    }

    /// The `.xcassets` directory enclosing the icon set.
    pub fn catalog_dir(&self) -> Option<&Path> {
        self.appiconset_dir.parent()
    }

    /// Canonical 1024x1024 master image.
    pub fn source_path(&self) -> PathBuf {
        self.appiconset_dir.join(SOURCE_FILENAME)
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(".")
    }
}

#[derive(Debug, Clone, Default)]
pub struct PipelineOptions {
    pub source: SourceMode,
    pub failure_mode: FailureMode,
}

impl PipelineOptions {
    pub fn new(source: SourceMode) -> Self {
        Self {
            source,
            failure_mode: FailureMode::default(),
        }
    }

    /// Reject imported sources that trip any validation rule.
    pub fn strict(mut self, strict: bool) -> Self {
        self.failure_mode = if strict { FailureMode::Block } else { FailureMode::Warn };
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_paths() {
        let layout = Layout::new("/proj");
        assert_eq!(
            layout.appiconset_dir,
            PathBuf::from("/proj/Resources/Assets.xcassets/AppIcon.appiconset")
        );
        assert_eq!(
            layout.source_path(),
            PathBuf::from("/proj/Resources/Assets.xcassets/AppIcon.appiconset/app-icon-source-1024.png")
        );
        assert_eq!(layout.catalog_dir(), Some(Path::new("/proj/Resources/Assets.xcassets")));
    }

    #[test]
    fn test_custom_appiconset() {
        let layout = Layout::with_appiconset("/proj", "App/Assets.xcassets/AppIcon.appiconset");
        assert_eq!(layout.catalog_dir(), Some(Path::new("/proj/App/Assets.xcassets")));
    }

    #[test]
    fn test_absolute_appiconset_ignores_root() {
        let layout = Layout::with_appiconset("/proj", "/elsewhere/Assets.xcassets/AppIcon.appiconset");
        assert_eq!(
            layout.appiconset_dir,
            PathBuf::from("/elsewhere/Assets.xcassets/AppIcon.appiconset")
        );
        assert_eq!(layout.root, PathBuf::from("/proj"));
        assert_eq!(layout.catalog_dir(), Some(Path::new("/elsewhere/Assets.xcassets")));
    }

    #[test]
    fn test_strict_toggles_failure_mode() {
        let options = PipelineOptions::new(SourceMode::ForceDefault).strict(true);
        assert_eq!(options.failure_mode, FailureMode::Block);
        assert_eq!(options.strict(false).failure_mode, FailureMode::Warn);
    }
}
