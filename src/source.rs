//! Source Selection
//!
//! Decides where the canonical 1024x1024 master comes from. The mode is a
//! tagged enum checked once, in priority order, instead of flag checks spread
//! through the pipeline.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::IconError;
use crate::export::{to_canonical, write_png};
use crate::synth::write_default_source;
use crate::validation::{SourceInput, ValidationResult, Validator};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SourceMode {
    /// Regenerate the built-in design, overwriting any existing master.
    ForceDefault,
    /// Import the given image as the new master.
    Input(PathBuf),
    /// Keep an existing master; synthesize one only if none exists.
    #[default]
    ReuseOrDefault,
}

impl SourceMode {
    /// Map the CLI flags onto a mode. `force_default` wins over `input`.
    pub fn from_flags(force_default: bool, input: Option<PathBuf>) -> Self {
        match (force_default, input) {
            (true, _) => Self::ForceDefault,
            (false, Some(path)) => Self::Input(path),
            (false, None) => Self::ReuseOrDefault,
        }
    }
}

/// How the master was obtained on this run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SourceOrigin {
    Synthesized,
    Imported,
    Reused,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedSource {
    pub origin: SourceOrigin,
    pub path: PathBuf,
    /// Present only for imported sources.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<ValidationResult>,
}

/// Make sure a master exists at `canonical` according to `mode`.
pub fn resolve_source(
    mode: &SourceMode,
    canonical: &Path,
    validator: &Validator,
) -> Result<ResolvedSource, IconError> {
    let resolved = |origin, validation| ResolvedSource {
        origin,
        path: canonical.to_path_buf(),
        validation,
    };

    match mode {
        SourceMode::ForceDefault => {
            synthesize(canonical)?;
            Ok(resolved(SourceOrigin::Synthesized, None))
        }
        SourceMode::Input(input) => {
            let validation = import(input, canonical, validator)?;
            Ok(resolved(SourceOrigin::Imported, Some(validation)))
        }
        SourceMode::ReuseOrDefault if canonical.exists() => {
            tracing::info!(path = %canonical.display(), "Reusing existing source image");
            Ok(resolved(SourceOrigin::Reused, None))
        }
        SourceMode::ReuseOrDefault => {
            synthesize(canonical)?;
            Ok(resolved(SourceOrigin::Synthesized, None))
        }
    }
}

fn synthesize(canonical: &Path) -> Result<(), IconError> {
    ensure_parent(canonical)?;
    write_default_source(canonical)
}

/// Validate `input`, canonicalise it and save it over `canonical`.
/// Nothing is written if the input is missing, undecodable or rejected.
fn import(input: &Path, canonical: &Path, validator: &Validator) -> Result<ValidationResult, IconError> {
    if !input.exists() {
        return Err(IconError::InputNotFound(input.to_path_buf()));
    }

    let image = image::open(input)
        .map_err(|source| IconError::Load {
            path: input.to_path_buf(),
            source,
        })?
        .into_rgba8();

    let validation = validator.validate(&SourceInput::inspect(&image));
    for v in &validation.violations {
        tracing::warn!(rule = %v.rule, actual = ?v.actual, "{}", v.message);
    }
    if !validation.valid {
        return Err(IconError::Validation(validation.summary()));
    }

    ensure_parent(canonical)?;
    write_png(&to_canonical(image), canonical)?;
    tracing::info!(
        input = %input.display(),
        path = %canonical.display(),
        "Imported source image"
    );

    Ok(validation)
}

fn ensure_parent(path: &Path) -> Result<(), IconError> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => {
            fs::create_dir_all(dir).map_err(|e| IconError::io(dir, "create directory", e))
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_force_default_takes_priority() {
        let mode = SourceMode::from_flags(true, Some(PathBuf::from("icon.png")));
        assert_eq!(mode, SourceMode::ForceDefault);
    }

    #[test]
    fn test_input_mode() {
        let mode = SourceMode::from_flags(false, Some(PathBuf::from("icon.png")));
        assert_eq!(mode, SourceMode::Input(PathBuf::from("icon.png")));
    }

    #[test]
    fn test_no_flags_reuses() {
        assert_eq!(SourceMode::from_flags(false, None), SourceMode::ReuseOrDefault);
        assert_eq!(SourceMode::default(), SourceMode::ReuseOrDefault);
    }

    #[test]
    fn test_missing_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let canonical = dir.path().join("set").join("master.png");
        let mode = SourceMode::Input(dir.path().join("missing.png"));

        let err = resolve_source(&mode, &canonical, &Validator::default()).unwrap_err();

        assert!(matches!(err, IconError::InputNotFound(_)));
        assert!(!dir.path().join("set").exists());
    }

    #[test]
    fn test_origin_serialization() {
        assert_eq!(serde_json::to_string(&SourceOrigin::Reused).unwrap(), r#""reused""#);
    }
}
