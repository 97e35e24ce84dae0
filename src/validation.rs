//! Source Validation - Rule/Policy Separation
//!
//! Rules inspect an imported source image and produce structured violations.
//! Policy decides whether violations abort the import or are only logged.

use image::RgbaImage;
use serde::{Deserialize, Serialize};

use crate::CANONICAL_EDGE;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationViolation {
    pub rule: String,
    pub message: String,
    pub expected: Option<String>,
    pub actual: Option<String>,
    pub remediation: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub violations: Vec<ValidationViolation>,
}

impl ValidationResult {
    /// `rule: message` pairs joined for error reporting.
    pub fn summary(&self) -> String {
        self.violations
            .iter()
            .map(|v| format!("{}: {}", v.rule, v.message))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// What happens when a rule fires.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FailureMode {
    /// Any violation rejects the source.
    Block,
    /// Violations are recorded and the import proceeds.
    #[default]
    Warn,
}

/// Facts about a decoded source image, as seen before canonicalisation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceInput {
    pub width: u32,
    pub height: u32,
    pub has_transparency: bool,
}

impl SourceInput {
    pub fn inspect(image: &RgbaImage) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
            has_transparency: image.pixels().any(|p| p[3] < u8::MAX),
        }
    }
}

/// Validation rule trait - produces violations
pub trait ValidationRule {
    fn name(&self) -> &'static str;
    fn validate(&self, input: &SourceInput) -> Vec<ValidationViolation>;
}

// --- Concrete Rules ---

pub struct AspectRatioRule;

impl ValidationRule for AspectRatioRule {
    fn name(&self) -> &'static str { "aspect_ratio" }

    fn validate(&self, input: &SourceInput) -> Vec<ValidationViolation> {
        if input.width == input.height {
            return vec![];
        }
        vec![ValidationViolation {
            rule: self.name().to_string(),
            message: "Source is not square and will be stretched".to_string(),
            expected: Some("1:1".to_string()),
            actual: Some(format!("{}x{}", input.width, input.height)),
            remediation: vec!["Crop the source to a square before importing".to_string()],
        }]
    }
}

pub struct ResolutionRule;

impl ValidationRule for ResolutionRule {
    fn name(&self) -> &'static str { "resolution" }

    fn validate(&self, input: &SourceInput) -> Vec<ValidationViolation> {
        if input.width >= CANONICAL_EDGE && input.height >= CANONICAL_EDGE {
            return vec![];
        }
        vec![ValidationViolation {
            rule: self.name().to_string(),
            message: "Source is smaller than the canonical size and will be upscaled".to_string(),
            expected: Some(format!("{0}x{0} minimum", CANONICAL_EDGE)),
            actual: Some(format!("{}x{}", input.width, input.height)),
            remediation: vec!["Provide a higher resolution source image".to_string()],
        }]
    }
}

pub struct OpacityRule;

impl ValidationRule for OpacityRule {
    fn name(&self) -> &'static str { "opacity" }

    fn validate(&self, input: &SourceInput) -> Vec<ValidationViolation> {
        if !input.has_transparency {
            return vec![];
        }
        vec![ValidationViolation {
            rule: self.name().to_string(),
            message: "Source has transparent pixels; the App Store icon must be opaque".to_string(),
            expected: Some("alpha 255 everywhere".to_string()),
            actual: Some("partial transparency".to_string()),
            remediation: vec!["Flatten the source onto an opaque background".to_string()],
        }]
    }
}

/// Validator orchestrates rules and applies policy
pub struct Validator {
    rules: Vec<Box<dyn ValidationRule>>,
    failure_mode: FailureMode,
}

impl Validator {
    pub fn new(failure_mode: FailureMode) -> Self {
        Self {
            rules: vec![
                Box::new(AspectRatioRule),
                Box::new(ResolutionRule),
                Box::new(OpacityRule),
            ],
            failure_mode,
        }
    }

    pub fn validate(&self, input: &SourceInput) -> ValidationResult {
        let violations: Vec<_> = self
            .rules
            .iter()
            .flat_map(|rule| rule.validate(input))
            .collect();

        let valid = match self.failure_mode {
            FailureMode::Block => violations.is_empty(),
            FailureMode::Warn => true,
        };

        ValidationResult { valid, violations }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(FailureMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn input(width: u32, height: u32, has_transparency: bool) -> SourceInput {
        SourceInput { width, height, has_transparency }
    }

    #[test]
    fn test_clean_source_has_no_violations() {
        let result = Validator::default().validate(&input(1024, 1024, false));
        assert!(result.valid);
        assert!(result.violations.is_empty());
    }

    #[test]
    fn test_large_square_source_passes() {
        let result = Validator::new(FailureMode::Block).validate(&input(2048, 2048, false));
        assert!(result.valid);
    }

    #[test]
    fn test_warn_mode_records_but_accepts() {
        let result = Validator::default().validate(&input(512, 256, true));
        assert!(result.valid);
        let rules: Vec<_> = result.violations.iter().map(|v| v.rule.as_str()).collect();
        assert_eq!(rules, ["aspect_ratio", "resolution", "opacity"]);
    }

    #[test]
    fn test_block_mode_rejects_warnings() {
        let result = Validator::new(FailureMode::Block).validate(&input(1024, 1000, false));
        assert!(!result.valid);
        assert_eq!(result.violations.len(), 1);
        assert!(result.summary().contains("aspect_ratio"));
    }

    #[test]
    fn test_inspect_detects_transparency() {
        let mut image = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 255]));
        assert!(!SourceInput::inspect(&image).has_transparency);
        image.put_pixel(1, 1, Rgba([0, 0, 0, 10]));
        assert!(SourceInput::inspect(&image).has_transparency);
    }
}
