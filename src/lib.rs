//! AppIcons Core - iOS AppIcon set generator
//!
//! # Guarantees
//! 1. One Master: every icon is derived from a single 1024x1024 RGBA source
//! 2. Fixed Table: the icon set is the static 18-entry table, in order
//! 3. Full Overwrite: manifests are regenerated from scratch every run
//! 4. Deterministic Output: same source, same bytes
//! 5. Fail Loud: any load or write failure aborts the run

pub mod config;
pub mod error;
pub mod export;
pub mod hashing;
pub mod logging;
pub mod manifest;
pub mod pipeline;
pub mod source;
pub mod specs;
pub mod synth;
pub mod validation;

pub use config::{Layout, PipelineOptions};
pub use error::IconError;
pub use export::{export_icons, ExportReport, ExportedIcon};
pub use hashing::sha256_hex;
pub use manifest::{Contents, ImageEntry, Info};
pub use pipeline::{IconsetPipeline, RunReport};
pub use source::{resolve_source, ResolvedSource, SourceMode, SourceOrigin};
pub use specs::{IconSpec, Idiom, ICON_SPECS};
pub use validation::{FailureMode, ValidationResult, ValidationRule, ValidationViolation};

/// Edge length of the canonical source image and the largest exported icon.
pub const CANONICAL_EDGE: u32 = 1024;

/// Filename of the canonical source image inside the icon-set directory.
pub const SOURCE_FILENAME: &str = "app-icon-source-1024.png";

/// Manifest filename used by both the icon set and the asset catalog.
pub const MANIFEST_FILENAME: &str = "Contents.json";

/// Icon-set directory relative to the project root.
pub const DEFAULT_APPICONSET_DIR: &str = "Resources/Assets.xcassets/AppIcon.appiconset";

pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");
