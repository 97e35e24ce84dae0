//! Icon Set Pipeline - Single Entry Point
//!
//! Source selection always runs first, then the exporter always runs against
//! the canonical source location.

use serde::{Deserialize, Serialize};

use crate::config::{Layout, PipelineOptions};
use crate::error::IconError;
use crate::export::{export_icons, ExportReport};
use crate::source::{resolve_source, ResolvedSource, SourceMode};
use crate::validation::Validator;
use crate::ENGINE_VERSION;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub engine_version: String,
    pub source: ResolvedSource,
    pub export: ExportReport,
}

pub struct IconsetPipeline {
    layout: Layout,
    source: SourceMode,
    validator: Validator,
}

impl IconsetPipeline {
    pub fn new(layout: Layout, options: PipelineOptions) -> Self {
        Self {
            layout,
            source: options.source,
            validator: Validator::new(options.failure_mode),
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Resolve the master image, then export the full icon set from it.
    pub fn run(&self) -> Result<RunReport, IconError> {
        let canonical = self.layout.source_path();
        tracing::debug!(mode = ?self.source, path = %canonical.display(), "Resolving source");

        let source = resolve_source(&self.source, &canonical, &self.validator)?;
        let export = export_icons(&canonical, &self.layout.appiconset_dir)?;

        Ok(RunReport {
            engine_version: ENGINE_VERSION.to_string(),
            source,
            export,
        })
    }
}
