//! Icon Exporter
//!
//! Loads the canonical source, brings it to 1024x1024, writes one PNG per
//! table entry and both `Contents.json` manifests.

use image::imageops::{self, FilterType};
use image::{ImageFormat, RgbaImage};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use crate::error::IconError;
use crate::hashing::sha256_hex;
use crate::manifest::Contents;
use crate::specs::ICON_SPECS;
use crate::{CANONICAL_EDGE, MANIFEST_FILENAME};

/// Resampling filter for every resize in the pipeline.
pub const RESAMPLE_FILTER: FilterType = FilterType::Lanczos3;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedIcon {
    pub filename: String,
    pub pixels: u32,
    pub sha256: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportReport {
    pub output_dir: PathBuf,
    pub icons: Vec<ExportedIcon>,
    pub manifest_path: PathBuf,
    pub manifest_sha256: String,
    pub catalog_manifest_path: PathBuf,
    pub catalog_manifest_sha256: String,
}

/// Export the full icon set from `source` into `output_dir`.
///
/// Existing files are overwritten. A failure part-way leaves whatever was
/// already written in place; rerunning regenerates everything.
pub fn export_icons(source: &Path, output_dir: &Path) -> Result<ExportReport, IconError> {
    let catalog_dir = output_dir
        .parent()
        .ok_or_else(|| IconError::NoCatalogDir(output_dir.to_path_buf()))?;

    fs::create_dir_all(output_dir)
        .map_err(|e| IconError::io(output_dir, "create directory", e))?;

    let master = load_canonical(source)?;

    let mut icons = Vec::with_capacity(ICON_SPECS.len());
    for spec in &ICON_SPECS {
        let path = output_dir.join(spec.filename);
        let resized = resize_square(&master, spec.pixels);
        let sha256 = write_png(&resized, &path)?;
        tracing::debug!(
            idiom = spec.idiom.as_str(),
            file = spec.filename,
            pixels = spec.pixels,
            "Wrote icon"
        );
        icons.push(ExportedIcon {
            filename: spec.filename.to_string(),
            pixels: spec.pixels,
            sha256,
        });
    }

    let manifest_path = output_dir.join(MANIFEST_FILENAME);
    let manifest = Contents::appiconset(&ICON_SPECS).write_to(&manifest_path)?;

    let catalog_manifest_path = catalog_dir.join(MANIFEST_FILENAME);
    let catalog_manifest = Contents::catalog().write_to(&catalog_manifest_path)?;

    tracing::info!(
        dir = %output_dir.display(),
        icons = icons.len(),
        "Exported icon set"
    );

    Ok(ExportReport {
        output_dir: output_dir.to_path_buf(),
        icons,
        manifest_path,
        manifest_sha256: sha256_hex(&manifest),
        catalog_manifest_path,
        catalog_manifest_sha256: sha256_hex(&catalog_manifest),
    })
}

/// Decode `path` as RGBA and resample to the canonical edge if needed.
pub fn load_canonical(path: &Path) -> Result<RgbaImage, IconError> {
    let image = image::open(path)
        .map_err(|source| IconError::Load {
            path: path.to_path_buf(),
            source,
        })?
        .into_rgba8();
    Ok(to_canonical(image))
}

/// Resample to `CANONICAL_EDGE` square; already-canonical images pass through.
pub fn to_canonical(image: RgbaImage) -> RgbaImage {
    if image.dimensions() == (CANONICAL_EDGE, CANONICAL_EDGE) {
        image
    } else {
        tracing::debug!(
            width = image.width(),
            height = image.height(),
            "Resampling source to canonical size"
        );
        imageops::resize(&image, CANONICAL_EDGE, CANONICAL_EDGE, RESAMPLE_FILTER)
    }
}

fn resize_square(image: &RgbaImage, edge: u32) -> RgbaImage {
    if image.dimensions() == (edge, edge) {
        image.clone()
    } else {
        imageops::resize(image, edge, edge, RESAMPLE_FILTER)
    }
}

/// Encode `image` as PNG and write it to `path`. Returns the SHA-256 of the
/// bytes written.
pub(crate) fn write_png(image: &RgbaImage, path: &Path) -> Result<String, IconError> {
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|source| IconError::Encode {
            path: path.to_path_buf(),
            source,
        })?;
    fs::write(path, &bytes).map_err(|e| IconError::io(path, "image write", e))?;
    Ok(sha256_hex(&bytes))
}
