//! Asset Catalog Manifests - `Contents.json`
//!
//! The icon set gets the full image list; the enclosing catalog gets only
//! the info record. Both are rewritten from scratch on every run.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::IconError;
use crate::specs::{IconSpec, Idiom};

pub const MANIFEST_VERSION: u32 = 1;
pub const MANIFEST_AUTHOR: &str = "xcode";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageEntry {
    pub idiom: Idiom,
    pub size: String,
    pub scale: String,
    pub filename: String,
}

impl From<&IconSpec> for ImageEntry {
    fn from(spec: &IconSpec) -> Self {
        Self {
            idiom: spec.idiom,
            size: spec.size.to_string(),
            scale: spec.scale.to_string(),
            filename: spec.filename.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Info {
    pub version: u32,
    pub author: String,
}

impl Default for Info {
    fn default() -> Self {
        Self {
            version: MANIFEST_VERSION,
            author: MANIFEST_AUTHOR.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contents {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<ImageEntry>>,
    pub info: Info,
}

impl Contents {
    /// Manifest for an `.appiconset` directory listing `specs` in order.
    pub fn appiconset<'a>(specs: impl IntoIterator<Item = &'a IconSpec>) -> Self {
        Self {
            images: Some(specs.into_iter().map(ImageEntry::from).collect()),
            info: Info::default(),
        }
    }

    /// Manifest for the `.xcassets` catalog directory itself.
    pub fn catalog() -> Self {
        Self {
            images: None,
            info: Info::default(),
        }
    }

    /// Pretty JSON with 2-space indentation and a trailing newline.
    pub fn render(&self) -> Result<String, IconError> {
        let mut text = serde_json::to_string_pretty(self)?;
        text.push('\n');
        Ok(text)
    }

    /// Render and write to `path`, replacing whatever was there.
    /// Returns the bytes written.
    pub fn write_to(&self, path: &Path) -> Result<Vec<u8>, IconError> {
        let bytes = self.render()?.into_bytes();
        fs::write(path, &bytes).map_err(|e| IconError::io(path, "manifest write", e))?;
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specs::ICON_SPECS;

    #[test]
    fn test_catalog_render_exact() {
        let text = Contents::catalog().render().unwrap();
        assert_eq!(
            text,
            "{\n  \"info\": {\n    \"version\": 1,\n    \"author\": \"xcode\"\n  }\n}\n"
        );
    }

    #[test]
    fn test_appiconset_field_order() {
        let text = Contents::appiconset(&ICON_SPECS[..1]).render().unwrap();
        let expected = concat!(
            "{\n",
            "  \"images\": [\n",
            "    {\n",
            "      \"idiom\": \"iphone\",\n",
            "      \"size\": \"20x20\",\n",
            "      \"scale\": \"2x\",\n",
            "      \"filename\": \"AppIcon-20@2x.png\"\n",
            "    }\n",
            "  ],\n",
            "  \"info\": {\n",
            "    \"version\": 1,\n",
            "    \"author\": \"xcode\"\n",
            "  }\n",
            "}\n",
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn test_appiconset_preserves_table_order() {
        let contents = Contents::appiconset(&ICON_SPECS);
        let images = contents.images.unwrap();
        assert_eq!(images.len(), 18);
        for (entry, spec) in images.iter().zip(ICON_SPECS.iter()) {
            assert_eq!(entry.filename, spec.filename);
        }
    }

    #[test]
    fn test_parse_back() {
        let text = Contents::appiconset(&ICON_SPECS).render().unwrap();
        let parsed: Contents = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, Contents::appiconset(&ICON_SPECS));
    }
}
