// SPDX-License-Identifier: MPL-2.0
//! The gallery catalog: the ordered, immutable list of panel records.
//!
//! A catalog comes from a TOML manifest. The default manifest and its images
//! are embedded in the binary; an alternative manifest can be loaded from
//! disk, with image paths resolved relative to the manifest file. Records are
//! resolved once at startup into [`PanelEntry`] values carrying the decoded
//! image handle and aspect ratio, and never mutated afterwards.

use crate::error::{Error, Result};
use iced::widget::image::Handle;
use image_rs::ImageReader;
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::fs;
use std::io::Cursor;
use std::path::Path;

#[derive(RustEmbed)]
#[folder = "assets/gallery/"]
struct GalleryAssets;

/// File name of the gallery manifest, embedded and on disk.
pub const MANIFEST_FILE: &str = "gallery.toml";

/// One captioned image record, as written in the manifest.
#[derive(Debug, Clone, Deserialize)]
pub struct Panel {
    /// Short presentation label, e.g. `5.1`.
    pub id: String,
    /// Image file name, relative to the manifest.
    pub image: String,
    pub title: String,
    pub context: String,
    pub description: String,
}

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    panel: Vec<Panel>,
}

/// A panel record resolved against its image data.
#[derive(Debug, Clone)]
pub struct PanelEntry {
    pub panel: Panel,
    pub handle: Handle,
    /// Width / height of the source image, used for strip layout.
    pub aspect: f32,
}

impl PanelEntry {
    /// Caption shown under the enlarged lightbox image.
    pub fn lightbox_caption(&self) -> String {
        format!("{} \u{2022} {}", self.panel.id, self.panel.title)
    }
}

/// A fully resolved gallery: display title plus ordered panel entries.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub title: String,
    pub entries: Vec<PanelEntry>,
}

const DEFAULT_TITLE: &str = "Gallery";

/// Loads the catalog embedded in the binary.
pub fn load_embedded() -> Result<Catalog> {
    let manifest_file = GalleryAssets::get(MANIFEST_FILE)
        .ok_or_else(|| Error::Manifest(format!("embedded {} not found", MANIFEST_FILE)))?;
    let content = std::str::from_utf8(&manifest_file.data)
        .map_err(|e| Error::Manifest(e.to_string()))?;
    let manifest: Manifest = toml::from_str(content)?;

    let mut entries = Vec::with_capacity(manifest.panel.len());
    for panel in manifest.panel {
        let image_file = GalleryAssets::get(&panel.image).ok_or_else(|| {
            Error::Manifest(format!("embedded image {} not found", panel.image))
        })?;
        let bytes = image_file.data.into_owned();
        entries.push(resolve(panel, bytes)?);
    }

    Ok(Catalog {
        title: manifest.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        entries,
    })
}

/// Loads a catalog from a manifest on disk. Image paths resolve relative to
/// the manifest's directory.
pub fn load_from_path(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path)?;
    let manifest: Manifest = toml::from_str(&content)?;
    let base = path.parent().unwrap_or_else(|| Path::new("."));

    let mut entries = Vec::with_capacity(manifest.panel.len());
    for panel in manifest.panel {
        let bytes = fs::read(base.join(&panel.image))?;
        entries.push(resolve(panel, bytes)?);
    }

    Ok(Catalog {
        title: manifest.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        entries,
    })
}

fn resolve(panel: Panel, bytes: Vec<u8>) -> Result<PanelEntry> {
    let aspect = aspect_of(&bytes)?;
    Ok(PanelEntry {
        panel,
        handle: Handle::from_bytes(bytes),
        aspect,
    })
}

/// Reads width/height from the image header without a full decode.
fn aspect_of(bytes: &[u8]) -> Result<f32> {
    let (width, height) = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()?
        .into_dimensions()?;
    if height == 0 {
        return Err(Error::Image("image has zero height".to_string()));
    }
    #[allow(clippy::cast_precision_loss)] // image dimensions fit f32 exactly up to 2^24
    Ok(width as f32 / height as f32)
}
