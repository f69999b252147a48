//! On-disk surface captures.
//!
//! A snapshot is a JSON manifest plus PNG files: the header and content
//! regions as captured bitmaps, each with its hyperlink rectangles. It
//! implements [`RenderSurface`], so the CLI and integration tests can run
//! the exporter against a capture taken earlier in a browser session.

use crate::error::{Error, Result};
use crate::export::surface::{Bitmap, LinkRegion, RenderSurface, SurfaceRegion};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Serialized form of one captured region.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionManifest {
    /// PNG file, relative to the manifest
    pub image: PathBuf,

    /// Hyperlink rectangles in display pixels relative to the region origin
    #[serde(default)]
    pub links: Vec<LinkRegion>,
}

/// Serialized form of a whole surface capture.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotManifest {
    /// Displayed-to-intrinsic size ratio at capture time
    pub display_scale: f32,

    /// Oversampling factor the PNGs were captured at
    pub oversample: f32,

    /// Repeating header region, optional
    #[serde(default)]
    pub header: Option<RegionManifest>,

    /// Flowing content region
    #[serde(default)]
    pub content: Option<RegionManifest>,
}

/// A loaded surface capture, ready to hand to the exporter.
pub struct SurfaceSnapshot {
    display_scale: f32,
    header: Option<SnapshotRegion>,
    content: Option<SnapshotRegion>,
}

impl SurfaceSnapshot {
    /// Load a snapshot manifest; image paths resolve relative to it.
    pub fn load<P: AsRef<Path>>(manifest_path: P) -> Result<Self> {
        let manifest_path = manifest_path.as_ref();
        let json = fs::read_to_string(manifest_path)?;
        let manifest: SnapshotManifest = serde_json::from_str(&json)?;

        if !(manifest.display_scale.is_finite() && manifest.display_scale > 0.0) {
            return Err(Error::InvalidSnapshot(format!(
                "display_scale must be positive, got {}",
                manifest.display_scale
            )));
        }
        if !(manifest.oversample.is_finite() && manifest.oversample > 0.0) {
            return Err(Error::InvalidSnapshot(format!(
                "oversample must be positive, got {}",
                manifest.oversample
            )));
        }

        let base_dir = manifest_path.parent().unwrap_or(Path::new(".")).to_path_buf();
        let resolve = |region: Option<RegionManifest>| {
            region.map(|r| SnapshotRegion {
                image_path: base_dir.join(r.image),
                links: r.links,
                captured_at: manifest.oversample,
            })
        };

        Ok(Self {
            display_scale: manifest.display_scale,
            header: resolve(manifest.header),
            content: resolve(manifest.content),
        })
    }
}

impl RenderSurface for SurfaceSnapshot {
    fn display_scale(&self) -> f32 {
        self.display_scale
    }

    fn header(&self) -> Option<&dyn SurfaceRegion> {
        self.header.as_ref().map(|r| r as &dyn SurfaceRegion)
    }

    fn content(&self) -> Option<&dyn SurfaceRegion> {
        self.content.as_ref().map(|r| r as &dyn SurfaceRegion)
    }
}

struct SnapshotRegion {
    image_path: PathBuf,
    links: Vec<LinkRegion>,
    captured_at: f32,
}

impl SurfaceRegion for SnapshotRegion {
    fn rasterize(&self, oversample: f32) -> Result<Bitmap> {
        let image = image::open(&self.image_path)
            .map_err(|e| Error::Capture(format!("{}: {e}", self.image_path.display())))?
            .to_rgb8();
        let bitmap = Bitmap::new(image);

        // The snapshot was captured at a fixed factor; resample if the
        // exporter asks for a different one.
        if (oversample - self.captured_at).abs() < 1e-3 {
            return Ok(bitmap);
        }
        let ratio = oversample / self.captured_at;
        Ok(bitmap.resize(
            (bitmap.width() as f32 * ratio).round() as u32,
            (bitmap.height() as f32 * ratio).round() as u32,
        ))
    }

    fn links(&self) -> Vec<LinkRegion> {
        self.links.clone()
    }
}
