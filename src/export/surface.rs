//! Render surface contract consumed by the exporter.
//!
//! The surface is produced by the surrounding UI layer: a styled visual of
//! the resume at a fixed logical width, exposing a repeating header region,
//! a flowing content region, and the on-screen rectangles of every
//! hyperlink. The exporter only sees this contract, never the document
//! record itself.

use crate::error::{Error, Result};
use crate::export::geometry::Mm;
use image::codecs::jpeg::JpegEncoder;
use image::RgbImage;
use serde::{Deserialize, Serialize};

/// A hyperlink-bearing rectangle, in display pixels relative to the origin
/// of its containing region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkRegion {
    /// Link target
    pub href: String,

    /// Left edge, display px
    pub x: f32,

    /// Top edge, display px
    pub y: f32,

    /// Width, display px
    pub width: f32,

    /// Height, display px
    pub height: f32,
}

/// A rasterized region bitmap.
///
/// Captured at a fixed oversampling factor for print fidelity; all
/// conversions back to physical units go through that factor, never
/// through the display scale.
#[derive(Debug, Clone)]
pub struct Bitmap {
    image: RgbImage,
}

impl Bitmap {
    pub fn new(image: RgbImage) -> Self {
        Self { image }
    }

    /// Solid-white bitmap, useful for tests and placeholders.
    pub fn blank(width: u32, height: u32) -> Self {
        Self {
            image: RgbImage::from_pixel(width.max(1), height.max(1), image::Rgb([255, 255, 255])),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Physical height of the bitmap at the given oversampling factor.
    pub fn physical_height(&self, oversample: f32) -> Mm {
        Mm::from_bitmap_px(self.image.height() as f32, oversample)
    }

    /// Crop a full-width horizontal strip.
    ///
    /// The strip is clamped to the bitmap bounds; a degenerate request
    /// yields a one-row strip rather than a zero-size image.
    pub fn crop_strip(&self, top_px: f32, height_px: f32) -> Bitmap {
        let top = (top_px.round().max(0.0) as u32).min(self.image.height().saturating_sub(1));
        let avail = self.image.height().saturating_sub(top).max(1);
        let height = (height_px.round() as u32).clamp(1, avail);
        let view = image::imageops::crop_imm(&self.image, 0, top, self.image.width(), height);
        Bitmap {
            image: view.to_image(),
        }
    }

    /// Encode as JPEG at the given quality (1-100).
    pub fn to_jpeg(&self, quality: u8) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        let encoder = JpegEncoder::new_with_quality(&mut bytes, quality);
        self.image
            .write_with_encoder(encoder)
            .map_err(|e| Error::Image(e.to_string()))?;
        Ok(bytes)
    }

    /// Resample to a new pixel size.
    pub fn resize(&self, width: u32, height: u32) -> Bitmap {
        Bitmap {
            image: image::imageops::resize(
                &self.image,
                width.max(1),
                height.max(1),
                image::imageops::FilterType::Triangle,
            ),
        }
    }
}

/// One tagged region of the surface: the repeating header or the flowing
/// content block.
pub trait SurfaceRegion {
    /// Rasterize the region at the given oversampling factor.
    ///
    /// Failure here is fatal to the whole export; no partial output is
    /// produced.
    fn rasterize(&self, oversample: f32) -> Result<Bitmap>;

    /// Hyperlink rectangles inside the region, in display pixels relative
    /// to the region origin.
    fn links(&self) -> Vec<LinkRegion>;
}

/// The visual surface handed to the exporter.
///
/// Implementations that revert a transient zoom before capturing must let
/// the surface settle first; `rasterize` is expected to return the steady
/// state, and the exporter performs no retries.
pub trait RenderSurface {
    /// Ratio of the surface's displayed size to its intrinsic size at
    /// capture time. Used only to correct link coordinates, never the
    /// bitmaps.
    fn display_scale(&self) -> f32;

    /// The repeating header block, if the surface has one.
    fn header(&self) -> Option<&dyn SurfaceRegion>;

    /// The flowing content block. Surfaces without one cannot be exported.
    fn content(&self) -> Option<&dyn SurfaceRegion>;
}
