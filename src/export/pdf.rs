//! Paginated PDF export.
//!
//! Slices a single tall content bitmap into fixed-size pages, repeating
//! the header block at the top of every page and remapping hyperlink
//! rectangles from on-screen coordinates into each page's physical
//! coordinate space.

use crate::error::{Error, Result};
use crate::export::geometry::{Mm, PageMetrics};
use crate::export::options::ExportOptions;
use crate::export::surface::{Bitmap, LinkRegion, RenderSurface};
use crate::export::writer::{self, ImagePlacement, LinkPlacement, PagePlan, RectMm};
use std::fs;
use std::path::Path;

/// Links up to this far above a page's slice window are still annotated on
/// that page, so a link whose glyph box starts fractionally before the cut
/// is not lost to rounding.
const LINK_WINDOW_SLACK: Mm = Mm(1.0);

/// Slice heights below this are treated as fully consumed.
const EPSILON_MM: f32 = 1e-3;

/// Paginated PDF exporter.
///
/// One export invocation owns its rasterized bitmaps exclusively; the
/// whole operation is atomic — it either returns the complete file bytes
/// or an error, never a partial document.
pub struct PdfExporter {
    options: ExportOptions,
}

impl PdfExporter {
    /// Create an exporter with the given options.
    pub fn new(options: ExportOptions) -> Self {
        Self { options }
    }

    /// Export a render surface to PDF bytes.
    ///
    /// Fails with [`Error::MissingContent`] when the surface exposes no
    /// flowing-content region, and with [`Error::Capture`] when a region
    /// cannot be rasterized.
    pub fn export(&self, surface: &dyn RenderSurface) -> Result<Vec<u8>> {
        let content_region = surface.content().ok_or(Error::MissingContent)?;

        let scale = surface.display_scale();
        if !(scale.is_finite() && scale > 0.0) {
            return Err(Error::Capture(format!(
                "surface reported a non-positive display scale: {scale}"
            )));
        }

        let metrics = self.options.page;
        let oversample = self.options.oversample;

        // Rasterize each region once, up front. Any failure aborts here,
        // before a single page exists.
        let header = match surface.header() {
            Some(region) => Some((region.rasterize(oversample)?, region.links())),
            None => None,
        };
        let content_bitmap = content_region.rasterize(oversample)?;
        let content_links = content_region.links();

        let header_placement = match &header {
            Some((bitmap, _)) => Some(self.place_header(bitmap)?),
            None => None,
        };
        let header_links = header.map(|(_, links)| links).unwrap_or_default();
        let header_height = header_placement
            .as_ref()
            .map(|p| p.rect.height)
            .unwrap_or(Mm::ZERO);

        let content_height = content_bitmap.physical_height(oversample);
        let mut remaining = content_height;
        let mut offset = Mm::ZERO;
        let mut pages: Vec<PagePlan> = Vec::new();

        log::debug!(
            "Export: content {:.1}mm, header {:.1}mm, page window {:.1}mm",
            content_height.0,
            header_height.0,
            metrics.space_below(metrics.margin).0
        );

        // First page is always emitted, even for zero-height content.
        loop {
            let mut cursor = metrics.margin;
            let mut links: Vec<LinkPlacement> = Vec::new();

            if header_placement.is_some() {
                self.place_links(
                    &mut links,
                    &header_links,
                    scale,
                    &metrics,
                    cursor,
                    None,
                );
                cursor += header_height + metrics.header_gap;
            }

            let slice = remaining.min(metrics.space_below(cursor));
            let mut strip = None;
            if slice.0 > EPSILON_MM {
                let strip_bitmap = content_bitmap.crop_strip(
                    offset.to_bitmap_px(oversample),
                    slice.to_bitmap_px(oversample),
                );
                strip = Some(ImagePlacement {
                    jpeg: strip_bitmap.to_jpeg(self.options.jpeg_quality)?,
                    width_px: strip_bitmap.width(),
                    height_px: strip_bitmap.height(),
                    rect: RectMm {
                        x: metrics.margin,
                        y: cursor,
                        width: metrics.content_width(),
                        height: slice,
                    },
                });

                self.place_links(
                    &mut links,
                    &content_links,
                    scale,
                    &metrics,
                    cursor,
                    Some((offset, slice)),
                );

                remaining -= slice;
                offset += slice;
            }

            pages.push(PagePlan { strip, links });

            if remaining.0 <= EPSILON_MM {
                break;
            }
            if pages.len() as u32 >= self.options.max_pages {
                log::warn!(
                    "Export hit the {}-page safety cap with {:.1}mm of content left",
                    self.options.max_pages,
                    remaining.0
                );
                break;
            }
        }

        writer::write_pdf(&metrics, header_placement.as_ref(), &pages)
    }

    /// Export and write the finished file.
    ///
    /// The file is created only after the complete byte vector exists, so
    /// a failed export leaves nothing behind.
    pub fn export_to_file<P: AsRef<Path>>(&self, surface: &dyn RenderSurface, path: P) -> Result<()> {
        let bytes = self.export(surface)?;
        fs::write(path, bytes)?;
        Ok(())
    }

    fn place_header(&self, bitmap: &Bitmap) -> Result<ImagePlacement> {
        let metrics = self.options.page;
        Ok(ImagePlacement {
            jpeg: bitmap.to_jpeg(self.options.jpeg_quality)?,
            width_px: bitmap.width(),
            height_px: bitmap.height(),
            rect: RectMm {
                x: metrics.margin,
                y: metrics.margin,
                width: metrics.content_width(),
                height: bitmap.physical_height(self.options.oversample),
            },
        })
    }

    /// Remap a region's links into page coordinates.
    ///
    /// `window` restricts placement to links whose vertical position falls
    /// inside `[offset - slack, offset + slice)` — the slice actually
    /// rendered on this page. Header links pass `None` and land on every
    /// page. Links outside every window are simply dropped.
    fn place_links(
        &self,
        out: &mut Vec<LinkPlacement>,
        links: &[LinkRegion],
        scale: f32,
        metrics: &PageMetrics,
        cursor: Mm,
        window: Option<(Mm, Mm)>,
    ) {
        for link in links {
            if link.href.is_empty() {
                continue;
            }

            let rel_x = Mm::from_display_px(link.x, scale);
            let rel_y = Mm::from_display_px(link.y, scale);
            let width = Mm::from_display_px(link.width, scale);
            let height = Mm::from_display_px(link.height, scale);

            let y = match window {
                Some((offset, slice)) => {
                    if rel_y < offset - LINK_WINDOW_SLACK || rel_y >= offset + slice {
                        continue;
                    }
                    cursor + (rel_y - offset)
                }
                None => cursor + rel_y,
            };

            // Keep only links that land inside the printable area
            if y.0 < 0.0 || y >= metrics.height - metrics.margin {
                continue;
            }

            out.push(LinkPlacement {
                href: link.href.clone(),
                rect: RectMm {
                    x: metrics.margin + rel_x,
                    y,
                    width,
                    height,
                },
            });
        }
    }
}

impl Default for PdfExporter {
    fn default() -> Self {
        Self::new(ExportOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::surface::SurfaceRegion;

    /// Synthetic region backed by a blank bitmap of fixed intrinsic size.
    struct FixedRegion {
        css_width: f32,
        css_height: f32,
        links: Vec<LinkRegion>,
        fail: bool,
    }

    impl SurfaceRegion for FixedRegion {
        fn rasterize(&self, oversample: f32) -> Result<Bitmap> {
            if self.fail {
                return Err(Error::Capture("synthetic capture failure".to_string()));
            }
            Ok(Bitmap::blank(
                (self.css_width * oversample) as u32,
                (self.css_height * oversample) as u32,
            ))
        }

        fn links(&self) -> Vec<LinkRegion> {
            self.links.clone()
        }
    }

    struct FixedSurface {
        scale: f32,
        header: Option<FixedRegion>,
        content: Option<FixedRegion>,
    }

    impl RenderSurface for FixedSurface {
        fn display_scale(&self) -> f32 {
            self.scale
        }

        fn header(&self) -> Option<&dyn SurfaceRegion> {
            self.header.as_ref().map(|r| r as &dyn SurfaceRegion)
        }

        fn content(&self) -> Option<&dyn SurfaceRegion> {
            self.content.as_ref().map(|r| r as &dyn SurfaceRegion)
        }
    }

    fn content_surface(css_height: f32) -> FixedSurface {
        FixedSurface {
            scale: 1.0,
            header: None,
            content: Some(FixedRegion {
                css_width: 700.0,
                css_height,
                links: vec![],
                fail: false,
            }),
        }
    }

    #[test]
    fn test_missing_content_region_rejected() {
        let surface = FixedSurface {
            scale: 1.0,
            header: None,
            content: None,
        };
        let result = PdfExporter::default().export(&surface);
        assert!(matches!(result, Err(Error::MissingContent)));
    }

    #[test]
    fn test_capture_failure_aborts() {
        let surface = FixedSurface {
            scale: 1.0,
            header: None,
            content: Some(FixedRegion {
                css_width: 700.0,
                css_height: 100.0,
                links: vec![],
                fail: true,
            }),
        };
        let result = PdfExporter::default().export(&surface);
        assert!(matches!(result, Err(Error::Capture(_))));
    }

    #[test]
    fn test_invalid_display_scale_rejected() {
        let mut surface = content_surface(100.0);
        surface.scale = 0.0;
        let result = PdfExporter::default().export(&surface);
        assert!(matches!(result, Err(Error::Capture(_))));
    }

    #[test]
    fn test_zero_height_content_emits_one_page() {
        let surface = content_surface(0.0);
        let bytes = PdfExporter::default().export(&surface).unwrap();
        let parsed = lopdf::Document::load_mem(&bytes).unwrap();
        assert_eq!(parsed.get_pages().len(), 1);
    }
}
