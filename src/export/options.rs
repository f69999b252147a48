//! Export options and configuration.

use crate::export::geometry::PageMetrics;

/// Options for paginated PDF export.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Physical page geometry
    pub page: PageMetrics,

    /// Internal rasterization factor, independent of on-screen zoom
    pub oversample: f32,

    /// JPEG quality for embedded page images (1-100)
    pub jpeg_quality: u8,

    /// Hard cap on emitted pages; guards against runaway pagination, not a
    /// semantic limit
    pub max_pages: u32,
}

impl ExportOptions {
    /// Create new export options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page geometry.
    pub fn with_page(mut self, page: PageMetrics) -> Self {
        self.page = page;
        self
    }

    /// Set the rasterization oversampling factor.
    pub fn with_oversample(mut self, oversample: f32) -> Self {
        self.oversample = oversample.max(0.1);
        self
    }

    /// Set the JPEG quality.
    pub fn with_jpeg_quality(mut self, quality: u8) -> Self {
        self.jpeg_quality = quality.clamp(1, 100);
        self
    }

    /// Set the page-count safety cap.
    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages.max(1);
        self
    }
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            page: PageMetrics::a4(),
            oversample: 2.0,
            jpeg_quality: 95,
            max_pages: 20,
        }
    }
}
