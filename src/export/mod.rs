//! Paginated PDF export module.

mod filename;
mod geometry;
mod options;
mod pdf;
mod snapshot;
mod surface;
mod writer;

pub use filename::export_filename;
pub use geometry::{Mm, PageMetrics, PX_TO_MM};
pub use options::ExportOptions;
pub use pdf::PdfExporter;
pub use snapshot::{RegionManifest, SnapshotManifest, SurfaceSnapshot};
pub use surface::{Bitmap, LinkRegion, RenderSurface, SurfaceRegion};
