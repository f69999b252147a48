//! # resumark
//!
//! Resume document interchange engine: recovers a structured resume record
//! from loosely formatted Markdown, and exports a rendered resume surface
//! to a paginated PDF with working hyperlinks.
//!
//! ## Quick Start
//!
//! ```
//! use resumark::import::parse_markdown;
//!
//! let record = parse_markdown("# Jane Doe\njane@x.com | https://jane.dev\n");
//! assert_eq!(record.name, "Jane Doe");
//! assert_eq!(record.email, "jane@x.com");
//! ```
//!
//! ## Features
//!
//! - **Heuristic Markdown import**: recovers name, contact details,
//!   sections, entries, date ranges and skills from free-text markdown;
//!   never fails, degrades to empty fields instead
//! - **Paginated PDF export**: slices a captured render surface into A4
//!   pages, repeats the header block on every page and remaps hyperlink
//!   annotations across page boundaries
//! - **Surface snapshots**: serde-backed on-disk captures so an export can
//!   run without a live browser surface

pub mod error;
pub mod export;
pub mod import;
pub mod model;

// Re-export commonly used types
pub use error::{Error, Result};
pub use export::{
    export_filename, ExportOptions, LinkRegion, PageMetrics, PdfExporter, RenderSurface,
    SurfaceSnapshot,
};
pub use import::parse_markdown;
pub use model::{
    EducationEntry, ExperienceEntry, PersonalBlock, ResumeData, SectionKind, SideProjectEntry,
    VolunteeringEntry,
};

use std::path::Path;

/// Parse a markdown file into a resume record.
///
/// # Example
///
/// ```no_run
/// use resumark::import_markdown_file;
///
/// let record = import_markdown_file("resume.md").unwrap();
/// println!("{}", record.name);
/// ```
pub fn import_markdown_file<P: AsRef<Path>>(path: P) -> Result<ResumeData> {
    let text = std::fs::read_to_string(path)?;
    Ok(parse_markdown(&text))
}

/// Export a render surface to a PDF file with default options.
///
/// # Example
///
/// ```no_run
/// use resumark::{export_pdf, SurfaceSnapshot};
///
/// let surface = SurfaceSnapshot::load("capture/surface.json").unwrap();
/// export_pdf(&surface, "resume.pdf").unwrap();
/// ```
pub fn export_pdf<P: AsRef<Path>>(surface: &dyn RenderSurface, path: P) -> Result<()> {
    PdfExporter::default().export_to_file(surface, path)
}
