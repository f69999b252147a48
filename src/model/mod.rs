//! Structured resume data model.

mod entry;
mod resume;
mod section;

pub use entry::{
    EducationEntry, ExperienceEntry, PersonalBlock, SideProjectEntry, VolunteeringEntry,
};
pub use resume::{ResumeData, Spacing, Theme};
pub use section::{normalize_section_order, SectionKind, SectionSettings};
