//! Entry-level types: one item within a repeated resume section.

use serde::{Deserialize, Serialize};

fn default_visible() -> bool {
    true
}

macro_rules! default_visible_impl {
    ($ty:ty { $($field:ident),* $(,)? }) => {
        impl Default for $ty {
            fn default() -> Self {
                Self {
                    $($field: String::new(),)*
                    visible: true,
                }
            }
        }
    };
}

/// One job within the experience section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    /// Job title
    pub title: String,

    /// Company name
    pub company: String,

    /// Company link, empty if none
    #[serde(default)]
    pub company_url: String,

    /// Free-form start marker (e.g. "2020", "Mar 2020")
    pub start_date: String,

    /// Free-form end marker; empty commonly means "present"
    pub end_date: String,

    /// Newline-joined bullet text
    pub bullet_points: String,

    /// Working copy of the bullets, excluded from any rendered output
    #[serde(default)]
    pub bullet_points_draft: String,

    /// Private notes, never rendered
    #[serde(default)]
    pub notes: String,

    /// Hidden entries stay in the record but are excluded from output
    #[serde(default = "default_visible")]
    pub visible: bool,
}

default_visible_impl!(ExperienceEntry {
    title,
    company,
    company_url,
    start_date,
    end_date,
    bullet_points,
    bullet_points_draft,
    notes,
});

/// One degree or certification within the background section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    /// Degree or program name
    pub degree: String,

    /// Institution name
    pub institution: String,

    /// Institution link, empty if none
    #[serde(default)]
    pub institution_url: String,

    /// Free-form start marker
    pub start_date: String,

    /// Free-form end marker
    pub end_date: String,

    /// Newline-joined bullet text
    pub bullet_points: String,

    /// Working copy of the bullets, excluded from any rendered output
    #[serde(default)]
    pub bullet_points_draft: String,

    /// Private notes, never rendered
    #[serde(default)]
    pub notes: String,

    #[serde(default = "default_visible")]
    pub visible: bool,
}

default_visible_impl!(EducationEntry {
    degree,
    institution,
    institution_url,
    start_date,
    end_date,
    bullet_points,
    bullet_points_draft,
    notes,
});

/// One side project.
///
/// Side projects carry no counterpart field; the heading is the project
/// title, optionally wrapped in a markdown link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SideProjectEntry {
    /// Project title
    pub title: String,

    /// Project link, empty if none
    #[serde(default)]
    pub title_url: String,

    /// One-line description shown under the title
    pub description: String,

    /// Free-form start marker
    pub start_date: String,

    /// Free-form end marker
    pub end_date: String,

    /// Newline-joined bullet text
    pub bullet_points: String,

    /// Working copy of the bullets, excluded from any rendered output
    #[serde(default)]
    pub bullet_points_draft: String,

    /// Private notes, never rendered
    #[serde(default)]
    pub notes: String,

    #[serde(default = "default_visible")]
    pub visible: bool,
}

default_visible_impl!(SideProjectEntry {
    title,
    title_url,
    description,
    start_date,
    end_date,
    bullet_points,
    bullet_points_draft,
    notes,
});

/// One role within the volunteering section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolunteeringEntry {
    /// Role name
    pub role: String,

    /// Organization name
    pub organization: String,

    /// Organization link, empty if none
    #[serde(default)]
    pub organization_url: String,

    /// Free-form start marker
    pub start_date: String,

    /// Free-form end marker
    pub end_date: String,

    /// Newline-joined bullet text
    pub bullet_points: String,

    /// Working copy of the bullets, excluded from any rendered output
    #[serde(default)]
    pub bullet_points_draft: String,

    /// Private notes, never rendered
    #[serde(default)]
    pub notes: String,

    #[serde(default = "default_visible")]
    pub visible: bool,
}

default_visible_impl!(VolunteeringEntry {
    role,
    organization,
    organization_url,
    start_date,
    end_date,
    bullet_points,
    bullet_points_draft,
    notes,
});

/// The zero-or-one personal block: free text rather than a collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalBlock {
    /// Newline-joined free text
    pub bullet_points: String,

    /// Working copy, excluded from any rendered output
    #[serde(default)]
    pub bullet_points_draft: String,

    #[serde(default = "default_visible")]
    pub visible: bool,
}

default_visible_impl!(PersonalBlock {
    bullet_points,
    bullet_points_draft,
});

impl PersonalBlock {
    /// Create an empty, visible personal block.
    pub fn new() -> Self {
        Self::default()
    }
}
