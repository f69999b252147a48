//! The canonical structured resume record.

use super::entry::{
    EducationEntry, ExperienceEntry, PersonalBlock, SideProjectEntry, VolunteeringEntry,
};
use super::section::{normalize_section_order, SectionKind, SectionSettings};
use serde::{Deserialize, Serialize};

/// Presentation density of the rendered resume.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Spacing {
    Compact,
    #[default]
    Normal,
    Relaxed,
}

/// Presentation metadata, passed through untouched by import and export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Section header accent color (CSS color string)
    #[serde(default)]
    pub accent_color: String,

    /// Section header text color
    #[serde(default)]
    pub text_color: String,

    /// Font family name
    #[serde(default)]
    pub font_family: String,

    /// Layout density
    #[serde(default)]
    pub spacing: Spacing,
}

/// The in-memory structured resume.
///
/// Every scalar uses an empty string for "absent", never an option, so the
/// record always serializes to a complete object. The importer produces one
/// of these from markdown; the UI layer mutates it field by field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeData {
    /// Candidate name
    #[serde(default)]
    pub name: String,

    /// Contact email
    #[serde(default)]
    pub email: String,

    /// Contact phone
    #[serde(default)]
    pub phone: String,

    /// Personal website URL
    #[serde(default)]
    pub website: String,

    /// Code-hosting profile URL
    #[serde(default)]
    pub github: String,

    /// Experience section entries
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,

    /// Education entries (part of the background section)
    #[serde(default)]
    pub education: Vec<EducationEntry>,

    /// Side project entries
    #[serde(default)]
    pub side_projects: Vec<SideProjectEntry>,

    /// Volunteering entries
    #[serde(default)]
    pub volunteering: Vec<VolunteeringEntry>,

    /// Free-text personal block, at most one
    #[serde(default)]
    pub personal: Option<PersonalBlock>,

    /// Free-text skills line (part of the background section)
    #[serde(default)]
    pub skills: String,

    /// Working copy of the skills line, excluded from output
    #[serde(default)]
    pub skills_draft: String,

    /// Per-section visibility and title overrides
    #[serde(default)]
    pub sections: SectionSettings,

    /// Section display order; normalized on load
    #[serde(default)]
    pub section_order: Vec<SectionKind>,

    /// Presentation pass-through
    #[serde(default)]
    pub theme: Theme,
}

impl ResumeData {
    /// Create an empty record with the default section order.
    pub fn new() -> Self {
        Self {
            section_order: SectionKind::ALL.to_vec(),
            ..Default::default()
        }
    }

    /// Section order as a full permutation, with missing kinds appended.
    pub fn normalized_section_order(&self) -> Vec<SectionKind> {
        normalize_section_order(&self.section_order)
    }

    /// Experience entries that should appear in rendered output.
    pub fn visible_experience(&self) -> impl Iterator<Item = &ExperienceEntry> {
        self.experience.iter().filter(|e| e.visible)
    }

    /// Education entries that should appear in rendered output.
    pub fn visible_education(&self) -> impl Iterator<Item = &EducationEntry> {
        self.education.iter().filter(|e| e.visible)
    }

    /// Side projects that should appear in rendered output.
    pub fn visible_side_projects(&self) -> impl Iterator<Item = &SideProjectEntry> {
        self.side_projects.iter().filter(|e| e.visible)
    }

    /// Volunteering entries that should appear in rendered output.
    pub fn visible_volunteering(&self) -> impl Iterator<Item = &VolunteeringEntry> {
        self.volunteering.iter().filter(|e| e.visible)
    }

    /// The personal block, if present and visible.
    pub fn visible_personal(&self) -> Option<&PersonalBlock> {
        self.personal.as_ref().filter(|p| p.visible)
    }

    /// Whether the record carries no content at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.email.is_empty()
            && self.phone.is_empty()
            && self.website.is_empty()
            && self.github.is_empty()
            && self.experience.is_empty()
            && self.education.is_empty()
            && self.side_projects.is_empty()
            && self.volunteering.is_empty()
            && self.personal.is_none()
            && self.skills.is_empty()
    }

    /// Merge imported content over this record.
    ///
    /// Only content fields are taken from `imported`; section settings and
    /// theme keep their current values, so a markdown import never clobbers
    /// presentation choices.
    pub fn merge_imported(&mut self, imported: ResumeData) {
        self.name = imported.name;
        self.email = imported.email;
        self.phone = imported.phone;
        self.website = imported.website;
        self.github = imported.github;
        self.experience = imported.experience;
        self.education = imported.education;
        self.side_projects = imported.side_projects;
        self.volunteering = imported.volunteering;
        self.personal = imported.personal;
        self.skills = imported.skills;
        self.section_order = self.normalized_section_order();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_is_empty() {
        let record = ResumeData::new();
        assert!(record.is_empty());
        assert_eq!(record.section_order, SectionKind::ALL.to_vec());
    }

    #[test]
    fn test_visibility_helpers_exclude_hidden() {
        let mut record = ResumeData::new();
        record.experience.push(ExperienceEntry {
            title: "Visible".to_string(),
            ..Default::default()
        });
        record.experience.push(ExperienceEntry {
            title: "Hidden".to_string(),
            visible: false,
            ..Default::default()
        });

        let titles: Vec<_> = record.visible_experience().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Visible"]);
        // Hidden entries remain in the record itself
        assert_eq!(record.experience.len(), 2);
    }

    #[test]
    fn test_hidden_personal_block() {
        let mut record = ResumeData::new();
        record.personal = Some(PersonalBlock {
            bullet_points: "likes hiking".to_string(),
            visible: false,
            ..Default::default()
        });
        assert!(record.visible_personal().is_none());
        assert!(record.personal.is_some());
    }

    #[test]
    fn test_merge_imported_keeps_presentation() {
        let mut record = ResumeData::new();
        record.theme.accent_color = "#123456".to_string();
        record.section_order = vec![SectionKind::Personal];

        let mut imported = ResumeData::new();
        imported.name = "Jane Doe".to_string();
        record.merge_imported(imported);

        assert_eq!(record.name, "Jane Doe");
        assert_eq!(record.theme.accent_color, "#123456");
        // Order stays user-chosen but is completed to a full permutation
        assert_eq!(record.section_order[0], SectionKind::Personal);
        assert_eq!(record.section_order.len(), SectionKind::ALL.len());
    }

    #[test]
    fn test_record_round_trips_through_json() {
        let mut record = ResumeData::new();
        record.name = "Jane Doe".to_string();
        record.skills = "Rust, SQL".to_string();
        record.personal = Some(PersonalBlock::new());

        let json = serde_json::to_string(&record).unwrap();
        let back: ResumeData = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
