//! Section-level metadata: kinds, visibility, titles and ordering.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The closed set of resume sections.
///
/// `Background` aggregates education and skills, matching how combined
/// "Education & Skills" resumes are usually laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionKind {
    Experience,
    Background,
    SideProjects,
    Volunteering,
    Personal,
}

impl SectionKind {
    /// All kinds in their default display order.
    pub const ALL: [SectionKind; 5] = [
        SectionKind::Experience,
        SectionKind::Background,
        SectionKind::SideProjects,
        SectionKind::Volunteering,
        SectionKind::Personal,
    ];

    /// Default display title for the section.
    pub fn default_title(&self) -> &'static str {
        match self {
            SectionKind::Experience => "Experience",
            SectionKind::Background => "Background",
            SectionKind::SideProjects => "Side Projects",
            SectionKind::Volunteering => "Volunteering",
            SectionKind::Personal => "Personal",
        }
    }
}

/// Normalize a section order into a permutation of [`SectionKind::ALL`].
///
/// Duplicates keep their first occurrence; kinds missing from the input are
/// appended in default order, never dropped.
pub fn normalize_section_order(order: &[SectionKind]) -> Vec<SectionKind> {
    let mut normalized = Vec::with_capacity(SectionKind::ALL.len());
    for kind in order {
        if !normalized.contains(kind) {
            normalized.push(*kind);
        }
    }
    for kind in SectionKind::ALL {
        if !normalized.contains(&kind) {
            normalized.push(kind);
        }
    }
    normalized
}

/// Per-section visibility flags and display-title overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionSettings {
    /// Sections absent from the map are visible.
    #[serde(default)]
    pub visible: HashMap<SectionKind, bool>,

    /// Display-title overrides; absent means the default title.
    #[serde(default)]
    pub titles: HashMap<SectionKind, String>,
}

impl SectionSettings {
    /// Whether a section should appear in rendered output.
    pub fn is_visible(&self, kind: SectionKind) -> bool {
        self.visible.get(&kind).copied().unwrap_or(true)
    }

    /// Display title for a section, falling back to the default.
    pub fn title(&self, kind: SectionKind) -> &str {
        self.titles
            .get(&kind)
            .map(String::as_str)
            .unwrap_or_else(|| kind.default_title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_appends_missing_kinds() {
        let order = vec![SectionKind::Personal, SectionKind::Experience];
        let normalized = normalize_section_order(&order);
        assert_eq!(normalized.len(), SectionKind::ALL.len());
        assert_eq!(normalized[0], SectionKind::Personal);
        assert_eq!(normalized[1], SectionKind::Experience);
        // Remaining kinds appended in default order
        assert_eq!(normalized[2], SectionKind::Background);
        assert_eq!(normalized[3], SectionKind::SideProjects);
        assert_eq!(normalized[4], SectionKind::Volunteering);
    }

    #[test]
    fn test_normalize_drops_duplicates() {
        let order = vec![
            SectionKind::Experience,
            SectionKind::Experience,
            SectionKind::Background,
        ];
        let normalized = normalize_section_order(&order);
        assert_eq!(normalized.len(), SectionKind::ALL.len());
        assert_eq!(
            normalized
                .iter()
                .filter(|k| **k == SectionKind::Experience)
                .count(),
            1
        );
    }

    #[test]
    fn test_normalize_empty_is_default_order() {
        assert_eq!(normalize_section_order(&[]), SectionKind::ALL.to_vec());
    }

    #[test]
    fn test_section_settings_defaults() {
        let settings = SectionSettings::default();
        assert!(settings.is_visible(SectionKind::Experience));
        assert_eq!(settings.title(SectionKind::SideProjects), "Side Projects");
    }

    #[test]
    fn test_section_settings_overrides() {
        let mut settings = SectionSettings::default();
        settings.visible.insert(SectionKind::Personal, false);
        settings
            .titles
            .insert(SectionKind::Experience, "Work History".to_string());

        assert!(!settings.is_visible(SectionKind::Personal));
        assert_eq!(settings.title(SectionKind::Experience), "Work History");
    }
}
