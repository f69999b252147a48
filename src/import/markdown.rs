//! Line-oriented markdown importer.
//!
//! Recovers a [`ResumeData`] record from loosely formatted markdown pasted
//! by a user or produced by an AI converter. This is a single-pass state
//! machine with no backtracking: headings switch state, everything else is
//! attributed to whatever section or entry is currently active. Malformed
//! input never fails; unattributable content is dropped with a debug log.

use super::contact::{apply_contact_line, looks_like_contact_line};
use crate::model::{
    EducationEntry, ExperienceEntry, PersonalBlock, ResumeData, SectionKind, SideProjectEntry,
    VolunteeringEntry,
};
use once_cell::sync::Lazy;
use regex::Regex;

static MD_LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());
static DATE_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec|now|present").unwrap());
static ANY_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]").unwrap());
static SKILLS_LABEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\*\*skills:\*\*|skills:").unwrap());

/// Level-2 heading keywords, matched as case-insensitive substrings.
const SECTION_KEYWORDS: &[(&[&str], SectionKind)] = &[
    (&["experience", "work", "employment"], SectionKind::Experience),
    (
        &["education", "skills", "background", "academic"],
        SectionKind::Background,
    ),
    (&["project"], SectionKind::SideProjects),
    (&["volunteer"], SectionKind::Volunteering),
    (&["personal", "about", "interests"], SectionKind::Personal),
];

/// Parse free-text markdown into a resume record.
///
/// Never fails: unrecognized structure degrades to empty fields or dropped
/// lines. The output is a partial record meant to be merged over defaults
/// with [`ResumeData::merge_imported`].
pub fn parse_markdown(markdown: &str) -> ResumeData {
    let mut parser = Parser::new();
    for line in markdown.lines() {
        parser.feed(line.trim());
    }
    parser.finish()
}

/// Cursor into the entry collection currently being built.
///
/// Stored as section kind + index rather than a reference so the parser
/// never holds an alias into a collection it is still appending to.
#[derive(Debug, Clone, Copy)]
struct EntryCursor {
    kind: SectionKind,
    index: usize,
}

struct Parser {
    data: ResumeData,
    section: Option<SectionKind>,
    cursor: Option<EntryCursor>,
}

impl Parser {
    fn new() -> Self {
        Self {
            data: ResumeData::default(),
            section: None,
            cursor: None,
        }
    }

    fn feed(&mut self, line: &str) {
        if line.is_empty() && self.section != Some(SectionKind::Personal) && self.cursor.is_none() {
            return;
        }

        // Name: level-1 heading before any section starts
        if let Some(rest) = line.strip_prefix("# ") {
            if self.section.is_none() {
                self.data.name = rest.trim().to_string();
                return;
            }
        }

        // Contact line: only before any section, and never a heading
        if self.section.is_none() && looks_like_contact_line(line) && !line.starts_with('#') {
            let consumed = apply_contact_line(line, &mut self.data);
            if consumed {
                return;
            }
        }

        // Section switch
        if let Some(rest) = line.strip_prefix("## ") {
            self.switch_section(rest.trim());
            return;
        }

        // New entry in the active section
        if let Some(rest) = line.strip_prefix("### ") {
            self.start_entry(rest.trim());
            return;
        }

        // Date range for the active entry
        if self.cursor.is_some() && self.try_date_line(line) {
            return;
        }

        // Skills label inside the background section
        if self.section == Some(SectionKind::Background)
            && line.to_lowercase().contains("skills:")
        {
            self.data.skills = SKILLS_LABEL.replace_all(line, "").trim().to_string();
            return;
        }

        self.push_content_line(line);
    }

    fn switch_section(&mut self, title: &str) {
        let lower = title.to_lowercase();
        let kind = SECTION_KEYWORDS.iter().find_map(|(keywords, kind)| {
            keywords
                .iter()
                .any(|kw| lower.contains(kw))
                .then_some(*kind)
        });

        self.section = kind;
        self.cursor = None;

        match kind {
            Some(SectionKind::Personal) => {
                self.data.personal = Some(PersonalBlock::new());
            }
            Some(_) => {}
            None => {
                // Content until the next heading is dropped, not misfiled
                log::debug!("Unrecognized section heading, dropping until next: {title:?}");
            }
        }
    }

    fn start_entry(&mut self, heading: &str) {
        let kind = match self.section {
            Some(kind) => kind,
            None => {
                log::debug!("Entry heading outside any section, dropped: {heading:?}");
                return;
            }
        };

        match kind {
            SectionKind::Experience => {
                let (title, counterpart) = split_counterpart(heading);
                let (company, company_url) = extract_link(&counterpart);
                self.data.experience.push(ExperienceEntry {
                    title,
                    company,
                    company_url,
                    ..Default::default()
                });
                self.cursor = Some(EntryCursor {
                    kind,
                    index: self.data.experience.len() - 1,
                });
            }
            SectionKind::Background => {
                let (degree, counterpart) = split_counterpart(heading);
                let (institution, institution_url) = extract_link(&counterpart);
                self.data.education.push(EducationEntry {
                    degree,
                    institution,
                    institution_url,
                    ..Default::default()
                });
                self.cursor = Some(EntryCursor {
                    kind,
                    index: self.data.education.len() - 1,
                });
            }
            SectionKind::SideProjects => {
                // No counterpart concept; the whole heading is the title
                let (title, title_url) = extract_link(heading);
                self.data.side_projects.push(SideProjectEntry {
                    title,
                    title_url,
                    ..Default::default()
                });
                self.cursor = Some(EntryCursor {
                    kind,
                    index: self.data.side_projects.len() - 1,
                });
            }
            SectionKind::Volunteering => {
                let (role, counterpart) = split_counterpart(heading);
                let (organization, organization_url) = extract_link(&counterpart);
                self.data.volunteering.push(VolunteeringEntry {
                    role,
                    organization,
                    organization_url,
                    ..Default::default()
                });
                self.cursor = Some(EntryCursor {
                    kind,
                    index: self.data.volunteering.len() - 1,
                });
            }
            SectionKind::Personal => {
                log::debug!("Entry heading inside personal section, dropped: {heading:?}");
            }
        }
    }

    /// Try to consume a `start — end` date line for the active entry.
    ///
    /// Best effort: a line only counts as dates when one side carries a
    /// digit or a month/"now"/"present" token. Bullet text that happens to
    /// contain a spaced hyphen and a number is a known false positive,
    /// preserved rather than second-guessed.
    fn try_date_line(&mut self, line: &str) -> bool {
        let separator = if line.contains(" — ") {
            Some(" — ")
        } else if line.contains(" - ") {
            Some(" - ")
        } else {
            None
        };

        let (start, end) = match separator {
            Some(separator) => {
                let mut parts = line.split(separator).map(str::trim);
                (
                    parts.next().unwrap_or(""),
                    parts.next().unwrap_or(""),
                )
            }
            // Trailing separator: open-ended range, empty end marker
            None => match line.strip_suffix(" —").or_else(|| line.strip_suffix(" -")) {
                Some(rest) => (rest.trim(), ""),
                None => return false,
            },
        };

        if !is_date_token(start) && !is_date_token(end) {
            return false;
        }

        let (start, end) = (start.to_string(), end.to_string());
        match self.cursor {
            Some(EntryCursor {
                kind: SectionKind::Experience,
                index,
            }) => {
                let entry = &mut self.data.experience[index];
                entry.start_date = start;
                entry.end_date = end;
            }
            Some(EntryCursor {
                kind: SectionKind::Background,
                index,
            }) => {
                let entry = &mut self.data.education[index];
                entry.start_date = start;
                entry.end_date = end;
            }
            Some(EntryCursor {
                kind: SectionKind::SideProjects,
                index,
            }) => {
                let entry = &mut self.data.side_projects[index];
                entry.start_date = start;
                entry.end_date = end;
            }
            Some(EntryCursor {
                kind: SectionKind::Volunteering,
                index,
            }) => {
                let entry = &mut self.data.volunteering[index];
                entry.start_date = start;
                entry.end_date = end;
            }
            _ => return false,
        }
        true
    }

    fn push_content_line(&mut self, line: &str) {
        if self.section == Some(SectionKind::Personal) {
            if let Some(personal) = self.data.personal.as_mut() {
                append_line(&mut personal.bullet_points, line);
            }
            return;
        }

        let cursor = match self.cursor {
            Some(cursor) => cursor,
            None => return,
        };
        if line.is_empty() {
            return;
        }

        let is_bullet = line.starts_with("- ") || line.starts_with("* ");
        match cursor.kind {
            SectionKind::Experience => {
                append_line(&mut self.data.experience[cursor.index].bullet_points, line);
            }
            SectionKind::Background => {
                append_line(&mut self.data.education[cursor.index].bullet_points, line);
            }
            SectionKind::SideProjects => {
                let entry = &mut self.data.side_projects[cursor.index];
                // The first free line under a project heading is its
                // description, not a bullet
                if !is_bullet && entry.bullet_points.is_empty() && entry.description.is_empty() {
                    entry.description = line.to_string();
                } else {
                    append_line(&mut entry.bullet_points, line);
                }
            }
            SectionKind::Volunteering => {
                append_line(&mut self.data.volunteering[cursor.index].bullet_points, line);
            }
            SectionKind::Personal => unreachable!("personal section has no entry cursor"),
        }
    }

    fn finish(mut self) -> ResumeData {
        for entry in &mut self.data.experience {
            entry.bullet_points = entry.bullet_points.trim().to_string();
        }
        for entry in &mut self.data.education {
            entry.bullet_points = entry.bullet_points.trim().to_string();
        }
        for entry in &mut self.data.side_projects {
            entry.bullet_points = entry.bullet_points.trim().to_string();
            entry.description = entry.description.trim().to_string();
        }
        for entry in &mut self.data.volunteering {
            entry.bullet_points = entry.bullet_points.trim().to_string();
        }
        if let Some(personal) = self.data.personal.as_mut() {
            personal.bullet_points = personal.bullet_points.trim().to_string();
        }
        self.data
    }
}

fn is_date_token(s: &str) -> bool {
    ANY_DIGIT.is_match(s) || DATE_TOKEN.is_match(s)
}

/// Split an entry heading on the first `@` into title and counterpart.
fn split_counterpart(heading: &str) -> (String, String) {
    let mut parts = heading.split('@').map(str::trim);
    let title = parts.next().unwrap_or("").to_string();
    let counterpart = parts.next().unwrap_or("").to_string();
    (title, counterpart)
}

/// Extract `[text](url)` from a heading fragment, or pass it through.
fn extract_link(text: &str) -> (String, String) {
    match MD_LINK.captures(text) {
        Some(captures) => (captures[1].to_string(), captures[2].to_string()),
        None => (text.to_string(), String::new()),
    }
}

fn append_line(buffer: &mut String, line: &str) {
    if !buffer.is_empty() {
        buffer.push('\n');
    }
    buffer.push_str(line);
}
