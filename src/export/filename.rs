//! Output filename convention: sanitized name, month and year.

use chrono::{Local, NaiveDate};

/// Build the conventional export filename for a document name, e.g.
/// `Jane-Doe-August-2026.pdf`. Falls back to `resume` when the name is
/// empty or sanitizes away entirely.
pub fn export_filename(name: &str, extension: &str) -> String {
    stamped_filename(name, extension, Local::now().date_naive())
}

fn stamped_filename(name: &str, extension: &str, date: NaiveDate) -> String {
    let name = name.trim();
    let name = if name.is_empty() { "resume" } else { name };

    // Strip filename-hostile characters, then collapse whitespace to dashes
    let sanitized: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace() || *c == '-' || *c == '_')
        .collect();
    let sanitized = sanitized.split_whitespace().collect::<Vec<_>>().join("-");
    let sanitized = if sanitized.is_empty() {
        "resume".to_string()
    } else {
        sanitized
    };

    format!("{sanitized}-{}.{extension}", date.format("%B-%Y"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 29).unwrap()
    }

    #[test]
    fn test_basic_name() {
        assert_eq!(
            stamped_filename("Jane Doe", "pdf", date()),
            "Jane-Doe-August-2026.pdf"
        );
    }

    #[test]
    fn test_hostile_characters_stripped() {
        assert_eq!(
            stamped_filename("Jane / Doe: CV?", "pdf", date()),
            "Jane-Doe-CV-August-2026.pdf"
        );
    }

    #[test]
    fn test_empty_name_falls_back() {
        assert_eq!(stamped_filename("   ", "pdf", date()), "resume-August-2026.pdf");
        assert_eq!(stamped_filename("???", "md", date()), "resume-August-2026.md");
    }
}
