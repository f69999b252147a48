//! Contact-line detection and token classification.
//!
//! Before any section heading is seen, a line carrying pipe-separated
//! tokens, an `@`, a URL, or a digit run is sniffed as the contact line.
//! Tokens are classified by content; the first match wins per field and
//! already-filled fields are never overwritten.

use crate::model::ResumeData;
use once_cell::sync::Lazy;
use regex::Regex;

static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]{3,}").unwrap());
static ANY_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]").unwrap());

/// Whether a (trimmed) line looks like contact info while no section is
/// active.
pub(crate) fn looks_like_contact_line(line: &str) -> bool {
    line.contains(" | ")
        || line.contains('@')
        || line.contains("http")
        || line.contains("www")
        || DIGIT_RUN.is_match(line)
}

/// Classify contact tokens into the record.
///
/// Returns `true` when the line was a multi-part pipe line, in which case
/// the caller is done with it; single-token lines fall through to the rest
/// of the state machine.
pub(crate) fn apply_contact_line(line: &str, data: &mut ResumeData) -> bool {
    let multi_part = line.contains(" | ");
    let parts: Vec<&str> = if multi_part {
        line.split('|').map(str::trim).collect()
    } else {
        vec![line]
    };

    for part in parts {
        if part.contains('@') && data.email.is_empty() {
            data.email = part.to_string();
        } else if (part.contains("github.com") || part.to_lowercase().contains("github"))
            && data.github.is_empty()
        {
            data.github = part.to_string();
        } else if (part.contains("http") || part.contains("www")) && data.website.is_empty() {
            data.website = part.to_string();
        } else if ANY_DIGIT.is_match(part) && data.phone.is_empty() && part.len() >= 7 {
            data.phone = part.to_string();
        }
    }

    multi_part
}
