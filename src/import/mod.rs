//! Markdown import module.

mod contact;
mod markdown;

pub use markdown::parse_markdown;
