//! Field extractors — independent best-effort heuristics for contact info
//! and the summary. None of these error: no match means an absent value.

use std::sync::LazyLock;

use regex::Regex;

use crate::ner::{EntityLabel, NerTagger};

static RE_EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9-.]+")
        .expect("regex is compile-time constant")
});

// Deliberately permissive: a digit-and-separator run of at least 9 digits
// with an optional leading '+'. Known limitation: can match other long
// numeric sequences (IDs, zip+phone concatenations).
static RE_PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\+?\d[\d\- ]{7,}\d").expect("regex is compile-time constant"));

/// First email-shaped token in the text, if any. Syntactic shape only,
/// no deliverability validation.
pub fn extract_email(text: &str) -> Option<String> {
    RE_EMAIL.find(text).map(|m| m.as_str().to_string())
}

/// First phone-shaped token in the text, if any.
pub fn extract_phone(text: &str) -> Option<String> {
    RE_PHONE.find(text).map(|m| m.as_str().to_string())
}

/// Candidate name for the document.
///
/// Resume names are conventionally the first visible text, so the tagger
/// runs only over the first three non-blank lines; the first span tagged
/// as a person wins. NER is not authoritative here — with no person span
/// the first non-blank line is returned verbatim.
pub fn extract_name(text: &str, ner: &dyn NerTagger) -> Option<String> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    let first = *lines.first()?;

    let excerpt = lines
        .iter()
        .take(3)
        .copied()
        .collect::<Vec<_>>()
        .join("\n");

    ner.tag_persons(&excerpt)
        .into_iter()
        .find(|span| span.label == EntityLabel::Person)
        .map(|span| span.text)
        .or_else(|| Some(first.to_string()))
}

/// Trimmed section text, or `None` when the section is absent or blank.
pub fn extract_summary(section_text: Option<&str>) -> Option<String> {
    section_text
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}
