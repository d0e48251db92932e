//! Section Splitter — partitions normalized text into named sections by
//! matching heading lines against a fixed controlled vocabulary.

use crate::models::resume::SectionMap;

/// Recognized section headings, matched case-insensitively with an
/// optional trailing colon.
const SECTION_HEADINGS: [&str; 10] = [
    "education",
    "work experience",
    "experience",
    "professional experience",
    "skills",
    "technical skills",
    "projects",
    "certifications",
    "summary",
    "profile",
];

/// Splits normalized resume text into sections.
///
/// Lines are scanned in order; on a heading match the accumulated buffer
/// flushes into the current section key and the matched heading (lowercased)
/// becomes the new key. Text before the first heading lands under
/// `"header"`. A repeated heading overwrites the earlier section's text —
/// last-write-wins is the defined policy. Sections whose text is empty
/// after trimming are omitted; omit-empty takes precedence over
/// last-write-wins, so a recurring heading with an empty body keeps the
/// earlier occurrence's text.
pub fn split_sections(text: &str) -> SectionMap {
    let mut sections = SectionMap::new();
    let mut current = String::from("header");
    let mut buffer: Vec<&str> = Vec::new();

    for line in text.split('\n') {
        if let Some(heading) = match_heading(line) {
            flush(&mut sections, &current, &buffer);
            current = heading;
            buffer.clear();
        } else {
            buffer.push(line);
        }
    }
    flush(&mut sections, &current, &buffer);

    sections
}

/// Returns the lowercased heading if the trimmed line equals one of
/// `SECTION_HEADINGS`, ignoring case and an optional trailing colon.
fn match_heading(line: &str) -> Option<String> {
    let trimmed = line.trim();
    let trimmed = trimmed.strip_suffix(':').unwrap_or(trimmed).trim_end();
    let lower = trimmed.to_lowercase();
    SECTION_HEADINGS
        .iter()
        .any(|h| *h == lower)
        .then_some(lower)
}

fn flush(sections: &mut SectionMap, key: &str, buffer: &[&str]) {
    if buffer.is_empty() {
        return;
    }
    let text = buffer.join("\n").trim().to_string();
    if !text.is_empty() {
        sections.insert(key.to_string(), text);
    }
}
