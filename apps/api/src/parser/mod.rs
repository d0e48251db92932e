// The resume-to-structured-record pipeline.
// Data flows strictly forward: text -> normalized text -> sections ->
// (field extractors + entry parsers) -> assembled record. Nothing in here
// knows about file formats or HTTP.

pub mod education;
pub mod experience;
pub mod fields;
pub mod normalize;
pub mod sections;
pub mod skills;

use tracing::debug;

use crate::models::resume::{ResumeRecord, SectionMap};
use crate::ner::NerTagger;
use crate::parser::education::parse_education;
use crate::parser::experience::parse_experience;
use crate::parser::fields::{extract_email, extract_name, extract_phone, extract_summary};
use crate::parser::normalize::normalize;
use crate::parser::sections::split_sections;
use crate::parser::skills::{extract_skills, SkillsVocabulary};

/// Assembles one structured record from decoded document text.
///
/// Pure orchestration: normalize, split into sections, resolve section
/// aliases, run the extractors and entry parsers. Every output field is
/// optional — sparse input degrades to sparse output, never to an error.
pub fn parse_resume(text: &str, ner: &dyn NerTagger, vocab: &SkillsVocabulary) -> ResumeRecord {
    let cleaned = normalize(text);
    let sections = split_sections(&cleaned);
    debug!(sections = sections.len(), "split resume into sections");

    // Skills fall back to scanning the whole document when no skills
    // section exists.
    let skills_text = resolve_alias(&sections, &["skills", "technical skills"])
        .unwrap_or(cleaned.as_str());
    let experience_text = resolve_alias(
        &sections,
        &["work experience", "professional experience", "experience"],
    );
    let education_text = resolve_alias(&sections, &["education"]);
    let summary_text = resolve_alias(&sections, &["summary", "profile"]);

    ResumeRecord {
        name: extract_name(&cleaned, ner),
        email: extract_email(&cleaned),
        phone: extract_phone(&cleaned),
        summary: extract_summary(summary_text),
        skills: extract_skills(skills_text, vocab),
        education: education_text.map(parse_education).unwrap_or_default(),
        experience: experience_text.map(parse_experience).unwrap_or_default(),
        raw_sections: sections,
    }
}

/// Explicit ordered-fallback lookup: the first present key wins. Kept as a
/// priority list rather than chained `or`s so precedence stays auditable.
fn resolve_alias<'a>(sections: &'a SectionMap, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .find_map(|key| sections.get(*key).map(String::as_str))
}
