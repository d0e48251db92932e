use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Lowercase section name -> verbatim section text.
///
/// Text before the first recognized heading lives under the synthetic
/// `"header"` key. Key order is not semantically significant.
pub type SectionMap = BTreeMap<String, String>;

/// One education block parsed out of the "education" section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: Option<String>,
    pub institution: Option<String>,
    pub start_year: Option<String>,
    pub end_year: Option<String>,
    /// Original block text, retained for diagnostics.
    pub raw: String,
}

/// One job block parsed out of the experience section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub job_title: Option<String>,
    pub company: Option<String>,
    /// "Month Year" as captured from the document.
    pub start_date: Option<String>,
    /// "Month Year", or the literal end token ("Present"/"Current").
    pub end_date: Option<String>,
    pub description: Option<String>,
    pub raw: String,
}

/// The structured record produced for a single document.
///
/// Every field is best-effort: extractors return absent values instead of
/// failing, so downstream consumers must treat each field as optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub summary: Option<String>,
    /// Matched vocabulary terms, sorted and deduplicated, canonical case.
    pub skills: Vec<String>,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    /// Raw section texts, retained for diagnostics.
    pub raw_sections: SectionMap,
}
