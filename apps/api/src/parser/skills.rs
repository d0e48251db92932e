//! Skills vocabulary and matching.

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result};

/// Curated default skill set. Callers can supply an alternate vocabulary
/// (see `SkillsVocabulary::from_file` and the `SKILLS_VOCAB_PATH` setting).
const DEFAULT_SKILLS: [&str; 31] = [
    "python",
    "java",
    "c++",
    "javascript",
    "typescript",
    "react",
    "node.js",
    "django",
    "flask",
    "sql",
    "mysql",
    "postgresql",
    "mongodb",
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "git",
    "machine learning",
    "deep learning",
    "nlp",
    "pandas",
    "numpy",
    "tensorflow",
    "pytorch",
    "html",
    "css",
    "power bi",
    "tableau",
    "excel",
];

/// The canonical skill strings matched against document text. Loaded once
/// at startup and read-only afterwards.
#[derive(Debug, Clone)]
pub struct SkillsVocabulary {
    terms: Vec<String>,
}

impl SkillsVocabulary {
    /// Builds the vocabulary from arbitrary terms; blank entries are dropped.
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let terms = terms
            .into_iter()
            .map(Into::into)
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();
        Self { terms }
    }

    /// Loads a newline-delimited vocabulary file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read skills vocabulary '{}'", path.display()))?;
        Ok(Self::from_terms(contents.lines()))
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl Default for SkillsVocabulary {
    fn default() -> Self {
        Self::from_terms(DEFAULT_SKILLS)
    }
}

/// Case-insensitive substring scan of every vocabulary term against the
/// text. Returns the matched terms in canonical vocabulary case, sorted
/// lexicographically and deduplicated (case-insensitively).
pub fn extract_skills(text: &str, vocab: &SkillsVocabulary) -> Vec<String> {
    let lower_text = text.to_lowercase();
    let mut seen = BTreeSet::new();
    let mut found: Vec<String> = Vec::new();

    for term in vocab.terms() {
        let lower_term = term.to_lowercase();
        if lower_text.contains(&lower_term) && seen.insert(lower_term) {
            found.push(term.clone());
        }
    }
    found.sort();
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_skills_sorted_case_insensitive() {
        let vocab = SkillsVocabulary::default();
        let found = extract_skills("I use Docker, AWS and machine LEARNING daily", &vocab);
        assert_eq!(found, vec!["aws", "docker", "machine learning"]);
    }

    #[test]
    fn test_extract_skills_empty_text() {
        let vocab = SkillsVocabulary::default();
        assert!(extract_skills("", &vocab).is_empty());
    }

    #[test]
    fn test_extract_skills_is_idempotent() {
        let vocab = SkillsVocabulary::default();
        let text = "python python PYTHON sql";
        let first = extract_skills(text, &vocab);
        let second = extract_skills(&first.join(" "), &vocab);
        assert_eq!(first, vec!["python", "sql"]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_extract_skills_vocabulary_order_independent() {
        let forward = SkillsVocabulary::from_terms(["Rust", "Go", "Zig"]);
        let reverse = SkillsVocabulary::from_terms(["Zig", "Go", "Rust"]);
        let text = "rust and zig and go";
        assert_eq!(
            extract_skills(text, &forward),
            extract_skills(text, &reverse)
        );
    }

    #[test]
    fn test_extract_skills_canonical_case_and_dedup() {
        let vocab = SkillsVocabulary::from_terms(["PostgreSQL", "postgresql"]);
        let found = extract_skills("we run postgresql", &vocab);
        assert_eq!(found, vec!["PostgreSQL"]);
    }

    #[test]
    fn test_vocabulary_drops_blank_terms() {
        let vocab = SkillsVocabulary::from_terms(["rust", "  ", ""]);
        assert_eq!(vocab.len(), 1);
    }
}
