//! Named-entity tagging behind a single pluggable interface.
//!
//! The pipeline only ever asks one question — "which spans look like a
//! person?" — so the whole provider surface is `tag_persons`. The default
//! `RuleBasedTagger` is deterministic and dependency-free; a model-backed
//! tagger can replace it behind the trait without touching extraction
//! logic. The tagger is constructed once at startup, held in `AppState` as
//! `Arc<dyn NerTagger>`, and is read-only thereafter, so concurrent
//! requests need no locking.

/// Entity classes the pipeline understands. Only `Person` is consumed today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityLabel {
    Person,
}

/// A tagged span of input text.
#[derive(Debug, Clone, PartialEq)]
pub struct EntitySpan {
    pub text: String,
    pub label: EntityLabel,
}

/// Pluggable NER provider.
pub trait NerTagger: Send + Sync {
    /// Returns person-entity spans in document order.
    fn tag_persons(&self, text: &str) -> Vec<EntitySpan>;
}

/// Heuristic tagger: a line consisting of 2–4 capitalized alphabetic
/// tokens is treated as a person candidate, unless it contains digits, an
/// email, or common resume-header words. Deliberately conservative — the
/// name extractor falls back to the first line anyway.
pub struct RuleBasedTagger;

/// Words that make a capitalized line a header or job title rather than
/// a name.
const NON_NAME_WORDS: [&str; 14] = [
    "resume",
    "curriculum",
    "vitae",
    "summary",
    "profile",
    "skills",
    "education",
    "experience",
    "engineer",
    "developer",
    "manager",
    "analyst",
    "consultant",
    "scientist",
];

impl NerTagger for RuleBasedTagger {
    fn tag_persons(&self, text: &str) -> Vec<EntitySpan> {
        let mut spans = Vec::new();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.contains('@') || line.chars().any(|c| c.is_ascii_digit()) {
                continue;
            }
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if !(2..=4).contains(&tokens.len()) {
                continue;
            }
            if !tokens.iter().all(|t| looks_like_name_token(t)) {
                continue;
            }
            if tokens
                .iter()
                .any(|t| NON_NAME_WORDS.contains(&t.to_lowercase().as_str()))
            {
                continue;
            }
            spans.push(EntitySpan {
                text: tokens.join(" "),
                label: EntityLabel::Person,
            });
        }
        spans
    }
}

/// Uppercase first letter, then letters, apostrophes, hyphens, or a
/// trailing period (middle initials).
fn looks_like_name_token(token: &str) -> bool {
    let token = token.strip_suffix('.').unwrap_or(token);
    let mut chars = token.chars();
    match chars.next() {
        Some(c) if c.is_uppercase() => chars.all(|c| c.is_alphabetic() || c == '\'' || c == '-'),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_simple_name_line() {
        let spans = RuleBasedTagger.tag_persons("Jane Doe\njane@example.com");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "Jane Doe");
        assert_eq!(spans[0].label, EntityLabel::Person);
    }

    #[test]
    fn test_tags_name_with_middle_initial() {
        let spans = RuleBasedTagger.tag_persons("John Q. Public");
        assert_eq!(spans[0].text, "John Q. Public");
    }

    #[test]
    fn test_skips_lines_with_digits_or_email() {
        assert!(RuleBasedTagger.tag_persons("Suite 400 Main").is_empty());
        assert!(RuleBasedTagger.tag_persons("jane@example.com Doe").is_empty());
    }

    #[test]
    fn test_skips_header_and_title_lines() {
        assert!(RuleBasedTagger.tag_persons("Curriculum Vitae").is_empty());
        assert!(RuleBasedTagger.tag_persons("Software Engineer").is_empty());
        assert!(RuleBasedTagger.tag_persons("Technical Skills").is_empty());
    }

    #[test]
    fn test_skips_lowercase_and_single_token_lines() {
        assert!(RuleBasedTagger.tag_persons("jane doe").is_empty());
        assert!(RuleBasedTagger.tag_persons("Jane").is_empty());
    }

    #[test]
    fn test_returns_spans_in_document_order() {
        let spans = RuleBasedTagger.tag_persons("Jane Doe\nJohn Smith");
        let texts: Vec<&str> = spans.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["Jane Doe", "John Smith"]);
    }
}
