use std::sync::Arc;

use crate::config::Config;
use crate::ner::NerTagger;
use crate::parser::skills::SkillsVocabulary;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable NER provider, built once at startup and read-only after —
    /// concurrent requests share it without locking.
    pub ner: Arc<dyn NerTagger>,
    /// Skills vocabulary, loaded once at startup (default set or
    /// `SKILLS_VOCAB_PATH` file).
    pub vocabulary: Arc<SkillsVocabulary>,
    /// Kept on state for handlers that need runtime settings; only `main`
    /// reads it today.
    #[allow(dead_code)]
    pub config: Config,
}
