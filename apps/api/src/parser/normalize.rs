//! Text normalization — the first pipeline stage after decoding.

use std::sync::LazyLock;

use regex::Regex;

static RE_BLANK_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{2,}").expect("regex is compile-time constant"));
static RE_HSPACE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+").expect("regex is compile-time constant"));

/// Canonicalizes decoded document text: carriage returns become newlines,
/// runs of 2+ newlines collapse to exactly one blank line, runs of
/// horizontal whitespace collapse to a single space, and the result is
/// trimmed. Defined for any input, including the empty string.
pub fn normalize(text: &str) -> String {
    let text = text.replace('\r', "\n");
    let text = RE_BLANK_RUNS.replace_all(&text, "\n\n");
    let text = RE_HSPACE_RUNS.replace_all(&text, " ");
    text.trim().to_string()
}
