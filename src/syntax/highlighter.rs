//! The tokenizing highlighter
//!
//! A pure function of (text, pattern): walks non-overlapping matches of a
//! language's classification pattern and emits alternating untagged/tagged
//! runs whose byte lengths sum to the text length. Deterministic and
//! re-entrant, so the scheduler may invoke it from any context.

use super::patterns::{SyntaxPattern, MATCH_PRIORITY};
use super::spans::{HighlightTag, StyleSpans};

/// Classify a text into style spans
///
/// Emits, for each match: an untagged span for the gap since the previous
/// match end, then a tagged span for the match itself; after the last match
/// one untagged span covers any trailing text. Empty text yields a single
/// zero-length untagged span. A pattern that never matches yields one
/// untagged span over the whole text.
pub fn highlight(text: &str, pattern: &SyntaxPattern) -> StyleSpans {
    if text.is_empty() {
        return StyleSpans::unstyled(0);
    }

    let mut spans = StyleSpans::new();
    let mut last_end = 0;

    for caps in pattern.regex().captures_iter(text) {
        // A backtracking-limit error aborts the scan; the remainder of the
        // text is emitted unstyled rather than failing the pass.
        let caps = match caps {
            Ok(caps) => caps,
            Err(e) => {
                tracing::warn!("highlight scan aborted: {}", e);
                break;
            }
        };
        let Some(m) = caps.get(0) else {
            break;
        };

        spans.push(m.start() - last_end, None);
        spans.push(m.end() - m.start(), classify(&caps));
        last_end = m.end();
    }

    spans.push(text.len() - last_end, None);
    spans
}

/// First named group that participated in the match wins
fn classify(caps: &fancy_regex::Captures<'_>) -> Option<HighlightTag> {
    MATCH_PRIORITY
        .iter()
        .find(|entry| caps.name(entry.0).is_some())
        .map(|entry| entry.1)
}
