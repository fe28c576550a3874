/*!
 * Offline sentence breaker.
 *
 * A sentence ends after a run of terminal punctuation, optionally followed by
 * closing quotes or brackets. Latin terminators also need trailing whitespace
 * or the end of the text, which keeps abbreviations like "3.5" intact.
 */

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::ProviderError;
use crate::providers::SentenceBreaker;

// @const: Sentence terminator, including the whitespace that follows it
static SENTENCE_END_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"[.!?…]+["'”’»)\]]*(?:\s+|$)|[。！？]+[」』”’）]*\s*"#).unwrap()
});

/// Punctuation driven sentence breaker that needs no network access
#[derive(Debug, Clone, Default)]
pub struct RuleBasedBreaker;

impl RuleBasedBreaker {
    pub fn new() -> Self {
        Self
    }

    /// Sentence end offsets in characters; the last offset is always the text length
    pub fn offsets(text: &str) -> Vec<usize> {
        if text.is_empty() {
            return Vec::new();
        }

        let mut offsets: Vec<usize> = SENTENCE_END_REGEX
            .find_iter(text)
            .map(|m| text[..m.end()].chars().count())
            .collect();
        offsets.dedup();

        let total = text.chars().count();
        if offsets.last() != Some(&total) {
            offsets.push(total);
        }
        offsets
    }
}

#[async_trait]
impl SentenceBreaker for RuleBasedBreaker {
    async fn break_sentences(&self, text: &str, _language: &str) -> Result<Vec<usize>, ProviderError> {
        Ok(Self::offsets(text))
    }

    fn name(&self) -> &str {
        "rule_based"
    }
}
