/*!
 * Sentence-boundary service implementations.
 *
 * This module contains the clients that report where sentences end:
 * - Microsoft: Translator `breaksentence` API
 * - Rule based: offline, punctuation driven
 * - Mock: test double with configurable behavior
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// Common trait for all sentence-boundary services
///
/// Implementations must be safe to call concurrently; the distributor issues
/// one request per text block at the same time.
#[async_trait]
pub trait SentenceBreaker: Send + Sync + Debug {
    /// Detect sentence boundaries in a text
    ///
    /// # Arguments
    /// * `text` - The text to analyze
    /// * `language` - Language code of the text (e.g. "en", "zh-Hans")
    ///
    /// # Returns
    /// * `Result<Vec<usize>, ProviderError>` - Cumulative end offset of every
    ///   sentence, in characters, or an error
    async fn break_sentences(&self, text: &str, language: &str) -> Result<Vec<usize>, ProviderError>;

    /// Short name used in log messages
    fn name(&self) -> &str;
}

/// Turn a list of sentence lengths into cumulative end offsets
pub fn offsets_from_lengths(lengths: &[usize]) -> Vec<usize> {
    lengths
        .iter()
        .scan(0, |end, length| {
            *end += length;
            Some(*end)
        })
        .collect()
}

pub mod microsoft;
pub mod rule_based;
pub mod mock;
