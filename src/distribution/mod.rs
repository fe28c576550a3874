/*!
 * Redistribution of translated text across timed utterances.
 *
 * This module contains the distributor and its building blocks:
 * - `grouping`: Group and portion assignment
 * - `splitter`: Proportional and sentence-aware splitting
 * - `word_break`: Word-break search and break-character classes
 * - `lines`: Display-line counting and re-wrapping
 */

use futures::stream::{self, StreamExt, TryStreamExt};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::errors::{DistributionError, ProviderError};
use crate::providers::SentenceBreaker;
use crate::utterance::Utterance;

pub mod grouping;
pub mod lines;
pub mod splitter;
pub mod word_break;

pub use grouping::{assign_groups, assign_portions, group_count};
pub use lines::{count_lines, reflow_lines};
pub use splitter::{
    find_closest_sentence_break, normalize, split_by_sentence_breaks, split_proportional,
    DEFAULT_SENTENCE_TOLERANCE,
};
pub use word_break::{find_closest_word_break, is_break_character, is_punctuation};

/// How a group's text block is cut into pieces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitStrategy {
    /// Proportional cuts at the nearest word break
    #[default]
    WordBreak,
    /// Proportional cuts at the nearest sentence boundary, word break as fallback
    SentenceBreak,
}

/// Settings for a distributor
#[derive(Debug, Clone, PartialEq)]
pub struct DistributorConfig {
    /// Splitting strategy
    pub strategy: SplitStrategy,
    /// Allowed deviation of a sentence boundary, relative to the target offset
    pub sentence_tolerance: f64,
    /// Re-wrap every piece to its utterance's line count
    pub reflow_lines: bool,
    /// Cap on simultaneous sentence-boundary requests, unbounded when `None`
    pub max_concurrent_requests: Option<usize>,
}

impl Default for DistributorConfig {
    fn default() -> Self {
        Self {
            strategy: SplitStrategy::default(),
            sentence_tolerance: DEFAULT_SENTENCE_TOLERANCE,
            reflow_lines: false,
            max_concurrent_requests: None,
        }
    }
}

/// Maps translated text blocks back onto the utterances they were made from
#[derive(Debug)]
pub struct Distributor<B: SentenceBreaker> {
    /// Sentence-boundary service
    breaker: B,
    /// Language code sent with every sentence-boundary request
    language: String,
    /// Settings
    config: DistributorConfig,
}

impl<B: SentenceBreaker> Distributor<B> {
    /// Create a distributor with default settings
    pub fn new(breaker: B, language: impl Into<String>) -> Self {
        Self::with_config(breaker, language, DistributorConfig::default())
    }

    /// Create a distributor with explicit settings
    pub fn with_config(breaker: B, language: impl Into<String>, config: DistributorConfig) -> Self {
        Self {
            breaker,
            language: language.into(),
            config,
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn config(&self) -> &DistributorConfig {
        &self.config
    }

    pub fn breaker(&self) -> &B {
        &self.breaker
    }

    /// Distribute one text block per group over the utterances.
    ///
    /// Every utterance is mutated in place: `group` and `portion` are
    /// recomputed, empty members are turned into separators, and `content` is
    /// overwritten with the member's piece of its group's block. The returned
    /// slice is the same utterances, in order.
    ///
    /// # Errors
    /// * `GroupCountMismatch` when `blocks` has not exactly one entry per group
    /// * `Provider` when any sentence-boundary request fails
    pub async fn distribute<'a>(
        &self,
        utterances: &'a mut [Utterance],
        blocks: &[String],
    ) -> Result<&'a [Utterance], DistributionError> {
        let group_sums = assign_groups(utterances);
        assign_portions(utterances, &group_sums);

        if group_sums.len() != blocks.len() {
            return Err(DistributionError::GroupCountMismatch {
                groups: group_sums.len(),
                blocks: blocks.len(),
            });
        }

        let sentence_breaks = self.request_sentence_breaks(blocks).await?;

        for (group, block) in blocks.iter().enumerate() {
            let members: Vec<usize> = utterances
                .iter()
                .enumerate()
                .filter(|(_, utterance)| utterance.group == group)
                .map(|(index, _)| index)
                .collect();
            let portions: Vec<f64> = members.iter().map(|&index| utterances[index].portion).collect();

            let pieces = if group_sums[group] == 0 {
                debug!("Group {} has no original text, giving its block to the first member", group);
                degenerate_pieces(block, members.len())
            } else {
                self.split_block(block, &sentence_breaks[group], &portions)?
            };

            if pieces.len() != members.len() {
                return Err(DistributionError::PieceCountMismatch {
                    group,
                    expected: members.len(),
                    actual: pieces.len(),
                });
            }

            for (&index, piece) in members.iter().zip(pieces) {
                let utterance = &mut utterances[index];
                utterance.content = if self.config.reflow_lines && utterance.lines > 1 {
                    reflow_lines(&piece, utterance.lines)
                } else {
                    piece
                };
            }
        }

        info!("Distributed {} block(s) over {} utterance(s)", blocks.len(), utterances.len());
        Ok(&*utterances)
    }

    /// Fetch sentence boundaries for every block concurrently.
    ///
    /// Results keep the order of `blocks`. The first failure aborts the batch.
    pub async fn request_sentence_breaks(&self, blocks: &[String]) -> Result<Vec<Vec<usize>>, ProviderError> {
        let limit = self
            .config
            .max_concurrent_requests
            .unwrap_or(blocks.len())
            .max(1);
        debug!(
            "Requesting sentence breaks for {} block(s) from {} (limit {})",
            blocks.len(),
            self.breaker.name(),
            limit
        );

        stream::iter(blocks)
            .map(|block| self.breaker.break_sentences(block, &self.language))
            .buffered(limit)
            .try_collect()
            .await
    }

    fn split_block(&self, block: &str, breaks: &[usize], portions: &[f64]) -> Result<Vec<String>, DistributionError> {
        match self.config.strategy {
            SplitStrategy::WordBreak => split_proportional(block, portions),
            SplitStrategy::SentenceBreak => {
                split_by_sentence_breaks(block, breaks, portions, self.config.sentence_tolerance)
            }
        }
    }
}

fn degenerate_pieces(block: &str, count: usize) -> Vec<String> {
    let mut pieces = Vec::with_capacity(count);
    if count > 0 {
        pieces.push(block.to_string());
        pieces.resize(count, String::new());
    }
    pieces
}
