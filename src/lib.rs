/*!
 * # realign - Re-align translated text to timed segments
 *
 * A Rust library that spreads a translated block of text back over the
 * original timed segments (subtitle cues, captions) it was made from, so the
 * translation does not have to be redone per segment.
 *
 * ## Features
 *
 * - Group segments at blank separator segments
 * - Split each group's translation proportionally to the original lengths
 * - Prefer word breaks, or sentence boundaries within a tolerance
 * - Sentence boundaries from:
 *   - Microsoft Translator `breaksentence` API
 *   - Offline punctuation rules
 * - Optional re-wrapping of pieces to the original display line count
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `utterance`: The timed segment record
 * - `distribution`: The distributor and its splitting algorithms:
 *   - `distribution::grouping`: Group and portion assignment
 *   - `distribution::splitter`: Proportional and sentence-aware splitting
 *   - `distribution::word_break`: Word-break search
 *   - `distribution::lines`: Display-line helpers
 * - `providers`: Sentence-boundary services
 * - `app_config`: Configuration management
 * - `app_controller`: File workflow used by the command line
 * - `file_utils`: File reading and writing
 * - `language_utils`: Language tag validation
 * - `errors`: Custom error types
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![cfg_attr(test, allow(non_snake_case))]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod distribution;
pub mod errors;
pub mod file_utils;
pub mod language_utils;
pub mod providers;
pub mod utterance;

// Re-export main types for easier usage
pub use app_config::Config;
pub use distribution::{Distributor, DistributorConfig, SplitStrategy};
pub use errors::{AppError, DistributionError, ProviderError};
pub use providers::SentenceBreaker;
pub use utterance::Utterance;
