/*!
 * Error types for the realign library.
 *
 * This module contains custom error types for the different parts of the crate,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur when talking to a sentence-boundary service
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Error related to rate limiting
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    /// Error with authentication
    #[error("Authentication error: {0}")]
    AuthenticationError(String),
}

/// Errors raised while redistributing text across utterances
#[derive(Error, Debug)]
pub enum DistributionError {
    /// The caller supplied a different number of text blocks than there are groups
    #[error("Group count mismatch: {groups} group(s) but {blocks} text block(s)")]
    GroupCountMismatch {
        /// Number of groups derived from the utterances
        groups: usize,
        /// Number of text blocks supplied
        blocks: usize,
    },

    /// The splitter produced a different number of pieces than the group has members
    #[error("Group {group}: expected {expected} piece(s), got {actual}")]
    PieceCountMismatch {
        /// Group index
        group: usize,
        /// Number of utterances in the group
        expected: usize,
        /// Number of pieces produced
        actual: usize,
    },

    /// A distribution with no strictly positive weight was normalized
    #[error("Cannot normalize a distribution whose sum is {0}")]
    ZeroDistribution(f64),

    /// Sentence-boundary request failed
    #[error("Sentence break request failed: {0}")]
    Provider(#[from] ProviderError),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Invalid or unreadable configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from a provider
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from the distribution step
    #[error("Distribution error: {0}")]
    Distribution(#[from] DistributionError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::Config(error.to_string())
    }
}
