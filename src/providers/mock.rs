/*!
 * Mock sentence breaker for testing.
 *
 * This module provides a breaker that simulates different behaviors:
 * - `MockBreaker::working()` - Always succeeds using the offline rules
 * - `MockBreaker::fixed(..)` - Always returns the same offsets
 * - `MockBreaker::failing()` - Always fails with an error
 * - `MockBreaker::slow(..)` - Succeeds after a delay, for concurrency tests
 */

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::errors::ProviderError;
use crate::providers::SentenceBreaker;
use crate::providers::rule_based::RuleBasedBreaker;

/// Behavior mode for the mock breaker
#[derive(Debug, Clone, PartialEq)]
pub enum MockBehavior {
    /// Detects sentences with the offline rules
    Working,
    /// Returns the given offsets for every text
    Fixed(Vec<usize>),
    /// Fails on the Nth request (1-based), succeeds otherwise
    FailOn { request: usize },
    /// Always fails with an error
    Failing,
    /// Simulates slow responses
    Slow { delay_ms: u64 },
}

/// Mock breaker that records how it was called
#[derive(Debug)]
pub struct MockBreaker {
    /// Behavior mode
    behavior: MockBehavior,
    /// Number of requests received
    request_count: Arc<AtomicUsize>,
    /// Requests currently being served
    in_flight: Arc<AtomicUsize>,
    /// Highest number of simultaneous requests seen
    peak_in_flight: Arc<AtomicUsize>,
}

impl MockBreaker {
    /// Create a new mock breaker with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            request_count: Arc::new(AtomicUsize::new(0)),
            in_flight: Arc::new(AtomicUsize::new(0)),
            peak_in_flight: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a working mock breaker that always succeeds
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a mock breaker returning fixed offsets
    pub fn fixed(offsets: Vec<usize>) -> Self {
        Self::new(MockBehavior::Fixed(offsets))
    }

    /// Create a mock breaker that fails only on the given request
    pub fn fail_on(request: usize) -> Self {
        Self::new(MockBehavior::FailOn { request })
    }

    /// Create a failing mock breaker that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Create a mock breaker that answers after a delay
    pub fn slow(delay_ms: u64) -> Self {
        Self::new(MockBehavior::Slow { delay_ms })
    }

    /// Total number of requests received so far
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }

    /// Highest number of requests that were served at the same time
    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }

    async fn respond(&self, text: &str, count: usize) -> Result<Vec<usize>, ProviderError> {
        match &self.behavior {
            MockBehavior::Working => Ok(RuleBasedBreaker::offsets(text)),

            MockBehavior::Fixed(offsets) => Ok(offsets.clone()),

            MockBehavior::FailOn { request } => {
                if count == *request {
                    Err(ProviderError::ApiError {
                        message: format!("Simulated failure (request #{})", count),
                        status_code: 503,
                    })
                } else {
                    Ok(RuleBasedBreaker::offsets(text))
                }
            }

            MockBehavior::Failing => Err(ProviderError::ApiError {
                message: "Simulated sentence service failure".to_string(),
                status_code: 500,
            }),

            MockBehavior::Slow { delay_ms } => {
                tokio::time::sleep(tokio::time::Duration::from_millis(*delay_ms)).await;
                Ok(RuleBasedBreaker::offsets(text))
            }
        }
    }
}

impl Clone for MockBreaker {
    fn clone(&self) -> Self {
        Self {
            behavior: self.behavior.clone(),
            request_count: Arc::clone(&self.request_count),
            in_flight: Arc::clone(&self.in_flight),
            peak_in_flight: Arc::clone(&self.peak_in_flight),
        }
    }
}

#[async_trait]
impl SentenceBreaker for MockBreaker {
    async fn break_sentences(&self, text: &str, _language: &str) -> Result<Vec<usize>, ProviderError> {
        let count = self.request_count.fetch_add(1, Ordering::SeqCst) + 1;
        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(current, Ordering::SeqCst);

        let result = self.respond(text, count).await;

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        result
    }

    fn name(&self) -> &str {
        "mock"
    }
}
