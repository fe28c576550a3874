use std::time::Duration;
use async_trait::async_trait;
use serde::{Serialize, Deserialize};
use reqwest::{Client, StatusCode};
use log::{error, debug};
use url::Url;

use crate::errors::ProviderError;
use crate::providers::{SentenceBreaker, offsets_from_lengths};

/// Default public endpoint of the Translator service
pub const DEFAULT_ENDPOINT: &str = "https://api.cognitive.microsofttranslator.com";

/// Microsoft Translator client for the `breaksentence` API
pub struct MicrosoftTranslator {
    /// HTTP client for API requests
    client: Client,
    /// Subscription key for authentication
    api_key: String,
    /// API endpoint URL (optional, defaults to the public API)
    endpoint: String,
    /// Azure region of the subscription, required for regional resources
    region: Option<String>,
}

/// Single text item of a `breaksentence` request
#[derive(Debug, Serialize)]
pub struct BreakSentenceRequest {
    /// The text to analyze
    #[serde(rename = "Text")]
    pub text: String,
}

/// Language detected by the service when none was given
#[derive(Debug, Deserialize)]
pub struct DetectedLanguage {
    /// Detected language code
    pub language: String,
    /// Confidence between 0 and 1
    pub score: f32,
}

/// Result for a single text item
#[derive(Debug, Deserialize)]
pub struct BreakSentenceResponse {
    /// Length of every sentence, in characters
    #[serde(rename = "sentLen")]
    pub sent_len: Vec<usize>,

    /// Present only when auto-detection was used
    #[serde(rename = "detectedLanguage", default)]
    pub detected_language: Option<DetectedLanguage>,
}

// Keys are never printed.
impl std::fmt::Debug for MicrosoftTranslator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MicrosoftTranslator")
            .field("endpoint", &self.endpoint)
            .field("region", &self.region)
            .finish()
    }
}

impl MicrosoftTranslator {
    /// Create a new Translator client
    pub fn new(api_key: impl Into<String>, endpoint: impl Into<String>, region: Option<String>, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            endpoint: endpoint.into(),
            region,
        }
    }

    /// Build the request URL for a language
    pub fn request_url(&self, language: &str) -> Result<Url, ProviderError> {
        let base = if self.endpoint.is_empty() {
            DEFAULT_ENDPOINT
        } else {
            self.endpoint.trim_end_matches('/')
        };

        let mut url = Url::parse(&format!("{}/breaksentence", base))
            .map_err(|e| ProviderError::RequestFailed(format!("Invalid endpoint '{}': {}", base, e)))?;
        url.query_pairs_mut()
            .append_pair("api-version", "3.0")
            .append_pair("language", language);
        Ok(url)
    }

    /// Send a `breaksentence` request and return the raw per-item results
    pub async fn complete(&self, text: &str, language: &str) -> Result<Vec<BreakSentenceResponse>, ProviderError> {
        let url = self.request_url(language)?;
        let body = [BreakSentenceRequest { text: text.to_string() }];

        let mut request = self.client.post(url)
            .header("Content-Type", "application/json")
            .header("Ocp-Apim-Subscription-Key", &self.api_key)
            .json(&body);
        if let Some(region) = &self.region {
            request = request.header("Ocp-Apim-Subscription-Region", region);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                ProviderError::ConnectionError(e.to_string())
            } else {
                ProviderError::RequestFailed(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Translator API error ({}): {}", status, error_text);
            return Err(classify_status(status, error_text));
        }

        response.json::<Vec<BreakSentenceResponse>>().await
            .map_err(|e| ProviderError::ParseError(e.to_string()))
    }
}

/// Map a failed HTTP status to the matching provider error
pub fn classify_status(status: StatusCode, message: String) -> ProviderError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ProviderError::AuthenticationError(message),
        StatusCode::TOO_MANY_REQUESTS => ProviderError::RateLimitExceeded(message),
        _ => ProviderError::ApiError {
            status_code: status.as_u16(),
            message,
        },
    }
}

#[async_trait]
impl SentenceBreaker for MicrosoftTranslator {
    async fn break_sentences(&self, text: &str, language: &str) -> Result<Vec<usize>, ProviderError> {
        if text.is_empty() {
            return Ok(Vec::new());
        }

        let results = self.complete(text, language).await?;
        let first = results.into_iter().next()
            .ok_or_else(|| ProviderError::ParseError("Empty breaksentence response".to_string()))?;

        debug!("Translator found {} sentence(s) in {} chars", first.sent_len.len(), text.chars().count());
        Ok(offsets_from_lengths(&first.sent_len))
    }

    fn name(&self) -> &str {
        "microsoft"
    }
}
