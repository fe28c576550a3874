use anyhow::{anyhow, Context, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use crate::distribution::{DistributorConfig, SplitStrategy, DEFAULT_SENTENCE_TOLERANCE};
use crate::providers::microsoft::DEFAULT_ENDPOINT;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Language code of the translated text (e.g. "de", "zh-Hans")
    pub language: String,

    /// Splitting strategy
    #[serde(default)]
    pub strategy: SplitStrategy,

    /// Allowed deviation of a sentence boundary, relative to the target offset
    #[serde(default = "default_sentence_tolerance")]
    pub sentence_tolerance: f64,

    /// Re-wrap pieces to their utterance's line count
    #[serde(default)]
    pub reflow_lines: bool,

    /// Cap on simultaneous sentence-boundary requests (unbounded if absent)
    #[serde(default)]
    pub max_concurrent_requests: Option<usize>,

    /// Sentence-boundary service config
    #[serde(default)]
    pub sentence_service: SentenceServiceConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Sentence-boundary service type
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SentenceServiceProvider {
    // @provider: Microsoft Translator breaksentence API
    #[default]
    Microsoft,
    // @provider: Offline punctuation rules
    RuleBased,
}

impl SentenceServiceProvider {
    // @returns: Capitalized provider name
    pub fn display_name(&self) -> &str {
        match self {
            Self::Microsoft => "Microsoft Translator",
            Self::RuleBased => "Rule based",
        }
    }

    // @returns: Lowercase provider identifier
    pub fn to_lowercase_string(&self) -> String {
        match self {
            Self::Microsoft => "microsoft".to_string(),
            Self::RuleBased => "rule_based".to_string(),
        }
    }
}

// Implement Display trait for SentenceServiceProvider
impl std::fmt::Display for SentenceServiceProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_lowercase_string())
    }
}

// Implement FromStr trait for SentenceServiceProvider
impl std::str::FromStr for SentenceServiceProvider {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "microsoft" => Ok(Self::Microsoft),
            "rule_based" | "rule-based" | "offline" => Ok(Self::RuleBased),
            _ => Err(anyhow!("Invalid sentence service: {}", s)),
        }
    }
}

/// Sentence-boundary service configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SentenceServiceConfig {
    // @field: Service type
    #[serde(default)]
    pub provider: SentenceServiceProvider,

    // @field: Service URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    // @field: Subscription key
    #[serde(default = "String::new")]
    pub api_key: String,

    // @field: Azure region of the subscription
    #[serde(default)]
    pub region: Option<String>,

    // @field: Timeout seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl SentenceServiceConfig {
    /// Request timeout as a duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for SentenceServiceConfig {
    fn default() -> Self {
        Self {
            provider: SentenceServiceProvider::default(),
            endpoint: default_endpoint(),
            api_key: String::new(),
            region: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: Matching filter for the log facade
    pub fn to_level_filter(&self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn default_sentence_tolerance() -> f64 {
    DEFAULT_SENTENCE_TOLERANCE
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Config {
    /// Load a configuration from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .context(format!("Failed to open config file: {}", path.display()))?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", path.display()))
    }

    /// Write the configuration as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let config_json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;

        std::fs::write(path, config_json)
            .context(format!("Failed to write config to file: {}", path.display()))
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        let _language_name = crate::language_utils::get_language_name(&self.language)?;

        if !self.sentence_tolerance.is_finite() || self.sentence_tolerance <= 0.0 {
            return Err(anyhow!("Sentence tolerance must be positive, got {}", self.sentence_tolerance));
        }

        if self.max_concurrent_requests == Some(0) {
            return Err(anyhow!("max_concurrent_requests must be at least 1"));
        }

        if self.sentence_service.provider == SentenceServiceProvider::Microsoft
            && self.sentence_service.api_key.is_empty()
        {
            return Err(anyhow!("A subscription key is required for the Microsoft sentence service"));
        }

        Ok(())
    }

    /// Distributor settings derived from this configuration
    pub fn distributor_config(&self) -> DistributorConfig {
        DistributorConfig {
            strategy: self.strategy,
            sentence_tolerance: self.sentence_tolerance,
            reflow_lines: self.reflow_lines,
            max_concurrent_requests: self.max_concurrent_requests,
        }
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            language: "en".to_string(),
            strategy: SplitStrategy::default(),
            sentence_tolerance: default_sentence_tolerance(),
            reflow_lines: false,
            max_concurrent_requests: None,
            sentence_service: SentenceServiceConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
