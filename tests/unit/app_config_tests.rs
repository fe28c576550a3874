/*!
 * Tests for application configuration functionality
 */

use anyhow::Result;
use log::LevelFilter;
use realign::app_config::{Config, LogLevel, SentenceServiceConfig, SentenceServiceProvider};
use realign::distribution::DEFAULT_SENTENCE_TOLERANCE;
use realign::SplitStrategy;
use crate::common;

fn offline_config() -> Config {
    Config {
        sentence_service: SentenceServiceConfig {
            provider: SentenceServiceProvider::RuleBased,
            ..SentenceServiceConfig::default()
        },
        ..Config::default()
    }
}

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.language, "en");
    assert_eq!(config.strategy, SplitStrategy::WordBreak);
    assert_eq!(config.sentence_tolerance, DEFAULT_SENTENCE_TOLERANCE);
    assert!(!config.reflow_lines);
    assert_eq!(config.max_concurrent_requests, None);
    assert_eq!(config.sentence_service.provider, SentenceServiceProvider::Microsoft);
    assert_eq!(config.sentence_service.timeout_secs, 30);
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    let mut config = offline_config();
    assert!(config.validate().is_ok());

    config.language = "xyz".to_string();
    assert!(config.validate().is_err());
    config.language = "zh-Hans".to_string();
    assert!(config.validate().is_ok());

    config.sentence_tolerance = 0.0;
    assert!(config.validate().is_err());
    config.sentence_tolerance = 1.25;

    config.max_concurrent_requests = Some(0);
    assert!(config.validate().is_err());
    config.max_concurrent_requests = Some(2);

    // Microsoft needs a subscription key
    config.sentence_service.provider = SentenceServiceProvider::Microsoft;
    assert!(config.validate().is_err());
    config.sentence_service.api_key = "secret".to_string();
    assert!(config.validate().is_ok());
}

/// Missing fields fall back to their defaults
#[test]
fn test_config_deserialize_withMinimalJson_shouldApplyDefaults() -> Result<()> {
    let config: Config = serde_json::from_str(r#"{"language": "de", "strategy": "sentence_break"}"#)?;

    assert_eq!(config.language, "de");
    assert_eq!(config.strategy, SplitStrategy::SentenceBreak);
    assert_eq!(config.sentence_tolerance, DEFAULT_SENTENCE_TOLERANCE);
    assert_eq!(config.sentence_service.endpoint, "https://api.cognitive.microsofttranslator.com");
    Ok(())
}

/// Saving then loading yields the same settings
#[test]
fn test_config_saveAndLoad_withTempFile_shouldPreserveSettings() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("conf.json");

    let mut config = offline_config();
    config.language = "fr".to_string();
    config.reflow_lines = true;
    config.max_concurrent_requests = Some(3);
    config.log_level = LogLevel::Debug;
    config.save(&path)?;

    let loaded = Config::load(&path)?;
    assert_eq!(loaded.language, "fr");
    assert!(loaded.reflow_lines);
    assert_eq!(loaded.max_concurrent_requests, Some(3));
    assert_eq!(loaded.sentence_service.provider, SentenceServiceProvider::RuleBased);
    assert_eq!(loaded.log_level, LogLevel::Debug);
    Ok(())
}

/// Loading a broken file reports an error
#[test]
fn test_config_load_withInvalidJson_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "conf.json", "{ not json")?;
    assert!(Config::load(&path).is_err());
    assert!(Config::load(temp_dir.path().join("missing.json")).is_err());
    Ok(())
}

/// Distributor settings mirror the config
#[test]
fn test_distributor_config_withCustomValues_shouldCopySettings() {
    let mut config = offline_config();
    config.strategy = SplitStrategy::SentenceBreak;
    config.sentence_tolerance = 0.5;
    config.reflow_lines = true;

    let distributor_config = config.distributor_config();
    assert_eq!(distributor_config.strategy, SplitStrategy::SentenceBreak);
    assert_eq!(distributor_config.sentence_tolerance, 0.5);
    assert!(distributor_config.reflow_lines);
}

/// Sentence service names parse in several spellings
#[test]
fn test_sentence_service_provider_fromStr_shouldAcceptAliases() {
    assert_eq!("microsoft".parse::<SentenceServiceProvider>().unwrap(), SentenceServiceProvider::Microsoft);
    assert_eq!("rule-based".parse::<SentenceServiceProvider>().unwrap(), SentenceServiceProvider::RuleBased);
    assert_eq!("OFFLINE".parse::<SentenceServiceProvider>().unwrap(), SentenceServiceProvider::RuleBased);
    assert!("google".parse::<SentenceServiceProvider>().is_err());
    assert_eq!(SentenceServiceProvider::RuleBased.to_string(), "rule_based");
}

#[test]
fn test_log_level_toLevelFilter_shouldMapEveryLevel() {
    assert_eq!(LogLevel::Error.to_level_filter(), LevelFilter::Error);
    assert_eq!(LogLevel::Trace.to_level_filter(), LevelFilter::Trace);
}
