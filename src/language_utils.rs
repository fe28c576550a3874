use anyhow::{Result, anyhow};
use isolang::Language;

/// Language utilities for language tag handling
///
/// Sentence-boundary services take BCP-47 style tags such as "en", "pt-PT" or
/// "zh-Hans". Only the primary subtag is checked against ISO 639; script and
/// region subtags are passed through untouched.
/// Language code type of the primary subtag
#[derive(Debug, PartialEq)]
pub enum LanguageCodeType {
    /// ISO 639-1 (2-letter) code
    Part1,
    /// ISO 639-3 (3-letter) code
    Part3,
}

/// Primary language subtag of a tag, lowercased ("zh-Hans" -> "zh")
pub fn primary_subtag(tag: &str) -> String {
    tag.trim()
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_lowercase()
}

/// Validate that a tag starts with a known ISO 639-1 or ISO 639-3 code
pub fn validate_language_code(tag: &str) -> Result<LanguageCodeType> {
    let primary = primary_subtag(tag);

    match primary.len() {
        2 if Language::from_639_1(&primary).is_some() => Ok(LanguageCodeType::Part1),
        3 if Language::from_639_3(&primary).is_some() => Ok(LanguageCodeType::Part3),
        _ => Err(anyhow!("Invalid language code: {}", tag)),
    }
}

/// Get the English language name from a tag
pub fn get_language_name(tag: &str) -> Result<String> {
    let primary = primary_subtag(tag);
    let lang = match validate_language_code(tag)? {
        LanguageCodeType::Part1 => Language::from_639_1(&primary),
        LanguageCodeType::Part3 => Language::from_639_3(&primary),
    }
    .ok_or_else(|| anyhow!("Failed to get language from code: {}", tag))?;

    Ok(lang.to_name().to_string())
}
