use anyhow::{Result, anyhow};
use isolang::Language;

/// Language utilities for the subtitle downloader
///
/// This module owns the fixed set of language codes the downloader accepts
/// and provides display-name lookups for listings and interactive prompts.
/// Languages the downloader accepts, as ISO 639-1 codes
pub const SUPPORTED_LANGUAGES: [&str; 10] = [
    "en", "es", "fr", "de", "it", "ja", "ko", "pt", "ru", "zh",
];

/// Check whether a language code is in the supported set
pub fn is_supported(code: &str) -> bool {
    let normalized = code.trim().to_lowercase();
    SUPPORTED_LANGUAGES.contains(&normalized.as_str())
}

/// Get the English name of a language from its ISO 639-1 code
pub fn get_language_name(code: &str) -> Result<String> {
    let normalized = code.trim().to_lowercase();

    Language::from_639_1(&normalized)
        .map(|lang| lang.to_name().to_string())
        .ok_or_else(|| anyhow!("Unknown language code: {}", code))
}

/// Render a supported language code for listings, e.g. "en (English)"
pub fn describe_language(code: &str) -> String {
    match get_language_name(code) {
        Ok(name) => format!("{} ({})", code, name),
        Err(_) => code.to_string(),
    }
}
