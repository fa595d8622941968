use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;

use crate::language_utils;
use crate::subtitle_processor::OutputFormat;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Default subtitle language code (ISO 639-1)
    #[serde(default = "default_language")]
    pub language: String,

    /// Default output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Directory downloaded subtitles are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Whether pipeline errors set a failing process exit status
    #[serde(default)]
    pub strict_exit: bool,
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

fn default_language() -> String {
    "en".to_string()
}

fn default_output_dir() -> String {
    "subtitles".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            language: default_language(),
            format: OutputFormat::default(),
            output_dir: default_output_dir(),
            log_level: LogLevel::default(),
            strict_exit: false,
        }
    }
}

impl Config {
    /// Validate the configuration values
    pub fn validate(&self) -> Result<()> {
        if !language_utils::is_supported(&self.language) {
            return Err(anyhow!(
                "Unsupported default language '{}', supported: {}",
                self.language,
                language_utils::SUPPORTED_LANGUAGES.join(", ")
            ));
        }

        if self.output_dir.trim().is_empty() {
            return Err(anyhow!("Output directory must not be empty"));
        }

        Ok(())
    }
}
