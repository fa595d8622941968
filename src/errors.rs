/*!
 * Error types for the ytsubs application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when talking to a caption source over the network
#[derive(Error, Debug)]
pub enum FetchError {
    /// Error when making an HTTP request fails
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Error returned by the platform itself
    #[error("Platform responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the platform
        message: String,
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),
}

/// Errors that can occur in the subtitle download pipeline
#[derive(Error, Debug)]
pub enum SubtitleError {
    /// URL is not a recognizable video URL or the video ID cannot be extracted
    #[error("Invalid YouTube URL: {0}")]
    InvalidUrl(String),

    /// Requested language is outside the supported set
    #[error("Unsupported language code: {0}")]
    UnsupportedLanguage(String),

    /// Requested output format is outside the supported set
    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    /// The platform reports no caption tracks for the video
    #[error("No subtitles available for this video")]
    NoSubtitlesAvailable,

    /// Caption tracks exist but not for the requested language
    #[error("Subtitles not available in language: {0}")]
    LanguageNotAvailable(String),

    /// The caption track metadata query itself failed
    #[error("Failed to fetch subtitle info: {0}")]
    InfoFetchFailed(String),

    /// The payload fetch failed after track resolution succeeded
    #[error("Failed to download subtitle track: {0}")]
    DownloadFailed(String),

    /// The raw payload could not be scanned into caption entries
    #[error("Failed to parse subtitle data")]
    Parse,

    /// Formatting the parsed entries failed
    #[error("Failed to format subtitles: {0}")]
    Format(String),

    /// Directory creation or file write failure
    #[error("Failed to write subtitle file: {0}")]
    Persistence(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from a caption source
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Error from the subtitle pipeline
    #[error("Subtitle error: {0}")]
    Subtitle(#[from] SubtitleError),

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
