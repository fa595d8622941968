/*!
 * Tests for error types and conversions
 */

use ytsubs::errors::{AppError, FetchError, SubtitleError};

#[test]
fn test_fetchError_requestFailed_shouldDisplayCorrectly() {
    let error = FetchError::RequestFailed("Connection timeout".to_string());
    let display = format!("{}", error);
    assert!(display.contains("Request failed"));
    assert!(display.contains("Connection timeout"));
}

#[test]
fn test_fetchError_apiError_shouldDisplayStatusAndMessage() {
    let error = FetchError::ApiError {
        status_code: 404,
        message: "Not found".to_string(),
    };
    let display = format!("{}", error);
    assert!(display.contains("404"));
    assert!(display.contains("Not found"));
}

#[test]
fn test_subtitleError_invalidUrl_shouldIncludeUrl() {
    let error = SubtitleError::InvalidUrl("https://example.com".to_string());
    let display = format!("{}", error);
    assert!(display.contains("Invalid YouTube URL"));
    assert!(display.contains("https://example.com"));
}

#[test]
fn test_subtitleError_unsupportedLanguage_shouldIncludeCode() {
    let error = SubtitleError::UnsupportedLanguage("xyz".to_string());
    assert!(format!("{}", error).contains("xyz"));
}

#[test]
fn test_subtitleError_languageNotAvailable_shouldIncludeCode() {
    let error = SubtitleError::LanguageNotAvailable("ko".to_string());
    let display = format!("{}", error);
    assert!(display.contains("not available"));
    assert!(display.contains("ko"));
}

#[test]
fn test_subtitleError_parse_shouldStayGeneric() {
    // The parse failure signal must not leak fault detail
    let display = format!("{}", SubtitleError::Parse);
    assert_eq!(display, "Failed to parse subtitle data");
}

#[test]
fn test_appError_fromFetchError_shouldWrapCorrectly() {
    let fetch_error = FetchError::ConnectionError("Host unreachable".to_string());
    let app_error: AppError = fetch_error.into();
    assert!(matches!(app_error, AppError::Fetch(_)));
}

#[test]
fn test_appError_fromSubtitleError_shouldWrapCorrectly() {
    let subtitle_error = SubtitleError::NoSubtitlesAvailable;
    let app_error: AppError = subtitle_error.into();
    assert!(matches!(app_error, AppError::Subtitle(_)));
}

#[test]
fn test_appError_fromIoError_shouldBecomeFileError() {
    let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let app_error: AppError = io_error.into();
    assert!(matches!(app_error, AppError::File(_)));
}
