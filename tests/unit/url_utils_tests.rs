/*!
 * Tests for URL validation and video ID extraction
 */

use ytsubs::url_utils::{extract_video_id, is_youtube_url};

/// Test recognized YouTube URL forms
#[test]
fn test_is_youtube_url_withPlatformHosts_shouldAccept() {
    assert!(is_youtube_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ"));
    assert!(is_youtube_url("http://youtube.com/watch?v=dQw4w9WgXcQ"));
    assert!(is_youtube_url("https://m.youtube.com/watch?v=dQw4w9WgXcQ"));
    assert!(is_youtube_url("https://youtu.be/dQw4w9WgXcQ"));
}

/// Test foreign hosts and malformed input are rejected
#[test]
fn test_is_youtube_url_withForeignOrMalformed_shouldReject() {
    assert!(!is_youtube_url("https://vimeo.com/123456"));
    assert!(!is_youtube_url("https://example.com/watch?v=dQw4w9WgXcQ"));
    assert!(!is_youtube_url("not a url"));
    assert!(!is_youtube_url(""));
    assert!(!is_youtube_url("ftp://www.youtube.com/watch?v=dQw4w9WgXcQ"));
}

/// Test video ID extraction from the watch URL form
#[test]
fn test_extract_video_id_withWatchUrl_shouldExtract() {
    assert_eq!(
        extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
        Some("dQw4w9WgXcQ".to_string())
    );
}

/// Test extraction survives extra query parameters
#[test]
fn test_extract_video_id_withExtraQueryParams_shouldExtract() {
    assert_eq!(
        extract_video_id("https://www.youtube.com/watch?t=42&v=dQw4w9WgXcQ&list=PL123"),
        Some("dQw4w9WgXcQ".to_string())
    );
}

/// Test extraction from short-link, embed and shorts forms
#[test]
fn test_extract_video_id_withAlternateForms_shouldExtract() {
    assert_eq!(
        extract_video_id("https://youtu.be/dQw4w9WgXcQ"),
        Some("dQw4w9WgXcQ".to_string())
    );
    assert_eq!(
        extract_video_id("https://www.youtube.com/embed/dQw4w9WgXcQ"),
        Some("dQw4w9WgXcQ".to_string())
    );
    assert_eq!(
        extract_video_id("https://www.youtube.com/shorts/dQw4w9WgXcQ"),
        Some("dQw4w9WgXcQ".to_string())
    );
}

/// Test URLs without a well-formed ID yield nothing
#[test]
fn test_extract_video_id_withBadId_shouldReturnNone() {
    // Too short
    assert_eq!(extract_video_id("https://www.youtube.com/watch?v=short"), None);
    // Illegal characters
    assert_eq!(
        extract_video_id("https://www.youtube.com/watch?v=has?badchar"),
        None
    );
    // Missing the v parameter
    assert_eq!(extract_video_id("https://www.youtube.com/watch"), None);
    // Foreign host with a plausible ID
    assert_eq!(extract_video_id("https://example.com/watch?v=dQw4w9WgXcQ"), None);
    // Unrelated path
    assert_eq!(extract_video_id("https://www.youtube.com/feed/library"), None);
}
