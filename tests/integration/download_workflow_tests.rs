/*!
 * Integration tests for the end-to-end download pipeline
 */

use std::sync::Arc;
use anyhow::Result;
use tokio_test::block_on;

use ytsubs::app_controller::{Controller, DownloadRequest};
use ytsubs::errors::SubtitleError;
use ytsubs::file_utils::FileManager;
use ytsubs::providers::mock::MockSource;
use crate::common;

const WATCH_URL: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";

/// Test downloading SRT end-to-end writes the deterministically named file
#[test]
fn test_download_withSrtFormat_shouldWriteNumberedBlocks() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let source = Arc::new(MockSource::with_languages(
        &["en", "es"],
        common::sample_payload(),
    ));
    let controller = Controller::with_source(common::test_config(&temp_dir), source.clone());

    let request = DownloadRequest::new(WATCH_URL, "en", "srt");
    let path = block_on(controller.download_subtitles(&request)).unwrap();

    assert_eq!(
        path.file_name().unwrap().to_string_lossy(),
        "dQw4w9WgXcQ_en.srt"
    );
    assert!(FileManager::file_exists(&path));

    let content = FileManager::read_to_string(&path)?;
    assert_eq!(content.lines().count(), 11);
    assert!(content.starts_with("1\n00:00:00,000 --> 00:00:02,000\nHello, world!\n"));

    assert_eq!(source.list_call_count(), 2);
    assert_eq!(source.fetch_call_count(), 1);

    Ok(())
}

/// Test downloading plain text end-to-end
#[test]
fn test_download_withTextFormat_shouldWriteJoinedLines() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let source = Arc::new(MockSource::with_languages(&["en"], common::sample_payload()));
    let controller = Controller::with_source(common::test_config(&temp_dir), source);

    let request = DownloadRequest::new(WATCH_URL, "en", "txt");
    let path = block_on(controller.download_subtitles(&request)).unwrap();

    assert_eq!(
        path.file_name().unwrap().to_string_lossy(),
        "dQw4w9WgXcQ_en.txt"
    );

    let content = FileManager::read_to_string(&path)?;
    assert_eq!(
        content,
        "Hello, world!\nThis is a test subtitle.\nThank you for watching."
    );

    Ok(())
}

/// Test an unsupported language is rejected before any network call
#[test]
fn test_download_withUnsupportedLanguage_shouldFailWithoutNetworkCalls() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let source = Arc::new(MockSource::with_languages(&["en"], common::sample_payload()));
    let controller = Controller::with_source(common::test_config(&temp_dir), source.clone());

    let request = DownloadRequest::new(WATCH_URL, "xyz", "srt");
    let result = block_on(controller.download_subtitles(&request));

    match result {
        Err(SubtitleError::UnsupportedLanguage(code)) => assert_eq!(code, "xyz"),
        other => panic!("expected UnsupportedLanguage, got {:?}", other),
    }

    assert_eq!(source.list_call_count(), 0);
    assert_eq!(source.fetch_call_count(), 0);

    Ok(())
}

/// Test an unsupported output format is rejected before any network call
#[test]
fn test_download_withUnsupportedFormat_shouldFailWithoutNetworkCalls() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let source = Arc::new(MockSource::with_languages(&["en"], common::sample_payload()));
    let controller = Controller::with_source(common::test_config(&temp_dir), source.clone());

    let request = DownloadRequest::new(WATCH_URL, "en", "vtt");
    let result = block_on(controller.download_subtitles(&request));

    match result {
        Err(SubtitleError::UnsupportedFormat(kind)) => assert_eq!(kind, "vtt"),
        other => panic!("expected UnsupportedFormat, got {:?}", other),
    }

    assert_eq!(source.list_call_count(), 0);

    Ok(())
}

/// Test a foreign URL is rejected before the language and format checks
#[test]
fn test_download_withInvalidUrl_shouldFailFirst() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let source = Arc::new(MockSource::with_languages(&["en"], common::sample_payload()));
    let controller = Controller::with_source(common::test_config(&temp_dir), source.clone());

    // Language and format are also bad; the URL check must win
    let request = DownloadRequest::new("https://vimeo.com/123", "xyz", "vtt");
    let result = block_on(controller.download_subtitles(&request));

    assert!(matches!(result, Err(SubtitleError::InvalidUrl(_))));
    assert_eq!(source.list_call_count(), 0);

    Ok(())
}

/// Test a language absent from the track list fetches no payload
#[test]
fn test_download_withAbsentLanguage_shouldNotFetchPayload() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let source = Arc::new(MockSource::with_languages(&["en"], common::sample_payload()));
    let controller = Controller::with_source(common::test_config(&temp_dir), source.clone());

    let request = DownloadRequest::new(WATCH_URL, "es", "srt");
    let result = block_on(controller.download_subtitles(&request));

    match result {
        Err(SubtitleError::LanguageNotAvailable(code)) => assert_eq!(code, "es"),
        other => panic!("expected LanguageNotAvailable, got {:?}", other),
    }

    assert_eq!(source.list_call_count(), 1);
    assert_eq!(source.fetch_call_count(), 0);

    Ok(())
}

/// Test a video without captions reports no subtitles
#[test]
fn test_download_withNoTracks_shouldFailWithNoSubtitles() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let source = Arc::new(MockSource::empty());
    let controller = Controller::with_source(common::test_config(&temp_dir), source);

    let request = DownloadRequest::new(WATCH_URL, "en", "srt");
    let result = block_on(controller.download_subtitles(&request));

    assert!(matches!(result, Err(SubtitleError::NoSubtitlesAvailable)));

    Ok(())
}

/// Test a failing metadata query is distinct from a failing payload fetch
#[test]
fn test_download_withFailingQueries_shouldMapToDistinctErrors() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;

    let listing_down = Controller::with_source(
        common::test_config(&temp_dir),
        Arc::new(MockSource::failing_list()),
    );
    let request = DownloadRequest::new(WATCH_URL, "en", "srt");
    let result = block_on(listing_down.download_subtitles(&request));
    assert!(matches!(result, Err(SubtitleError::InfoFetchFailed(_))));

    let fetch_down = Controller::with_source(
        common::test_config(&temp_dir),
        Arc::new(MockSource::failing_fetch(&["en"])),
    );
    let result = block_on(fetch_down.download_subtitles(&request));
    assert!(matches!(result, Err(SubtitleError::DownloadFailed(_))));

    Ok(())
}

/// Test a repeated download overwrites the existing artifact
#[test]
fn test_download_withRepeatedRequest_shouldOverwriteAndStayByteStable() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let source = Arc::new(MockSource::with_languages(&["en"], common::sample_payload()));
    let controller = Controller::with_source(common::test_config(&temp_dir), source);

    let request = DownloadRequest::new(WATCH_URL, "en", "srt");

    let first_path = block_on(controller.download_subtitles(&request)).unwrap();
    let first_content = FileManager::read_to_string(&first_path)?;

    let second_path = block_on(controller.download_subtitles(&request)).unwrap();
    let second_content = FileManager::read_to_string(&second_path)?;

    assert_eq!(first_path, second_path);
    assert_eq!(first_content, second_content);

    Ok(())
}

/// Test listing languages through the controller
#[test]
fn test_list_languages_withValidUrl_shouldReturnCodes() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let source = Arc::new(MockSource::with_languages(&["en", "ko"], ""));
    let controller = Controller::with_source(common::test_config(&temp_dir), source);

    let languages = block_on(controller.list_languages(WATCH_URL)).unwrap();
    assert_eq!(languages, vec!["en", "ko"]);

    let result = block_on(controller.list_languages("not a url"));
    assert!(matches!(result, Err(SubtitleError::InvalidUrl(_))));

    Ok(())
}
