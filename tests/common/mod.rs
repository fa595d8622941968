/*!
 * Common test utilities for the ytsubs test suite
 */

use anyhow::Result;
use tempfile::TempDir;

use ytsubs::app_config::Config;
use ytsubs::providers::CaptionTrack;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Config pointing its output directory at a temp dir
pub fn test_config(output_dir: &TempDir) -> Config {
    Config {
        output_dir: output_dir.path().to_string_lossy().to_string(),
        ..Config::default()
    }
}

/// The three-fragment sample payload used across the pipeline tests
pub fn sample_payload() -> &'static str {
    r#"<?xml version="1.0" encoding="utf-8" ?>
<transcript>
<text start="0" dur="2">Hello, world!</text>
<text start="2" dur="3">This is a test subtitle.</text>
<text start="5" dur="4">Thank you for watching.</text>
</transcript>"#
}

/// A caption track fixture for the given language
pub fn track(lang: &str) -> CaptionTrack {
    CaptionTrack {
        lang_code: lang.to_string(),
        name: String::new(),
        fetch_url: format!("mock://timedtext?lang={}", lang),
    }
}
