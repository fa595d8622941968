use log::{error, info, debug};
use std::path::PathBuf;
use std::sync::Arc;

use crate::app_config::Config;
use crate::errors::SubtitleError;
use crate::file_utils::FileManager;
use crate::language_utils;
use crate::providers::youtube::YouTubeSource;
use crate::providers::CaptionSource;
use crate::subtitle_processor::{self, OutputFormat};
use crate::track_resolver::TrackResolver;
use crate::url_utils;

// @module: Download orchestration

// @struct: One subtitle download request
#[derive(Debug, Clone)]
pub struct DownloadRequest {
    // @field: Raw video URL as supplied by the caller
    pub url: String,

    // @field: Requested language code
    pub language: String,

    // @field: Requested output format ("txt" or "srt")
    pub format: String,
}

impl DownloadRequest {
    /// Creates a new download request
    pub fn new(
        url: impl Into<String>,
        language: impl Into<String>,
        format: impl Into<String>,
    ) -> Self {
        DownloadRequest {
            url: url.into(),
            language: language.into(),
            format: format.into(),
        }
    }
}

/// Main application controller for subtitle downloads
pub struct Controller {
    // @field: App configuration
    config: Config,

    // @field: Caption source the pipeline fetches from
    source: Arc<dyn CaptionSource>,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Self {
        Self::with_source(config, Arc::new(YouTubeSource::new()))
    }

    /// Create a controller over an explicit caption source
    ///
    /// Tests supply a fixture source here instead of toggling any ambient
    /// state.
    pub fn with_source(config: Config, source: Arc<dyn CaptionSource>) -> Self {
        Self { config, source }
    }

    /// Validate a request without touching the network
    ///
    /// Checks run in order and the first failing check wins: platform URL,
    /// then language, then output format.
    fn validate_request(&self, request: &DownloadRequest) -> Result<OutputFormat, SubtitleError> {
        if !url_utils::is_youtube_url(&request.url) {
            return Err(SubtitleError::InvalidUrl(request.url.clone()));
        }

        if !language_utils::is_supported(&request.language) {
            return Err(SubtitleError::UnsupportedLanguage(request.language.clone()));
        }

        request
            .format
            .parse::<OutputFormat>()
            .map_err(|_| SubtitleError::UnsupportedFormat(request.format.clone()))
    }

    /// List the caption languages available for a video URL
    pub async fn list_languages(&self, url: &str) -> Result<Vec<String>, SubtitleError> {
        let video_id = url_utils::extract_video_id(url)
            .ok_or_else(|| SubtitleError::InvalidUrl(url.to_string()))?;

        let resolver = TrackResolver::new(Arc::clone(&self.source));
        resolver.list_available_languages(&video_id).await
    }

    /// Download the requested subtitle track and write it to disk
    ///
    /// Returns the path of the written artifact, named
    /// `<video_id>_<language>.<ext>` under the configured output directory.
    /// An existing file at that path is overwritten.
    pub async fn download_subtitles(
        &self,
        request: &DownloadRequest,
    ) -> Result<PathBuf, SubtitleError> {
        let format = self.validate_request(request).map_err(|e| {
            error!("Rejected download request: {}", e);
            e
        })?;

        let video_id = url_utils::extract_video_id(&request.url)
            .ok_or_else(|| SubtitleError::InvalidUrl(request.url.clone()))?;

        info!(
            "Downloading '{}' subtitles for video {} as {}",
            request.language, video_id, format
        );

        let resolver = TrackResolver::new(Arc::clone(&self.source));

        let available = resolver.list_available_languages(&video_id).await?;
        if !available.iter().any(|lang| lang == &request.language) {
            error!(
                "Language '{}' not available for video {}, available: {}",
                request.language,
                video_id,
                available.join(", ")
            );
            return Err(SubtitleError::LanguageNotAvailable(request.language.clone()));
        }

        let track = resolver.resolve_track(&video_id, &request.language).await?;

        let payload = self.source.fetch_track(&track).await.map_err(|e| {
            error!("Payload fetch failed for video {}: {}", video_id, e);
            SubtitleError::DownloadFailed(e.to_string())
        })?;

        debug!("Fetched {} bytes of caption payload", payload.len());

        FileManager::ensure_dir(&self.config.output_dir).map_err(|e| {
            error!("Could not create output directory: {}", e);
            SubtitleError::Persistence(e.to_string())
        })?;

        let entries = subtitle_processor::parse_timedtext(&payload)?;
        let rendered = subtitle_processor::format_captions(&entries, format)?;

        let output_path = FileManager::subtitle_output_path(
            &self.config.output_dir,
            &video_id,
            &request.language,
            format.extension(),
        );

        FileManager::write_to_file(&output_path, &rendered).map_err(|e| {
            error!("Could not write subtitle file: {}", e);
            SubtitleError::Persistence(e.to_string())
        })?;

        info!("Wrote subtitles to {:?}", output_path);

        Ok(output_path)
    }
}
