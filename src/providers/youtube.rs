use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;
use std::time::Duration;
use url::Url;
use log::{debug, error};

use crate::errors::FetchError;
use crate::providers::{CaptionSource, CaptionTrack};

/// Default timedtext endpoint of the video platform
const DEFAULT_BASE_URL: &str = "https://video.google.com/timedtext";

// @const: Track element in the caption list response
static TRACK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<track\s+([^>]*?)/?>").unwrap()
});

// @const: lang_code attribute inside a track element
static LANG_CODE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"lang_code="([^"]*)""#).unwrap()
});

// @const: name attribute inside a track element
static NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\bname="([^"]*)""#).unwrap()
});

/// Client for the YouTube timedtext endpoint
#[derive(Debug)]
pub struct YouTubeSource {
    /// Base URL of the timedtext endpoint
    base_url: String,
    /// HTTP client for making requests
    client: Client,
}

impl YouTubeSource {
    /// Create a new client against the real platform endpoint
    pub fn new() -> Self {
        Self::from_url(DEFAULT_BASE_URL)
    }

    /// Create a new client against an arbitrary endpoint
    ///
    /// No timeout is mandated for the pipeline; the client-level timeout
    /// here is a safety margin against a hung connection.
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            base_url: url.into(),
            client: Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_default(),
        }
    }

    /// Build the fetch location for one track of a video
    fn track_url(&self, video_id: &str, lang_code: &str, name: &str) -> String {
        let mut params = vec![("lang", lang_code), ("v", video_id)];
        if !name.is_empty() {
            params.push(("name", name));
        }

        match Url::parse_with_params(&self.base_url, &params) {
            Ok(url) => url.to_string(),
            // base_url was already parsed by reqwest, fall back to manual assembly
            Err(_) => format!("{}?lang={}&v={}", self.base_url, lang_code, video_id),
        }
    }

    /// Parse the caption list response into tracks
    fn parse_track_list(&self, video_id: &str, body: &str) -> Vec<CaptionTrack> {
        let mut tracks = Vec::new();

        for caps in TRACK_REGEX.captures_iter(body) {
            let attrs = &caps[1];

            let lang_code = match LANG_CODE_REGEX.captures(attrs) {
                Some(lang_caps) => lang_caps[1].to_string(),
                None => continue,
            };

            let name = NAME_REGEX
                .captures(attrs)
                .map(|name_caps| name_caps[1].to_string())
                .unwrap_or_default();

            let fetch_url = self.track_url(video_id, &lang_code, &name);

            tracks.push(CaptionTrack {
                lang_code,
                name,
                fetch_url,
            });
        }

        tracks
    }

    /// Perform a GET and return the response body, mapping transport faults
    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                FetchError::ConnectionError(e.to_string())
            } else {
                FetchError::RequestFailed(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!("Platform request failed with status {}: {}", status, url);
            return Err(FetchError::ApiError {
                status_code: status.as_u16(),
                message,
            });
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::RequestFailed(e.to_string()))
    }
}

impl Default for YouTubeSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl CaptionSource for YouTubeSource {
    async fn list_tracks(&self, video_id: &str) -> Result<Vec<CaptionTrack>, FetchError> {
        let url = match Url::parse_with_params(&self.base_url, &[("type", "list"), ("v", video_id)]) {
            Ok(url) => url.to_string(),
            Err(_) => format!("{}?type=list&v={}", self.base_url, video_id),
        };

        let body = self.get_text(&url).await?;
        let tracks = self.parse_track_list(video_id, &body);

        debug!("Found {} caption track(s) for video {}", tracks.len(), video_id);

        Ok(tracks)
    }

    async fn fetch_track(&self, track: &CaptionTrack) -> Result<String, FetchError> {
        debug!("Fetching caption track: {}", track.fetch_url);
        self.get_text(&track.fetch_url).await
    }
}
