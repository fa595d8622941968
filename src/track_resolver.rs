use std::sync::Arc;
use log::{debug, error};

use crate::errors::SubtitleError;
use crate::providers::{CaptionSource, CaptionTrack};

/// Resolves caption tracks for a video against a caption source
///
/// Availability failures are distinguished from query faults: a video with
/// zero tracks is `NoSubtitlesAvailable`, while a failed query is
/// normalized to `InfoFetchFailed`. No caching happens across calls; each
/// call re-queries the source.
#[derive(Debug)]
pub struct TrackResolver {
    source: Arc<dyn CaptionSource>,
}

impl TrackResolver {
    /// Create a resolver over the given caption source
    pub fn new(source: Arc<dyn CaptionSource>) -> Self {
        TrackResolver { source }
    }

    /// Query the source for the track list of a video
    async fn query_tracks(&self, video_id: &str) -> Result<Vec<CaptionTrack>, SubtitleError> {
        let tracks = self.source.list_tracks(video_id).await.map_err(|e| {
            error!("Caption track query failed for video {}: {}", video_id, e);
            SubtitleError::InfoFetchFailed(e.to_string())
        })?;

        if tracks.is_empty() {
            return Err(SubtitleError::NoSubtitlesAvailable);
        }

        Ok(tracks)
    }

    /// List the language codes with captions available for a video
    pub async fn list_available_languages(
        &self,
        video_id: &str,
    ) -> Result<Vec<String>, SubtitleError> {
        let tracks = self.query_tracks(video_id).await?;
        Ok(tracks.into_iter().map(|track| track.lang_code).collect())
    }

    /// Resolve the caption track for a video in the requested language
    pub async fn resolve_track(
        &self,
        video_id: &str,
        lang_code: &str,
    ) -> Result<CaptionTrack, SubtitleError> {
        let tracks = self.query_tracks(video_id).await?;

        debug!(
            "Video {} has {} caption track(s), looking for '{}'",
            video_id,
            tracks.len(),
            lang_code
        );

        tracks
            .into_iter()
            .find(|track| track.lang_code == lang_code)
            .ok_or_else(|| SubtitleError::LanguageNotAvailable(lang_code.to_string()))
    }
}
