/*!
 * Caption source implementations.
 *
 * This module contains the caption source abstraction and its clients:
 * - YouTube: timedtext endpoint client
 * - Mock: fixture source for tests
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::FetchError;

/// One available caption track for a video
#[derive(Debug, Clone, PartialEq)]
pub struct CaptionTrack {
    /// ISO 639-1 language code of the track
    pub lang_code: String,
    /// Track name, empty for the default track
    pub name: String,
    /// Location the raw payload can be fetched from
    pub fetch_url: String,
}

/// Common trait for caption sources
///
/// This trait defines the interface the track resolver and the download
/// pipeline work against, so a fixture source can stand in for the real
/// platform in tests instead of an ambient environment flag.
#[async_trait]
pub trait CaptionSource: Send + Sync + Debug {
    /// List the caption tracks available for a video
    ///
    /// # Arguments
    /// * `video_id` - The platform video identifier
    ///
    /// # Returns
    /// * `Result<Vec<CaptionTrack>, FetchError>` - The available tracks, possibly empty
    async fn list_tracks(&self, video_id: &str) -> Result<Vec<CaptionTrack>, FetchError>;

    /// Fetch the raw caption payload for a resolved track
    ///
    /// # Arguments
    /// * `track` - The track whose payload to download
    ///
    /// # Returns
    /// * `Result<String, FetchError>` - The raw timedtext payload
    async fn fetch_track(&self, track: &CaptionTrack) -> Result<String, FetchError>;
}

pub mod youtube;
pub mod mock;
