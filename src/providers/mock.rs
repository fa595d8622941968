/*!
 * Mock caption source for testing.
 *
 * This module provides a fixture source that simulates different behaviors:
 * - `MockSource::with_tracks()` - Serves fixture tracks and a fixture payload
 * - `MockSource::empty()` - Reports a video with no caption tracks
 * - `MockSource::failing_list()` - Fails the track-list query
 * - `MockSource::failing_fetch()` - Fails the payload fetch
 *
 * Call counters let tests assert that validation failures never reach the
 * network and that availability failures never fetch a payload.
 */

// Allow dead code - the fixture source is exercised by the test suite
#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::errors::FetchError;
use crate::providers::{CaptionSource, CaptionTrack};

/// Behavior mode for the mock source
#[derive(Debug, Clone, Copy, PartialEq)]
enum MockBehavior {
    /// Serve the fixture tracks and payload
    Working,
    /// Fail the track-list query with a connection error
    FailingList,
    /// Serve tracks but fail the payload fetch
    FailingFetch,
}

/// Fixture caption source for testing download behavior
#[derive(Debug)]
pub struct MockSource {
    /// Behavior mode
    behavior: MockBehavior,
    /// Tracks reported by the list query
    tracks: Vec<CaptionTrack>,
    /// Payload served for any track fetch
    payload: String,
    /// Number of list queries made
    list_calls: AtomicUsize,
    /// Number of payload fetches made
    fetch_calls: AtomicUsize,
}

impl MockSource {
    /// Create a working source serving the given tracks and payload
    pub fn with_tracks(tracks: Vec<CaptionTrack>, payload: impl Into<String>) -> Self {
        Self {
            behavior: MockBehavior::Working,
            tracks,
            payload: payload.into(),
            list_calls: AtomicUsize::new(0),
            fetch_calls: AtomicUsize::new(0),
        }
    }

    /// Create a working source serving one track per language code
    pub fn with_languages(languages: &[&str], payload: impl Into<String>) -> Self {
        let tracks = languages
            .iter()
            .map(|lang| CaptionTrack {
                lang_code: (*lang).to_string(),
                name: String::new(),
                fetch_url: format!("mock://timedtext?lang={}", lang),
            })
            .collect();
        Self::with_tracks(tracks, payload)
    }

    /// Create a source reporting a video with no caption tracks
    pub fn empty() -> Self {
        Self::with_tracks(Vec::new(), "")
    }

    /// Create a source whose track-list query always fails
    pub fn failing_list() -> Self {
        Self {
            behavior: MockBehavior::FailingList,
            tracks: Vec::new(),
            payload: String::new(),
            list_calls: AtomicUsize::new(0),
            fetch_calls: AtomicUsize::new(0),
        }
    }

    /// Create a source whose payload fetch always fails
    pub fn failing_fetch(languages: &[&str]) -> Self {
        let mut source = Self::with_languages(languages, "");
        source.behavior = MockBehavior::FailingFetch;
        source
    }

    /// Number of track-list queries made so far
    pub fn list_call_count(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    /// Number of payload fetches made so far
    pub fn fetch_call_count(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CaptionSource for MockSource {
    async fn list_tracks(&self, _video_id: &str) -> Result<Vec<CaptionTrack>, FetchError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);

        match self.behavior {
            MockBehavior::FailingList => Err(FetchError::ConnectionError(
                "mock track list failure".to_string(),
            )),
            _ => Ok(self.tracks.clone()),
        }
    }

    async fn fetch_track(&self, _track: &CaptionTrack) -> Result<String, FetchError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);

        match self.behavior {
            MockBehavior::FailingFetch => Err(FetchError::RequestFailed(
                "mock payload fetch failure".to_string(),
            )),
            _ => Ok(self.payload.clone()),
        }
    }
}
