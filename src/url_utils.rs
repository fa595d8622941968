use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

// @module: YouTube URL validation and video ID extraction

// @const: Video ID shape (11 chars of the YouTube alphabet)
static VIDEO_ID_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_-]{11}$").unwrap()
});

/// Hosts recognized as the video platform
const YOUTUBE_HOSTS: [&str; 4] = [
    "youtube.com",
    "www.youtube.com",
    "m.youtube.com",
    "youtu.be",
];

// @checks: URL parses and points at a recognized YouTube host
pub fn is_youtube_url(raw_url: &str) -> bool {
    match Url::parse(raw_url) {
        Ok(url) => {
            let scheme_ok = matches!(url.scheme(), "http" | "https");
            let host_ok = url
                .host_str()
                .map(|h| YOUTUBE_HOSTS.contains(&h))
                .unwrap_or(false);
            scheme_ok && host_ok
        }
        Err(_) => false,
    }
}

/// Extract the 11-character video ID from a YouTube URL
///
/// Supports the watch, short-link, embed and shorts URL forms. Returns
/// `None` when the URL does not carry a well-formed video ID.
pub fn extract_video_id(raw_url: &str) -> Option<String> {
    let url = Url::parse(raw_url).ok()?;
    let host = url.host_str()?;

    if !YOUTUBE_HOSTS.contains(&host) {
        return None;
    }

    let candidate = if host == "youtu.be" {
        // Short links carry the ID as the first path segment
        url.path_segments()?.next().map(|s| s.to_string())
    } else {
        match url.path() {
            "/watch" => url
                .query_pairs()
                .find(|(key, _)| key == "v")
                .map(|(_, value)| value.to_string()),
            path if path.starts_with("/embed/") || path.starts_with("/shorts/") => {
                path.rsplit('/').next().map(|s| s.to_string())
            }
            _ => None,
        }
    };

    candidate.filter(|id| VIDEO_ID_REGEX.is_match(id))
}
