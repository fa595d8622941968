use std::fmt;
use regex::Regex;
use once_cell::sync::Lazy;
use anyhow::{Result, anyhow};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use crate::errors::SubtitleError;

// @module: Caption payload parsing and output rendering

// @const: Timedtext fragment regex
static FRAGMENT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)<text\s+start="([^"]*)"\s+dur="([^"]*)"[^>]*>(.*?)</text>"#).unwrap()
});

/// Supported output serializations
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    // @format: Plain text, one caption per line
    #[serde(rename = "txt")]
    Text,
    // @format: SRT numbered timestamp blocks
    #[default]
    #[serde(rename = "srt")]
    Srt,
}

impl OutputFormat {
    // @returns: File extension for this format
    pub fn extension(&self) -> &str {
        match self {
            Self::Text => "txt",
            Self::Srt => "srt",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "txt" => Ok(Self::Text),
            "srt" => Ok(Self::Srt),
            _ => Err(anyhow!("Invalid output format: {}", s)),
        }
    }
}

// @struct: Single timed caption
#[derive(Debug, Clone, PartialEq)]
pub struct CaptionEntry {
    // @field: Start offset in seconds
    pub start_secs: f64,

    // @field: End offset in seconds
    pub end_secs: f64,

    // @field: Decoded caption text
    pub text: String,
}

impl CaptionEntry {
    /// Creates a new caption entry
    pub fn new(start_secs: f64, end_secs: f64, text: String) -> Self {
        CaptionEntry {
            start_secs,
            end_secs,
            text,
        }
    }

    /// Convert start time to formatted SRT timestamp
    pub fn format_start_time(&self) -> String {
        Self::format_timestamp(self.start_secs)
    }

    /// Convert end time to formatted SRT timestamp
    pub fn format_end_time(&self) -> String {
        Self::format_timestamp(self.end_secs)
    }

    /// Format a time offset in seconds to SRT format (HH:MM:SS,mmm)
    ///
    /// Hours are not wrapped: offsets past 100 hours print with however
    /// many digits they need.
    pub fn format_timestamp(seconds: f64) -> String {
        let hours = (seconds / 3600.0).floor() as u64;
        let minutes = ((seconds % 3600.0) / 60.0).floor() as u64;
        let secs = (seconds % 60.0).floor() as u64;
        let millis = ((seconds % 1.0) * 1000.0).floor() as u64;

        format!("{:02}:{:02}:{:02},{:03}", hours, minutes, secs, millis)
    }
}

/// Decode the escape sequences YouTube uses in timedtext payloads
///
/// Exactly five entities are recognized; anything else passes through
/// unchanged. The ampersand is decoded last so that sequences like
/// `&amp;lt;` come out as the literal `&lt;`.
pub fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// Parse a raw timedtext payload into ordered caption entries
///
/// Fragments are emitted in payload order. A fragment whose start or
/// duration attribute does not parse as a non-negative number is skipped
/// without emitting a partial entry.
pub fn parse_timedtext(payload: &str) -> Result<Vec<CaptionEntry>, SubtitleError> {
    let mut entries = Vec::new();

    for caps in FRAGMENT_REGEX.captures_iter(payload) {
        let start: f64 = match caps[1].parse() {
            Ok(value) => value,
            Err(_) => {
                warn!("Skipping fragment with malformed start attribute: {}", &caps[1]);
                continue;
            }
        };
        let duration: f64 = match caps[2].parse() {
            Ok(value) => value,
            Err(_) => {
                warn!("Skipping fragment with malformed dur attribute: {}", &caps[2]);
                continue;
            }
        };

        if start < 0.0 || duration < 0.0 {
            warn!("Skipping fragment with negative timing: start={} dur={}", start, duration);
            continue;
        }

        let text = decode_entities(&caps[3]);
        entries.push(CaptionEntry::new(start, start + duration, text));
    }

    info!("Parsed {} caption entries", entries.len());

    Ok(entries)
}

/// Render caption entries into one of the two output payloads
///
/// Plain text joins the caption texts with single newlines. SRT emits one
/// numbered block per entry (index, time range, text, blank line) with the
/// blocks newline-joined, so the output carries no trailing blank after
/// the last block.
pub fn format_captions(
    entries: &[CaptionEntry],
    format: OutputFormat,
) -> Result<String, SubtitleError> {
    let rendered = match format {
        OutputFormat::Text => entries
            .iter()
            .map(|entry| entry.text.as_str())
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Srt => entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                format!(
                    "{}\n{} --> {}\n{}\n",
                    i + 1,
                    entry.format_start_time(),
                    entry.format_end_time(),
                    entry.text
                )
            })
            .collect::<Vec<_>>()
            .join("\n"),
    };

    Ok(rendered)
}
