//! Core data types for the webteizle scraper
//!
//! Field names of the serialized forms are fixed by the host contract.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// HTTP headers a playback client must present for a stream
pub type StreamHeaders = BTreeMap<String, String>;

/// A single entry from the site search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Title with any trailing `(YYYY)` removed
    pub title: String,

    /// Absolute poster URL, empty when the site provides none
    pub image: String,

    /// Detail page URL (`{base}/hakkinda/{slug}`)
    pub href: String,
}

/// Free-text metadata for a title; every field may be empty
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TitleDetail {
    pub description: String,
    pub aliases: String,
    pub airdate: String,
}

impl TitleDetail {
    /// Detail carrying only a human-readable status message
    pub fn placeholder(description: &str) -> Self {
        Self {
            description: description.to_string(),
            ..Self::default()
        }
    }
}

/// A watch page for one language track of a title
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchOption {
    /// Watch page URL, carrying `?fid=` when the film id is known
    pub href: String,

    /// 1 for the dubbed track, 2 for the subtitled track
    pub number: u32,
}

/// One backend offering playback for a title
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDescriptor {
    /// Opaque id, only meaningful for the embed lookup
    pub id: String,

    /// Backend name as shown by the site (e.g. "Filemoon")
    pub display_name: String,

    /// Vertical resolution as reported by the site (e.g. "1080")
    pub quality: Option<String>,
}

impl SourceDescriptor {
    /// Human-readable stream title, e.g. "Filemoon 1080p"
    pub fn stream_title(&self) -> String {
        let name = match self.display_name.trim() {
            "" => "Unknown",
            name => name,
        };

        match self.quality.as_deref().map(str::trim) {
            Some(q) if !q.is_empty() && q != "0" => format!("{} {}p", name, q),
            _ => name.to_string(),
        }
    }
}

/// A directly playable URL plus the headers needed to fetch it
///
/// `stream_url` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedStream {
    pub title: String,

    #[serde(rename = "streamUrl")]
    pub stream_url: String,

    pub headers: StreamHeaders,
}

/// All streams resolved for one watch page, in source-list order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamSet {
    pub streams: Vec<ResolvedStream>,
}
