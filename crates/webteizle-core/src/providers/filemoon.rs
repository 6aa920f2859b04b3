//! Filemoon resolver
//!
//! The `/e/` player page hides the manifest behind packed JS; the `/d/`
//! page of the canonical `filemoon.to` domain carries it in plain text.

use super::{ExtractedStream, ResolveContext, not_found};
use crate::error::Result;
use crate::parser::patterns::{bare_m3u8, player_file_m3u8};

const HEADERS: &[(&str, &str)] = &[
    ("Referer", "https://filemoon.to/"),
    ("Origin", "https://filemoon.to"),
];

/// Rewrites an embed URL to the canonical download page
///
/// Only the first occurrence of each marker is rewritten.
pub fn normalize_url(embed_url: &str) -> String {
    embed_url
        .replacen("/e/", "/d/", 1)
        .replacen("filemoon.in", "filemoon.to", 1)
        .replacen("filemoon.sx", "filemoon.to", 1)
}

pub fn extract(body: &str) -> Option<String> {
    player_file_m3u8(body).or_else(|| bare_m3u8(body))
}

pub(super) async fn resolve(
    ctx: &ResolveContext<'_>,
    embed_url: &str,
) -> Result<ExtractedStream> {
    let url = normalize_url(embed_url);
    let body = ctx.fetch_page(&url, embed_url).await?;
    let stream = extract(&body).ok_or_else(|| not_found("filemoon m3u8"))?;
    ExtractedStream::new(&stream, HEADERS)
}
