//! Netu / Waaw / HQQ resolver

use super::{ExtractedStream, ResolveContext, not_found};
use crate::error::Result;
use crate::parser::patterns::{bare_m3u8, player_file_m3u8, sources_array_file};

const ORIGIN: &str = "https://netu.tv";

/// Moves `netu.ac` links to `netu.tv` and `/watch/` pages to `/embed/`
pub fn normalize_url(embed_url: &str) -> String {
    embed_url
        .replacen("netu.ac", "netu.tv", 1)
        .replacen("/watch/", "/embed/", 1)
}

pub fn extract(body: &str) -> Option<String> {
    player_file_m3u8(body)
        .or_else(|| sources_array_file(body))
        .or_else(|| bare_m3u8(body))
}

pub(super) async fn resolve(
    ctx: &ResolveContext<'_>,
    embed_url: &str,
) -> Result<ExtractedStream> {
    let url = normalize_url(embed_url);
    let body = ctx.fetch_page(&url, ctx.site_base).await?;
    let stream = extract(&body).ok_or_else(|| not_found("netu m3u8"))?;
    ExtractedStream::new(&stream, &[("Referer", url.as_str()), ("Origin", ORIGIN)])
}
