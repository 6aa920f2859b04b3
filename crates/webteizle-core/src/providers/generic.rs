//! Fallback resolver for embeds from unknown providers

use super::{ExtractedStream, ResolveContext, not_found};
use crate::error::Result;
use crate::parser::patterns::{bare_m3u8, bare_mp4, player_file_m3u8, sources_array_file};
use crate::url::origin_of;

pub fn extract(body: &str) -> Option<String> {
    player_file_m3u8(body)
        .or_else(|| sources_array_file(body))
        .or_else(|| bare_m3u8(body))
        .or_else(|| bare_mp4(body))
}

/// `{origin}/` of the embed URL, the only Referer an unknown host can expect
pub fn referer_for(embed_url: &str) -> Option<String> {
    origin_of(embed_url).map(|origin| format!("{}/", origin))
}

pub(super) async fn resolve(
    ctx: &ResolveContext<'_>,
    embed_url: &str,
) -> Result<ExtractedStream> {
    let body = ctx.fetch_page(embed_url, ctx.site_base).await?;
    let stream = extract(&body).ok_or_else(|| not_found("playable url"))?;

    match referer_for(embed_url) {
        Some(referer) => ExtractedStream::new(&stream, &[("Referer", referer.as_str())]),
        None => ExtractedStream::new(&stream, &[]),
    }
}
