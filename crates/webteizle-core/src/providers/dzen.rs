//! Dzen / Zen.Yandex resolver

use serde::Deserialize;

use super::{ExtractedStream, ResolveContext, not_found};
use crate::error::Result;
use crate::parser::patterns::{streams_array, vkuser_m3u8};

const REFERER: &str = "https://dzen.ru/";
const HEADERS: &[(&str, &str)] = &[("Referer", REFERER), ("Origin", "https://dzen.ru")];

/// One entry of the `"streams"` array
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DzenStream {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub url: String,
}

/// Parses the `"streams"` array embedded in the page, if any
pub fn parse_streams(body: &str) -> Option<Vec<DzenStream>> {
    let json = streams_array(body)?;
    match serde_json::from_str(&json) {
        Ok(streams) => Some(streams),
        Err(e) => {
            tracing::debug!("Unreadable dzen streams array: {}", e);
            None
        }
    }
}

/// The HLS stream, or the first stream when none is tagged `hls`
pub fn select_stream(streams: &[DzenStream]) -> Option<&DzenStream> {
    streams
        .iter()
        .find(|stream| stream.kind == "hls")
        .or_else(|| streams.first())
}

pub(super) async fn resolve(
    ctx: &ResolveContext<'_>,
    embed_url: &str,
) -> Result<ExtractedStream> {
    let body = ctx.fetch_page(embed_url, ctx.site_base).await?;

    if let Some(streams) = parse_streams(&body)
        && let Some(stream) = select_stream(&streams)
        && !stream.url.trim().is_empty()
    {
        return ExtractedStream::new(&stream.url, HEADERS);
    }

    let vk = vkuser_m3u8(&body).ok_or_else(|| not_found("dzen streams"))?;
    ExtractedStream::new(&vk, &[("Referer", REFERER)])
}
