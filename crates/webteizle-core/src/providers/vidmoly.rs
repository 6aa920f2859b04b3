//! Vidmoly resolver

use super::{ExtractedStream, ResolveContext, not_found};
use crate::error::Result;
use crate::parser::patterns::{file_http_m3u8, sources_array_file};

const HEADERS: &[(&str, &str)] = &[
    ("Referer", "https://vidmoly.to/"),
    ("Origin", "https://vidmoly.to"),
];

pub fn extract(body: &str) -> Option<String> {
    sources_array_file(body).or_else(|| file_http_m3u8(body))
}

pub(super) async fn resolve(
    ctx: &ResolveContext<'_>,
    embed_url: &str,
) -> Result<ExtractedStream> {
    let body = ctx.fetch_page(embed_url, ctx.site_base).await?;
    let stream = extract(&body).ok_or_else(|| not_found("vidmoly sources"))?;
    ExtractedStream::new(&stream, HEADERS)
}
