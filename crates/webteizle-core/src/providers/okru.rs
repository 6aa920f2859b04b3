//! OK.ru resolver
//!
//! The player page stores its configuration as entity-encoded JSON in a
//! `data-options` attribute. Inside it, `flashvars.metadata` is a second
//! JSON document, encoded as a string, holding the video list.

use serde::Deserialize;
use serde_json::Value;

use super::{ExtractedStream, ResolveContext, not_found};
use crate::error::{Result, WebteizleError};
use crate::parser::patterns::{data_options_attr, decode_html_entities};

const HEADERS: &[(&str, &str)] = &[("Referer", "https://ok.ru/")];

/// Quality tier names, best first
pub const QUALITY_PREFERENCE: [&str; 8] =
    ["ultra", "quad", "full", "hd", "sd", "low", "lowest", "mobile"];

#[derive(Debug, Deserialize)]
struct PlayerOptions {
    flashvars: Option<Flashvars>,
}

#[derive(Debug, Deserialize)]
struct Flashvars {
    metadata: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct Metadata {
    #[serde(default)]
    videos: Vec<OkVideo>,
}

/// One entry of the OK.ru video list
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OkVideo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// Stage one: the decoded JSON text of the `data-options` attribute
pub fn decode_player_options(body: &str) -> Result<String> {
    let raw = data_options_attr(body).ok_or_else(|| not_found("data-options attribute"))?;
    Ok(decode_html_entities(&raw))
}

/// Stage two: the video list from the decoded options
///
/// `flashvars.metadata` is normally a JSON string; an inline object is
/// accepted as well.
pub fn parse_video_list(options_json: &str) -> Result<Vec<OkVideo>> {
    let options: PlayerOptions = serde_json::from_str(options_json)?;

    let metadata = options
        .flashvars
        .and_then(|flashvars| flashvars.metadata)
        .ok_or_else(|| not_found("flashvars.metadata"))?;

    let metadata: Metadata = match metadata {
        Value::String(text) => serde_json::from_str(&text)?,
        object @ Value::Object(_) => serde_json::from_value(object)?,
        other => {
            return Err(WebteizleError::ParseError(format!(
                "unexpected metadata type: {}",
                other
            )));
        }
    };

    Ok(metadata.videos)
}

/// Picks the first tier of [`QUALITY_PREFERENCE`] present in `videos`,
/// or the first video when no tier name matches
pub fn select_preferred_video(videos: &[OkVideo]) -> Option<&OkVideo> {
    QUALITY_PREFERENCE
        .iter()
        .find_map(|tier| videos.iter().find(|video| video.name == *tier))
        .or_else(|| videos.first())
}

pub(super) async fn resolve(
    ctx: &ResolveContext<'_>,
    embed_url: &str,
) -> Result<ExtractedStream> {
    let body = ctx.fetch_page(embed_url, ctx.site_base).await?;

    let options_json = decode_player_options(&body)?;
    let videos = parse_video_list(&options_json)?;
    let video = select_preferred_video(&videos).ok_or_else(|| not_found("ok.ru videos"))?;

    ExtractedStream::new(&video.url, HEADERS)
}
