//! Mail.ru resolver
//!
//! Two hops: the embed page names a metadata URL, and the metadata JSON
//! lists the videos in ascending quality.

use serde::Deserialize;

use super::{ExtractedStream, ResolveContext, not_found};
use crate::client::HttpRequest;
use crate::error::Result;
use crate::parser::patterns::meta_url;
use crate::url::normalize_scheme_relative;

const REFERER: &str = "https://my.mail.ru/";
const HEADERS: &[(&str, &str)] = &[("Referer", REFERER), ("Origin", "https://my.mail.ru")];

#[derive(Debug, Deserialize)]
struct VideoMeta {
    #[serde(default)]
    videos: Vec<MailVideo>,
}

/// One entry of the Mail.ru video list
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MailVideo {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub url: String,
}

/// The metadata URL named by the embed page, made absolute
pub fn extract_meta_url(body: &str) -> Option<String> {
    meta_url(body).map(|url| normalize_scheme_relative(&url))
}

pub fn parse_video_list(json: &str) -> Result<Vec<MailVideo>> {
    let meta: VideoMeta = serde_json::from_str(json)?;
    Ok(meta.videos)
}

/// The last video, which is the best quality in Mail.ru's ordering
pub fn select_last_video(videos: &[MailVideo]) -> Option<&MailVideo> {
    videos.last()
}

pub(super) async fn resolve(
    ctx: &ResolveContext<'_>,
    embed_url: &str,
) -> Result<ExtractedStream> {
    let body = ctx.fetch_page(embed_url, ctx.site_base).await?;
    let meta_url = extract_meta_url(&body).ok_or_else(|| not_found("mail.ru metaUrl"))?;

    let request = HttpRequest::get(meta_url)
        .header("Accept", "application/json")
        .header("Referer", REFERER);
    let json = ctx.transport.fetch_text(request).await?;

    let videos = parse_video_list(&json)?;
    let video = select_last_video(&videos).ok_or_else(|| not_found("mail.ru videos"))?;

    ExtractedStream::new(&normalize_scheme_relative(&video.url), HEADERS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_last_video() {
        let json = r#"{"videos":[
            {"key":"360p","url":"//cdn.mail.ru/360.mp4"},
            {"key":"480p","url":"//cdn.mail.ru/480.mp4"},
            {"key":"720p","url":"//cdn.mail.ru/720.mp4"}
        ]}"#;
        let videos = parse_video_list(json).unwrap();
        let picked = select_last_video(&videos).unwrap();
        assert_eq!(picked, &videos[2]);
        assert_eq!(picked.key, "720p");
    }

    #[test]
    fn test_select_last_video_empty() {
        assert!(select_last_video(&[]).is_none());
        assert!(parse_video_list(r#"{"meta":{}}"#).unwrap().is_empty());
        assert!(parse_video_list("oops").is_err());
    }

    #[test]
    fn test_extract_meta_url() {
        let body = r#"<script>window.flashVars = {"metaUrl":"//my.mail.ru/+/video/meta/8321"};</script>"#;
        assert_eq!(
            extract_meta_url(body),
            Some("https://my.mail.ru/+/video/meta/8321".to_string())
        );
        assert_eq!(extract_meta_url("<html></html>"), None);
    }
}
