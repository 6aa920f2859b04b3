//! Regex extractors shared by the provider resolvers
//!
//! Every extractor returns the first non-empty capture, or `None` when
//! the marker is absent.

use regex::Regex;

/// `file: "...m3u8..."` in a player configuration
pub fn player_file_m3u8(body: &str) -> Option<String> {
    first_capture(r#"(?i)file:\s*["']([^"']+\.m3u8[^"']*)["']"#, body)
}

/// `sources: [{ file: "..." }]` in a JWPlayer setup call
pub fn sources_array_file(body: &str) -> Option<String> {
    first_capture(r#"(?i)sources:\s*\[\s*\{\s*file\s*:\s*["']([^"']+)["']"#, body)
}

/// `file: "http(s)://...m3u8..."`, requiring an absolute URL
pub fn file_http_m3u8(body: &str) -> Option<String> {
    first_capture(r#"(?i)file\s*:\s*["'](https?://[^"']+\.m3u8[^"']*)["']"#, body)
}

/// Any absolute `.m3u8` URL in the body
pub fn bare_m3u8(body: &str) -> Option<String> {
    first_capture(r#"(?i)(https?://[^"'\s<>]+\.m3u8[^"'\s<>]*)"#, body)
}

/// Any absolute `.mp4` URL in the body
pub fn bare_mp4(body: &str) -> Option<String> {
    first_capture(r#"(?i)(https?://[^"'\s<>]+\.mp4[^"'\s<>]*)"#, body)
}

/// Raw (still entity-encoded) value of a `data-options` attribute
pub fn data_options_attr(body: &str) -> Option<String> {
    first_capture(r#"(?i)data-options=["']([^"']+)["']"#, body)
}

/// Value of a `"metaUrl": "..."` key
pub fn meta_url(body: &str) -> Option<String> {
    first_capture(r#"(?i)["']metaUrl["']\s*:\s*["']([^"']+)["']"#, body)
}

/// JSON text of a `"streams": [...]` array
pub fn streams_array(body: &str) -> Option<String> {
    first_capture(r#""streams"\s*:\s*(\[[^\]]+\])"#, body)
}

/// HLS manifest served from the vkuser.net CDN
pub fn vkuser_m3u8(body: &str) -> Option<String> {
    first_capture(r#"(?i)(https?://[^"'\s]+vkuser\.net/video\.m3u8[^"'\s]*)"#, body)
}

/// File id from a `/u/{id}` path
pub fn pixeldrain_file_id(url: &str) -> Option<String> {
    first_capture(r"/u/([a-zA-Z0-9]+)", url)
}

/// Decodes the HTML entities used by attribute-embedded JSON
///
/// `&amp;` is decoded last so `&amp;quot;` becomes `&quot;`, not `"`.
pub fn decode_html_entities(text: &str) -> String {
    text.replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

fn first_capture(pattern: &str, text: &str) -> Option<String> {
    let re = Regex::new(pattern).ok()?;
    let value = re.captures(text)?.get(1)?.as_str().trim();
    (!value.is_empty()).then(|| value.to_string())
}
