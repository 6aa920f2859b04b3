//! Source list and embed fragment parsers for webteizle

use scraper::{Html, Selector};
use serde::Deserialize;
use serde_json::Value;

use crate::error::{Result, WebteizleError};
use crate::types::SourceDescriptor;
use crate::url::normalize_scheme_relative;

#[derive(Debug, Deserialize)]
struct SourcePayload {
    #[serde(default)]
    status: String,
    #[serde(default)]
    data: Vec<RawSource>,
}

/// Ids and qualities arrive as numbers or strings depending on the row
#[derive(Debug, Deserialize)]
struct RawSource {
    #[serde(default)]
    id: Value,
    baslik: Option<String>,
    #[serde(default)]
    kalitesi: Value,
}

/// Parses the source list JSON, keeping the site's order
///
/// Rows without an id are skipped. An `OK` payload with no rows yields an
/// empty list.
///
/// # Errors
/// Returns `ParseError` if the body is not JSON or the status is not `OK`
pub fn parse_source_list(json: &str) -> Result<Vec<SourceDescriptor>> {
    let payload: SourcePayload = serde_json::from_str(json)?;

    if payload.status != "OK" {
        return Err(WebteizleError::ParseError(format!(
            "source list status was {:?}",
            payload.status
        )));
    }

    let sources = payload
        .data
        .into_iter()
        .filter_map(|raw| {
            Some(SourceDescriptor {
                id: scalar_to_string(&raw.id)?,
                display_name: raw.baslik.unwrap_or_default().trim().to_string(),
                quality: scalar_to_string(&raw.kalitesi),
            })
        })
        .collect();

    Ok(sources)
}

/// Extracts the provider embed URL from the embed fragment's `<iframe>`
pub fn parse_embed_url(html: &str) -> Option<String> {
    let fragment = Html::parse_fragment(html);
    let selector = Selector::parse("iframe[src]").ok()?;

    fragment
        .select(&selector)
        .filter_map(|iframe| iframe.value().attr("src"))
        .map(str::trim)
        .find(|src| !src.is_empty())
        .map(normalize_scheme_relative)
}

fn scalar_to_string(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_source_list() {
        let json = r#"{
            "status": "OK",
            "data": [
                { "id": 9001, "baslik": "Filemoon", "kalitesi": 1080 },
                { "id": "9002", "baslik": " Vidmoly ", "kalitesi": "720" },
                { "id": 9003, "baslik": "Okru" }
            ]
        }"#;

        let sources = parse_source_list(json).unwrap();
        assert_eq!(sources.len(), 3);

        assert_eq!(sources[0].id, "9001");
        assert_eq!(sources[0].display_name, "Filemoon");
        assert_eq!(sources[0].quality.as_deref(), Some("1080"));

        assert_eq!(sources[1].id, "9002");
        assert_eq!(sources[1].display_name, "Vidmoly");
        assert_eq!(sources[1].quality.as_deref(), Some("720"));

        assert_eq!(sources[2].quality, None);
    }

    #[test]
    fn test_rows_without_id_are_skipped() {
        let json = r#"{ "status": "OK", "data": [ { "baslik": "Ghost" }, { "id": null }, { "id": 5 } ] }"#;
        let sources = parse_source_list(json).unwrap();
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].id, "5");
        assert_eq!(sources[0].display_name, "");
    }

    #[test]
    fn test_empty_data_is_empty_list() {
        assert!(parse_source_list(r#"{ "status": "OK", "data": [] }"#).unwrap().is_empty());
        assert!(parse_source_list(r#"{ "status": "OK" }"#).unwrap().is_empty());
    }

    #[test]
    fn test_bad_status_or_json_is_error() {
        assert!(parse_source_list(r#"{ "status": "FAIL", "data": [] }"#).is_err());
        assert!(parse_source_list("not json").is_err());
    }

    #[test]
    fn test_parse_embed_url_scheme_relative() {
        let html = r#"<div class="player"><iframe width="100%" src="//vidmoly.to/embed-abc.html" allowfullscreen></iframe></div>"#;
        assert_eq!(
            parse_embed_url(html),
            Some("https://vidmoly.to/embed-abc.html".to_string())
        );
    }

    #[test]
    fn test_parse_embed_url_absolute_single_quotes() {
        let html = "<IFRAME SRC='https://filemoon.sx/e/xyz'></IFRAME>";
        assert_eq!(parse_embed_url(html), Some("https://filemoon.sx/e/xyz".to_string()));
    }

    #[test]
    fn test_parse_embed_url_missing() {
        assert_eq!(parse_embed_url("<div>Kaynak yok</div>"), None);
        assert_eq!(parse_embed_url(r#"<iframe src=""></iframe>"#), None);
    }
}
