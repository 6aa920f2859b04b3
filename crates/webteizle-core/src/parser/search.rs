//! Search payload parser for webteizle
//!
//! The search endpoint answers with JSON grouping movies (`filmler`) and
//! series (`diziler`).

use serde::Deserialize;

use crate::error::{Result, WebteizleError};
use crate::types::SearchResult;
use crate::url::{build_detail_page_url, clean_title, extract_slug_from_url, normalize_image_url};

#[derive(Debug, Deserialize)]
struct SearchPayload {
    #[serde(default)]
    status: String,
    results: Option<SearchGroups>,
}

#[derive(Debug, Deserialize)]
struct SearchGroups {
    filmler: Option<SearchGroup>,
    diziler: Option<SearchGroup>,
}

#[derive(Debug, Deserialize)]
struct SearchGroup {
    #[serde(default)]
    results: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    url: Option<String>,
    title: Option<String>,
    image: Option<String>,
}

/// Parses the search JSON into results, movies first
///
/// # Arguments
/// * `json` - Raw body of the search endpoint
/// * `base` - Site root used for detail links and relative posters
///
/// # Errors
/// Returns `ParseError` if the body is not JSON, the status is not `OK`,
/// or the `results` object is missing
pub fn parse_search_results(json: &str, base: &str) -> Result<Vec<SearchResult>> {
    let payload: SearchPayload = serde_json::from_str(json)?;

    if payload.status != "OK" {
        return Err(WebteizleError::ParseError(format!(
            "search status was {:?}",
            payload.status
        )));
    }

    let groups = payload
        .results
        .ok_or_else(|| WebteizleError::ParseError("search results missing".to_string()))?;

    let results = [groups.filmler, groups.diziler]
        .into_iter()
        .flatten()
        .flat_map(|group| group.results)
        .filter_map(|item| to_search_result(item, base))
        .collect();

    Ok(results)
}

/// Items without a usable slug are dropped
fn to_search_result(item: SearchItem, base: &str) -> Option<SearchResult> {
    let slug = extract_slug_from_url(item.url.as_deref()?)?;

    Some(SearchResult {
        title: clean_title(item.title.as_deref().unwrap_or_default()),
        image: normalize_image_url(item.image.as_deref().unwrap_or_default(), base),
        href: build_detail_page_url(base, &slug),
    })
}
