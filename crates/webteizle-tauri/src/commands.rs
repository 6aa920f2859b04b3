//! Tauri commands for the webteizle scraper
//!
//! Every command degrades instead of failing: the `Err` side exists only
//! because Tauri async commands taking `State` must return a `Result`.

use tauri::State;
use webteizle_core::{SearchResult, StreamSet, TitleDetail, WatchOption};

use crate::ScraperState;

/// Search titles by keyword
///
/// Returns an empty list on a blank keyword or any site failure.
#[tauri::command]
pub async fn search_results(
    state: State<'_, ScraperState>,
    keyword: String,
) -> Result<Vec<SearchResult>, String> {
    Ok(state.scraper.search(&keyword).await)
}

/// Description, genre/duration line and year/rating line for a title URL
#[tauri::command]
pub async fn extract_details(
    state: State<'_, ScraperState>,
    url: String,
) -> Result<TitleDetail, String> {
    Ok(state.scraper.extract_details(&url).await)
}

/// Dubbed/subtitled watch options for a title URL
#[tauri::command]
pub async fn extract_episodes(
    state: State<'_, ScraperState>,
    url: String,
) -> Result<Vec<WatchOption>, String> {
    Ok(state.scraper.extract_episodes(&url).await)
}

/// Resolve a watch URL into playable streams
///
/// `null` when no stream could be resolved.
#[tauri::command]
pub async fn extract_stream_url(
    state: State<'_, ScraperState>,
    url: String,
) -> Result<Option<StreamSet>, String> {
    Ok(state.scraper.resolve_streams(&url).await)
}
