//! Webteizle Tauri Integration
//!
//! Provides a Tauri plugin exposing the webteizle scraper to the frontend.
//!
//! # Usage
//!
//! Register the plugin in your Tauri application:
//!
//! ```ignore
//! fn main() {
//!     tauri::Builder::default()
//!         .plugin(webteizle_tauri::init())
//!         .run(tauri::generate_context!())
//!         .expect("error while running tauri application");
//! }
//! ```
//!
//! Then invoke commands from the frontend:
//!
//! ```javascript
//! import { invoke } from '@tauri-apps/api/core';
//!
//! const results = await invoke('plugin:webteizle|search_results', { keyword: 'matrix' });
//! const options = await invoke('plugin:webteizle|extract_episodes', { url: results[0].href });
//! const streams = await invoke('plugin:webteizle|extract_stream_url', { url: options[0].href });
//! // streams: { streams: [{ title, streamUrl, headers }] } or null
//! ```

use std::sync::Arc;

use tauri::{
    Manager, Runtime,
    plugin::{Builder, TauriPlugin},
};
use webteizle_core::{ClientConfig, WebteizleScraper};

mod commands;

/// Scraper shared by all commands
///
/// The scraper keeps no mutable state, so concurrent commands share it
/// through a plain `Arc`.
pub struct ScraperState {
    pub(crate) scraper: Arc<WebteizleScraper>,
}

impl ScraperState {
    /// # Errors
    /// Returns error string if the HTTP client cannot be built
    pub fn new() -> Result<Self, String> {
        Self::with_config(ClientConfig::default())
    }

    /// # Errors
    /// Returns error string if the HTTP client cannot be built
    pub fn with_config(config: ClientConfig) -> Result<Self, String> {
        let scraper = WebteizleScraper::with_config(config).map_err(|e| e.to_string())?;
        Ok(Self {
            scraper: Arc::new(scraper),
        })
    }
}

/// Initialize the webteizle plugin
///
/// # Example
/// ```ignore
/// tauri::Builder::default()
///     .plugin(webteizle_tauri::init())
///     .run(tauri::generate_context!())
///     .expect("error while running tauri application");
/// ```
pub fn init<R: Runtime>() -> TauriPlugin<R> {
    Builder::new("webteizle")
        .invoke_handler(tauri::generate_handler![
            commands::search_results,
            commands::extract_details,
            commands::extract_episodes,
            commands::extract_stream_url
        ])
        .setup(|app, _api| {
            let state = ScraperState::new().map_err(Box::<dyn std::error::Error>::from)?;
            tracing::debug!("webteizle plugin ready");
            app.manage(state);
            Ok(())
        })
        .build()
}

// Re-export types for convenience
pub use webteizle_core::{
    ResolvedStream as Stream, SearchResult, StreamSet, TitleDetail, WatchOption,
};
