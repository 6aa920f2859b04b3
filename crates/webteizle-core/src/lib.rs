//! Webteizle Scraper Core Library
//!
//! Provides async API for searching titles on webteizle and resolving their
//! watch pages into directly playable stream URLs.
//!
//! # Overview
//!
//! This crate provides a complete scraping solution for webteizle with:
//! - A pluggable HTTP transport with a simpler fallback transport
//! - Parsers for the site's search, detail, source and embed payloads
//! - Resolvers for the third-party embed providers the site links to
//! - High-level API returning host-ready search, detail and stream payloads
//!
//! # Example
//!
//! ```no_run
//! use webteizle_core::{WebteizleScraper, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let scraper = WebteizleScraper::new()?;
//!
//!     let results = scraper.search("matrix").await;
//!
//!     if let Some(title) = results.first() {
//!         for option in scraper.extract_episodes(&title.href).await {
//!             if let Some(set) = scraper.resolve_streams(&option.href).await {
//!                 for stream in set.streams {
//!                     println!("{}: {}", stream.title, stream.stream_url);
//!                 }
//!             }
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Stream URLs
//!
//! [`WebteizleScraper::resolve_streams`] returns each stream together with
//! the `Referer`/`Origin` headers its host expects. Players must send them,
//! otherwise most providers reject the request.
//!
//! **Important:** provider URLs usually carry short-lived tokens. Resolve
//! them right before playback and do not cache them.

mod client;
mod error;
pub mod parser;
pub mod providers;
mod scraper;
mod types;
pub mod url;

// Re-export client types
pub use client::{
    ClientConfig, DefaultTransport, FallbackTransport, HttpRequest, HttpResponse, HttpTransport,
    PROVIDER_USER_AGENT, SITE_USER_AGENT, Transport, WebteizleClient,
};

// Re-export error types
pub use error::{Result, WebteizleError};

// Re-export parser functions
pub use parser::{parse_embed_url, parse_search_results, parse_source_list, parse_title_detail};

// Re-export provider dispatch
pub use providers::{ExtractedStream, Provider, dispatch};

// Re-export main scraper API
pub use scraper::WebteizleScraper;

// Re-export data types
pub use types::{
    ResolvedStream, SearchResult, SourceDescriptor, StreamHeaders, StreamSet, TitleDetail,
    WatchOption,
};

// Re-export URL helper functions for convenience
pub use url::{Language, clean_title, extract_slug_from_url};
