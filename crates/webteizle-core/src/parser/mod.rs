//! Parsers for webteizle payloads and scraped provider pages
//!
//! Contains modules for the site's AJAX responses and the shared
//! pattern library used by the provider resolvers.

pub mod detail;
pub mod patterns;
pub mod search;
pub mod sources;

pub use detail::{clean_html, parse_film_id, parse_title_detail, parse_watch_options};
pub use search::parse_search_results;
pub use sources::{parse_embed_url, parse_source_list};
