//! Main scraper API for webteizle
//!
//! Combines the site client, the payload parsers and the provider
//! dispatcher. Every operation here is host-facing: failures are logged
//! and returned as the empty shape of the result.

use crate::client::{ClientConfig, DefaultTransport, Transport, WebteizleClient};
use crate::error::{Result, WebteizleError};
use crate::parser::{
    parse_embed_url, parse_film_id, parse_search_results, parse_source_list, parse_title_detail,
    parse_watch_options,
};
use crate::providers::dispatch;
use crate::types::{
    ResolvedStream, SearchResult, SourceDescriptor, StreamSet, TitleDetail, WatchOption,
};
use crate::url::{Language, extract_film_id, extract_slug_from_url};

const DETAIL_NOT_FOUND: &str = "Film bulunamadı";
const DETAIL_UNAVAILABLE: &str = "Detaylar yüklenemedi";

/// Main scraper API for webteizle
pub struct WebteizleScraper<T = DefaultTransport> {
    client: WebteizleClient<T>,
}

impl WebteizleScraper<DefaultTransport> {
    /// Create a new scraper with default configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new scraper with custom client configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let transport = DefaultTransport::from_config(&config)?;
        Ok(Self::with_transport(transport, config))
    }
}

impl<T: Transport> WebteizleScraper<T> {
    /// Create a scraper on top of a caller-supplied transport
    pub fn with_transport(transport: T, config: ClientConfig) -> Self {
        Self {
            client: WebteizleClient::new(transport, config),
        }
    }

    /// Search movies and series by keyword
    ///
    /// # Returns
    /// Matching titles, movies first; empty on any failure
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> webteizle_core::Result<()> {
    /// use webteizle_core::WebteizleScraper;
    /// let scraper = WebteizleScraper::new()?;
    /// for result in scraper.search("yüzüklerin efendisi").await {
    ///     println!("{}: {}", result.title, result.href);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search(&self, keyword: &str) -> Vec<SearchResult> {
        match self.try_search(keyword).await {
            Ok(results) => results,
            Err(e) => {
                tracing::warn!("Search for {:?} failed: {}", keyword, e);
                Vec::new()
            }
        }
    }

    async fn try_search(&self, keyword: &str) -> Result<Vec<SearchResult>> {
        let trimmed = keyword.trim();
        if trimmed.is_empty() {
            return Err(WebteizleError::InvalidQuery(
                "Search keyword cannot be empty".to_string(),
            ));
        }

        let json = self.client.search_payload(trimmed).await?;
        parse_search_results(&json, self.client.base_url())
    }

    /// Fetch free-text metadata for a detail or watch page URL
    ///
    /// On failure the description carries a short Turkish status message
    /// and the other fields are empty.
    pub async fn extract_details(&self, url: &str) -> TitleDetail {
        let Some(slug) = extract_slug_from_url(url) else {
            tracing::warn!("No slug in {}", url);
            return TitleDetail::placeholder(DETAIL_NOT_FOUND);
        };

        match self.client.detail_fragment(&slug).await {
            Ok(html) => parse_title_detail(&html),
            Err(e) => {
                tracing::warn!("Details for {} unavailable: {}", slug, e);
                TitleDetail::placeholder(DETAIL_UNAVAILABLE)
            }
        }
    }

    /// List the watch pages (dubbed, subtitled) of a title
    pub async fn extract_episodes(&self, url: &str) -> Vec<WatchOption> {
        let Some(slug) = extract_slug_from_url(url) else {
            tracing::warn!("No slug in {}", url);
            return Vec::new();
        };

        match self.client.detail_fragment(&slug).await {
            Ok(html) => parse_watch_options(&html, self.client.base_url(), &slug),
            Err(e) => {
                tracing::warn!("Watch options for {} unavailable: {}", slug, e);
                Vec::new()
            }
        }
    }

    /// Resolve every playable stream of a watch page
    ///
    /// Sources are resolved one after another and kept in the site's
    /// order; sources that fail are left out.
    ///
    /// # Returns
    /// `None` when the film id is unknown, the title has no sources, or no
    /// source resolves
    pub async fn resolve_streams(&self, watch_url: &str) -> Option<StreamSet> {
        let film_id = match self.film_id_for(watch_url).await {
            Ok(id) => id,
            Err(e) => {
                tracing::warn!("Film id unavailable for {}: {}", watch_url, e);
                return None;
            }
        };

        let language = Language::from_watch_url(watch_url);
        let sources = match self.fetch_sources(&film_id, language, watch_url).await {
            Ok(sources) => sources,
            Err(e) => {
                tracing::warn!("Source list for film {} unavailable: {}", film_id, e);
                return None;
            }
        };

        if sources.is_empty() {
            tracing::info!("Film {} has no video sources", film_id);
            return None;
        }

        let mut streams = Vec::with_capacity(sources.len());
        for source in &sources {
            if let Some(stream) = self.resolve_source(source).await {
                streams.push(stream);
            }
        }

        if streams.is_empty() {
            tracing::info!("None of the {} sources of film {} resolved", sources.len(), film_id);
            return None;
        }

        tracing::debug!("Resolved {}/{} sources of film {}", streams.len(), sources.len(), film_id);
        Some(StreamSet { streams })
    }

    /// Resolve one source descriptor to a playable stream
    pub async fn resolve_source(&self, source: &SourceDescriptor) -> Option<ResolvedStream> {
        let fragment = match self.client.embed_fragment(&source.id).await {
            Ok(fragment) => fragment,
            Err(e) => {
                tracing::debug!("Embed lookup for source {} failed: {}", source.id, e);
                return None;
            }
        };

        let Some(embed_url) = parse_embed_url(&fragment) else {
            tracing::debug!("No iframe in embed fragment of source {}", source.id);
            return None;
        };

        let extracted =
            dispatch(self.client.transport(), self.client.base_url(), &embed_url).await?;

        Some(ResolvedStream {
            title: source.stream_title(),
            stream_url: extracted.url,
            headers: extracted.headers,
        })
    }

    /// Film id from the `fid` parameter, else from the detail fragment
    async fn film_id_for(&self, watch_url: &str) -> Result<String> {
        if let Some(id) = extract_film_id(watch_url) {
            return Ok(id);
        }

        let slug = extract_slug_from_url(watch_url)
            .ok_or_else(|| WebteizleError::InvalidUrl(watch_url.to_string()))?;
        let html = self.client.detail_fragment(&slug).await?;
        parse_film_id(&html)
            .ok_or_else(|| WebteizleError::NotFound(format!("film id for {}", slug)))
    }

    async fn fetch_sources(
        &self,
        film_id: &str,
        language: Language,
        watch_url: &str,
    ) -> Result<Vec<SourceDescriptor>> {
        let json = self.client.source_list(film_id, language, watch_url).await?;
        parse_source_list(&json)
    }
}
