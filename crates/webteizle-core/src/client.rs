//! HTTP transport and site-endpoint client for webteizle
//!
//! Every network call made by the crate goes through a [`Transport`]. The
//! default transport is a reqwest client with a plain reqwest client behind
//! it as fallback. Each request is attempted once per transport; there is no
//! retry or backoff.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Method;
use reqwest::header::{ACCEPT_LANGUAGE, HeaderMap, HeaderValue};

use crate::error::{Result, WebteizleError};
use crate::url::{BASE_URL, Language};

/// User agent presented to the site's AJAX endpoints
pub const SITE_USER_AGENT: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Mobile/15E148 Safari/604.1";

/// Desktop user agent presented to third-party embed providers
pub const PROVIDER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

const ACCEPT_LANGUAGE_TR: &str = "tr-TR,tr;q=0.9,en-US;q=0.8,en;q=0.7";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Site root, without trailing slash (default: `https://webteizle3.xyz`)
    pub base_url: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
    /// Default user agent for requests that don't set one
    pub user_agent: String,
    /// Accept-Language sent with every request from the primary transport
    pub accept_language: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            timeout_secs: 30,
            user_agent: SITE_USER_AGENT.to_string(),
            accept_language: ACCEPT_LANGUAGE_TR.to_string(),
        }
    }
}

/// A single outgoing HTTP request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// POST with a form-encoded body
    pub fn post_form(url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            method: Method::POST,
            url: url.into(),
            headers: vec![("Content-Type".to_string(), FORM_CONTENT_TYPE.to_string())],
            body: Some(body.into()),
        }
    }

    pub fn header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.push((name.to_string(), value.into()));
        self
    }

    /// Looks up a header value, ignoring name case
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Status and body of a completed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Capability to perform one HTTP request
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends the request; an `Err` means no response was obtained at all
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse>;

    /// Sends the request and returns the body of a successful, non-empty response
    ///
    /// # Errors
    /// - `HttpStatus` for a non-2xx status
    /// - `NoResponse` for an empty body
    async fn fetch_text(&self, request: HttpRequest) -> Result<String> {
        let url = request.url.clone();
        let response = self.send(request).await?;

        if !response.is_success() {
            tracing::debug!("{} answered with status {}", url, response.status);
            return Err(WebteizleError::HttpStatus(response.status));
        }

        if response.body.trim().is_empty() {
            return Err(WebteizleError::NoResponse(url));
        }

        Ok(response.body)
    }
}

/// reqwest-backed transport
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create the primary transport from configuration
    pub fn with_config(config: &ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_str(&config.accept_language)
                .map_err(|e| WebteizleError::InvalidHeader(e.to_string()))?,
        );

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .build()?;

        Ok(Self { client })
    }

    /// Create the simpler fallback transport: same timeout, no default headers
    pub fn basic(config: &ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let mut builder = self.client.request(request.method, request.url.as_str());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(HttpResponse { status, body })
    }
}

/// Transport that repeats a request on `secondary` when `primary` gets no response
pub struct FallbackTransport<P, S> {
    primary: P,
    secondary: S,
}

impl<P, S> FallbackTransport<P, S> {
    pub fn new(primary: P, secondary: S) -> Self {
        Self { primary, secondary }
    }
}

#[async_trait]
impl<P: Transport, S: Transport> Transport for FallbackTransport<P, S> {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        match self.primary.send(request.clone()).await {
            Ok(response) => Ok(response),
            Err(e) => {
                tracing::warn!("Primary transport failed for {}: {}", request.url, e);
                self.secondary.send(request).await
            }
        }
    }
}

/// Transport used by [`crate::WebteizleScraper::new`]
pub type DefaultTransport = FallbackTransport<HttpTransport, HttpTransport>;

impl DefaultTransport {
    /// Primary reqwest transport from `config`, basic client as fallback
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Ok(Self::new(
            HttpTransport::with_config(config)?,
            HttpTransport::basic(config)?,
        ))
    }
}

/// Client for the site's own AJAX endpoints
pub struct WebteizleClient<T> {
    transport: T,
    config: ClientConfig,
}

impl<T: Transport> WebteizleClient<T> {
    pub fn new(transport: T, config: ClientConfig) -> Self {
        Self { transport, config }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Adds the headers the site expects on XHR calls
    fn site_request(&self, request: HttpRequest, referer: &str, accept: &str) -> HttpRequest {
        request
            .header("X-Requested-With", "XMLHttpRequest")
            .header("Referer", referer)
            .header("Origin", self.base_url())
            .header("User-Agent", self.config.user_agent.as_str())
            .header("Accept", accept)
    }

    /// Fetch the raw search JSON for a keyword
    pub async fn search_payload(&self, keyword: &str) -> Result<String> {
        let url = format!("{}/ajax/arama.asp", self.base_url());
        let body = format!("q={}", urlencoding::encode(keyword));
        let referer = format!("{}/", self.base_url());

        let request = self.site_request(
            HttpRequest::post_form(url, body),
            &referer,
            "application/json, text/javascript, */*; q=0.01",
        );
        self.transport.fetch_text(request).await
    }

    /// Fetch the detail HTML fragment for a slug
    pub async fn detail_fragment(&self, slug: &str) -> Result<String> {
        let url = format!("{}/_ajaxweb/sol/hakkinda/{}", self.base_url(), slug);
        let referer = format!("{}/hakkinda/{}", self.base_url(), slug);

        let request = self.site_request(
            HttpRequest::post_form(url, ""),
            &referer,
            "text/html, */*; q=0.01",
        );
        self.transport.fetch_text(request).await
    }

    /// Fetch the raw source list JSON for a film and language track
    pub async fn source_list(
        &self,
        film_id: &str,
        language: Language,
        referer: &str,
    ) -> Result<String> {
        let url = format!("{}/ajax/dataAlternatif3.asp", self.base_url());
        let body = format!("filmid={}&dil={}&s=&b=&bot=0", film_id, language.code());

        let request = self.site_request(
            HttpRequest::post_form(url, body),
            referer,
            "application/json, text/javascript, */*; q=0.01",
        );
        self.transport.fetch_text(request).await
    }

    /// Fetch the embed HTML fragment for a source id
    pub async fn embed_fragment(&self, source_id: &str) -> Result<String> {
        let url = format!("{}/ajax/dataEmbed.asp", self.base_url());
        let body = format!("id={}", urlencoding::encode(source_id));

        let request = self.site_request(
            HttpRequest::post_form(url, body),
            self.base_url(),
            "text/html, */*; q=0.01",
        );
        self.transport.fetch_text(request).await
    }
}
