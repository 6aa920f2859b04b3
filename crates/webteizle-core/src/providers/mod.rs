//! Third-party embed providers and the dispatcher that routes between them
//!
//! Each resolver turns an embed URL into an [`ExtractedStream`]. Resolvers
//! report failures as errors internally; [`dispatch`] logs them and hands
//! the caller `None`, so one broken provider never affects the others.

mod dzen;
mod filemoon;
mod generic;
mod mailru;
mod netu;
mod okru;
mod pixeldrain;
mod streamruby;
mod vidmoly;

use crate::client::{HttpRequest, PROVIDER_USER_AGENT, Transport};
use crate::error::{Result, WebteizleError};
use crate::types::StreamHeaders;

pub use dzen::{DzenStream, select_stream};
pub use mailru::{MailVideo, select_last_video};
pub use okru::{OkVideo, QUALITY_PREFERENCE, select_preferred_video};

/// Playable URL found by a resolver, with the headers playback needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedStream {
    pub url: String,
    pub headers: StreamHeaders,
}

impl ExtractedStream {
    /// # Errors
    /// Returns `ElementNotFound` when `url` is blank
    pub fn new(url: &str, headers: &[(&str, &str)]) -> Result<Self> {
        let url = url.trim();
        if url.is_empty() {
            return Err(WebteizleError::ElementNotFound("stream url".to_string()));
        }

        Ok(Self {
            url: url.to_string(),
            headers: headers
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
        })
    }
}

/// Known embed providers, in classification order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    Filemoon,
    Vidmoly,
    Netu,
    OkRu,
    MailRu,
    Dzen,
    StreamRuby,
    PixelDrain,
    Generic,
}

/// URL substrings identifying each provider; first match wins
pub const PROVIDER_MARKERS: &[(Provider, &[&str])] = &[
    (Provider::Filemoon, &["filemoon"]),
    (Provider::Vidmoly, &["vidmoly"]),
    (Provider::Netu, &["netu", "waaw", "hqq"]),
    (Provider::OkRu, &["ok.ru", "odnoklassniki"]),
    (Provider::MailRu, &["mail.ru"]),
    (Provider::Dzen, &["dzen", "zen.yandex"]),
    (Provider::StreamRuby, &["streamruby", "rubyvidhub"]),
    (Provider::PixelDrain, &["pixeldrain"]),
];

impl Provider {
    /// Classifies an embed URL by case-insensitive substring match
    ///
    /// # Example
    /// ```
    /// use webteizle_core::Provider;
    /// assert_eq!(Provider::classify("https://WAAW.to/e/abc"), Provider::Netu);
    /// assert_eq!(Provider::classify("https://unknown.host/e/abc"), Provider::Generic);
    /// ```
    pub fn classify(embed_url: &str) -> Self {
        let lower = embed_url.to_lowercase();

        PROVIDER_MARKERS
            .iter()
            .find(|(_, markers)| markers.iter().any(|marker| lower.contains(*marker)))
            .map(|(provider, _)| *provider)
            .unwrap_or(Self::Generic)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Filemoon => "filemoon",
            Self::Vidmoly => "vidmoly",
            Self::Netu => "netu",
            Self::OkRu => "ok.ru",
            Self::MailRu => "mail.ru",
            Self::Dzen => "dzen",
            Self::StreamRuby => "streamruby",
            Self::PixelDrain => "pixeldrain",
            Self::Generic => "generic",
        }
    }

    /// Runs this provider's resolver
    pub async fn resolve(
        self,
        ctx: &ResolveContext<'_>,
        embed_url: &str,
    ) -> Result<ExtractedStream> {
        match self {
            Self::Filemoon => filemoon::resolve(ctx, embed_url).await,
            Self::Vidmoly => vidmoly::resolve(ctx, embed_url).await,
            Self::Netu => netu::resolve(ctx, embed_url).await,
            Self::OkRu => okru::resolve(ctx, embed_url).await,
            Self::MailRu => mailru::resolve(ctx, embed_url).await,
            Self::Dzen => dzen::resolve(ctx, embed_url).await,
            Self::StreamRuby => streamruby::resolve(ctx, embed_url).await,
            Self::PixelDrain => pixeldrain::resolve(embed_url),
            Self::Generic => generic::resolve(ctx, embed_url).await,
        }
    }
}

/// What a resolver needs besides the embed URL
pub struct ResolveContext<'a> {
    pub transport: &'a dyn Transport,
    /// Site root, sent as Referer to providers that check it
    pub site_base: &'a str,
}

impl ResolveContext<'_> {
    /// Fetches a provider page with the desktop user agent
    async fn fetch_page(&self, url: &str, referer: &str) -> Result<String> {
        let request = HttpRequest::get(url)
            .header("Referer", referer)
            .header("User-Agent", PROVIDER_USER_AGENT);
        self.transport.fetch_text(request).await
    }
}

/// Routes an embed URL to its provider and resolves it
///
/// Never fails: every transport, payload or pattern failure is logged and
/// returned as `None`.
pub async fn dispatch(
    transport: &dyn Transport,
    site_base: &str,
    embed_url: &str,
) -> Option<ExtractedStream> {
    let provider = Provider::classify(embed_url);
    tracing::debug!("Resolving {} with {} resolver", embed_url, provider.name());

    let ctx = ResolveContext {
        transport,
        site_base,
    };

    match provider.resolve(&ctx, embed_url).await {
        Ok(stream) => Some(stream),
        Err(e) => {
            tracing::debug!("{} resolver gave up on {}: {}", provider.name(), embed_url, e);
            None
        }
    }
}

fn not_found(what: &str) -> WebteizleError {
    WebteizleError::ElementNotFound(what.to_string())
}
