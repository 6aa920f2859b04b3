//! URL helper functions for webteizle
//!
//! Slug and id extraction, title cleaning and URL normalization.

use regex::Regex;

/// Site root used when no other base is configured
pub const BASE_URL: &str = "https://webteizle3.xyz";

/// Audio track of a watch page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    /// Turkish dubbed audio
    Dublaj,
    /// Original audio with Turkish subtitles
    Altyazi,
}

impl Language {
    /// Infers the track from the watch URL path
    ///
    /// Only a URL containing `/altyazi/` and not `/dublaj/` is subtitled;
    /// everything else, including URLs with neither segment, is dubbed.
    pub fn from_watch_url(url: &str) -> Self {
        let dublaj = url.contains("/dublaj/");
        let altyazi = url.contains("/altyazi/");

        if !dublaj && !altyazi {
            tracing::debug!("No language segment in {}, assuming dublaj", url);
        }

        if altyazi && !dublaj {
            Self::Altyazi
        } else {
            Self::Dublaj
        }
    }

    /// Value of the `dil` form field
    pub fn code(self) -> &'static str {
        match self {
            Self::Dublaj => "0",
            Self::Altyazi => "1",
        }
    }

    /// Path segment used in watch URLs
    pub fn path_segment(self) -> &'static str {
        match self {
            Self::Dublaj => "dublaj",
            Self::Altyazi => "altyazi",
        }
    }
}

/// Builds the detail page URL for a slug
///
/// # Example
/// ```
/// use webteizle_core::url::build_detail_page_url;
/// let url = build_detail_page_url("https://webteizle3.xyz", "some-movie-2024");
/// assert_eq!(url, "https://webteizle3.xyz/hakkinda/some-movie-2024");
/// ```
pub fn build_detail_page_url(base: &str, slug: &str) -> String {
    format!("{}/hakkinda/{}", base, slug)
}

/// Builds the watch page URL for a slug and language track
///
/// # Example
/// ```
/// use webteizle_core::url::{build_watch_url, Language};
/// let url = build_watch_url("https://webteizle3.xyz", Language::Altyazi, "some-movie");
/// assert_eq!(url, "https://webteizle3.xyz/izle/altyazi/some-movie");
/// ```
pub fn build_watch_url(base: &str, language: Language, slug: &str) -> String {
    format!("{}/izle/{}/{}", base, language.path_segment(), slug)
}

/// Extracts the title slug from a detail, watch or bare URL
///
/// Tries `/hakkinda/{slug}`, then `/izle/{type}/{slug}`, then the last
/// path segment as long as it doesn't look like a file name.
///
/// # Example
/// ```
/// use webteizle_core::url::extract_slug_from_url;
/// assert_eq!(
///     extract_slug_from_url("https://site/izle/dublaj/some-movie-2024"),
///     Some("some-movie-2024".to_string())
/// );
/// ```
pub fn extract_slug_from_url(url: &str) -> Option<String> {
    let patterns = [
        r"/hakkinda/([^/?#]+)",
        r"/izle/[^/]+/([^/?#]+)",
    ];

    for pattern in patterns {
        if let Ok(re) = Regex::new(pattern)
            && let Some(caps) = re.captures(url)
            && let Some(m) = caps.get(1)
        {
            return Some(m.as_str().to_string());
        }
    }

    let re = Regex::new(r"/([^/?#]+)/?$").ok()?;
    let last = re.captures(url)?.get(1)?.as_str();
    if last.contains('.') {
        return None;
    }
    Some(last.to_string())
}

/// Removes a trailing `(YYYY)` from a title
///
/// # Example
/// ```
/// use webteizle_core::url::clean_title;
/// assert_eq!(clean_title("Some Movie (2024)"), "Some Movie");
/// ```
pub fn clean_title(title: &str) -> String {
    match Regex::new(r"\s*\(\d{4}\)\s*$") {
        Ok(re) => re.replace(title, "").trim().to_string(),
        Err(_) => title.trim().to_string(),
    }
}

/// Turns `//host/x` into `https://host/x`
pub fn normalize_scheme_relative(url: &str) -> String {
    match url.strip_prefix("//") {
        Some(rest) => format!("https://{}", rest),
        None => url.to_string(),
    }
}

/// Makes a poster URL absolute against `base`
pub fn normalize_image_url(url: &str, base: &str) -> String {
    if url.starts_with("//") {
        normalize_scheme_relative(url)
    } else if url.starts_with('/') {
        format!("{}{}", base, url)
    } else {
        url.to_string()
    }
}

/// Reads the numeric `fid` query parameter of a watch URL
pub fn extract_film_id(url: &str) -> Option<String> {
    let re = Regex::new(r"[?&]fid=(\d+)").ok()?;
    re.captures(url)?.get(1).map(|m| m.as_str().to_string())
}

/// Returns `scheme://host[:port]` of an absolute URL
pub fn origin_of(url: &str) -> Option<String> {
    let parsed = ::url::Url::parse(url).ok()?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return None;
    }
    let origin = parsed.origin().ascii_serialization();
    (origin != "null").then_some(origin)
}
