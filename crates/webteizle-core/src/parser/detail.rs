//! Detail fragment parser for webteizle
//!
//! The detail endpoint returns an HTML fragment with the film id, the
//! synopsis, genre links and links to the dubbed/subtitled watch pages.

use regex::Regex;
use scraper::{Html, Selector};

use crate::types::{TitleDetail, WatchOption};
use crate::url::{Language, build_watch_url};

const NO_DESCRIPTION: &str = "Açıklama bulunamadı";

/// Parses the detail fragment into free-text metadata
///
/// - `description`: first `<blockquote>`, tags stripped
/// - `aliases`: genres and running time, e.g. "Aksiyon, Dram | 120 dakika"
/// - `airdate`: year and rating, e.g. "Yıl: 2024 | IMDB: 7.1"
pub fn parse_title_detail(html: &str) -> TitleDetail {
    let description = extract_description(html).unwrap_or_else(|| NO_DESCRIPTION.to_string());

    let genres = extract_genres(html).join(", ");
    let duration = capture(r"(?i)(\d+)\s*(?:dakika|min)", html)
        .map(|minutes| format!("{} dakika", minutes))
        .unwrap_or_default();

    let year = capture(r"\((\d{4})\)", html)
        .map(|year| format!("Yıl: {}", year))
        .unwrap_or_default();
    let imdb = capture(r"(?is)imdb[^>]*>.*?(\d+[,.]\d+)", html)
        .map(|rating| format!("IMDB: {}", rating))
        .unwrap_or_default();

    TitleDetail {
        description,
        aliases: join_present(&[genres, duration]),
        airdate: join_present(&[year, imdb]),
    }
}

/// Numeric film id from the first `data-id` attribute
pub fn parse_film_id(html: &str) -> Option<String> {
    capture(r#"data-id=["'](\d+)["']"#, html)
}

/// Lists the watch pages linked from the detail fragment
///
/// Dubbed comes first (number 1), subtitled second (number 2). When the
/// fragment links neither but carries a film id, a dubbed watch URL is
/// synthesized from `slug`.
pub fn parse_watch_options(html: &str, base: &str, slug: &str) -> Vec<WatchOption> {
    let film_id = parse_film_id(html);
    let mut options = Vec::new();

    for (language, number) in [(Language::Dublaj, 1), (Language::Altyazi, 2)] {
        let pattern = format!(
            r#"(?i)href=["']([^"']*/izle/{}/[^"']+)["']"#,
            language.path_segment()
        );
        if let Some(link) = capture(&pattern, html) {
            let absolute = if link.starts_with("http") {
                link
            } else {
                format!("{}{}", base, link)
            };
            options.push(WatchOption {
                href: with_film_id(&absolute, film_id.as_deref()),
                number,
            });
        }
    }

    if options.is_empty()
        && let Some(id) = film_id.as_deref()
    {
        options.push(WatchOption {
            href: with_film_id(&build_watch_url(base, Language::Dublaj, slug), Some(id)),
            number: 1,
        });
    }

    options
}

/// Strips tags, decodes entities and collapses whitespace
pub fn clean_html(text: &str) -> String {
    let without_tags = match Regex::new(r"<[^>]+>") {
        Ok(re) => re.replace_all(text, " ").into_owned(),
        Err(_) => text.to_string(),
    };

    let decoded = without_tags
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&");

    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn extract_description(html: &str) -> Option<String> {
    let fragment = Html::parse_fragment(html);
    let selector = Selector::parse("blockquote").ok()?;
    let blockquote = fragment.select(&selector).next()?;

    let text = clean_html(&blockquote.inner_html());
    (!text.is_empty()).then_some(text)
}

fn extract_genres(html: &str) -> Vec<String> {
    let fragment = Html::parse_fragment(html);
    let Ok(selector) = Selector::parse(r#"a[href*="filtre?tur="]"#) else {
        return Vec::new();
    };

    fragment
        .select(&selector)
        .map(|link| link.text().collect::<String>().trim().to_string())
        .filter(|genre| !genre.is_empty())
        .collect()
}

fn with_film_id(url: &str, film_id: Option<&str>) -> String {
    match film_id {
        Some(id) if url.contains('?') => format!("{}&fid={}", url, id),
        Some(id) => format!("{}?fid={}", url, id),
        None => url.to_string(),
    }
}

fn join_present(parts: &[String]) -> String {
    parts
        .iter()
        .filter(|part| !part.is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join(" | ")
}

fn capture(pattern: &str, text: &str) -> Option<String> {
    let re = Regex::new(pattern).ok()?;
    re.captures(text)?.get(1).map(|m| m.as_str().to_string())
}
