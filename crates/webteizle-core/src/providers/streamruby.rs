//! StreamRuby / RubyVidHub resolver

use super::{ExtractedStream, ResolveContext, not_found};
use crate::error::Result;
use crate::parser::patterns::{bare_m3u8, sources_array_file};

const HEADERS: &[(&str, &str)] = &[
    ("Referer", "https://rubyvidhub.com/"),
    ("Origin", "https://rubyvidhub.com"),
];

pub fn extract(body: &str) -> Option<String> {
    sources_array_file(body).or_else(|| bare_m3u8(body))
}

pub(super) async fn resolve(
    ctx: &ResolveContext<'_>,
    embed_url: &str,
) -> Result<ExtractedStream> {
    let body = ctx.fetch_page(embed_url, ctx.site_base).await?;
    let stream = extract(&body).ok_or_else(|| not_found("streamruby sources"))?;
    ExtractedStream::new(&stream, HEADERS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract() {
        let body = r#"jwplayer().setup({sources: [{file:"https://s1.rubyvidhub.com/hls/x/master.m3u8"}]});"#;
        assert_eq!(
            extract(body),
            Some("https://s1.rubyvidhub.com/hls/x/master.m3u8".to_string())
        );
        assert_eq!(extract("{}"), None);
    }
}
