//! End-to-end flow against a mocked site and mocked providers

use webteizle_core::{ClientConfig, WebteizleScraper};
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn scraper_for(server: &MockServer) -> WebteizleScraper {
    let config = ClientConfig {
        base_url: server.uri(),
        timeout_secs: 5,
        ..ClientConfig::default()
    };
    WebteizleScraper::with_config(config).expect("client should build")
}

async fn mount_post(server: &MockServer, route: &str, body_part: &str, response: String) {
    Mock::given(method("POST"))
        .and(path(route))
        .and(body_string_contains(body_part))
        .respond_with(ResponseTemplate::new(200).set_body_string(response))
        .mount(server)
        .await;
}

async fn mount_get(server: &MockServer, route: &str, response: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_string(response))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_search_details_and_episodes() {
    let server = MockServer::start().await;
    let base = server.uri();

    mount_post(
        &server,
        "/ajax/arama.asp",
        "q=some%20movie",
        r#"{"status":"OK","results":{
            "filmler":{"results":[{"url":"/hakkinda/some-movie-2024","title":"Some Movie (2024)","image":"/img/p.jpg"}]},
            "diziler":{"results":[]}
        }}"#
        .to_string(),
    )
    .await;

    mount_post(
        &server,
        "/_ajaxweb/sol/hakkinda/some-movie-2024",
        "",
        r#"<div data-id="555">
            <blockquote>Uzun bir <b>yolculuk</b>.</blockquote>
            <a href="/filtre?tur=macera">Macera</a>
            <span>Some Movie (2024)</span><span>101 dakika</span>
            <a href="/izle/dublaj/some-movie-2024">Dublaj</a>
            <a href="/izle/altyazi/some-movie-2024">Altyazı</a>
        </div>"#
            .to_string(),
    )
    .await;

    let scraper = scraper_for(&server);

    let results = scraper.search("some movie").await;
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "Some Movie");
    assert_eq!(results[0].image, format!("{}/img/p.jpg", base));
    assert_eq!(results[0].href, format!("{}/hakkinda/some-movie-2024", base));

    let detail = scraper.extract_details(&results[0].href).await;
    assert_eq!(detail.description, "Uzun bir yolculuk .");
    assert_eq!(detail.aliases, "Macera | 101 dakika");
    assert_eq!(detail.airdate, "Yıl: 2024");

    let options = scraper.extract_episodes(&results[0].href).await;
    assert_eq!(options.len(), 2);
    assert_eq!(options[0].href, format!("{}/izle/dublaj/some-movie-2024?fid=555", base));
    assert_eq!(options[0].number, 1);
    assert_eq!(options[1].href, format!("{}/izle/altyazi/some-movie-2024?fid=555", base));
    assert_eq!(options[1].number, 2);
}

#[tokio::test]
async fn test_resolve_streams_keeps_order_and_skips_failures() {
    let server = MockServer::start().await;
    let base = server.uri();
    let watch_url = format!("{}/izle/dublaj/some-movie?fid=555", base);

    Mock::given(method("POST"))
        .and(path("/ajax/dataAlternatif3.asp"))
        .and(body_string_contains("filmid=555&dil=0"))
        .and(header("X-Requested-With", "XMLHttpRequest"))
        .and(header("Referer", watch_url.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"status":"OK","data":[
                {"id":101,"baslik":"Filemoon","kalitesi":1080},
                {"id":202,"baslik":"Vidmoly","kalitesi":720},
                {"id":303,"baslik":"Okru","kalitesi":"480"}
            ]}"#,
        ))
        .mount(&server)
        .await;

    mount_post(
        &server,
        "/ajax/dataEmbed.asp",
        "id=101",
        format!(r#"<iframe src="{}/filemoon/e/fm1"></iframe>"#, base),
    )
    .await;
    mount_post(
        &server,
        "/ajax/dataEmbed.asp",
        "id=202",
        format!(r#"<iframe src="{}/vidmoly/embed-vm2.html"></iframe>"#, base),
    )
    .await;
    mount_post(
        &server,
        "/ajax/dataEmbed.asp",
        "id=303",
        format!(r#"<iframe src="{}/ok.ru/videoembed/3"></iframe>"#, base),
    )
    .await;

    mount_get(
        &server,
        "/filemoon/d/fm1",
        r#"<script>jwplayer().setup({file:"https://fm.cdn/hls/master.m3u8?t=1"});</script>"#
            .to_string(),
    )
    .await;

    // Vidmoly page exists but carries no playable source
    mount_get(&server, "/vidmoly/embed-vm2.html", "<p>Video is processing</p>".to_string()).await;

    let metadata = r#"{\&quot;videos\&quot;:[{\&quot;name\&quot;:\&quot;sd\&quot;,\&quot;url\&quot;:\&quot;https://ok.cdn/sd\&quot;},{\&quot;name\&quot;:\&quot;hd\&quot;,\&quot;url\&quot;:\&quot;https://ok.cdn/hd\&quot;}]}"#;
    mount_get(
        &server,
        "/ok.ru/videoembed/3",
        format!(
            r#"<div data-module="OKVideo" data-options="{{&quot;flashvars&quot;:{{&quot;metadata&quot;:&quot;{}&quot;}}}}"></div>"#,
            metadata
        ),
    )
    .await;

    let set = scraper_for(&server)
        .resolve_streams(&watch_url)
        .await
        .expect("two of three sources resolve");

    assert_eq!(set.streams.len(), 2);

    assert_eq!(set.streams[0].title, "Filemoon 1080p");
    assert_eq!(set.streams[0].stream_url, "https://fm.cdn/hls/master.m3u8?t=1");
    assert_eq!(
        set.streams[0].headers.get("Origin").map(String::as_str),
        Some("https://filemoon.to")
    );

    assert_eq!(set.streams[1].title, "Okru 480p");
    assert_eq!(set.streams[1].stream_url, "https://ok.cdn/hd");
    assert_eq!(
        set.streams[1].headers.get("Referer").map(String::as_str),
        Some("https://ok.ru/")
    );

    let json = serde_json::to_value(&set).unwrap();
    assert_eq!(json["streams"][0]["streamUrl"], "https://fm.cdn/hls/master.m3u8?t=1");
}

#[tokio::test]
async fn test_resolve_streams_looks_up_film_id() {
    let server = MockServer::start().await;
    let base = server.uri();

    mount_post(
        &server,
        "/_ajaxweb/sol/hakkinda/other-movie",
        "",
        r#"<div class="x" data-id='777'></div>"#.to_string(),
    )
    .await;
    mount_post(
        &server,
        "/ajax/dataAlternatif3.asp",
        "filmid=777&dil=1",
        r#"{"status":"OK","data":[{"id":9,"baslik":"Pixel","kalitesi":null}]}"#.to_string(),
    )
    .await;
    mount_post(
        &server,
        "/ajax/dataEmbed.asp",
        "id=9",
        r#"<iframe src="https://pixeldrain.com/u/abcDEF"></iframe>"#.to_string(),
    )
    .await;

    let set = scraper_for(&server)
        .resolve_streams(&format!("{}/izle/altyazi/other-movie", base))
        .await
        .unwrap();

    assert_eq!(set.streams.len(), 1);
    assert_eq!(set.streams[0].title, "Pixel");
    assert_eq!(set.streams[0].stream_url, "https://pixeldrain.com/api/file/abcDEF?download");
}

#[tokio::test]
async fn test_resolve_streams_site_error_is_absent() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ajax/dataAlternatif3.asp"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = scraper_for(&server)
        .resolve_streams(&format!("{}/izle/dublaj/x?fid=1", server.uri()))
        .await;
    assert!(result.is_none());
}

#[tokio::test]
async fn test_search_non_ok_status_is_empty() {
    let server = MockServer::start().await;
    mount_post(
        &server,
        "/ajax/arama.asp",
        "",
        r#"{"status":"ERR","results":null}"#.to_string(),
    )
    .await;

    assert!(scraper_for(&server).search("anything").await.is_empty());
}
