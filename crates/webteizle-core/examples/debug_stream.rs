//! Debug script walking search -> watch options -> streams on webteizle
//!
//! Usage: `RUST_LOG=webteizle_core=debug cargo run --example debug_stream -- "matrix"`

use tracing_subscriber::EnvFilter;
use webteizle_core::WebteizleScraper;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let keyword = std::env::args().nth(1).unwrap_or_else(|| "matrix".to_string());
    let scraper = WebteizleScraper::new()?;

    println!("Searching for '{}'...\n", keyword);
    let results = scraper.search(&keyword).await;
    for (i, result) in results.iter().enumerate() {
        println!("{:2}. {} -> {}", i + 1, result.title, result.href);
    }

    let Some(first) = results.first() else {
        println!("No results");
        return Ok(());
    };

    let detail = scraper.extract_details(&first.href).await;
    println!("\n=== {} ===", first.title);
    println!("{}\n{}\n{}", detail.description, detail.aliases, detail.airdate);

    for option in scraper.extract_episodes(&first.href).await {
        println!("\n--- Option {}: {} ---", option.number, option.href);

        match scraper.resolve_streams(&option.href).await {
            Some(set) => {
                for stream in set.streams {
                    println!("{}\n  {}", stream.title, stream.stream_url);
                    for (name, value) in &stream.headers {
                        println!("  {}: {}", name, value);
                    }
                }
            }
            None => println!("No playable streams"),
        }
    }

    Ok(())
}
