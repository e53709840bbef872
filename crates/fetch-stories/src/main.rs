use anyhow::{Context, Result};
use clap::Parser;
use shared::{Config, HackerNewsClient, ItemConverter, StoryCollector};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fetch-stories")]
#[command(about = "Fetch the top Hacker News stories and print them as JSON")]
struct Args {
    /// How many top stories to fetch (1-500)
    #[arg(short, long, default_value = "30")]
    posts: usize,

    /// HTTP request timeout in seconds
    #[arg(long, default_value = "5")]
    timeout: u64,

    /// Skip stories with fewer points than this
    #[arg(long, default_value = "1")]
    min_points: i64,

    /// Skip stories with fewer comments than this
    #[arg(long, default_value = "1")]
    min_comments: i64,

    /// Truncate titles and author names to this many characters (0 disables)
    #[arg(long, default_value = "256")]
    max_len: usize,

    /// Keep stories with empty titles or author names
    #[arg(long)]
    allow_empty: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let config = Config::new(args.posts, args.timeout).context("Invalid configuration")?;

    println!("Retrieving {} posts from Hacker News...", config.posts);

    let client = HackerNewsClient::with_base_url(&config.api_base, config.timeout_secs)
        .context("Failed to create Hacker News client")?;

    let ids = client
        .fetch_top_ids(config.posts)
        .await
        .context("Failed to fetch top story ids")?;
    println!("✓ Found {} story ids", ids.len());

    let converter = ItemConverter::new(
        args.allow_empty,
        args.max_len > 0,
        args.max_len,
        args.min_comments,
        args.min_points,
    )
    .context("Invalid conversion options")?;

    let requested = ids.len();
    let collector = StoryCollector::new(Arc::new(client), converter);

    // Stories print in completion order; the rank field records each one's
    // position in the top-stories list.
    let mut rx = collector.spawn(ids);
    let mut converted = 0usize;
    while let Some(story) = rx.recv().await {
        println!("{story}");
        converted += 1;
    }

    println!("✓ Converted {}/{} stories", converted, requested);
    if converted < requested {
        println!(
            "⚠ Skipped {} items (fetch or validation failures, see warnings above)",
            requested - converted
        );
    }

    Ok(())
}
