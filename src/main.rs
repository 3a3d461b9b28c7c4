use clap::Parser;
use postbox::core::config::{CliOverrides, PostboxConfig, load_config, resolve};
use postbox::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "postbox", about = "Terminal client for posting to a reddit-style forum")]
struct Args {
    /// GraphQL endpoint URL
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Pin the post box to one subreddit
    #[arg(short, long)]
    subreddit: Option<String>,

    /// Sign in as this user
    #[arg(short, long)]
    user: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to postbox.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("postbox.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let config = load_config().unwrap_or_else(|e| {
        log::warn!("{e}, falling back to defaults");
        PostboxConfig::default()
    });
    let overrides = CliOverrides {
        endpoint: args.endpoint,
        subreddit: args.subreddit,
        username: args.user,
    };
    let resolved = resolve(&config, &overrides);

    log::info!(
        "Postbox starting up: endpoint={} user={:?} subreddit={:?}",
        resolved.endpoint,
        resolved.username,
        resolved.subreddit
    );

    tui::run(resolved)
}
