use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pulseboard_core::{Config, SAMPLE_COUNT};
use pulseboard_feeds::{MarketClient, PriceClient, SocialClient};
use pulseboard_http::{create_router, AppState};
use pulseboard_service::{MarketService, PriceService, SocialService};
use pulseboard_store::TweetStore;

#[derive(Parser)]
#[command(name = "pulseboard")]
#[command(about = "Dashboard proxy for prediction-market, social, and crypto feeds", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP proxy and dashboard
    Serve {
        /// Override PULSEBOARD_PORT
        #[arg(short, long)]
        port: Option<u16>,
        /// Override PULSEBOARD_HOST
        #[arg(short = 'H', long)]
        host: Option<String>,
    },
    /// Run the social fallback cascade once and print the result
    Tweets,
    /// Print a random sample of the cached posts
    Cached {
        #[arg(short, long, default_value_t = SAMPLE_COUNT)]
        limit: usize,
    },
}

fn build_social_service(config: &Config, store: Arc<TweetStore>) -> Result<SocialService> {
    let client =
        SocialClient::new(config.social_bearer_token.clone(), config.social_api_url.clone())?;
    Ok(SocialService::new(Arc::new(client), store, config.search_query.clone()))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();
    let store = Arc::new(TweetStore::new(config.cache_path.clone()));

    match cli.command {
        Commands::Serve { port, host } => {
            let social_service = Arc::new(build_social_service(&config, store)?);
            let market_service =
                Arc::new(MarketService::new(MarketClient::new(config.market_api_url.clone())?));
            let price_service =
                Arc::new(PriceService::new(PriceClient::new(config.price_api_url.clone())?));

            let state = Arc::new(AppState { social_service, market_service, price_service });
            let router = create_router(state);
            let addr =
                format!("{}:{}", host.unwrap_or(config.host), port.unwrap_or(config.port));
            tracing::info!("Starting HTTP server on {}", addr);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            axum::serve(listener, router).await?;
        },
        Commands::Tweets => {
            let social_service = build_social_service(&config, store)?;
            let feed = social_service.fetch_posts().await;
            println!("{}", serde_json::to_string_pretty(&feed)?);
        },
        Commands::Cached { limit } => {
            let posts = store.sample(limit).await;
            println!("{}", serde_json::to_string_pretty(&posts)?);
        },
    }

    Ok(())
}
