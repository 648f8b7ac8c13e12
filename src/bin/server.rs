//! Postbox Server Binary
//!
//! Starts the HTTP server for Postbox.

use std::sync::Arc;

use clap::Parser;
use postbox::config::SyncStrategy;
use postbox::http::Server;
use postbox::{Config, PostStore};
use tracing_subscriber::{fmt, EnvFilter};

/// Postbox Server
#[derive(Parser, Debug)]
#[command(name = "postbox-server")]
#[command(about = "Durable post service with sorting and search")]
#[command(version)]
struct Args {
    /// Data directory
    #[arg(short, long, default_value = "./postbox_data")]
    data_dir: String,

    /// Listen address (host:port)
    #[arg(short, long, default_value = "0.0.0.0:5002")]
    listen: String,

    /// Seed the two sample posts if the store is empty
    #[arg(long)]
    seed: bool,

    /// Skip fsync after each rewrite
    #[arg(long)]
    no_fsync: bool,
}

#[tokio::main]
async fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,postbox=debug,tower_http=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    tracing::info!("Postbox Server v{}", postbox::VERSION);
    tracing::info!("Data directory: {}", args.data_dir);
    tracing::info!("Listen address: {}", args.listen);

    let sync_strategy = if args.no_fsync {
        SyncStrategy::OsBuffered
    } else {
        SyncStrategy::EveryWrite
    };

    // Build config from args
    let config = Config::builder()
        .data_dir(&args.data_dir)
        .listen_addr(&args.listen)
        .seed_sample_posts(args.seed)
        .sync_strategy(sync_strategy)
        .build();

    // Open store
    let store = match PostStore::open(config.clone()) {
        Ok(s) => Arc::new(s),
        Err(e) => {
            tracing::error!("Failed to open store: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Store initialized with {} posts", store.len());

    let server = match Server::bind(&config, store).await {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = server.run(shutdown_signal()).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Server stopped");
}

/// Resolves on Ctrl+C
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Cannot listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Received Ctrl+C, initiating shutdown...");
}
