//! grubdash-daemon entry point.
//!
//! This file is intentionally thin: it parses the command line, loads the
//! layered config and seed data, wires middleware, and starts the HTTP
//! server. All route handlers live in `routes.rs`; shared state in `state.rs`.

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::http::{HeaderValue, Method};
use clap::Parser;
use grubdash_config::{DaemonConfig, UnusedKeyPolicy};
use grubdash_daemon::{routes, state};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::{info, warn, Level};

#[derive(Parser)]
#[command(name = "grubdash-daemon")]
#[command(about = "GrubDash orders HTTP service", long_about = None)]
struct Args {
    /// Layered YAML config paths in merge order (base -> env -> local)
    #[arg(long = "config")]
    config_paths: Vec<String>,

    /// Listen address; overrides server.addr from config
    #[arg(long, env = "GRUBDASH_ADDR")]
    addr: Option<SocketAddr>,

    /// Seed orders JSON file; overrides seed.path from config
    #[arg(long, env = "GRUBDASH_SEED")]
    seed: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env.local if present (dev convenience).
    // Silent if the file does not exist; production injects env vars directly.
    let _ = dotenvy::from_filename(".env.local");

    init_tracing();

    let args = Args::parse();
    let cfg = load_config(&args)?;

    let seed = match cfg.seed_path.as_deref() {
        Some(path) => grubdash_orders::seed::load_seed_file(path)?,
        None => Vec::new(),
    };
    info!(orders = seed.len(), "seed loaded");

    let shared = Arc::new(state::AppState::in_memory(seed));

    let app = routes::build_router(Arc::clone(&shared))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors_from_config(&cfg));

    info!("grubdash-daemon listening on http://{}", cfg.bind_addr);

    let listener = tokio::net::TcpListener::bind(cfg.bind_addr)
        .await
        .with_context(|| format!("bind {}", cfg.bind_addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server crashed")?;

    info!("grubdash-daemon stopped");
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();
}

/// Merge config layers, then apply command-line / env overrides.
fn load_config(args: &Args) -> anyhow::Result<DaemonConfig> {
    let mut cfg = if args.config_paths.is_empty() {
        DaemonConfig::default()
    } else {
        let paths: Vec<&str> = args.config_paths.iter().map(String::as_str).collect();
        let loaded = grubdash_config::load_layered_yaml(&paths)?;
        info!(config_hash = %loaded.config_hash, layers = paths.len(), "config loaded");

        let report =
            grubdash_config::report_unused_keys(&loaded.config_json, UnusedKeyPolicy::Warn)?;
        for key in &report.unused_leaf_pointers {
            warn!(key = %key, "unused config key");
        }

        DaemonConfig::from_config_json(&loaded.config_json)?
    };

    if let Some(addr) = args.addr {
        cfg.bind_addr = addr;
    }
    if let Some(seed) = &args.seed {
        cfg.seed_path = Some(seed.clone());
    }
    Ok(cfg)
}

/// CORS: allow only the configured origins.
fn cors_from_config(cfg: &DaemonConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = cfg
        .allowed_origins
        .iter()
        .filter_map(|o| HeaderValue::from_str(o).ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(tower_http::cors::Any)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for ctrl-c; running until killed");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
