//! Skills API server

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use skills_api::api::{build_router, AppState};
use skills_api::config::{self, validate_config, StorageBackendType};
use skills_api::database::open_store;
use skills_api::server::{serve, shutdown_signal};
use skills_api::telemetry::init_tracing;
use tracing::{info, warn};

// ---- CLI ----

#[derive(Parser)]
#[command(name = "skills-api", version, about = "CRUD HTTP API for skills")]
struct Args {
    /// Config file (TOML or JSON5)
    #[arg(long, short, env = "SKILLS_API_CONFIG")]
    config: Option<PathBuf>,

    /// Bind address
    #[arg(long)]
    bind: Option<String>,

    /// Port
    #[arg(long, short)]
    port: Option<u16>,

    /// Storage backend (postgres or memory)
    #[arg(long)]
    backend: Option<StorageBackendType>,
}

// ---- Main ----

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = config::load_config_with(args.config.as_deref())?;
    if let Some(bind) = args.bind {
        config.server.bind = bind;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(backend) = args.backend {
        config.storage.backend = backend;
    }

    init_tracing(&config.logging);
    info!("Starting {} v{}", skills_api::NAME, skills_api::VERSION);

    let validation = validate_config(&config);
    for issue in &validation.warnings {
        warn!("{}", issue);
    }
    if !validation.valid {
        let errors: Vec<String> = validation.errors.iter().map(|e| e.to_string()).collect();
        anyhow::bail!("Invalid configuration:\n  {}", errors.join("\n  "));
    }

    let store = open_store(&config.storage)
        .await
        .context("Failed to initialize storage")?;
    info!("Storage ready ({})", store.id());

    let app = build_router(AppState::new(store));

    let addr = config.server.address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    serve(listener, app, shutdown_signal(), config.server.shutdown_grace).await?;

    Ok(())
}
