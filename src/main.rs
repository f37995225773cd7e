//! Brand service binary: loads configuration, runs migrations and serves
//! the REST API.

use anyhow::{Context, Result};
use brand_service::api::rest::routes;
use brand_service::config::Config;
use brand_service::domain::Service;
use brand_service::infra::storage::{migrations::Migrator, repositories::SeaOrmBrandRepository};
use clap::Parser;
use sea_orm::{ConnectOptions, Database};
use sea_orm_migration::MigratorTrait;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "brand-service", about = "Brand CRUD service")]
struct Args {
    /// Path to a YAML configuration file
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let config = Config::load(args.config.as_deref())?;

    let mut opts = ConnectOptions::new(&config.database.url);
    if config.database.url.contains(":memory:") {
        // A second pooled connection would open a fresh empty database
        opts.max_connections(1);
    }
    let db = Database::connect(opts)
        .await
        .context("failed to connect to database")?;
    Migrator::up(&db, None).await.context("migrations failed")?;
    tracing::info!("database ready at {}", config.database.url);

    let repo = Arc::new(SeaOrmBrandRepository::new(Arc::new(db)));
    let service = Arc::new(Service::new(repo));
    let app = routes::router(service);

    let listener = tokio::net::TcpListener::bind(&config.server.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.server.bind_addr))?;
    tracing::info!("listening on {}", config.server.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for ctrl-c: {}", error);
    }
}
