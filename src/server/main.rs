//! Region lookup server.
//!
//! Loads state boundaries once at startup and serves listing, ordering and
//! point lookup over HTTP.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use sthana::api;
use sthana::config::{Config, LoadPolicy};
use sthana::pip::RegionService;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[derive(Parser, Debug)]
#[command(name = "server")]
#[command(about = "State and union territory lookup server")]
struct Args {
    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen address
    #[arg(short, long)]
    listen: Option<String>,

    /// GeoJSON boundary dataset
    #[arg(short, long)]
    dataset: Option<PathBuf>,

    /// Feature property holding the region name
    #[arg(long)]
    name_property: Option<String>,

    /// Behaviour when the dataset cannot be loaded
    #[arg(long, value_enum)]
    on_load_error: Option<LoadPolicy>,
}

impl Args {
    /// Config file values, overridden by any flags given
    fn resolve(self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => Config::default(),
        };

        if let Some(listen) = self.listen {
            config.listen = listen;
        }
        if let Some(dataset) = self.dataset {
            config.dataset = dataset;
        }
        if let Some(name_property) = self.name_property {
            config.name_property = name_property;
        }
        if let Some(policy) = self.on_load_error {
            config.on_load_error = policy;
        }

        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Args::parse().resolve()?;

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Sthana Region Server");
    info!("Dataset: {}", config.dataset.display());

    let service = RegionService::load(
        &config.dataset,
        &config.name_property,
        config.on_load_error,
    )
    .context("Failed to load boundary dataset")?;

    info!(
        "Region service ready with {} regions",
        service.index().len()
    );

    let app = api::router(Arc::new(service));

    info!("Starting server on {}", config.listen);

    let listener = tokio::net::TcpListener::bind(&config.listen)
        .await
        .with_context(|| format!("Failed to bind {}", config.listen))?;
    axum::serve(listener, app).await?;

    Ok(())
}
