use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use vitrina::catalog::{CatalogSource, MemoryCatalog};
use vitrina::config::Config;
use vitrina::logging::{init_tracing, LOG_ENV_VAR};
use vitrina::route::Route;
use vitrina::ui::runtime;

#[derive(Debug, Parser)]
#[command(name = "vitrina", version, about = "Browse a product catalog in the terminal")]
struct Cli {
    /// Config file (default: ~/.config/vitrina/config.toml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON catalog to load instead of the configured one.
    #[arg(long)]
    data: Option<PathBuf>,

    /// Page to open first, e.g. `/` or `/product/2`.
    #[arg(long, default_value = "/")]
    open: Route,

    /// Delay every catalog fetch by this many milliseconds.
    #[arg(long)]
    latency_ms: Option<u64>,

    /// Write logs to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&config_path)
        .with_context(|| format!("loading config from {}", config_path.display()))?;
    apply_overrides(&mut config, &cli);

    let log_file = cli
        .log_file
        .clone()
        .or_else(|| std::env::var_os(LOG_ENV_VAR).map(PathBuf::from))
        .or_else(|| config.logging.file.clone());
    init_tracing(log_file.as_deref());
    tracing::info!(config = %config_path.display(), route = %cli.open, "Starting");

    let source = build_source(config.catalog.data_file.as_deref(), config.catalog.latency_ms)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("starting async runtime")?;

    runtime::run(&config.ui, source, cli.open, runtime.handle()).context("running UI")?;
    Ok(())
}

fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(data) = &cli.data {
        config.catalog.data_file = Some(data.clone());
    }
    if let Some(latency_ms) = cli.latency_ms {
        config.catalog.latency_ms = latency_ms;
    }
}

fn build_source(
    data_file: Option<&Path>,
    latency_ms: u64,
) -> anyhow::Result<Arc<dyn CatalogSource>> {
    let catalog = match data_file {
        Some(path) => MemoryCatalog::from_path(path)
            .with_context(|| format!("loading catalog from {}", path.display()))?,
        None => MemoryCatalog::demo().context("loading built-in catalog")?,
    };
    tracing::info!(products = catalog.product_count(), latency_ms, "Catalog ready");
    Ok(Arc::new(catalog.with_latency(Duration::from_millis(latency_ms))))
}
