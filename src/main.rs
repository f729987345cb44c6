use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use song_analytics_server::catalog::{load_songs, SongStore};
use song_analytics_server::config::{AppConfig, CliConfig, FileConfig};
use song_analytics_server::server::{run_server, RequestsLoggingLevel};

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to the column-oriented JSON dataset file.
    #[clap(long, default_value = "playlist.json")]
    pub dataset_path: PathBuf,

    /// Optional TOML config file; values set there override CLI arguments.
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// The host to listen on.
    #[clap(long, default_value = "0.0.0.0")]
    pub host: String,

    /// The port to listen on.
    #[clap(short, long, default_value_t = 8000)]
    pub port: u16,

    /// Number of songs per page when a request does not specify a size.
    #[clap(long, default_value_t = 10)]
    pub default_page_size: usize,

    /// Upper bound on the requested page size.
    #[clap(long, default_value_t = 100)]
    pub max_page_size: usize,

    /// Allowed CORS origin; repeat for multiple, "*" allows any.
    #[clap(long = "cors-origin", default_value = "*")]
    pub cors_origins: Vec<String>,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .unwrap();

    let file_config = match &cli_args.config {
        Some(path) => Some(FileConfig::load(path)?),
        None => None,
    };

    let cli_config = CliConfig {
        dataset_path: Some(cli_args.dataset_path),
        host: cli_args.host,
        port: cli_args.port,
        logging_level: cli_args.logging_level,
        default_page_size: cli_args.default_page_size,
        max_page_size: cli_args.max_page_size,
        cors_origins: cli_args.cors_origins,
    };
    let config = AppConfig::resolve(&cli_config, file_config)?;

    info!("Loading dataset from {:?}...", config.dataset_path);
    let store = SongStore::new(load_songs(&config.dataset_path)?);
    info!("Store holds {} songs.", store.len());

    info!("Ready to serve at {}:{}!", config.host, config.port);
    run_server(config.server_config(), store).await
}
