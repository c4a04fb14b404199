//! Server entry point for the portfolio service.
//! Resolves configuration, opens the storage variant, seeds once, serves.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

use portfolio_api::infra::app_config;
use portfolio_api::{http, storage};

#[derive(Parser, Debug)]
#[command(name = "portfolio-api")]
#[command(about = "Portfolio content service", long_about = None)]
#[command(version)]
struct Cli {
    /// Address to listen on (overrides config file and PORTFOLIO_BIND)
    #[arg(short, long)]
    bind: Option<String>,

    /// SQLite database file (overrides config file and PORTFOLIO_DB_PATH).
    /// When no database is configured anywhere, content is served from the
    /// transient in-memory store.
    #[arg(short, long)]
    database: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut config = app_config::load_config();
    if cli.database.is_some() {
        config.database_path = cli.database;
    }
    if cli.bind.is_some() {
        config.bind = cli.bind;
    }

    let storage = storage::open(&config)?;
    storage.seed().await?;

    let addr: SocketAddr = config.bind_addr().parse()?;
    let app = http::router(storage);

    log::info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
