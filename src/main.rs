//! OdontoBuild Web Server
//!
//! Run with: cargo run -- --config config.toml
//!
//! # Configuration
//!
//! Loaded from `--config`, or the first of
//! `$XDG_CONFIG_HOME/odontobuild/config.toml`, `/etc/odontobuild/config.toml`
//! and `./config.toml`. `ODONTOBUILD_*` environment variables override file
//! values and `RUST_LOG` overrides the configured log level.

use clap::Parser;
use odontobuild::backend::HttpClinicApi;
use odontobuild::config::{generate_default_config, Config};
use odontobuild::{logging, web};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Parser)]
#[command(name = "odontobuild", version, about = "OdontoBuild web front end")]
struct Args {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the bind host
    #[arg(long)]
    host: Option<String>,

    /// Override the bind port
    #[arg(short, long)]
    port: Option<u16>,

    /// Print a default config file and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.print_config {
        print!("{}", generate_default_config());
        return Ok(());
    }

    let mut config = match &args.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    config.validate()?;

    logging::init(&config.logging);

    tracing::info!("Starting OdontoBuild web v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Clinic backend: {}", config.backend.url);
    tracing::info!(
        "Clinic clock UTC{}, agenda hours {}..{}",
        config.clinic.utc_offset,
        config.clinic.opening_hour,
        config.clinic.closing_hour
    );

    let api = Arc::new(HttpClinicApi::new(&config.backend_config())?);
    let state = web::AppState::new(api, &config)?;

    web::serve(state, &config.server.addr()).await?;

    tracing::info!("OdontoBuild web stopped");
    Ok(())
}
