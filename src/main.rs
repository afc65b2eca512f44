//! Compass UOL CI/CD demonstration service entry point.

use std::net::IpAddr;

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use utoipa::OpenApi;

use compass_cicd_api::api::{ApiDoc, AppState};
use compass_cicd_api::config::Config;
use compass_cicd_api::{metrics, server};

/// Compass UOL CI/CD demonstration service.
#[derive(Parser, Debug)]
#[command(name = "compass-cicd-api")]
#[command(about = "Demonstration HTTP service for the Compass UOL CI/CD pipeline")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,

    /// Bind address (overrides HOST).
    #[arg(long, global = true)]
    host: Option<IpAddr>,

    /// HTTP server port (overrides PORT).
    #[arg(short, long, global = true)]
    port: Option<u16>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the HTTP API (default).
    Serve,

    /// Check configuration validity.
    CheckConfig,

    /// Print the OpenAPI document as JSON.
    Openapi,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(&args),
        Some(Command::Openapi) => cmd_openapi(),
        Some(Command::Serve) | None => cmd_serve(&args).await,
    }
}

/// Load configuration and apply CLI overrides.
fn load_config(args: &Args) -> anyhow::Result<Config> {
    let mut config = Config::load()?;

    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }

    config.validate()?;
    Ok(config)
}

/// Initialize logging from configuration.
fn init_tracing(config: &Config, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("compass_cicd_api=debug,tower_http=debug,info")
    } else {
        EnvFilter::try_new(&config.rust_log).unwrap_or_else(|_| EnvFilter::new("info"))
    };

    if config.is_json_logging() {
        tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer())
            .with(filter)
            .init();
    }
}

/// Serve the HTTP API until shutdown.
async fn cmd_serve(args: &Args) -> anyhow::Result<()> {
    let config = load_config(args)?;
    init_tracing(&config, args.verbose);

    info!("Configuration loaded successfully");
    info!("Bind address: {}", config.bind_addr());
    info!("Metrics: {}", if config.metrics_enabled { "enabled" } else { "disabled" });

    let mut state = AppState::new();
    if config.metrics_enabled {
        let handle = metrics::install_recorder().map_err(|e| {
            error!("Failed to install metrics recorder: {}", e);
            e
        })?;
        state = state.with_metrics(handle);
    }

    server::run(&config, state).await.map_err(|e| {
        error!("HTTP server failed: {}", e);
        e
    })?;

    Ok(())
}

/// Check configuration validity.
fn cmd_check_config(args: &Args) -> anyhow::Result<()> {
    println!("======================================================================");
    println!("COMPASS CI/CD API - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Loading configuration... ");
    let config = match load_config(args) {
        Ok(c) => {
            println!("OK");
            c
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration check failed"));
        }
    };

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Bind Address: {}", config.bind_addr());
    println!("  Log Filter: {}", config.rust_log);
    println!("  Log Format: {}", config.log_format_lower());
    println!("  Metrics: {}", if config.metrics_enabled { "Enabled" } else { "Disabled" });
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Print the OpenAPI document.
fn cmd_openapi() -> anyhow::Result<()> {
    let json = ApiDoc::openapi().to_pretty_json()?;
    println!("{}", json);
    Ok(())
}
