//! clientele CLI - client records portal over a SQL warehouse
//!
//! Entry point for the `clientele` binary. The only subcommand today is
//! `serve`, which builds the connection pool, bootstraps the schema, and
//! runs the HTTP server until shutdown.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use clientele_core::ClienteleConfig;
use clientele_server::db::{create_pool, migrations};
use clientele_server::http::{run_server, ServerConfig};

mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "clientele",
    author,
    version,
    about = "HTTP CRUD service for client records backed by a SQL warehouse"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve(ServeArgs),
}

/// Arguments for the serve command
#[derive(Parser, Debug)]
struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:8000)
    #[arg(long, short = 'b', default_value = "127.0.0.1:8000")]
    bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    cors_permissive: bool,

    /// Path to the settings file (default: ~/.clientele/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Database URL (overrides the settings file)
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init_tracing(&tracing_setup::TracingConfig { debug: cli.debug })?;

    match cli.command {
        Commands::Serve(args) => run_serve(args).await,
    }
}

/// Run the HTTP server
async fn run_serve(args: ServeArgs) -> Result<()> {
    // Resolve the connection URL: explicit override first, settings file otherwise
    let database_url = match args.database_url {
        Some(url) => url,
        None => {
            let config = match &args.config {
                Some(path) => ClienteleConfig::load_from(path)?,
                None => ClienteleConfig::load()?,
            };
            config.warehouse_connection.connection_url()
        }
    };

    tracing::info!("Starting clientele server on {}", args.bind);

    let pool = create_pool(&database_url)
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool)
        .await
        .context("Failed to bootstrap clients table")?;

    // The router and state are built exactly once, here at startup.
    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
