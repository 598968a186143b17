use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use lockstep::server::{ServerConfig, serve};
use std::net::{IpAddr, SocketAddr};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Serve a watch-party room over WebSocket.
#[derive(Parser)]
#[command(name = "lockstep", version)]
struct Cli {
    /// Address to listen on.
    #[arg(long, default_value = "0.0.0.0")]
    host: IpAddr,

    #[arg(short, long, default_value_t = 8080)]
    port: u16,

    /// Path that accepts WebSocket upgrades.
    #[arg(long, default_value = "/room")]
    path: String,

    /// Room command queue size.
    #[arg(long, default_value_t = 256)]
    queue: usize,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Cli {
    fn config(&self) -> ServerConfig {
        ServerConfig {
            bind: SocketAddr::new(self.host, self.port),
            room_path: self.path.clone(),
            command_capacity: self.queue,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cli.log_level))
        .context("Invalid log filter")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = cli.config();

    println!("{}", "🎬 Starting lockstep room server...".green().bold());
    println!("   🔌 Room:   ws://{}{}", config.bind, config.room_path);
    println!("   📊 Status: http://{}/status", config.bind);

    serve(config, shutdown_signal())
        .await
        .context("Room server failed")?;

    println!("{}", "👋 Room server stopped".cyan());
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown requested"),
        Err(e) => {
            warn!("Could not listen for Ctrl-C, serving until killed: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
