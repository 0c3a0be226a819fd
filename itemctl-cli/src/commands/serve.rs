//! HTTP server command
//!
//! Opens the item store and runs the itemctl HTTP API until shutdown.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use itemctl_server::db::pool::DEFAULT_DATABASE_URL;
use itemctl_server::{create_pool, run_server, PoolConfig, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "127.0.0.1:3030")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Database URL (sqlite://path?mode=rwc, or sqlite::memory:)
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,

    /// Maximum pooled database connections
    #[arg(long, env = "ITEMCTL_MAX_CONNECTIONS", default_value_t = 5)]
    pub max_connections: u32,

    /// Seconds to wait for a free database connection
    #[arg(long, default_value_t = 5)]
    pub acquire_timeout: u64,
}

impl ServeArgs {
    fn pool_config(&self) -> PoolConfig {
        PoolConfig {
            database_url: self.database_url.clone(),
            max_connections: self.max_connections,
            acquire_timeout: Duration::from_secs(self.acquire_timeout),
        }
    }

    fn server_config(&self) -> ServerConfig {
        ServerConfig {
            bind_addr: self.bind,
            cors_permissive: self.cors_permissive,
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    tracing::info!("Starting itemctl server on {}", args.bind);

    let pool = create_pool(&args.pool_config())
        .await
        .with_context(|| format!("Failed to open database at {}", args.database_url))?;

    // Blocks until shutdown
    run_server(pool, args.server_config())
        .await
        .context("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = ServeArgs::try_parse_from(["serve"]).unwrap();
        assert_eq!(args.bind.port(), 3030);
        assert!(!args.cors_permissive);
        assert_eq!(args.pool_config().max_connections, 5);
        assert_eq!(args.pool_config().acquire_timeout, Duration::from_secs(5));
    }

    #[test]
    fn flags_override_defaults() {
        let args = ServeArgs::try_parse_from([
            "serve",
            "--bind",
            "0.0.0.0:8080",
            "--database-url",
            "sqlite::memory:",
            "--max-connections",
            "2",
            "--cors-permissive",
        ])
        .unwrap();

        assert_eq!(args.server_config().bind_addr.port(), 8080);
        assert!(args.server_config().cors_permissive);
        assert_eq!(args.pool_config().database_url, "sqlite::memory:");
        assert_eq!(args.pool_config().max_connections, 2);
    }

    #[test]
    fn rejects_bad_bind_address() {
        assert!(ServeArgs::try_parse_from(["serve", "--bind", "localhost"]).is_err());
    }
}
