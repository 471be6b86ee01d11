//! spam-server: train, test and serve spam detector results
//!
//! # Usage
//!
//! ```bash
//! # Serve results for ./data on the configured address
//! spam-server serve
//!
//! # Override the data root and listen address
//! spam-server --config spam.toml serve --data-root /srv/data --listen 127.0.0.1:9000
//!
//! # Print the evaluation report as JSON and exit
//! spam-server evaluate ./data
//! ```

use clap::{Parser, Subcommand};
use spam_server::{evaluate, evaluate_blocking, ApiServer, Config};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "spam-server")]
#[command(about = "Naive Bayes spam detector service", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train, test and serve the results over HTTP
    Serve {
        /// Directory holding training/ and testing/
        #[arg(long)]
        data_root: Option<PathBuf>,
        /// Listen address (e.g., 0.0.0.0:8080)
        #[arg(long)]
        listen: Option<String>,
    },
    /// Train, test and print the report as JSON
    Evaluate {
        /// Directory holding training/ and testing/
        root: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::development(),
    };

    // Initialize logging
    let level = config.logging.level.clone();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "spam_server={0},spam_detector={0},tower_http={0}",
                    level
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Serve { data_root, listen } => {
            if let Some(root) = data_root {
                config.data.root = root;
            }
            if let Some(addr) = listen {
                config.server.listen_addr = addr;
            }
            config.validate()?;

            info!("Starting spam-server v{}", env!("CARGO_PKG_VERSION"));
            info!("  Data root: {}", config.data.root.display());

            let addr = config.listen_addr()?;
            let report = evaluate_blocking(config.data.root.clone()).await?;

            ApiServer::new(report, addr).run().await?;
        }
        Commands::Evaluate { root } => {
            let root = root.unwrap_or(config.data.root);
            let report = evaluate(&root);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
