//! Markdown redirect decision service.
//!
//! # Architecture Overview
//!
//! ```text
//!   Browser extension                     md-redirect
//!   (onBeforeRequest, blocking)   ┌──────────────────────────────────────────┐
//!   ───────────────────────────▶  │  http     →  host        →  engine       │
//!     POST /v1/decide {url,type}  │  server      webrequest     decide       │
//!                                 │                  │            │          │
//!   ◀───────────────────────────  │  {redirectUrl} / {}  ◀────  policy       │
//!                                 │                               + target   │
//!                                 │  config · observability · lifecycle      │
//!                                 └──────────────────────────────────────────┘
//!
//!   Redirect target: http://localhost:2403?url=<encoded original>  (external service)
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use md_redirect::config::load_or_default;
use md_redirect::http::DecisionServer;
use md_redirect::lifecycle::{signals, Shutdown};
use md_redirect::observability::{logging, metrics};
use md_redirect::policy::LOCAL_SERVICE_BASE;

#[derive(Parser)]
#[command(name = "md-redirect")]
#[command(about = "Decision service redirecting Markdown navigations to a local viewer", long_about = None)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = load_or_default(args.config.as_deref())?;

    logging::init_logging(&config.observability.log_level)?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        target = LOCAL_SERVICE_BASE,
        "md-redirect starting"
    );

    if config.observability.metrics_enabled {
        // Validated at load time.
        let addr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr)?;
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for decision requests");

    let shutdown = Shutdown::new();
    signals::spawn_ctrl_c_handler(shutdown.clone());

    DecisionServer::new(config).run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
