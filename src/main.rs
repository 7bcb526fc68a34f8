//! Noerr site server.
//!
//! Entry point: load configuration, initialise logging, serve.

use mimalloc::MiMalloc;

/// Global allocator for improved performance (M-MIMALLOC-APPS).
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use std::sync::Arc;

use dotenvy::dotenv;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use noerr_site::config::AppConfig;
use noerr_site::server::start_server;

fn init_tracing(json: bool) {
    // RUST_LOG wins; otherwise info for everything.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    // M-LOG-STRUCTURED
    if json {
        registry.with(fmt::layer().json().with_target(true)).init();
    } else {
        registry.with(fmt::layer().with_target(true)).init();
    }
}

#[tokio::main]
async fn main() {
    // Load .env (if present) before anything reads the environment
    let _ = dotenv();

    let config = match AppConfig::load() {
        Ok(config) => Arc::new(config),
        Err(e) => {
            eprintln!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    init_tracing(config.log.json);

    info!(
        name: "config.loaded",
        host = %config.server.host,
        port = config.server.port,
        static_dir = %config.site.static_dir.display(),
        forms_endpoint = %config.forms.endpoint,
        "Configuration loaded"
    );

    if let Err(e) = start_server(config).await {
        error!(name: "server.failed", error = %e, "Server exited with error");
        std::process::exit(1);
    }
}
