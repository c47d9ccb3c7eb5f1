//! semcoord HTTP server binary.
//!
//! Starts an axum HTTP server that exposes coordinate extraction and the
//! derived metrics as a JSON service.
//!
//! # Environment Variables
//!
//! - `PORT` -- HTTP port (default: 8080)
//! - `SEMCOORD_LEXICON` -- Optional path to a YAML keyword table; the
//!   built-in table is used when unset
//! - `RUST_LOG` -- Tracing filter (default: "info")
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin server
//! # or with a custom table:
//! SEMCOORD_LEXICON=lexicon.yaml cargo run --bin server
//! ```

use semcoord::extractor::Extractor;
use semcoord::lexicon::Lexicon;
use semcoord::server::{app_router, AppState};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,semcoord=debug".into()),
        )
        .init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let bind_addr = format!("0.0.0.0:{}", port);

    // Build app state, honoring a custom table if configured
    let state = match std::env::var("SEMCOORD_LEXICON") {
        Ok(path) => match Lexicon::from_path(&path) {
            Ok(lexicon) => {
                tracing::info!("loaded custom lexicon from {} ({} keywords)", path, lexicon.len());
                AppState::with_extractor(Extractor::with_lexicon(lexicon))
            }
            Err(e) => {
                tracing::error!("failed to load lexicon from {}: {}", path, e);
                std::process::exit(1);
            }
        },
        Err(_) => AppState::new(),
    };

    let app = app_router(state);

    tracing::info!("semcoord server starting on {}", bind_addr);
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health  -- liveness probe");
    tracing::info!("  POST /analyze -- map text to its coordinate and metrics");
    tracing::info!("  GET  /lexicon -- active keyword table");

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .expect("Failed to bind");

    axum::serve(listener, app)
        .await
        .expect("Server failed");
}
