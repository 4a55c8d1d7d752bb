//! This file defines the revenist binary entry point.

use revenist::app;
use revenist::app_state::AppState;
use revenist::cli;
use revenist::metrics;
use revenist::server;
use revenist::tracing;

use std::sync::Arc;

/// Application entry point
#[tokio::main]
async fn main() {
    let args = cli::parse();
    println!("{:?}", args);
    tracing::init_tracing();
    metrics::register_metrics();
    let state = AppState::new(&args).expect("failed to open the record store");
    let router = app::router(Arc::new(state));
    server::serve(&args, router).await;
}
