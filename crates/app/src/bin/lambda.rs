//! Job Board API - AWS Lambda Runtime

use lambda_http::{run, Error};
use tower_http::trace::TraceLayer;
use tracing::info;

use jobboard_app::{create_app, open_stores};
use jobboard_common::config::Config;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::from_env().map_err(|e| Error::from(format!("Configuration error: {}", e)))?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.rust_log))
        .json()
        .without_time()
        .init();

    info!("Initializing job board Lambda");

    let (stores, _pool) = open_stores(&config)
        .await
        .map_err(|e| Error::from(format!("Store error: {}", e)))?;

    let app = create_app(&config, stores)
        .map_err(|e| Error::from(format!("App initialization error: {}", e)))?
        .layer(TraceLayer::new_for_http());

    info!("Job board Lambda ready to serve requests");

    run(app).await
}
