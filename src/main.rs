use std::time::Duration;

use tokio::net::TcpListener;
use tracing::info;

use newsaggr::config::Config;
use newsaggr::core::storage::repository::NewsRepository;
use newsaggr::core::AppServices;
use newsaggr::telemetry;
use newsaggr::web::routes::{build_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    telemetry::init_telemetry();

    let config = Config::from_env();
    info!(database_url = %config.database_url, "starting newsaggr");

    let repository = NewsRepository::connect(&config.database_url).await?;
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.fetch_timeout_secs))
        .build()?;

    let state = AppState {
        repository: repository.clone(),
        client,
        services: AppServices::default(),
    };
    let app = build_router(state, &config.static_dir);

    let listener = TcpListener::bind(&config.bind_addr).await?;
    info!(address = %config.bind_addr, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    repository.close().await;
    info!("storage closed, shutting down");
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
