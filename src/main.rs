use dotenvy::dotenv;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod app;
mod common;
mod config;
mod docs;
mod infrastructure;
mod modules;
mod routes;
mod state;
mod workers;

#[cfg(test)]
mod test_helpers;

use config::settings::AppConfig;
use infrastructure::queue::rabbitmq::RabbitMqService;
use infrastructure::staging::StagingDirs;
use infrastructure::storage::s3::S3ObjectStore;
use infrastructure::storage::service::StorageService;
use infrastructure::transcoder::ffmpeg::FfmpegTranscoder;
use modules::pipeline::service::Pipeline;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    info!("Starting video processing service...");

    let config = AppConfig::new();

    let staging = StagingDirs::new(&config.raw_staging_dir, &config.processed_staging_dir);
    staging.setup().await?;

    let transcoder = Arc::new(FfmpegTranscoder::new(&config.ffmpeg_path));
    let store = Arc::new(S3ObjectStore::new(&config));
    let pipeline = Arc::new(Pipeline::new(
        StorageService::new(store, staging.clone()),
        transcoder.clone(),
        staging,
        config.timeouts,
    ));

    match &config.amqp_url {
        Some(url) => {
            let queue = RabbitMqService::new(url).await?;
            let queue_name = config.pipeline_queue.clone();
            tokio::spawn(async move {
                if let Err(e) = workers::pipeline::start_pipeline_worker(queue, queue_name, pipeline).await {
                    error!("❌ Pipeline Worker stopped: {:#}", e);
                }
            });
        }
        None => info!("AMQP_URL not set, pipeline worker disabled"),
    }

    let port = config.server_port;
    let app = app::create_app(AppState::new(config, transcoder));

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!("Video Processing Service listening at http://0.0.0.0:{}", port);

    axum::serve(listener, app).await?;
    Ok(())
}
