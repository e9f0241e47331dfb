//! In-memory collaborators for exercising the pipeline without S3 or ffmpeg.

mod fake_store;
mod fake_transcoder;

pub use fake_store::FakeObjectStore;
pub use fake_transcoder::{FakeTranscoder, TranscodeBehavior};

use crate::config::settings::{AppConfig, StageTimeouts};
use crate::infrastructure::staging::StagingDirs;
use std::path::Path;

pub fn test_config() -> AppConfig {
    AppConfig {
        server_port: 3000,
        raw_bucket: "raw-videos".to_string(),
        processed_bucket: "processed-videos".to_string(),
        s3_endpoint: None,
        s3_region: "us-east-1".to_string(),
        s3_access_key: None,
        s3_secret_key: None,
        ffmpeg_path: "ffmpeg".into(),
        raw_staging_dir: "./raw-videos/".into(),
        processed_staging_dir: "./processed-videos/".into(),
        timeouts: StageTimeouts::default(),
        amqp_url: None,
        pipeline_queue: "video_processing_tasks".to_string(),
    }
}

/// Staging directories under `root`, already created.
pub async fn staging_in(root: &Path) -> StagingDirs {
    let staging = StagingDirs::new(root.join("raw-videos"), root.join("processed-videos"));
    staging.setup().await.unwrap();
    staging
}
