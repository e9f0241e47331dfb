use crate::config::env::{self, EnvKey};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    pub server_port: u16,
    pub raw_bucket: String,
    pub processed_bucket: String,
    pub s3_endpoint: Option<String>,
    pub s3_region: String,
    pub s3_access_key: Option<String>,
    pub s3_secret_key: Option<String>,
    pub ffmpeg_path: PathBuf,
    pub raw_staging_dir: PathBuf,
    pub processed_staging_dir: PathBuf,
    pub timeouts: StageTimeouts,
    pub amqp_url: Option<String>,
    pub pipeline_queue: String,
}

impl AppConfig {
    pub fn new() -> Self {
        let defaults = StageTimeouts::default();

        Self {
            server_port: env::get_parsed(EnvKey::ServerPort, 3000),
            raw_bucket: env::get_or(EnvKey::RawBucket, "raw-videos"),
            processed_bucket: env::get_or(EnvKey::ProcessedBucket, "processed-videos"),
            s3_endpoint: env::get_opt(EnvKey::S3Endpoint),
            s3_region: env::get_or(EnvKey::S3Region, "us-east-1"),
            s3_access_key: env::get_opt(EnvKey::S3AccessKey),
            s3_secret_key: env::get_opt(EnvKey::S3SecretKey),
            ffmpeg_path: env::get_or(EnvKey::FfmpegPath, "ffmpeg").into(),
            raw_staging_dir: env::get_or(EnvKey::RawStagingDir, "./raw-videos/").into(),
            processed_staging_dir: env::get_or(EnvKey::ProcessedStagingDir, "./processed-videos/")
                .into(),
            timeouts: StageTimeouts {
                download: secs(EnvKey::DownloadTimeoutSecs, defaults.download),
                transcode: secs(EnvKey::TranscodeTimeoutSecs, defaults.transcode),
                upload: secs(EnvKey::UploadTimeoutSecs, defaults.upload),
            },
            amqp_url: env::get_opt(EnvKey::AmqpUrl),
            pipeline_queue: env::get_or(EnvKey::PipelineQueue, "video_processing_tasks"),
        }
    }
}

fn secs(key: EnvKey, default: Duration) -> Duration {
    Duration::from_secs(env::get_parsed(key, default.as_secs()))
}

/// Upper bounds for the remote and encoder stages. Local deletes are unbounded.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
pub struct StageTimeouts {
    pub download: Duration,
    pub transcode: Duration,
    pub upload: Duration,
}

impl Default for StageTimeouts {
    fn default() -> Self {
        Self {
            download: Duration::from_secs(600),
            transcode: Duration::from_secs(3600),
            upload: Duration::from_secs(600),
        }
    }
}
