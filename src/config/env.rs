use std::env;
use std::str::FromStr;

pub enum EnvKey {
    ServerPort,
    RawBucket,
    ProcessedBucket,
    S3Endpoint,
    S3Region,
    S3AccessKey,
    S3SecretKey,
    FfmpegPath,
    RawStagingDir,
    ProcessedStagingDir,
    DownloadTimeoutSecs,
    TranscodeTimeoutSecs,
    UploadTimeoutSecs,
    AmqpUrl,
    PipelineQueue,
}

impl EnvKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvKey::ServerPort => "PORT",
            EnvKey::RawBucket => "RAW_VIDEOS_BUCKET",
            EnvKey::ProcessedBucket => "PROCESSED_VIDEOS_BUCKET",
            EnvKey::S3Endpoint => "S3_ENDPOINT",
            EnvKey::S3Region => "S3_REGION",
            EnvKey::S3AccessKey => "AWS_ACCESS_KEY_ID",
            EnvKey::S3SecretKey => "AWS_SECRET_ACCESS_KEY",
            EnvKey::FfmpegPath => "FFMPEG_PATH",
            EnvKey::RawStagingDir => "RAW_STAGING_DIR",
            EnvKey::ProcessedStagingDir => "PROCESSED_STAGING_DIR",
            EnvKey::DownloadTimeoutSecs => "DOWNLOAD_TIMEOUT_SECS",
            EnvKey::TranscodeTimeoutSecs => "TRANSCODE_TIMEOUT_SECS",
            EnvKey::UploadTimeoutSecs => "UPLOAD_TIMEOUT_SECS",
            EnvKey::AmqpUrl => "AMQP_URL",
            EnvKey::PipelineQueue => "PIPELINE_QUEUE",
        }
    }
}

pub fn get(key: EnvKey) -> Result<String, env::VarError> {
    env::var(key.as_str())
}

/// Unset and blank values are both treated as absent.
pub fn get_opt(key: EnvKey) -> Option<String> {
    get(key).ok().filter(|v| !v.trim().is_empty())
}

pub fn get_or(key: EnvKey, default: &str) -> String {
    get_opt(key).unwrap_or_else(|| default.to_string())
}

pub fn get_parsed<T: FromStr>(key: EnvKey, default: T) -> T {
    match get(key) {
        Ok(val) => val.trim().parse::<T>().unwrap_or(default),
        Err(_) => default,
    }
}
