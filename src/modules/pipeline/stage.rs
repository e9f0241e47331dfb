use crate::infrastructure::staging::cleanup::CleanupError;
use crate::infrastructure::storage::StoreError;
use crate::infrastructure::transcoder::TranscodeError;
use std::fmt;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Download,
    Transcode,
    Upload,
    CleanRaw,
    CleanProcessed,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Download => "download",
            Stage::Transcode => "transcode",
            Stage::Upload => "upload",
            Stage::CleanRaw => "raw cleanup",
            Stage::CleanProcessed => "processed cleanup",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum StageError {
    #[error(transparent)]
    Transcode(#[from] TranscodeError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Cleanup(#[from] CleanupError),

    #[error("timed out after {}s", .0.as_secs_f64())]
    Timeout(Duration),
}

/// Awaits `fut` for at most `limit`.
pub async fn bounded<F, E>(limit: Duration, fut: F) -> Result<(), StageError>
where
    F: Future<Output = Result<(), E>>,
    E: Into<StageError>,
{
    match tokio::time::timeout(limit, fut).await {
        Ok(result) => result.map_err(Into::into),
        Err(_) => Err(StageError::Timeout(limit)),
    }
}
