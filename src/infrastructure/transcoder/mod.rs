pub mod ffmpeg;

use async_trait::async_trait;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Output height of every rendition.
pub const TARGET_HEIGHT: u32 = 360;

#[derive(Debug, Error)]
pub enum TranscodeError {
    #[error("failed to start encoder: {0}")]
    Spawn(#[source] io::Error),

    /// `diagnostic` is the encoder's own error output, untouched.
    #[error("{program} exited with {status}: {diagnostic}")]
    Encoder {
        program: String,
        status: String,
        diagnostic: String,
    },
}

/// Converts one local media file into one local rendition.
///
/// An implementation resolves exactly once per call, after the encoder has
/// finished or failed. Input is never validated up front: a corrupt file is
/// reported by the encoder itself.
#[async_trait]
pub trait Transcoder: Send + Sync {
    async fn transcode(&self, input: &Path, output: &Path) -> Result<(), TranscodeError>;
}
