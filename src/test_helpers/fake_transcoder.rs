use crate::infrastructure::transcoder::{TranscodeError, Transcoder};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

#[derive(Clone, Debug)]
pub enum TranscodeBehavior {
    /// Writes `360p:` followed by the input bytes to the output.
    Succeed,
    /// Like `Succeed`, then deletes the input.
    SucceedAndRemoveInput,
    /// Fails with the given diagnostic without touching the output.
    Fail(String),
    /// Leaves a partial output behind, then fails.
    FailAfterWriting(String),
    /// Never completes.
    Hang,
}

pub struct FakeTranscoder {
    behavior: TranscodeBehavior,
    calls: Mutex<Vec<(PathBuf, PathBuf)>>,
}

impl FakeTranscoder {
    pub fn new(behavior: TranscodeBehavior) -> Self {
        Self {
            behavior,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn succeeding() -> Self {
        Self::new(TranscodeBehavior::Succeed)
    }

    pub fn failing(diagnostic: &str) -> Self {
        Self::new(TranscodeBehavior::Fail(diagnostic.to_string()))
    }

    pub fn calls(&self) -> Vec<(PathBuf, PathBuf)> {
        self.calls.lock().unwrap().clone()
    }

    fn encoder_error(diagnostic: &str) -> TranscodeError {
        TranscodeError::Encoder {
            program: "ffmpeg".to_string(),
            status: "exit status: 1".to_string(),
            diagnostic: diagnostic.to_string(),
        }
    }
}

#[async_trait]
impl Transcoder for FakeTranscoder {
    async fn transcode(&self, input: &Path, output: &Path) -> Result<(), TranscodeError> {
        self.calls
            .lock()
            .unwrap()
            .push((input.to_path_buf(), output.to_path_buf()));

        match &self.behavior {
            TranscodeBehavior::Succeed => write_rendition(input, output).await,
            TranscodeBehavior::SucceedAndRemoveInput => {
                write_rendition(input, output).await?;
                tokio::fs::remove_file(input).await.map_err(TranscodeError::Spawn)
            }
            TranscodeBehavior::Fail(diagnostic) => Err(Self::encoder_error(diagnostic)),
            TranscodeBehavior::FailAfterWriting(diagnostic) => {
                tokio::fs::write(output, b"partial")
                    .await
                    .map_err(TranscodeError::Spawn)?;
                Err(Self::encoder_error(diagnostic))
            }
            TranscodeBehavior::Hang => std::future::pending().await,
        }
    }
}

async fn write_rendition(input: &Path, output: &Path) -> Result<(), TranscodeError> {
    let data = tokio::fs::read(input).await.map_err(TranscodeError::Spawn)?;
    let mut rendition = b"360p:".to_vec();
    rendition.extend_from_slice(&data);
    tokio::fs::write(output, rendition)
        .await
        .map_err(TranscodeError::Spawn)
}
