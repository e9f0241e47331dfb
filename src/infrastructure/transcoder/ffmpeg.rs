use super::{TARGET_HEIGHT, TranscodeError, Transcoder};
use async_trait::async_trait;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, error, info};

/// Runs the `ffmpeg` binary as a child process.
#[derive(Clone, Debug)]
pub struct FfmpegTranscoder {
    binary: PathBuf,
}

impl FfmpegTranscoder {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// `-2` keeps the aspect ratio and rounds the width to an even number,
    /// which yuv420p encoders require.
    fn scale_filter() -> String {
        format!("scale=-2:{}", TARGET_HEIGHT)
    }

    fn args(input: &Path, output: &Path) -> Vec<OsString> {
        vec![
            "-hide_banner".into(),
            "-loglevel".into(),
            "error".into(),
            "-nostdin".into(),
            "-y".into(),
            "-i".into(),
            input.into(),
            "-vf".into(),
            Self::scale_filter().into(),
            output.into(),
        ]
    }
}

#[async_trait]
impl Transcoder for FfmpegTranscoder {
    async fn transcode(&self, input: &Path, output: &Path) -> Result<(), TranscodeError> {
        let args = Self::args(input, output);
        debug!("Executing {} {:?}", self.binary.display(), args);
        info!("🎥 Transcoding {} -> {}", input.display(), output.display());

        let result = Command::new(&self.binary)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(TranscodeError::Spawn)?;

        if !result.status.success() {
            let diagnostic = String::from_utf8_lossy(&result.stderr).trim().to_string();
            error!("❌ ffmpeg failed ({}): {}", result.status, diagnostic);
            return Err(TranscodeError::Encoder {
                program: self.binary.display().to_string(),
                status: result.status.to_string(),
                diagnostic,
            });
        }

        info!("✅ Processing finished successfully: {}", output.display());
        Ok(())
    }
}
