//! Local scratch space for files between remote fetch and remote publish.

pub mod cleanup;
pub mod locks;

use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

/// The raw and processed staging directories of one worker process.
#[derive(Clone, Debug)]
pub struct StagingDirs {
    raw: PathBuf,
    processed: PathBuf,
}

impl StagingDirs {
    pub fn new(raw: impl Into<PathBuf>, processed: impl Into<PathBuf>) -> Self {
        Self {
            raw: raw.into(),
            processed: processed.into(),
        }
    }

    /// Creates both directories. Called once before any request is accepted.
    pub async fn setup(&self) -> io::Result<()> {
        ensure_present(self.raw_dir()).await?;
        ensure_present(self.processed_dir()).await?;
        info!(
            raw = %self.raw_dir().display(),
            processed = %self.processed_dir().display(),
            "Staging directories ready"
        );
        Ok(())
    }

    pub fn raw_dir(&self) -> &Path {
        &self.raw
    }

    pub fn processed_dir(&self) -> &Path {
        &self.processed
    }

    pub fn raw_path(&self, object_name: &str) -> PathBuf {
        self.raw.join(object_name)
    }

    pub fn processed_path(&self, file_name: &str) -> PathBuf {
        self.processed.join(file_name)
    }
}

/// Creates `dir` if it is absent. Only the last path component is created.
///
/// An existing entry at `dir` must be a directory.
pub async fn ensure_present(dir: &Path) -> io::Result<()> {
    match fs::create_dir(dir).await {
        Ok(()) => {
            info!("📁 Created directory {}", dir.display());
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            if fs::metadata(dir).await?.is_dir() {
                Ok(())
            } else {
                Err(io::Error::new(
                    io::ErrorKind::NotADirectory,
                    format!("{} exists and is not a directory", dir.display()),
                ))
            }
        }
        Err(e) => Err(e),
    }
}
