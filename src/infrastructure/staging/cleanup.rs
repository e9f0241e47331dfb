use super::StagingDirs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;
use tracing::info;

#[derive(Debug, Error)]
pub enum CleanupError {
    #[error("staged file {} does not exist", .0.display())]
    NotFound(PathBuf),

    #[error("failed to delete {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Deletes one staged file. A missing file is reported as `NotFound`.
pub async fn delete_staged(path: &Path) -> Result<(), CleanupError> {
    fs::remove_file(path).await.map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            CleanupError::NotFound(path.to_path_buf())
        } else {
            CleanupError::Io {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    info!("🧹 Deleted {}", path.display());
    Ok(())
}

pub async fn delete_raw(dirs: &StagingDirs, object_name: &str) -> Result<(), CleanupError> {
    delete_staged(&dirs.raw_path(object_name)).await
}

pub async fn delete_processed(dirs: &StagingDirs, file_name: &str) -> Result<(), CleanupError> {
    delete_staged(&dirs.processed_path(file_name)).await
}
