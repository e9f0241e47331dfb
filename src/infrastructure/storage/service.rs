use super::{ObjectStore, RemoteObjectRef, StoreError};
use crate::infrastructure::staging::StagingDirs;
use std::sync::Arc;
use tracing::{error, info};

/// Moves objects between the buckets and the local staging directories.
#[derive(Clone)]
pub struct StorageService {
    store: Arc<dyn ObjectStore>,
    staging: StagingDirs,
}

impl StorageService {
    pub fn new(store: Arc<dyn ObjectStore>, staging: StagingDirs) -> Self {
        Self { store, staging }
    }

    /// Fetches `object_name` from the raw bucket into the raw staging directory.
    pub async fn download(&self, object_name: &str) -> Result<(), StoreError> {
        let object = RemoteObjectRef::raw(object_name);
        let dest = self.staging.raw_path(object_name);

        self.store.fetch_to_file(&object, &dest).await?;

        info!("⬇️ {} staged at {}", object, dest.display());
        Ok(())
    }

    /// Publishes `file_name` from the processed staging directory and makes it public.
    pub async fn upload(&self, file_name: &str) -> Result<(), StoreError> {
        let object = RemoteObjectRef::processed(file_name);
        let src = self.staging.processed_path(file_name);

        self.store.put_from_file(&src, &object).await?;
        info!("⬆️ {} uploaded", object);

        if let Err(e) = self.store.make_public(&object).await {
            error!("❌ {} uploaded but still private: {}", object, e);
            return Err(StoreError::NotPublic {
                object,
                message: e.to_string(),
            });
        }

        Ok(())
    }
}
