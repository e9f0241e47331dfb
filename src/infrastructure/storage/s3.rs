use super::{BucketKind, ObjectStore, RemoteObjectRef, StoreError};
use crate::config::settings::AppConfig;
use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::{BehaviorVersion, Builder, Credentials, Region};
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::ObjectCannedAcl;
use std::io;
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{info, warn};

#[derive(Clone)]
pub struct S3ObjectStore {
    client: Client,
    raw_bucket: String,
    processed_bucket: String,
}

impl S3ObjectStore {
    pub fn new(config: &AppConfig) -> Self {
        let mut builder = Builder::new()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(config.s3_region.clone()));

        match (&config.s3_access_key, &config.s3_secret_key) {
            (Some(access_key), Some(secret_key)) => {
                let credentials = Credentials::new(access_key, secret_key, None, None, "static");
                builder = builder.credentials_provider(credentials);
            }
            _ => warn!("⚠️ No S3 credentials configured, object store calls will be rejected"),
        }

        if let Some(endpoint) = &config.s3_endpoint {
            // Path-style addressing for MinIO and other S3-compatible endpoints
            builder = builder.endpoint_url(endpoint).force_path_style(true);
        }

        let client = Client::from_conf(builder.build());

        info!(
            raw_bucket = %config.raw_bucket,
            processed_bucket = %config.processed_bucket,
            "✅ S3 object store configured"
        );

        Self {
            client,
            raw_bucket: config.raw_bucket.clone(),
            processed_bucket: config.processed_bucket.clone(),
        }
    }

    fn bucket_name(&self, bucket: BucketKind) -> &str {
        match bucket {
            BucketKind::Raw => &self.raw_bucket,
            BucketKind::Processed => &self.processed_bucket,
        }
    }
}

fn content_type_for(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

/// Writes the object body to `file`. Read errors are remote, write errors local.
async fn write_body(
    mut body: ByteStream,
    file: &mut fs::File,
    dest: &Path,
    object: &RemoteObjectRef,
) -> Result<u64, StoreError> {
    let mut bytes = 0u64;
    while let Some(chunk) = body.next().await {
        let chunk = chunk.map_err(|e| StoreError::remote("download", object, e.to_string()))?;
        file.write_all(&chunk)
            .await
            .map_err(|e| StoreError::local(dest, e))?;
        bytes += chunk.len() as u64;
    }
    file.flush().await.map_err(|e| StoreError::local(dest, e))?;
    Ok(bytes)
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn fetch_to_file(&self, object: &RemoteObjectRef, dest: &Path) -> Result<(), StoreError> {
        let bucket = self.bucket_name(object.bucket);

        let resp = self
            .client
            .get_object()
            .bucket(bucket)
            .key(&object.object_name)
            .send()
            .await
            .map_err(|e| {
                if e.as_service_error().is_some_and(|se| se.is_no_such_key()) {
                    StoreError::NotFound(object.clone())
                } else {
                    StoreError::remote("download", object, DisplayErrorContext(&e).to_string())
                }
            })?;

        // File::create truncates, so a previous download of the same name is replaced
        let mut file = fs::File::create(dest)
            .await
            .map_err(|e| StoreError::local(dest, e))?;
        let bytes = write_body(resp.body, &mut file, dest, object).await?;

        info!("⬇️ s3://{}/{} downloaded to {} ({} bytes)", bucket, object.object_name, dest.display(), bytes);
        Ok(())
    }

    async fn put_from_file(&self, src: &Path, object: &RemoteObjectRef) -> Result<(), StoreError> {
        let bucket = self.bucket_name(object.bucket);

        let body = ByteStream::from_path(src)
            .await
            .map_err(|e| StoreError::local(src, io::Error::other(e)))?;

        self.client
            .put_object()
            .bucket(bucket)
            .key(&object.object_name)
            .body(body)
            .content_type(content_type_for(src))
            .send()
            .await
            .map_err(|e| StoreError::remote("upload", object, DisplayErrorContext(&e).to_string()))?;

        info!("⬆️ {} uploaded to s3://{}/{}", src.display(), bucket, object.object_name);
        Ok(())
    }

    async fn make_public(&self, object: &RemoteObjectRef) -> Result<(), StoreError> {
        let bucket = self.bucket_name(object.bucket);

        self.client
            .put_object_acl()
            .bucket(bucket)
            .key(&object.object_name)
            .acl(ObjectCannedAcl::PublicRead)
            .send()
            .await
            .map_err(|e| StoreError::remote("make public", object, DisplayErrorContext(&e).to_string()))?;

        info!("🌐 s3://{}/{} is now public", bucket, object.object_name);
        Ok(())
    }
}
