pub mod s3;
pub mod service;

use async_trait::async_trait;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The two fixed buckets of the worker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BucketKind {
    Raw,
    Processed,
}

impl fmt::Display for BucketKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BucketKind::Raw => f.write_str("raw"),
            BucketKind::Processed => f.write_str("processed"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RemoteObjectRef {
    pub bucket: BucketKind,
    pub object_name: String,
}

impl RemoteObjectRef {
    pub fn raw(object_name: &str) -> Self {
        Self {
            bucket: BucketKind::Raw,
            object_name: object_name.to_string(),
        }
    }

    pub fn processed(object_name: &str) -> Self {
        Self {
            bucket: BucketKind::Processed,
            object_name: object_name.to_string(),
        }
    }
}

impl fmt::Display for RemoteObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bucket object '{}'", self.bucket, self.object_name)
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0} not found")]
    NotFound(RemoteObjectRef),

    #[error("{operation} of {object} failed: {message}")]
    Remote {
        operation: &'static str,
        object: RemoteObjectRef,
        message: String,
    },

    /// The upload itself succeeded; only the visibility change did not.
    #[error("{object} was uploaded but could not be made public: {message}")]
    NotPublic {
        object: RemoteObjectRef,
        message: String,
    },

    #[error("local file {}: {source}", .path.display())]
    Local {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    pub fn remote(operation: &'static str, object: &RemoteObjectRef, message: impl Into<String>) -> Self {
        Self::Remote {
            operation,
            object: object.clone(),
            message: message.into(),
        }
    }

    pub fn local(path: &Path, source: io::Error) -> Self {
        Self::Local {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Remote blob store holding the raw and processed buckets.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Writes the object to `dest`, replacing any file already there.
    async fn fetch_to_file(&self, object: &RemoteObjectRef, dest: &Path) -> Result<(), StoreError>;

    async fn put_from_file(&self, src: &Path, object: &RemoteObjectRef) -> Result<(), StoreError>;

    /// Grants anonymous read access to an existing object.
    async fn make_public(&self, object: &RemoteObjectRef) -> Result<(), StoreError>;
}
