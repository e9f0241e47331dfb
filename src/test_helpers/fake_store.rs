use crate::infrastructure::storage::{BucketKind, ObjectStore, RemoteObjectRef, StoreError};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

type Key = (BucketKind, String);

#[derive(Default)]
pub struct FakeObjectStore {
    objects: Mutex<HashMap<Key, Vec<u8>>>,
    public: Mutex<HashSet<Key>>,
    fetch_failure: Mutex<Option<String>>,
    put_failure: Mutex<Option<String>>,
    make_public_failure: Mutex<Option<String>>,
    fetch_delay: Mutex<Option<Duration>>,
    make_public_calls: AtomicUsize,
}

impl FakeObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, bucket: BucketKind, name: &str, data: &[u8]) {
        self.objects
            .lock()
            .unwrap()
            .insert((bucket, name.to_string()), data.to_vec());
    }

    pub fn get(&self, bucket: BucketKind, name: &str) -> Option<Vec<u8>> {
        self.objects
            .lock()
            .unwrap()
            .get(&(bucket, name.to_string()))
            .cloned()
    }

    pub fn is_public(&self, bucket: BucketKind, name: &str) -> bool {
        self.public.lock().unwrap().contains(&(bucket, name.to_string()))
    }

    pub fn fail_fetch(&self, message: &str) {
        *self.fetch_failure.lock().unwrap() = Some(message.to_string());
    }

    pub fn fail_put(&self, message: &str) {
        *self.put_failure.lock().unwrap() = Some(message.to_string());
    }

    pub fn fail_make_public(&self, message: &str) {
        *self.make_public_failure.lock().unwrap() = Some(message.to_string());
    }

    pub fn delay_fetch(&self, delay: Duration) {
        *self.fetch_delay.lock().unwrap() = Some(delay);
    }

    pub fn make_public_calls(&self) -> usize {
        self.make_public_calls.load(Ordering::SeqCst)
    }

    fn key(object: &RemoteObjectRef) -> Key {
        (object.bucket, object.object_name.clone())
    }
}

#[async_trait]
impl ObjectStore for FakeObjectStore {
    async fn fetch_to_file(&self, object: &RemoteObjectRef, dest: &Path) -> Result<(), StoreError> {
        let delay = *self.fetch_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(message) = self.fetch_failure.lock().unwrap().clone() {
            return Err(StoreError::remote("download", object, message));
        }

        let data = self
            .objects
            .lock()
            .unwrap()
            .get(&Self::key(object))
            .cloned()
            .ok_or_else(|| StoreError::NotFound(object.clone()))?;

        tokio::fs::write(dest, data)
            .await
            .map_err(|e| StoreError::local(dest, e))
    }

    async fn put_from_file(&self, src: &Path, object: &RemoteObjectRef) -> Result<(), StoreError> {
        if let Some(message) = self.put_failure.lock().unwrap().clone() {
            return Err(StoreError::remote("upload", object, message));
        }

        let data = tokio::fs::read(src)
            .await
            .map_err(|e| StoreError::local(src, e))?;
        self.objects.lock().unwrap().insert(Self::key(object), data);
        Ok(())
    }

    async fn make_public(&self, object: &RemoteObjectRef) -> Result<(), StoreError> {
        self.make_public_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = self.make_public_failure.lock().unwrap().clone() {
            return Err(StoreError::remote("make public", object, message));
        }

        let key = Self::key(object);
        if !self.objects.lock().unwrap().contains_key(&key) {
            return Err(StoreError::NotFound(object.clone()));
        }
        self.public.lock().unwrap().insert(key);
        Ok(())
    }
}
