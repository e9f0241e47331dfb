use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

type Entries = Arc<Mutex<HashMap<String, Arc<AsyncMutex<()>>>>>;

/// Per-file-name mutual exclusion over the staging directories.
///
/// Runs that touch the same staged name wait for each other; runs on
/// disjoint names proceed concurrently.
#[derive(Clone, Default)]
pub struct NameLocks {
    entries: Entries,
}

/// Holds every lock taken by one `acquire`. Dropping it releases them.
pub struct NameGuard {
    held: Vec<(String, OwnedMutexGuard<()>)>,
    entries: Entries,
}

pub fn raw_key(object_name: &str) -> String {
    format!("raw/{}", object_name)
}

pub fn processed_key(file_name: &str) -> String {
    format!("processed/{}", file_name)
}

impl NameLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Locks all `keys`, always in sorted order so overlapping sets cannot deadlock.
    pub async fn acquire<I>(&self, keys: I) -> NameGuard
    where
        I: IntoIterator<Item = String>,
    {
        let mut keys: Vec<String> = keys.into_iter().collect();
        keys.sort();
        keys.dedup();

        let mut held = Vec::with_capacity(keys.len());
        for key in keys {
            let lock = {
                let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
                entries.entry(key.clone()).or_default().clone()
            };
            held.push((key, lock.lock_owned().await));
        }

        NameGuard {
            held,
            entries: self.entries.clone(),
        }
    }

    #[cfg(test)]
    fn tracked(&self) -> usize {
        self.entries.lock().unwrap().len()
    }
}

impl Drop for NameGuard {
    fn drop(&mut self) {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        for (key, guard) in self.held.drain(..) {
            drop(guard);
            // Nobody else holds or waits on this name.
            if entries.get(&key).is_some_and(|lock| Arc::strong_count(lock) == 1) {
                entries.remove(&key);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::timeout;

    #[tokio::test]
    async fn same_name_waits_for_release() {
        let locks = NameLocks::new();
        let first = locks.acquire([raw_key("clip1.mp4")]).await;

        let contender = {
            let locks = locks.clone();
            tokio::spawn(async move {
                let _guard = locks.acquire([raw_key("clip1.mp4")]).await;
            })
        };

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(!contender.is_finished());

        drop(first);
        timeout(Duration::from_secs(1), contender).await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn disjoint_names_do_not_block() {
        let locks = NameLocks::new();
        let _first = locks.acquire([raw_key("a.mp4"), processed_key("a-360p.mp4")]).await;

        let second = timeout(
            Duration::from_secs(1),
            locks.acquire([raw_key("b.mp4"), processed_key("b-360p.mp4")]),
        )
        .await;

        assert!(second.is_ok());
    }

    #[tokio::test]
    async fn raw_and_processed_namespaces_are_separate() {
        let locks = NameLocks::new();
        let _raw = locks.acquire([raw_key("clip.mp4")]).await;

        let processed = timeout(Duration::from_secs(1), locks.acquire([processed_key("clip.mp4")])).await;

        assert!(processed.is_ok());
    }

    #[tokio::test]
    async fn released_entries_are_pruned() {
        let locks = NameLocks::new();
        let guard = locks
            .acquire([raw_key("x.mp4"), processed_key("y.mp4"), raw_key("x.mp4")])
            .await;
        assert_eq!(locks.tracked(), 2);

        drop(guard);

        assert_eq!(locks.tracked(), 0);
    }
}
