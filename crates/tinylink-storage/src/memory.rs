use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use jiff::Timestamp;
use tinylink_core::error::StorageError;
use tinylink_core::store::{Result, Store};
use tinylink_core::{ShortCode, UrlRecord};

/// In-memory implementation of the [`Store`] trait using DashMap.
///
/// Nothing is persisted; all short codes are lost when the process exits.
/// DashMap's sharded locks make each individual operation atomic without a
/// global lock.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    storage: DashMap<String, UrlRecord>,
}

impl InMemoryStore {
    /// Creates a new in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new in-memory store with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: DashMap::with_capacity(capacity),
        }
    }
}

#[async_trait]
impl Store for InMemoryStore {
    async fn get(&self, code: &ShortCode) -> Result<Option<UrlRecord>> {
        Ok(self.storage.get(code.as_str()).map(|entry| entry.value().clone()))
    }

    async fn put(&self, code: &ShortCode, record: UrlRecord) -> Result<()> {
        self.storage.insert(code.as_str().to_owned(), record);
        Ok(())
    }

    async fn insert(&self, code: &ShortCode, record: UrlRecord) -> Result<()> {
        match self.storage.entry(code.as_str().to_owned()) {
            Entry::Occupied(_) => Err(StorageError::Conflict(code.to_string())),
            Entry::Vacant(slot) => {
                slot.insert(record);
                Ok(())
            }
        }
    }

    async fn record_redirect(
        &self,
        code: &ShortCode,
        at: Timestamp,
    ) -> Result<Option<UrlRecord>> {
        Ok(self.storage.get_mut(code.as_str()).map(|mut entry| {
            entry.record_redirect(at);
            entry.value().clone()
        }))
    }

    async fn len(&self) -> Result<usize> {
        Ok(self.storage.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn code(s: &str) -> ShortCode {
        ShortCode::new_unchecked(s)
    }

    fn record(url: &str) -> UrlRecord {
        UrlRecord::new(url, Timestamp::now())
    }

    #[tokio::test]
    async fn save_and_get() {
        let store = InMemoryStore::new();

        store
            .insert(&code("abc123"), record("https://example.com"))
            .await
            .unwrap();

        let result = store.get(&code("abc123")).await.unwrap().unwrap();
        assert_eq!(result.url, "https://example.com");
        assert_eq!(result.redirect_count, 0);
    }

    #[tokio::test]
    async fn get_nonexistent() {
        let store = InMemoryStore::new();

        assert!(store.get(&code("nope00")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn insert_conflict() {
        let store = InMemoryStore::new();

        store
            .insert(&code("abc123"), record("https://example.com"))
            .await
            .unwrap();

        let err = store
            .insert(&code("abc123"), record("https://other.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, StorageError::Conflict(_)));
        let result = store.get(&code("abc123")).await.unwrap().unwrap();
        assert_eq!(result.url, "https://example.com");
    }

    #[tokio::test]
    async fn put_overwrites() {
        let store = InMemoryStore::with_capacity(4);

        store.put(&code("abc123"), record("https://old.com")).await.unwrap();
        store.put(&code("abc123"), record("https://new.com")).await.unwrap();

        let result = store.get(&code("abc123")).await.unwrap().unwrap();
        assert_eq!(result.url, "https://new.com");
        assert_eq!(store.len().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn record_redirect_counts() {
        let store = InMemoryStore::new();
        store.put(&code("abc123"), record("https://example.com")).await.unwrap();

        let at = Timestamp::now();
        store.record_redirect(&code("abc123"), at).await.unwrap();
        let updated = store
            .record_redirect(&code("abc123"), at)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.redirect_count, 2);
        assert_eq!(updated.last_redirect, Some(at));
        assert!(store
            .record_redirect(&code("nope00"), at)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn concurrent_access() {
        let store = Arc::new(InMemoryStore::new());
        let mut handles = vec![];

        for i in 0..10u64 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                let c = ShortCode::new_unchecked(format!("code{:02}", i));
                store
                    .insert(&c, UrlRecord::new(format!("https://example{}.com", i), Timestamp::now()))
                    .await
                    .unwrap();
            }));
        }

        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(store.len().await.unwrap(), 10);
        for i in 0..10u64 {
            let c = ShortCode::new_unchecked(format!("code{:02}", i));
            let result = store.get(&c).await.unwrap().unwrap();
            assert_eq!(result.url, format!("https://example{}.com", i));
        }
    }
}
