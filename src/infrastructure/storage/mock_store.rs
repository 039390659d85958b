use std::collections::HashMap;
use std::sync::Mutex;

use bytes::Bytes;

use crate::application::ports::{BlobStore, BlobStoreError};
use crate::domain::StoragePath;

/// Blob store kept in memory.
#[derive(Default)]
pub struct MockBlobStore {
    blobs: Mutex<HashMap<String, Bytes>>,
}

impl MockBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.blobs.lock().map(|b| b.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, path: &StoragePath) -> bool {
        self.blobs
            .lock()
            .map(|b| b.contains_key(path.as_str()))
            .unwrap_or(false)
    }

    /// Drops a blob without going through the store API.
    pub fn remove_out_of_band(&self, path: &StoragePath) {
        if let Ok(mut blobs) = self.blobs.lock() {
            blobs.remove(path.as_str());
        }
    }

    fn lock(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, HashMap<String, Bytes>>, BlobStoreError> {
        self.blobs
            .lock()
            .map_err(|e| BlobStoreError::DownloadFailed(format!("lock poisoned: {e}")))
    }
}

#[async_trait::async_trait]
impl BlobStore for MockBlobStore {
    async fn store(&self, path: &StoragePath, data: Bytes) -> Result<u64, BlobStoreError> {
        let size = data.len() as u64;
        self.lock()?.insert(path.as_str().to_string(), data);
        Ok(size)
    }

    async fn fetch(&self, path: &StoragePath) -> Result<Vec<u8>, BlobStoreError> {
        self.lock()?
            .get(path.as_str())
            .map(|b| b.to_vec())
            .ok_or_else(|| BlobStoreError::NotFound(path.to_string()))
    }

    async fn delete(&self, path: &StoragePath) -> Result<(), BlobStoreError> {
        self.lock()?
            .remove(path.as_str())
            .map(|_| ())
            .ok_or_else(|| BlobStoreError::DeleteFailed(format!("not found: {path}")))
    }
}
