//! Extracted-text memo

use crate::error::{Error, Result};
use crate::pdf::{TextExtractor, UploadedDocument};
use lru::LruCache;
use parking_lot::Mutex;
use std::num::NonZeroUsize;
use std::sync::Arc;

struct CacheInner {
    lru: LruCache<String, String>,
    total_bytes: usize,
}

/// Extracted text keyed by upload memo key, with entry count and byte budget limits
pub struct TextCache {
    inner: Mutex<CacheInner>,
    max_bytes: usize,
}

impl TextCache {
    /// Create a new cache with the specified entry capacity and byte budget
    pub fn new(capacity: usize, max_bytes: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner: Mutex::new(CacheInner {
                lru: LruCache::new(capacity),
                total_bytes: 0,
            }),
            max_bytes,
        }
    }

    /// Store extracted text.
    /// Rejects entries larger than max_bytes entirely.
    /// Evicts LRU entries until byte budget is satisfied.
    pub fn put(&self, key: String, text: String) {
        let new_size = text.len();

        if new_size > self.max_bytes {
            tracing::debug!(bytes = new_size, "extracted text exceeds cache budget, not cached");
            return;
        }

        let mut inner = self.inner.lock();

        if let Some(old) = inner.lru.pop(&key) {
            inner.total_bytes = inner.total_bytes.saturating_sub(old.len());
        }

        while inner.total_bytes + new_size > self.max_bytes {
            match inner.lru.pop_lru() {
                Some((_, evicted)) => {
                    inner.total_bytes = inner.total_bytes.saturating_sub(evicted.len());
                }
                None => break,
            }
        }

        inner.total_bytes += new_size;
        // Capacity eviction
        if let Some((_, evicted)) = inner.lru.push(key, text) {
            inner.total_bytes = inner.total_bytes.saturating_sub(evicted.len());
        }
    }

    /// Get the text memoized under a key
    pub fn get(&self, key: &str) -> Option<String> {
        self.inner.lock().lru.get(key).cloned()
    }

    /// Memoized text for the document, extracting it on the blocking pool on a miss.
    /// Failures are not memoized.
    pub async fn get_or_extract(
        &self,
        document: &UploadedDocument,
        extractor: &Arc<dyn TextExtractor>,
    ) -> Result<String> {
        let key = document.memo_key();
        if let Some(text) = self.get(&key) {
            tracing::debug!(name = %document.name, "extracted text memo hit");
            return Ok(text);
        }

        let extractor = Arc::clone(extractor);
        let owned = document.clone();
        let text = tokio::task::spawn_blocking(move || extractor.extract(&owned))
            .await
            .map_err(|e| Error::Pdfium {
                reason: format!("Extraction task failed: {}", e),
            })??;

        tracing::info!(name = %document.name, chars = text.len(), "extracted text");
        self.put(key, text.clone());
        Ok(text)
    }

    /// Check if a key is memoized
    pub fn contains(&self, key: &str) -> bool {
        self.inner.lock().lru.contains(key)
    }

    /// Clear all entries
    pub fn clear(&self) {
        let mut inner = self.inner.lock();
        inner.lru.clear();
        inner.total_bytes = 0;
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.inner.lock().lru.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().lru.is_empty()
    }

    /// Total bytes of text currently stored
    pub fn total_bytes(&self) -> usize {
        self.inner.lock().total_bytes
    }
}
