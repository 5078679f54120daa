//! In-memory status store with entry expiry.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use wikicomic_core::StatusRecord;
use wikicomic_error::WikicomicResult;
use wikicomic_interface::StatusStore;

/// How long a status record stays readable after its last update.
pub const STATUS_TTL: Duration = Duration::from_secs(3600);

/// Internal storage structure for status records.
#[derive(Debug, Clone)]
struct StoredStatus {
    record: StatusRecord,
    expires_at: Instant,
}

/// In-memory status store keyed by request identifier.
///
/// Each `put` overwrites the record and resets its expiry window. Expired
/// entries read as absent; they are swept lazily on the next write rather
/// than by a background task.
#[derive(Debug, Clone)]
pub struct InMemoryStatusStore {
    entries: Arc<RwLock<HashMap<String, StoredStatus>>>,
    ttl: Duration,
}

impl InMemoryStatusStore {
    /// Create a store with the default one-hour expiry.
    pub fn new() -> Self {
        Self::with_ttl(STATUS_TTL)
    }

    /// Create a store with a custom expiry window.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Get the number of stored entries, including expired ones not yet
    /// swept (for testing).
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Check if the store holds no entries (for testing).
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl Default for InMemoryStatusStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StatusStore for InMemoryStatusStore {
    async fn put(&self, request_id: &str, record: StatusRecord) -> WikicomicResult<()> {
        let now = Instant::now();
        let mut entries = self.entries.write().await;
        entries.retain(|_, stored| stored.expires_at > now);
        entries.insert(
            request_id.to_string(),
            StoredStatus {
                record,
                expires_at: now + self.ttl,
            },
        );
        Ok(())
    }

    async fn get(&self, request_id: &str) -> WikicomicResult<Option<StatusRecord>> {
        let now = Instant::now();
        let entries = self.entries.read().await;
        Ok(entries
            .get(request_id)
            .filter(|stored| stored.expires_at > now)
            .map(|stored| stored.record.clone()))
    }
}
