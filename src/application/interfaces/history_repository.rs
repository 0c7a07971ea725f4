use async_trait::async_trait;

use crate::domain::HistoryEntry;

/// Ordered store of past recommendations, newest first.
///
/// Only insert-at-front and clear-all mutate it; entries are never edited or
/// removed individually.
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    async fn prepend(&self, entry: HistoryEntry);

    async fn clear(&self);

    /// Snapshot of all entries; index 0 is the most recently created.
    async fn list(&self) -> Vec<HistoryEntry>;

    async fn first(&self) -> Option<HistoryEntry>;

    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
