use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use crate::application::HistoryRepository;
use crate::domain::HistoryEntry;

/// Process-memory history for a single session.
pub struct InMemoryHistoryRepository {
    entries: Arc<Mutex<VecDeque<HistoryEntry>>>,
}

impl InMemoryHistoryRepository {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(VecDeque::new())),
        }
    }
}

impl Default for InMemoryHistoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HistoryRepository for InMemoryHistoryRepository {
    async fn prepend(&self, entry: HistoryEntry) {
        let mut entries = self.entries.lock().await;
        entries.push_front(entry);
        debug!("History now holds {} entries", entries.len());
    }

    async fn clear(&self) {
        self.entries.lock().await.clear();
    }

    async fn list(&self) -> Vec<HistoryEntry> {
        self.entries.lock().await.iter().cloned().collect()
    }

    async fn first(&self) -> Option<HistoryEntry> {
        self.entries.lock().await.front().cloned()
    }

    async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PreferenceInput;

    fn entry(topic: &str) -> HistoryEntry {
        HistoryEntry::new(&PreferenceInput::new(topic), format!("about {topic}"), None)
    }

    #[tokio::test]
    async fn test_prepend_keeps_newest_first() {
        let repo = InMemoryHistoryRepository::new();
        repo.prepend(entry("first")).await;
        repo.prepend(entry("second")).await;
        repo.prepend(entry("third")).await;

        let topics: Vec<String> = repo
            .list()
            .await
            .iter()
            .map(|e| e.topic().to_string())
            .collect();
        assert_eq!(topics, vec!["third", "second", "first"]);
        assert_eq!(repo.first().await.map(|e| e.topic().to_string()), Some("third".into()));
    }

    #[tokio::test]
    async fn test_duplicates_are_kept() {
        let repo = InMemoryHistoryRepository::new();
        repo.prepend(entry("Rust")).await;
        repo.prepend(entry("Rust")).await;
        assert_eq!(repo.len().await, 2);
    }

    #[tokio::test]
    async fn test_clear_empties_store() {
        let repo = InMemoryHistoryRepository::new();
        repo.prepend(entry("Rust")).await;
        repo.clear().await;

        assert!(repo.is_empty().await);
        assert!(repo.list().await.is_empty());
        assert!(repo.first().await.is_none());
    }
}
