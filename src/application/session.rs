use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

use crate::application::HistoryRepository;
use crate::domain::{HistoryEntry, ImageAttempt};

#[derive(Debug, Default)]
struct SessionState {
    image_attempt: ImageAttempt,
    last_generated_id: Option<String>,
}

/// Everything the front-end needs to render one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionView {
    /// The entry produced by the most recent successful request, if it is
    /// still in history.
    pub latest: Option<HistoryEntry>,
    pub history: Vec<HistoryEntry>,
    pub image_attempt: ImageAttempt,
}

/// Per-session state: the history store plus the transient image flag and a
/// reference to the entry generated last.
///
/// Each session owns its own context; nothing here is shared process-wide.
pub struct SessionContext {
    id: String,
    history: Arc<dyn HistoryRepository>,
    state: Mutex<SessionState>,
}

impl SessionContext {
    pub fn new(history: Arc<dyn HistoryRepository>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            history,
            state: Mutex::new(SessionState::default()),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn history(&self) -> Arc<dyn HistoryRepository> {
        self.history.clone()
    }

    pub async fn image_attempt(&self) -> ImageAttempt {
        self.state.lock().await.image_attempt.clone()
    }

    pub async fn reset_image_attempt(&self) {
        self.state.lock().await.image_attempt = ImageAttempt::NotAttempted;
    }

    pub async fn record_image_attempt(&self, attempt: ImageAttempt) {
        self.state.lock().await.image_attempt = attempt;
    }

    /// Prepend a freshly generated entry and mark it as the latest result.
    pub async fn record_generated(&self, entry: HistoryEntry) {
        let id = entry.id().to_string();
        self.history.prepend(entry).await;
        self.state.lock().await.last_generated_id = Some(id);
    }

    pub async fn last_generated_id(&self) -> Option<String> {
        self.state.lock().await.last_generated_id.clone()
    }

    /// The entry generated by the most recent successful request.
    ///
    /// Resolved by id, so editing the form afterwards does not hide it.
    pub async fn latest(&self) -> Option<HistoryEntry> {
        let id = self.last_generated_id().await?;
        self.history
            .first()
            .await
            .filter(|entry| entry.id() == id)
    }

    /// Empty the history and return the transient flags to their initial state.
    pub async fn clear(&self) {
        self.history.clear().await;
        let mut state = self.state.lock().await;
        *state = SessionState::default();
        debug!("Cleared history for session {}", self.id);
    }

    pub async fn view(&self) -> SessionView {
        SessionView {
            latest: self.latest().await,
            history: self.history.list().await,
            image_attempt: self.image_attempt().await,
        }
    }
}
