use tracing::info;

use crate::application::{HistoryRepository, SessionContext};

/// Use case for wiping a session's learning history.
pub struct ClearHistoryUseCase;

impl ClearHistoryUseCase {
    pub fn new() -> Self {
        Self
    }

    /// Returns how many entries were removed.
    pub async fn execute(&self, session: &SessionContext) -> usize {
        let removed = session.history().len().await;
        session.clear().await;
        info!("Cleared {} history entries", removed);
        removed
    }
}

impl Default for ClearHistoryUseCase {
    fn default() -> Self {
        Self::new()
    }
}
