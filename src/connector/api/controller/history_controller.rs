use anyhow::{bail, Result};

use crate::{HistoryEntry, HistoryRepository};

use super::super::Container;

const EMPTY_HISTORY: &str = "Your learning journey will be recorded here. \
Start by selecting a topic and getting a recommendation!";

pub struct HistoryController<'a> {
    container: &'a Container,
}

impl<'a> HistoryController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn list(&self) -> String {
        let entries = self.container.session().history().list().await;
        self.format_history(&entries)
    }

    /// Show one history entry in full; `position` is 1-based as listed.
    pub async fn show(&self, position: usize) -> Result<String> {
        let entries = self.container.session().history().list().await;
        let Some(entry) = position.checked_sub(1).and_then(|i| entries.get(i)) else {
            bail!(
                "No history entry #{} (history has {} entries)",
                position,
                entries.len()
            );
        };

        let mut output = format!("{}. {}\n\n", position, entry.title());
        if let Some(url) = entry.image_url() {
            output.push_str(&format!("Image: {}\n\n", url));
        }
        output.push_str(entry.result());
        Ok(output)
    }

    pub async fn clear(&self) -> String {
        let use_case = self.container.clear_history_use_case();
        let removed = use_case.execute(self.container.session()).await;
        format!("Cleared {} history entries.", removed)
    }

    fn format_history(&self, entries: &[HistoryEntry]) -> String {
        if entries.is_empty() {
            return EMPTY_HISTORY.to_string();
        }

        let mut output = "Your Learning History\n\n".to_string();
        for (i, entry) in entries.iter().enumerate() {
            output.push_str(&format!("{}. {}\n", i + 1, entry.title()));
            if let Some(url) = entry.image_url() {
                output.push_str(&format!("   Image: {}\n", url));
            }
        }
        output
    }
}
