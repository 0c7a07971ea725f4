use async_trait::async_trait;

use crate::domain::ImageLookup;

/// Looks up an illustrative photo for a topic.
///
/// Never returns a hard error: transport and parsing problems come back as
/// [`ImageLookup::Unavailable`] because an image is purely cosmetic.
#[async_trait]
pub trait ImageSearch: Send + Sync {
    async fn find_topic_image(&self, query: &str) -> ImageLookup;
}
