use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::application::ImageSearch;
use crate::connector::adapter::required_env;
use crate::domain::{DomainError, ImageLookup};

pub const DEFAULT_BASE_URL: &str = "https://api.pexels.com/v1";
pub const API_KEY_ENV: &str = "PEXELS_API_KEY";
const SEARCH_PATH: &str = "/search";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Only `photos[0]` is decoded; later entries may have any shape.
#[derive(Deserialize)]
struct SearchResponse {
    photos: Vec<serde_json::Value>,
}

#[derive(Deserialize)]
struct Photo {
    src: PhotoSources,
}

#[derive(Deserialize)]
struct PhotoSources {
    medium: String,
}

/// [`ImageSearch`] backed by the Pexels photo search API.
///
/// Asks for a single landscape photo and returns its medium-resolution URL.
/// Every failure is downgraded to [`ImageLookup::Unavailable`]; the caller
/// decides whether to show it.
pub struct PexelsClient {
    client: reqwest::Client,
    api_key: String,
    url: String,
}

impl PexelsClient {
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let base: String = base_url.into();
        let url = format!("{}{}", base.trim_end_matches('/'), SEARCH_PATH);
        Ok(Self {
            client: build_client(REQUEST_TIMEOUT)?,
            api_key: api_key.into(),
            url,
        })
    }

    /// Reads `PEXELS_API_KEY` (required) and `PEXELS_BASE_URL` (optional).
    pub fn from_env() -> Result<Self, DomainError> {
        let key = required_env(API_KEY_ENV)?;
        let base =
            std::env::var("PEXELS_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(key, base)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, DomainError> {
        self.client = build_client(timeout)?;
        Ok(self)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn parse_first_photo(body: &str) -> ImageLookup {
        match serde_json::from_str::<SearchResponse>(body) {
            Ok(response) => match response.photos.into_iter().next() {
                Some(first) => match serde_json::from_value::<Photo>(first) {
                    Ok(photo) => ImageLookup::Found(photo.src.medium),
                    Err(e) => ImageLookup::Unavailable(DomainError::format(
                        format!("PexelsClient: unexpected photo shape: {e}"),
                        body,
                    )),
                },
                None => ImageLookup::NoResults,
            },
            Err(e) => ImageLookup::Unavailable(DomainError::format(
                format!("PexelsClient: error parsing response: {e}"),
                body,
            )),
        }
    }

    async fn search(&self, query: &str) -> Result<String, DomainError> {
        let response = self
            .client
            .get(&self.url)
            .header(reqwest::header::AUTHORIZATION, &self.api_key)
            .query(&[
                ("query", query),
                ("per_page", "1"),
                ("orientation", "landscape"),
            ])
            .send()
            .await
            .map_err(|e| {
                let reason = if e.is_timeout() {
                    "request timed out"
                } else {
                    "request failed"
                };
                DomainError::network(format!("PexelsClient: {reason}: {e}"), None)
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            DomainError::network(format!("PexelsClient: failed to read response: {e}"), None)
        })?;

        if !status.is_success() {
            return Err(DomainError::network(
                format!("PexelsClient: API returned {status}"),
                Some(body),
            ));
        }

        Ok(body)
    }
}

fn build_client(timeout: Duration) -> Result<reqwest::Client, DomainError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| {
            DomainError::internal(format!("PexelsClient: cannot build HTTP client: {e}"))
        })
}

#[async_trait]
impl ImageSearch for PexelsClient {
    async fn find_topic_image(&self, query: &str) -> ImageLookup {
        debug!("PexelsClient: searching for '{query}'");

        let lookup = match self.search(query).await {
            Ok(body) => Self::parse_first_photo(&body),
            Err(e) => ImageLookup::Unavailable(e),
        };

        if let Some(e) = lookup.warning() {
            debug!("PexelsClient: {e}");
        }

        lookup
    }
}
