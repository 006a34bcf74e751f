use crate::{
    backend::{decode_feed, SlotBackend},
    error::FetchError,
    types::Slot,
};
use async_trait::async_trait;
use tracing::debug;

/// Reads the booked slots from the upstream availability feed. The feed is
/// fetched in full on every call, filtering happens locally.
#[derive(Debug, Clone)]
pub struct UpstreamSlots {
    client: reqwest::Client,
    url: String,
}

impl UpstreamSlots {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    fn request_error(&self, source: reqwest::Error) -> FetchError {
        FetchError::Request {
            url: self.url.clone(),
            source,
        }
    }
}

#[async_trait]
impl SlotBackend for UpstreamSlots {
    async fn fetch_slots(&self) -> Result<Vec<Slot>, FetchError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|err| self.request_error(err))?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        let body = response.bytes().await.map_err(|err| self.request_error(err))?;
        let slots = decode_feed(&body)?;
        debug!(url = %self.url, count = slots.len(), "Fetched slots from upstream");
        Ok(slots)
    }
}
