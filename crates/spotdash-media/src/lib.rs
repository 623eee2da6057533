//! Capability interface over the multimedia asset server.
//!
//! The asset server returns either an image or a video for a spot's uuid,
//! and does not always distinguish the two by content type: a video asset
//! may answer an image request with a 1×1 placeholder image. Classifying
//! that placeholder as "video" is a heuristic, not a protocol guarantee,
//! and it lives entirely inside this crate so it can be swapped if the
//! backend ever grows an explicit media-type field.

mod dimensions;

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use thiserror::Error;

pub use dimensions::sniff_dimensions;

/// What kind of payload the asset server holds for a uuid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
    Unknown,
}

#[derive(Debug, Error)]
pub enum MediaError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Classifies multimedia assets by fetching them from the asset server.
///
/// Construction takes a base URL so tests can point at a mock server.
/// Classification itself never fails: anything that cannot be fetched or
/// recognized is [`MediaKind::Unknown`], and the caller substitutes a
/// placeholder rather than surfacing an error.
pub struct MediaClassifier {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl MediaClassifier {
    /// Creates a classifier with configured timeout and asset-server key.
    ///
    /// # Errors
    ///
    /// Returns [`MediaError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        base_url: &str,
        api_key: Option<&str>,
        timeout_secs: u64,
    ) -> Result<Self, MediaError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("spotdash/0.1 (spot-analytics)")
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.map(str::to_owned),
        })
    }

    /// The asset URL for a spot uuid. This is the only place it is built.
    #[must_use]
    pub fn asset_url(&self, uuid: &str) -> String {
        match &self.api_key {
            Some(key) => format!("{}/file/spot/{uuid}?key={key}", self.base_url),
            None => format!("{}/file/spot/{uuid}", self.base_url),
        }
    }

    /// Fetch the asset and decide whether it is an image or a video.
    ///
    /// Order of signals:
    /// 1. a `video/*` content type is a video;
    /// 2. an image whose sniffed dimensions are 1×1 is the upstream's
    ///    video placeholder, so it is classified as a video;
    /// 3. any other image payload is an image;
    /// 4. fetch failure, non-2xx status, or an unrecognized payload is
    ///    [`MediaKind::Unknown`].
    pub async fn classify(&self, uuid: &str) -> MediaKind {
        let url = self.asset_url(uuid);
        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(uuid, error = %e, "asset fetch failed");
                return MediaKind::Unknown;
            }
        };

        if !response.status().is_success() {
            tracing::warn!(uuid, status = %response.status(), "asset fetch returned non-success");
            return MediaKind::Unknown;
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("video/") {
            return MediaKind::Video;
        }

        let is_image = content_type.starts_with("image/");

        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(uuid, error = %e, "asset body read failed");
                return MediaKind::Unknown;
            }
        };

        match sniff_dimensions(&body) {
            Some((1, 1)) => MediaKind::Video,
            Some(_) => MediaKind::Image,
            None if is_image => MediaKind::Image,
            None => MediaKind::Unknown,
        }
    }
}
