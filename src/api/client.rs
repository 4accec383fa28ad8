// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the photo API.

use super::{decode_detail, decode_page, Endpoints, ImageDetail, ImageSummary};
use crate::error::ApiError;

/// Cheap-to-clone handle; each request future owns its own copy.
#[derive(Debug, Clone)]
pub struct PhotoClient {
    http: reqwest::Client,
    endpoints: Endpoints,
    thumbnail_size: u32,
}

impl PhotoClient {
    pub fn new(base_url: &str, user_agent: &str, thumbnail_size: u32) -> Self {
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(user_agent)
            .build()
            .unwrap_or_else(|err| {
                tracing::warn!("Falling back to default HTTP client: {}", err);
                reqwest::Client::new()
            });

        Self::with_http(http, base_url, thumbnail_size)
    }

    /// Wraps an already configured `reqwest` client.
    pub fn with_http(http: reqwest::Client, base_url: &str, thumbnail_size: u32) -> Self {
        Self {
            http,
            endpoints: Endpoints::new(base_url),
            thumbnail_size,
        }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Fetches one page of image summaries.
    pub async fn list_page(&self, page: u32) -> Result<Vec<ImageSummary>, ApiError> {
        let body = self.get(&self.endpoints.list(page)).await?;
        decode_page(&body)
    }

    /// Fetches the metadata of a single image.
    pub async fn image_detail(&self, id: u32) -> Result<ImageDetail, ApiError> {
        let body = self.get(&self.endpoints.info(id)).await?;
        decode_detail(&body)
    }

    /// Fetches the encoded bytes of a tile thumbnail.
    pub async fn thumbnail(&self, id: u32) -> Result<Vec<u8>, ApiError> {
        self.get(&self.endpoints.thumbnail(id, self.thumbnail_size))
            .await
    }

    async fn get(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        tracing::debug!("GET {}", url);

        let response = self.http.get(url).send().await?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status().as_u16()));
        }

        Ok(response.bytes().await?.to_vec())
    }
}
