// SPDX-License-Identifier: MPL-2.0
//! Lorem Picsum API types and payload decoding.
//!
//! The listing and info endpoints return ids as JSON strings; they are parsed
//! into `u32` here so the rest of the application only deals with integers.
//! Decoding is kept separate from the HTTP client so it can be tested on raw
//! bodies.

mod client;

pub use client::PhotoClient;

use crate::error::ApiError;
use serde::Deserialize;

/// Number of images requested per page.
pub const PAGE_SIZE: u32 = 6;

/// One entry of a listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSummary {
    pub id: u32,
    /// Full-resolution download URL of the image. Tiles do not load it;
    /// they request the resized variant built by [`Endpoints::thumbnail`].
    pub source_url: String,
    pub author: String,
}

/// Metadata shown in the detail overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageDetail {
    pub author: String,
    pub width: u32,
    pub height: u32,
    /// Photo page on the original hosting site.
    pub url: String,
}

/// Picsum sends ids as strings, but accept bare numbers too.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(u64),
}

impl RawId {
    fn parse(&self) -> Result<u32, ApiError> {
        match self {
            RawId::Text(text) => text
                .trim()
                .parse::<u32>()
                .map_err(|_| ApiError::InvalidId(text.clone())),
            RawId::Number(n) => u32::try_from(*n).map_err(|_| ApiError::InvalidId(n.to_string())),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ListItem {
    id: RawId,
    author: String,
    download_url: String,
}

#[derive(Debug, Deserialize)]
struct InfoBody {
    author: String,
    width: u32,
    height: u32,
    url: String,
}

/// Decodes a `/v2/list` response body, preserving server order.
///
/// A single malformed entry fails the whole page.
pub fn decode_page(body: &[u8]) -> Result<Vec<ImageSummary>, ApiError> {
    let items: Vec<ListItem> =
        serde_json::from_slice(body).map_err(|e| ApiError::Decode(e.to_string()))?;

    items
        .into_iter()
        .map(|item| {
            Ok(ImageSummary {
                id: item.id.parse()?,
                source_url: item.download_url,
                author: item.author,
            })
        })
        .collect()
}

/// Decodes an `/id/{id}/info` response body.
pub fn decode_detail(body: &[u8]) -> Result<ImageDetail, ApiError> {
    let info: InfoBody =
        serde_json::from_slice(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(ImageDetail {
        author: info.author,
        width: info.width,
        height: info.height,
        url: info.url,
    })
}

/// URL builder for the three endpoints the gallery uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    pub fn new(base_url: &str) -> Self {
        Self {
            base: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn list(&self, page: u32) -> String {
        format!("{}/v2/list?page={}&limit={}", self.base, page, PAGE_SIZE)
    }

    pub fn info(&self, id: u32) -> String {
        format!("{}/id/{}/info", self.base, id)
    }

    /// Square thumbnail rendered server-side.
    pub fn thumbnail(&self, id: u32, size: u32) -> String {
        format!("{}/id/{}/{}/{}", self.base, id, size, size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIST_BODY: &str = r#"[
        {"id":"101","author":"Alejandro Escamilla","width":5000,"height":3333,
         "url":"https://unsplash.com/photos/a","download_url":"https://picsum.photos/id/101/5000/3333"},
        {"id":"102","author":"Paul Jarvis","width":2500,"height":1667,
         "url":"https://unsplash.com/photos/b","download_url":"https://picsum.photos/id/102/2500/1667"}
    ]"#;

    #[test]
    fn decode_page_parses_string_ids_in_order() {
        let page = decode_page(LIST_BODY.as_bytes()).expect("decode page");
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].id, 101);
        assert_eq!(page[0].author, "Alejandro Escamilla");
        assert_eq!(
            page[0].source_url,
            "https://picsum.photos/id/101/5000/3333"
        );
        assert_eq!(page[1].id, 102);
    }

    #[test]
    fn tile_thumbnail_is_resized_variant_of_source() {
        let page = decode_page(LIST_BODY.as_bytes()).expect("decode page");
        let endpoints = Endpoints::new("https://picsum.photos");
        let thumbnail = endpoints.thumbnail(page[0].id, 400);
        assert_ne!(thumbnail, page[0].source_url);
        assert!(page[0].source_url.starts_with("https://picsum.photos/id/101/"));
        assert!(thumbnail.starts_with("https://picsum.photos/id/101/"));
    }

    #[test]
    fn decode_page_accepts_numeric_ids() {
        let body = r#"[{"id":7,"author":"A","download_url":"u"}]"#;
        let page = decode_page(body.as_bytes()).expect("decode page");
        assert_eq!(page[0].id, 7);
    }

    #[test]
    fn decode_page_rejects_non_numeric_id() {
        let body = r#"[{"id":"abc","author":"A","download_url":"u"}]"#;
        let err = decode_page(body.as_bytes()).unwrap_err();
        assert_eq!(err, ApiError::InvalidId("abc".to_string()));
    }

    #[test]
    fn decode_page_rejects_missing_fields() {
        let body = r#"[{"id":"1","author":"A"}]"#;
        assert!(matches!(
            decode_page(body.as_bytes()),
            Err(ApiError::Decode(_))
        ));
    }

    #[test]
    fn decode_page_empty_array_is_empty_page() {
        let page = decode_page(b"[]").expect("decode page");
        assert!(page.is_empty());
    }

    #[test]
    fn decode_detail_reads_dimensions() {
        let body = r#"{"id":"103","author":"Anne","width":4000,"height":3000,
            "url":"https://unsplash.com/photos/c","download_url":"https://picsum.photos/id/103/4000/3000"}"#;
        let detail = decode_detail(body.as_bytes()).expect("decode detail");
        assert_eq!(
            detail,
            ImageDetail {
                author: "Anne".to_string(),
                width: 4000,
                height: 3000,
                url: "https://unsplash.com/photos/c".to_string(),
            }
        );
    }

    #[test]
    fn decode_detail_rejects_html_error_page() {
        let err = decode_detail(b"<html>Not found</html>").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn endpoints_strip_trailing_slash() {
        let endpoints = Endpoints::new("https://picsum.photos/");
        assert_eq!(endpoints.base(), "https://picsum.photos");
        assert_eq!(
            endpoints.list(3),
            "https://picsum.photos/v2/list?page=3&limit=6"
        );
        assert_eq!(endpoints.info(42), "https://picsum.photos/id/42/info");
        assert_eq!(
            endpoints.thumbnail(42, 400),
            "https://picsum.photos/id/42/400/400"
        );
    }
}
